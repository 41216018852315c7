use std::f64::consts::FRAC_PI_2;

use tracing::{debug, info, warn};

use crate::drag;
use crate::error::PendulumError;
use crate::link::{PendulumLink, Role};
use crate::world::WorldModel;
use crate::V2;
use protocol::pr_model::PrModel;

/// Two coupled links under gravity.
///
/// Both links are owned here. Each tick borrows one as the link being
/// updated and the other as its counterpart, so neither link refers to
/// the other directly.
#[derive(Clone, Debug)]
pub struct DoublePendulum {
	world: WorldModel,
	anchor: PendulumLink,
	driven: PendulumLink,
	tick: u64,
	blown_up: bool,
}

impl Default for DoublePendulum {
	fn default() -> Self {
		Self::from_parts(
			WorldModel::default(),
			PendulumLink::new_unchecked(Role::Anchor, 200., 10.),
			PendulumLink::new_unchecked(Role::Driven, 200., 10.),
		)
		.with_angles(FRAC_PI_2, FRAC_PI_2)
	}
}

impl DoublePendulum {
	pub fn new(
		world: WorldModel,
		anchor: PendulumLink,
		driven: PendulumLink,
	) -> crate::Result<Self> {
		for (expected, link) in [(Role::Anchor, &anchor), (Role::Driven, &driven)] {
			if link.role() != expected {
				return Err(PendulumError::RoleMismatch {
					expected,
					found: link.role(),
				});
			}
		}
		info!(
			l1 = anchor.length(),
			m1 = anchor.mass(),
			l2 = driven.length(),
			m2 = driven.mass(),
			"double pendulum created"
		);
		Ok(Self::from_parts(world, anchor, driven))
	}

	fn from_parts(
		world: WorldModel,
		anchor: PendulumLink,
		driven: PendulumLink,
	) -> Self {
		let mut result = Self {
			world,
			anchor,
			driven,
			tick: 0,
			blown_up: false,
		};
		result.derive_positions();
		result
	}

	pub fn with_angles(mut self, anchor: f64, driven: f64) -> Self {
		self.anchor.set_angle(anchor);
		self.driven.set_angle(driven);
		self.derive_positions();
		self
	}

	fn derive_positions(&mut self) {
		self.anchor.derive_position(V2::zeros());
		self.driven.derive_position(self.anchor.get_pos());
	}

	pub fn world(&self) -> &WorldModel {
		&self.world
	}

	pub fn anchor(&self) -> &PendulumLink {
		&self.anchor
	}

	pub fn driven(&self) -> &PendulumLink {
		&self.driven
	}

	pub fn link(&self, role: Role) -> &PendulumLink {
		match role {
			Role::Anchor => &self.anchor,
			Role::Driven => &self.driven,
		}
	}

	pub fn link_mut(&mut self, role: Role) -> &mut PendulumLink {
		match role {
			Role::Anchor => &mut self.anchor,
			Role::Driven => &mut self.driven,
		}
	}

	/// Ticks stepped since construction.
	pub fn tick(&self) -> u64 {
		self.tick
	}

	pub fn world_position(&self, role: Role) -> V2 {
		self.world.to_world(self.link(role).get_pos())
	}

	pub fn is_dragging(&self) -> bool {
		self.anchor.is_dragging() || self.driven.is_dragging()
	}

	pub fn set_dragging(&mut self, role: Role, dragging: bool) {
		let link = self.link_mut(role);
		if link.is_dragging() != dragging {
			debug!(?role, dragging, "drag");
		}
		link.set_dragging(dragging);
	}

	/// Starts dragging every link whose ball is under `pointer` (world
	/// coordinates). Returns the number of links grabbed.
	pub fn grab(&mut self, pointer: V2) -> usize {
		let local = self.world.to_local(pointer);
		let mut count = 0;
		for role in Role::ALL {
			if self.link(role).contains(local) {
				self.set_dragging(role, true);
				count += 1;
			}
		}
		count
	}

	pub fn release(&mut self) {
		for role in Role::ALL {
			self.set_dragging(role, false);
		}
	}

	pub fn reset(&mut self) {
		info!(tick = self.tick, "reset");
		self.anchor.reset();
		self.driven.reset();
		self.derive_positions();
	}

	pub fn is_finite(&self) -> bool {
		self.anchor.is_finite() && self.driven.is_finite()
	}

	/// Advances both links by one tick, anchor first.
	///
	/// `pointer` is in world coordinates and only read by dragged links.
	pub fn step(&mut self, pointer: Option<V2>) {
		let pointer = pointer.map(|p| self.world.to_local(p));
		for role in Role::ALL {
			self.step_link(role, pointer);
		}
		self.tick += 1;
		if !self.blown_up && !self.is_finite() {
			self.blown_up = true;
			warn!(tick = self.tick, "non-finite pendulum state");
		}
	}

	fn step_link(&mut self, role: Role, pointer: Option<V2>) {
		let Self {
			world,
			anchor,
			driven,
			..
		} = self;
		let (link, other) = match role {
			Role::Anchor => (anchor, driven),
			Role::Driven => (driven, anchor),
		};

		link.advance_angle();
		let parent = match role {
			Role::Anchor => V2::zeros(),
			Role::Driven => other.get_pos(),
		};
		link.derive_position(parent);

		if link.is_dragging() {
			drag::apply(link, other, pointer);
			return;
		}

		let accel = match role {
			Role::Anchor => anchor_acceleration(world, link, other),
			Role::Driven => driven_acceleration(world, other, link),
		};
		link.integrate(accel, world.friction());
	}

	pub fn render(&self) -> PrModel {
		let pivot = self.world.pivot();
		PrModel {
			pivot: [pivot[0], pivot[1]],
			anchor: self.anchor.render(),
			driven: self.driven.render(),
			gravity: self.world.gravity(),
			friction: self.world.friction(),
			tick: self.tick,
		}
	}
}

// Lagrangian equations of motion, 1 = anchor, 2 = driven.
// Denominators vanish only for zero masses, which construction rejects.

pub fn anchor_acceleration(
	world: &WorldModel,
	anchor: &PendulumLink,
	driven: &PendulumLink,
) -> f64 {
	let g = world.gravity();
	let (t1, t2) = (anchor.angle(), driven.angle());
	let (w1, w2) = (anchor.angular_velocity(), driven.angular_velocity());
	let (l1, l2) = (anchor.length(), driven.length());
	let (m1, m2) = (anchor.mass(), driven.mass());

	let num1 = -g * (2. * m1 + m2) * t1.sin();
	let num2 = -m2 * g * (t1 - 2. * t2).sin();
	let num3 = -2. * (t1 - t2).sin() * m2;
	let num4 = w2 * w2 * l2 + w1 * w1 * l1 * (t1 - t2).cos();
	let den = l1 * (2. * m1 + m2 - m2 * (2. * t1 - 2. * t2).cos());
	(num1 + num2 + num3 * num4) / den
}

pub fn driven_acceleration(
	world: &WorldModel,
	anchor: &PendulumLink,
	driven: &PendulumLink,
) -> f64 {
	let g = world.gravity();
	let (t1, t2) = (anchor.angle(), driven.angle());
	let (w1, w2) = (anchor.angular_velocity(), driven.angular_velocity());
	let (l1, l2) = (anchor.length(), driven.length());
	let (m1, m2) = (anchor.mass(), driven.mass());

	let num1 = 2. * (t1 - t2).sin();
	let num2 = w1 * w1 * l1 * (m1 + m2);
	let num3 = g * (m1 + m2) * t1.cos();
	let num4 = w2 * w2 * l2 * m2 * (t1 - t2).cos();
	let den = l2 * (2. * m1 + m2 - m1 * (2. * t1 - 2. * t2).cos());
	num1 * (num2 + num3 + num4) / den
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_setup() {
		let dp = DoublePendulum::default();
		assert_eq!(dp.anchor().angle(), FRAC_PI_2);
		assert_eq!(dp.driven().angle(), FRAC_PI_2);
		assert!((dp.anchor().get_pos() - V2::new(200., 0.)).magnitude() < 1e-9);
		assert!((dp.driven().get_pos() - V2::new(400., 0.)).magnitude() < 1e-9);
		assert_eq!(dp.tick(), 0);
	}

	#[test]
	fn test_role_mismatch() {
		let a = PendulumLink::new(Role::Anchor, 1., 1.).unwrap();
		let b = PendulumLink::new(Role::Anchor, 1., 1.).unwrap();
		let err = DoublePendulum::new(WorldModel::default(), a, b).unwrap_err();
		assert!(matches!(
			err,
			PendulumError::RoleMismatch {
				expected: Role::Driven,
				found: Role::Anchor
			}
		));
	}

	#[test]
	fn test_first_step_from_horizontal() {
		let mut dp = DoublePendulum::default();
		dp.step(None);
		// velocities were zero, so angles did not move before acceleration
		assert_eq!(dp.anchor().angle(), FRAC_PI_2);
		assert!((dp.anchor().angular_acceleration() + 0.005).abs() < 1e-12);
		assert!((dp.anchor().angular_velocity() + 0.005 * 0.999).abs() < 1e-12);
		assert_eq!(dp.tick(), 1);
	}

	#[test]
	fn test_grab_and_release() {
		let mut dp = DoublePendulum::default();
		// driven ball sits at pivot + (400, 0)
		assert_eq!(dp.grab(V2::new(1003., 101.)), 1);
		assert!(dp.driven().is_dragging());
		assert!(!dp.anchor().is_dragging());
		assert_eq!(dp.grab(V2::new(0., 0.)), 0);
		dp.release();
		assert!(!dp.is_dragging());
	}

	#[test]
	fn test_reset() {
		let mut dp = DoublePendulum::default();
		for _ in 0..10 {
			dp.step(None);
		}
		dp.reset();
		for role in Role::ALL {
			let link = dp.link(role);
			assert_eq!(link.angle(), 0.);
			assert_eq!(link.angular_velocity(), 0.);
		}
		assert_eq!(dp.world_position(Role::Driven), V2::new(600., 500.));
		// the bottom is an equilibrium
		dp.step(None);
		assert_eq!(dp.anchor().angle(), 0.);
		assert_eq!(dp.driven().angle(), 0.);
	}

	#[test]
	fn test_render() {
		let dp = DoublePendulum::default();
		let model = dp.render();
		assert_eq!(model.pivot, [600., 100.]);
		assert_eq!(model.anchor.radius, 20.);
		assert_eq!(model.friction, 0.001);
		assert_eq!(model.tick, 0);
	}
}
