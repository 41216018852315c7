use crate::error::check_positive;
use crate::V2;
use protocol::pr_model::PrLink;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
	// attached to the pivot
	Anchor,
	// attached to the anchor's end
	Driven,
}

impl Role {
	// update order
	pub const ALL: [Role; 2] = [Role::Anchor, Role::Driven];

	pub fn counterpart(self) -> Role {
		match self {
			Role::Anchor => Role::Driven,
			Role::Driven => Role::Anchor,
		}
	}
}

#[derive(Clone, Debug)]
pub struct PendulumLink {
	role: Role,
	length: f64,
	mass: f64,
	angle: f64,
	angular_velocity: f64,
	angular_acceleration: f64,
	// relative to pivot
	pos: V2,
	dragging: bool,
}

impl PendulumLink {
	pub fn new(role: Role, length: f64, mass: f64) -> crate::Result<Self> {
		let length = check_positive("length", length)?;
		let mass = check_positive("mass", mass)?;
		Ok(Self::new_unchecked(role, length, mass))
	}

	// for constants known to be valid
	pub(crate) fn new_unchecked(role: Role, length: f64, mass: f64) -> Self {
		Self {
			role,
			length,
			mass,
			angle: 0.,
			angular_velocity: 0.,
			angular_acceleration: 0.,
			pos: V2::zeros(),
			dragging: false,
		}
	}

	pub fn with_angle(mut self, angle: f64) -> Self {
		self.angle = angle;
		self
	}

	pub fn role(&self) -> Role {
		self.role
	}

	pub fn length(&self) -> f64 {
		self.length
	}

	pub fn mass(&self) -> f64 {
		self.mass
	}

	/// Radians from the downward vertical. Never wrapped.
	pub fn angle(&self) -> f64 {
		self.angle
	}

	/// Radians per tick.
	pub fn angular_velocity(&self) -> f64 {
		self.angular_velocity
	}

	/// Radians per tick squared.
	pub fn angular_acceleration(&self) -> f64 {
		self.angular_acceleration
	}

	/// End point relative to the pivot.
	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	pub fn radius(&self) -> f64 {
		self.mass * 2.
	}

	pub fn set_angle(&mut self, angle: f64) {
		self.angle = angle;
	}

	pub fn set_dragging(&mut self, dragging: bool) {
		self.dragging = dragging;
	}

	pub fn stop(&mut self) {
		self.angular_velocity = 0.;
		self.angular_acceleration = 0.;
	}

	pub fn reset(&mut self) {
		self.stop();
		self.angle = 0.;
	}

	// parent: pivot-relative end of the parent link, zero for the anchor
	pub fn derive_position(&mut self, parent: V2) {
		self.pos = parent
			+ V2::new(self.angle.sin(), self.angle.cos()) * self.length;
	}

	pub fn contains(&self, p: V2) -> bool {
		(p - self.pos).magnitude() < self.radius() / 2.
	}

	pub fn is_finite(&self) -> bool {
		self.angle.is_finite()
			&& self.angular_velocity.is_finite()
			&& self.angular_acceleration.is_finite()
	}

	pub(crate) fn advance_angle(&mut self) {
		self.angle += self.angular_velocity;
	}

	// velocity from acceleration, friction, then snap to rest
	pub(crate) fn integrate(&mut self, accel: f64, friction: f64) {
		self.angular_acceleration = accel;
		self.angular_velocity += accel;
		self.angular_velocity *= 1. - friction;
		if self.angular_velocity.abs() < REST_EPS && self.angle.abs() < REST_EPS {
			self.angular_velocity = 0.;
			self.angle = 0.;
		}
	}

	pub fn render(&self) -> PrLink {
		PrLink {
			pos: [self.pos[0], self.pos[1]],
			angle: self.angle,
			angular_velocity: self.angular_velocity,
			angular_acceleration: self.angular_acceleration,
			radius: self.radius(),
			dragging: self.dragging,
		}
	}
}

// below this in both angle and velocity the link is put at rest
pub const REST_EPS: f64 = 2e-4;

#[cfg(test)]
mod test {
	use super::*;

	fn moving_link() -> PendulumLink {
		let mut link = PendulumLink::new(Role::Anchor, 200., 10.).unwrap();
		link.angle = 0.5;
		link.angular_velocity = 0.1;
		link.angular_acceleration = 0.01;
		link
	}

	#[test]
	fn test_invalid_link() {
		assert!(PendulumLink::new(Role::Anchor, 0., 10.).is_err());
		assert!(PendulumLink::new(Role::Anchor, 200., -1.).is_err());
		assert!(PendulumLink::new(Role::Driven, f64::INFINITY, 1.).is_err());
		assert!(PendulumLink::new(Role::Driven, 1., 1.).is_ok());
	}

	#[test]
	fn test_stop_twice() {
		let mut link = moving_link();
		link.stop();
		assert_eq!(link.angular_velocity(), 0.);
		assert_eq!(link.angular_acceleration(), 0.);
		assert_eq!(link.angle(), 0.5);
		link.stop();
		assert_eq!(link.angular_velocity(), 0.);
		assert_eq!(link.angular_acceleration(), 0.);
		assert_eq!(link.angle(), 0.5);
	}

	#[test]
	fn test_reset() {
		let mut link = moving_link();
		link.reset();
		assert_eq!(link.angle(), 0.);
		assert_eq!(link.angular_velocity(), 0.);
		assert_eq!(link.angular_acceleration(), 0.);
	}

	#[test]
	fn test_derive_position() {
		let mut link = PendulumLink::new(Role::Driven, 100., 1.).unwrap();
		link.set_angle(std::f64::consts::FRAC_PI_2);
		link.derive_position(V2::new(0., 200.));
		assert!((link.get_pos() - V2::new(100., 200.)).magnitude() < 1e-9);
		link.set_angle(0.);
		link.derive_position(V2::zeros());
		assert_eq!(link.get_pos(), V2::new(0., 100.));
	}

	#[test]
	fn test_snap_to_rest() {
		let mut link = PendulumLink::new(Role::Anchor, 200., 10.).unwrap();
		link.angle = 1e-4;
		link.angular_velocity = -1e-4;
		link.integrate(5e-5, 0.);
		assert_eq!(link.angle(), 0.);
		assert_eq!(link.angular_velocity(), 0.);
		// velocity alone is not enough
		link.angle = 0.1;
		link.angular_velocity = 0.;
		link.integrate(1e-5, 0.);
		assert_eq!(link.angle(), 0.1);
		assert_eq!(link.angular_velocity(), 1e-5);
	}

	#[test]
	fn test_contains() {
		let mut link = PendulumLink::new(Role::Anchor, 200., 10.).unwrap();
		link.derive_position(V2::zeros());
		assert!(link.contains(V2::new(0., 200.)));
		assert!(link.contains(V2::new(9., 200.)));
		assert!(!link.contains(V2::new(10., 200.)));
	}

	#[test]
	fn test_counterpart() {
		assert_eq!(Role::Anchor.counterpart(), Role::Driven);
		assert_eq!(Role::Driven.counterpart(), Role::Anchor);
	}
}
