use tracing::info;

use crate::error::{check_positive, PendulumError};
use crate::V2;

// fixed for the whole run
#[derive(Clone, Debug, PartialEq)]
pub struct WorldModel {
	gravity: f64,
	friction: f64,
	pivot: V2,
}

impl Default for WorldModel {
	fn default() -> Self {
		Self {
			gravity: 1.0,
			friction: 0.001,
			pivot: V2::new(600., 100.),
		}
	}
}

impl WorldModel {
	pub fn new(gravity: f64, friction: f64, pivot: V2) -> crate::Result<Self> {
		let gravity = check_positive("gravity", gravity)?;
		if !(0.0..1.0).contains(&friction) {
			return Err(PendulumError::InvalidParameter {
				name: "friction",
				value: friction,
			});
		}
		for value in pivot.iter() {
			if !value.is_finite() {
				return Err(PendulumError::InvalidParameter {
					name: "pivot",
					value: *value,
				});
			}
		}
		info!(gravity, friction, x = pivot[0], y = pivot[1], "world created");
		Ok(Self {
			gravity,
			friction,
			pivot,
		})
	}

	pub fn gravity(&self) -> f64 {
		self.gravity
	}

	/// Fraction of angular velocity removed every tick.
	pub fn friction(&self) -> f64 {
		self.friction
	}

	pub fn pivot(&self) -> V2 {
		self.pivot
	}

	pub fn to_local(&self, p: V2) -> V2 {
		p - self.pivot
	}

	pub fn to_world(&self, p: V2) -> V2 {
		p + self.pivot
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_default_world() {
		let world = WorldModel::default();
		assert_eq!(world.gravity(), 1.0);
		assert_eq!(world.friction(), 0.001);
		assert_eq!(world.pivot(), V2::new(600., 100.));
	}

	#[test]
	fn test_invalid_world() {
		let pivot = V2::new(0., 0.);
		assert!(WorldModel::new(0.0, 0.0, pivot).is_err());
		assert!(WorldModel::new(-1.0, 0.0, pivot).is_err());
		assert!(WorldModel::new(1.0, 1.0, pivot).is_err());
		assert!(WorldModel::new(1.0, -0.1, pivot).is_err());
		assert!(WorldModel::new(1.0, 0.0, V2::new(f64::NAN, 0.)).is_err());
		assert!(WorldModel::new(1.0, 0.0, pivot).is_ok());
	}

	#[test]
	fn test_local_frame() {
		let world = WorldModel::default();
		let p = V2::new(650., 300.);
		assert_eq!(world.to_local(p), V2::new(50., 200.));
		assert_eq!(world.to_world(world.to_local(p)), p);
	}
}
