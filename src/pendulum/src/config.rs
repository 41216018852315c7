use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::double_pendulum::DoublePendulum;
use crate::link::{PendulumLink, Role};
use crate::world::WorldModel;
use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
	pub length: f64,
	pub mass: f64,
	pub angle: f64,
}

impl Default for LinkConfig {
	fn default() -> Self {
		Self {
			length: 200.,
			mass: 10.,
			angle: FRAC_PI_2,
		}
	}
}

impl LinkConfig {
	fn build(&self, role: Role) -> crate::Result<PendulumLink> {
		Ok(PendulumLink::new(role, self.length, self.mass)?.with_angle(self.angle))
	}
}

/// Everything fixed at construction. Missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
	pub gravity: f64,
	pub friction: f64,
	pub pivot: [f64; 2],
	pub anchor: LinkConfig,
	pub driven: LinkConfig,
}

impl Default for SimConfig {
	fn default() -> Self {
		Self {
			gravity: 1.0,
			friction: 0.001,
			pivot: [600., 100.],
			anchor: LinkConfig::default(),
			driven: LinkConfig::default(),
		}
	}
}

impl SimConfig {
	pub fn from_json(s: &str) -> crate::Result<Self> {
		Ok(serde_json::from_str(s)?)
	}

	pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
		let s = std::fs::read_to_string(path)?;
		Self::from_json(&s)
	}

	pub fn build(&self) -> crate::Result<DoublePendulum> {
		let world = WorldModel::new(self.gravity, self.friction, V2::from(self.pivot))?;
		let anchor = self.anchor.build(Role::Anchor)?;
		let driven = self.driven.build(Role::Driven)?;
		DoublePendulum::new(world, anchor, driven)
	}
}
