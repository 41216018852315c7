// pr_model: Pendulum model for rendering

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrLink {
	// relative to pivot
	pub pos: [f64; 2],
	pub angle: f64,
	pub angular_velocity: f64,
	pub angular_acceleration: f64,
	pub radius: f64,
	pub dragging: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrModel {
	pub pivot: [f64; 2],
	pub anchor: PrLink,
	pub driven: PrLink,
	pub gravity: f64,
	pub friction: f64,
	pub tick: u64,
}
