//! Mechanical energy of a [`DoublePendulum`], in the integrator's units
//! (velocities per tick, potential zero at pivot height, +y down).

use crate::DoublePendulum;

pub fn kinetic_energy(dp: &DoublePendulum) -> f64 {
	let (a, d) = (dp.anchor(), dp.driven());
	let (l1, l2) = (a.length(), d.length());
	let (w1, w2) = (a.angular_velocity(), d.angular_velocity());
	let v1_sq = l1 * l1 * w1 * w1;
	let v2_sq = v1_sq
		+ l2 * l2 * w2 * w2
		+ 2. * l1 * l2 * w1 * w2 * (a.angle() - d.angle()).cos();
	0.5 * a.mass() * v1_sq + 0.5 * d.mass() * v2_sq
}

pub fn potential_energy(dp: &DoublePendulum) -> f64 {
	let (a, d) = (dp.anchor(), dp.driven());
	let g = dp.world().gravity();
	let y1 = a.length() * a.angle().cos();
	let y2 = y1 + d.length() * d.angle().cos();
	-g * (a.mass() * y1 + d.mass() * y2)
}

pub fn total_energy(dp: &DoublePendulum) -> f64 {
	kinetic_energy(dp) + potential_energy(dp)
}

/// Energy of the resting configuration, the lowest reachable.
pub fn rest_energy(dp: &DoublePendulum) -> f64 {
	let (a, d) = (dp.anchor(), dp.driven());
	let g = dp.world().gravity();
	-g * (a.mass() * a.length() + d.mass() * (a.length() + d.length()))
}
