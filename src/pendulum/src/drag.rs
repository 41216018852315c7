use std::f64::consts::FRAC_PI_2;

use crate::link::{PendulumLink, Role};
use crate::V2;

/// Angle that points a link from `parent` towards `target`.
///
/// Both points share one frame. Consistent with the `length * (sin, cos)`
/// position convention: a target straight below the parent gives zero.
/// The result lies in (-π/2, 3π/2], so grabbing a link that has wound up
/// brings its angle back into that range.
pub fn drag_angle(target: V2, parent: V2) -> f64 {
	let d = target - parent;
	-(d[1].atan2(d[0]) - FRAC_PI_2)
}

/// Pointer override for one tick.
///
/// `pointer` is pivot-relative. Without a pointer the link keeps its
/// angle but is still held still. Dragging the driven link also stops the
/// anchor, the reverse does not hold.
pub fn apply(link: &mut PendulumLink, other: &mut PendulumLink, pointer: Option<V2>) {
	debug_assert_eq!(other.role(), link.role().counterpart());
	let parent = match link.role() {
		Role::Anchor => V2::zeros(),
		Role::Driven => {
			other.stop();
			other.get_pos()
		}
	};
	if let Some(pointer) = pointer {
		link.set_angle(drag_angle(pointer, parent));
	}
	link.stop();
}
