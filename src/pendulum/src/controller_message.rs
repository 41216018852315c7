use crate::link::Role;

// positions in world coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerMessage {
	// one frame of the external clock
	Tick,
	TogglePause,
	FrameForward,
	PointerDown([f64; 2]),
	PointerMoved([f64; 2]),
	PointerUp,
	ControlLink(Role, [f64; 2]),
	UncontrolLink(Role),
	Reset,
}
