use std::sync::mpsc::{Receiver, Sender};
use std::time::Instant;

use tracing::{debug, info};

use crate::controller_message::ControllerMessage;
use crate::double_pendulum::DoublePendulum;
use crate::V2;
use protocol::pr_model::PrModel;
use protocol::user_event::{UpdateInfo, UserEvent};

/// Host-side wrapper: pause state, pointer tracking and snapshots.
///
/// The frame clock stays outside; every `Tick` advances at most one frame.
pub struct PWorld {
	dp: DoublePendulum,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	pointer: Option<V2>,
	last_tick: Option<Instant>,
}

impl Default for PWorld {
	fn default() -> Self {
		Self::new(DoublePendulum::default())
	}
}

impl PWorld {
	pub fn new(dp: DoublePendulum) -> Self {
		Self {
			dp,
			forward_frames: -1,
			pointer: None,
			last_tick: None,
		}
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn pendulum(&self) -> &DoublePendulum {
		&self.dp
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	fn resume(&mut self) {
		if self.forward_frames != -1 {
			info!("resume");
		}
		self.forward_frames = -1;
	}

	pub fn pr_model(&self) -> PrModel {
		self.dp.render()
	}

	/// Steps one frame unless paused. Returns whether a step happened.
	pub fn frame(&mut self) -> bool {
		if self.forward_frames == 0 {
			return false;
		}
		if self.forward_frames > 0 {
			self.forward_frames -= 1;
		}
		self.dp.step(self.pointer);
		true
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		use ControllerMessage::*;
		match msg {
			Tick => {
				self.frame();
			}
			TogglePause => {
				if self.forward_frames == 0 {
					self.resume();
				} else {
					info!(tick = self.dp.tick(), "pause");
					self.forward_frames = 0;
				}
			}
			FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			PointerDown(p) => {
				let p = V2::from(p);
				self.pointer = Some(p);
				if self.dp.grab(p) > 0 {
					self.resume();
				}
			}
			PointerMoved(p) => self.pointer = Some(V2::from(p)),
			PointerUp => self.dp.release(),
			ControlLink(role, p) => {
				self.pointer = Some(V2::from(p));
				self.dp.set_dragging(role, true);
				self.resume();
			}
			UncontrolLink(role) => self.dp.set_dragging(role, false),
			Reset => self.dp.reset(),
		}
	}

	// load: time spent stepping over time since the previous tick
	fn update_event(&mut self, start: Instant) -> UserEvent {
		let now = Instant::now();
		let spent = now.duration_since(start).as_secs_f32();
		let load = match self.last_tick.replace(start) {
			Some(last) => {
				let period = start.duration_since(last).as_secs_f32();
				if period > 0. { spent / period } else { 0. }
			}
			None => 0.,
		};
		let info = UpdateInfo {
			load,
			tick: self.dp.tick(),
			paused: self.is_paused(),
		};
		UserEvent::Update(self.pr_model(), info)
	}

	/// Serves messages until either channel closes. A snapshot is sent
	/// after every `Tick`, and once up front.
	pub fn run_thread(&mut self, tx: Sender<UserEvent>, rx: Receiver<ControllerMessage>) {
		let event = self.update_event(Instant::now());
		if tx.send(event).is_err() {
			return;
		}
		while let Ok(msg) = rx.recv() {
			let start = Instant::now();
			let is_tick = msg == ControllerMessage::Tick;
			self.handle_message(msg);
			if is_tick {
				let event = self.update_event(start);
				if tx.send(event).is_err() {
					break;
				}
			}
		}
		debug!(tick = self.dp.tick(), "controller closed");
	}
}
