use crate::pr_model::PrModel;

#[derive(Debug)]
pub enum UserEvent {
	Update(PrModel, UpdateInfo),
}

#[derive(Debug, Clone, Copy)]
pub struct UpdateInfo {
	// step time / frame budget of the caller, 0 when unknown
	pub load: f32,
	pub tick: u64,
	pub paused: bool,
}
