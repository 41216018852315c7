pub mod pr_model;
pub mod user_event;

pub use pr_model::{PrLink, PrModel};
pub use user_event::{UpdateInfo, UserEvent};
