pub mod config;
pub mod controller_message;
pub mod double_pendulum;
pub mod drag;
pub mod energy;
pub mod error;
pub mod link;
pub mod pworld;
pub mod world;

pub use double_pendulum::DoublePendulum;
pub use error::PendulumError;
pub use link::{PendulumLink, Role};
pub use world::WorldModel;

pub type V2 = nalgebra::Vector2<f64>;

pub type Result<T> = std::result::Result<T, PendulumError>;
