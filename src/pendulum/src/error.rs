use thiserror::Error;

use crate::link::Role;

#[derive(Debug, Error)]
pub enum PendulumError {
	#[error("invalid {name}: {value}")]
	InvalidParameter { name: &'static str, value: f64 },

	#[error("expected {expected:?} link, found {found:?}")]
	RoleMismatch { expected: Role, found: Role },

	#[error("config error: {0}")]
	Config(#[from] serde_json::Error),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

// positive and finite
pub(crate) fn check_positive(name: &'static str, value: f64) -> crate::Result<f64> {
	if value.is_finite() && value > 0.0 {
		Ok(value)
	} else {
		Err(PendulumError::InvalidParameter { name, value })
	}
}
