use crate::{identity::IdentityError, session::ViewState};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Cannot {action} while in {from} state {location}")]
    InvalidTransition {
        from: ViewState,
        action: &'static str,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl SessionError {
    #[track_caller]
    pub fn invalid_transition(from: ViewState, action: &'static str) -> Self {
        Self::InvalidTransition {
            from,
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "That action isn't available on this screen.",
            Self::Identity(e) => e.recovery_hint(),
        }
    }

    /// Validation failures get an error dialog; nothing else does.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Identity(e) if e.is_validation())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
