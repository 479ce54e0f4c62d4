use std::{error, fmt};

#[derive(Debug)]
pub enum InteractionError {
    SurfaceNotFound(String),
    MalformedEvent(String),
    InvalidOptions(String),
    Host(String),
    Json(serde_json::Error),
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractionError::SurfaceNotFound(selector) => {
                write!(f, "surface {selector} not found")
            }
            InteractionError::MalformedEvent(field) => {
                write!(f, "malformed pointer event, {field} must be a finite number")
            }
            InteractionError::InvalidOptions(reason) => write!(f, "invalid options, {reason}"),
            InteractionError::Host(reason) => write!(f, "host error, {reason}"),
            InteractionError::Json(error) => write!(f, "{error}"),
        }
    }
}

impl error::Error for InteractionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            InteractionError::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InteractionError {
    fn from(error: serde_json::Error) -> Self {
        InteractionError::Json(error)
    }
}
