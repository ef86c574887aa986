//! Error types for panel operations.

use thiserror::Error;

use crate::controller::ControllerId;
use crate::document::ElementId;

/// Panel errors.
#[derive(Debug, Error, PartialEq)]
pub enum PanelError {
    #[error("Unknown property: {0}")]
    UnknownProperty(String),
    #[error("Property is not numeric: {0}")]
    NotNumeric(String),
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),
    #[error("Cannot append {child} to {parent}: it would become its own ancestor")]
    InvalidHierarchy { parent: ElementId, child: ElementId },
    #[error("Controller not found: {0}")]
    ControllerNotFound(ControllerId),
    #[error("Controller already initialized: {0}")]
    AlreadyInitialized(ControllerId),
    #[error("Controller is not attached to a panel: {0}")]
    NotAttached(ControllerId),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for panel operations.
pub type PanelResult<T> = Result<T, PanelError>;
