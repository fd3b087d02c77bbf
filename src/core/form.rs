//! Form field state and submission status.
//!
//! Field state changes only through [`FieldState::reduce`]. Editing always
//! clears the error; only a submit-time validation failure sets one.

use crate::core::validation::FieldError;

/// State of one text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current text
    pub text: String,
    /// Whether the last submit rejected this field
    pub is_error: bool,
    /// Message shown under the field, empty unless `is_error`
    pub error_message: String,
}

/// Something that happened to a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    /// The user typed; carries the full new text
    Edited(String),
    /// Submit-time validation rejected the current text
    Rejected(FieldError),
    /// Submit started; previous errors no longer apply
    ClearError,
}

impl FieldState {
    /// Applies an event, returning the next state.
    #[must_use]
    pub fn reduce(self, event: FieldEvent) -> Self {
        match event {
            FieldEvent::Edited(text) => Self {
                text,
                is_error: false,
                error_message: String::new(),
            },
            FieldEvent::Rejected(error) => Self {
                is_error: true,
                error_message: error.to_string(),
                ..self
            },
            FieldEvent::ClearError => Self {
                is_error: false,
                error_message: String::new(),
                ..self
            },
        }
    }
}

/// Outcome of a form submission as observed by the caller.
///
/// `Success` is a one-shot signal: the caller acts on it (navigates, say) and
/// then resets the form status to `Idle` so it is not acted on twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted, or the last result has been acknowledged
    #[default]
    Idle,
    /// Submission passed validation and is waiting on the backend
    Submitting,
    /// Submission accepted
    Success,
    /// Submission rejected, with a message for the whole form
    Failed(String),
}

impl FormStatus {
    /// Whether this is the success signal.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Whether a result is available (success or failure).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed(_))
    }

    /// The form-level error message, if the submission failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
