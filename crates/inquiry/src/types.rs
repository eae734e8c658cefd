use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use validator::Validate;

/// A visitor-submitted lead. Lives only for the duration of one form
/// session; serializes to the intake wire body `{ name, contact, email,
/// issue }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Inquiry {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1, max = 30))]
    pub contact: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 2000))]
    pub issue: String,
}

impl Inquiry {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome of the most recent submission attempt. Drives which feedback
/// banner renders and whether the submit control accepts another attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }
}
