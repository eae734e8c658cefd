mod dispatch;
mod form;
mod types;

pub use dispatch::{DispatchError, HttpIntake, IntakeDispatcher};
pub use form::LeadForm;
pub use types::{Inquiry, SubmitStatus};
