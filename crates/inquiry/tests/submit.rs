use acceleron_inquiry::{DispatchError, Inquiry, IntakeDispatcher, LeadForm, SubmitStatus};
use async_trait::async_trait;

struct ResolvingIntake;

#[async_trait]
impl IntakeDispatcher for ResolvingIntake {
    async fn dispatch(&self, _inquiry: &Inquiry) -> Result<(), DispatchError> {
        Ok(())
    }
}

struct UnreachableIntake;

#[async_trait]
impl IntakeDispatcher for UnreachableIntake {
    async fn dispatch(&self, _inquiry: &Inquiry) -> Result<(), DispatchError> {
        Err(DispatchError::Endpoint(url::ParseError::EmptyHost))
    }
}

fn sharma_inquiry() -> Inquiry {
    Inquiry {
        name: "A. Sharma".to_owned(),
        contact: "9660515666".to_owned(),
        email: "a@example.com".to_owned(),
        issue: "Kitchen facing wrong direction".to_owned(),
    }
}

#[tokio::test]
async fn resolved_dispatch_ends_with_success_and_empty_fields() {
    let mut form = LeadForm::with_inquiry(sharma_inquiry());

    let status = form.submit(&ResolvingIntake).await;

    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(form.inquiry().name, "");
    assert_eq!(form.inquiry().contact, "");
    assert_eq!(form.inquiry().email, "");
    assert_eq!(form.inquiry().issue, "");
}

#[tokio::test]
async fn failed_dispatch_ends_with_error_and_entered_fields() {
    let mut form = LeadForm::with_inquiry(sharma_inquiry());

    let status = form.submit(&UnreachableIntake).await;

    assert_eq!(status, SubmitStatus::Error);
    assert_eq!(form.inquiry().name, "A. Sharma");
    assert_eq!(form.inquiry().contact, "9660515666");
    assert_eq!(form.inquiry().email, "a@example.com");
    assert_eq!(form.inquiry().issue, "Kitchen facing wrong direction");
}
