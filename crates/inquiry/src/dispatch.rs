use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::Inquiry;

/// Ways a single dispatch attempt can fail. Every variant surfaces to the
/// visitor as the same retry-prompting banner; the detail only reaches the
/// tracing output.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("intake endpoint is not a valid url: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("intake request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("intake endpoint rejected the inquiry with status {status}")]
    Rejected { status: u16 },
}

/// Delivers one inquiry to the operator intake endpoint.
#[async_trait]
pub trait IntakeDispatcher: Send + Sync {
    async fn dispatch(&self, inquiry: &Inquiry) -> Result<(), DispatchError>;
}

/// Production dispatcher: one JSON POST per attempt via reqwest.
///
/// The endpoint stays the raw configured string and is parsed on every
/// attempt, so a placeholder or malformed address fails the attempt the
/// same way any other delivery error does. A non-success HTTP status
/// counts as a rejection; acceptance means the endpoint confirmed receipt.
pub struct HttpIntake {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIntake {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl IntakeDispatcher for HttpIntake {
    async fn dispatch(&self, inquiry: &Inquiry) -> Result<(), DispatchError> {
        let endpoint = Url::parse(self.endpoint.trim())?;

        let response = self.client.post(endpoint).json(inquiry).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_endpoint_fails_as_dispatch_error() {
        let intake = HttpIntake::new("", Duration::from_secs(1)).unwrap();

        let result = intake.dispatch(&Inquiry::default()).await;
        assert!(matches!(result, Err(DispatchError::Endpoint(_))));
    }

    #[tokio::test]
    async fn placeholder_endpoint_fails_as_dispatch_error() {
        let intake = HttpIntake::new("PASTE-INTAKE-URL-HERE", Duration::from_secs(1)).unwrap();

        let result = intake.dispatch(&Inquiry::default()).await;
        assert!(matches!(result, Err(DispatchError::Endpoint(_))));
    }
}
