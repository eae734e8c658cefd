use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use acceleron::config::{Config, IntakeConfig, ObservabilityConfig, ServerConfig, SiteConfig};
use acceleron_inquiry::{DispatchError, Inquiry, IntakeDispatcher};
use async_trait::async_trait;
use axum::Router;

/// Counts dispatch attempts and resolves or fails on demand.
pub struct StubIntake {
    calls: AtomicUsize,
    fail: bool,
}

impl StubIntake {
    pub fn resolving() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntakeDispatcher for StubIntake {
    async fn dispatch(&self, _inquiry: &Inquiry) -> Result<(), DispatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            Err(DispatchError::Rejected { status: 502 })
        } else {
            Ok(())
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        intake: IntakeConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_app(intake: Arc<StubIntake>) -> Router {
    acceleron::create_app(test_config(), intake)
}
