//! Integration tests for the back office client.
//!
//! Each test starts an in-process axum server that plays the REST backend
//! on an ephemeral port, points an [`AdminState`] at it and drives the
//! library end to end over real HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p backoffice-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `categories` - Listing, tree building, malformed bodies
//! - `products` - Search, error messages, the product save workflow
//! - `orders` - Query parameters, page envelope, stats
//! - `search` - Debounced search against a slow backend
//! - `bulk` - One request per selected row, failures collected

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use backoffice_admin::{AdminConfig, AdminState};
use tokio::net::TcpListener;

/// Requests seen by the fake backend, as `"METHOD /path?query"`.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl RequestLog {
    fn push(&self, entry: String) {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(entry);
    }

    /// Snapshot of the requests so far, in arrival order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Whether a request starting with `prefix` was seen.
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.entries().iter().any(|e| e.starts_with(prefix))
    }
}

async fn record(State(log): State<RequestLog>, request: Request, next: Next) -> Response {
    log.push(format!("{} {}", request.method(), request.uri()));
    next.run(request).await
}

/// A running fake backend and the admin state pointed at it.
pub struct FakeBackend {
    pub state: AdminState,
    pub log: RequestLog,
}

impl FakeBackend {
    /// Serve `router` on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the state cannot be built.
    pub async fn start(router: Router) -> Self {
        Self::start_with(router, |_| {}).await
    }

    /// Serve `router`, adjusting the configuration before the state is built.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the state cannot be built.
    pub async fn start_with(router: Router, tweak: impl FnOnce(&mut AdminConfig)) -> Self {
        let log = RequestLog::default();
        let app = router.layer(middleware::from_fn_with_state(log.clone(), record));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Fake backend has no address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let mut config = AdminConfig::for_api_url(&format!("http://{addr}"))
            .expect("Fake backend URL rejected");
        config.api.timeout = Duration::from_secs(5);
        tweak(&mut config);

        let state = AdminState::new(config).expect("Failed to build admin state");
        Self { state, log }
    }
}
