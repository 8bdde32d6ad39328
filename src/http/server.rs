//! HTTP server setup.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request tracing)
//! - Serve requests on a caller-supplied listener
//!
//! # Design Decisions
//! - The route table is fixed at startup and never mutated
//! - The listener is bound by the caller; bind failure never reaches this
//!   module and is fatal at startup

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::handlers;

/// HTTP server for the greeting service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router();
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// Non-GET methods on `/` fall through to the same 404 as unknown
    /// paths, rather than the method router's default 405.
    fn build_router() -> Router {
        Router::new()
            .route("/", get(handlers::greeting).fallback(handlers::not_found))
            .fallback(handlers::not_found)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the process is terminated externally.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            configured_port = self.config.listener.port,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }
}
