//! Hello-Kube HTTP Service Library
//!
//! A minimal container workload: one route (`GET /`) answering with a fixed
//! greeting, listening on a port resolved from the environment.

pub mod config;
pub mod http;
pub mod observability;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
