//! Security Module
//!
//! Response hardening for the portfolio server.

pub mod middleware;

pub use middleware::security_headers_middleware;
