pub mod admin;
pub mod auth;
pub mod middleware;
pub mod rest;
pub mod router;
pub mod session;
pub mod site;
pub mod state;
pub mod views;

// Re-export the router builder so the binary and the tests share one route table.
pub use middleware::require_admin;
pub use router::router;
