//! HTTP API: server wiring, routing, and request/response mapping for the
//! product resource.

pub mod app;
pub mod middleware;
