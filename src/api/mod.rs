//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - JSON body decoding shared by middleware and handlers
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Validation chain and request tracing
//! - [`routes`] - Route table and registration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
