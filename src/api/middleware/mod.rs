//! HTTP middleware for request processing.
//!
//! Provides the per-route validation chain and request tracing.

pub mod tracing;
pub mod validation;
