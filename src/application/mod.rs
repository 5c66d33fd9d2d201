//! Application layer - command and query handlers.
//!
//! Handlers orchestrate domain aggregates through the ports, keeping the
//! HTTP layer thin: DTOs in, domain results out.

pub mod handlers;
