//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `ticket` - Visit lifecycle: pricing, payment validity, penalties, exit

pub mod foundation;
pub mod ticket;
