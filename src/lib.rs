//! Spa Gate - Ticket Lifecycle and Capacity Management Core
//!
//! This crate implements the pricing, payment, and exit rules for a spa
//! entrance system: tickets issued against a fixed floor capacity, priced
//! by visit duration, and released through a grace-checked exit gate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
