//! Roll Call - Owner-Controlled Attendance Sessions
//!
//! This crate implements a single-course attendance session: an owner opens
//! the session, participants submit a one-time attendance claim bound to
//! their caller identity, and the owner audits the claims afterward.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
