//! Summit - Conference attendee registration and personal agenda service
//!
//! This crate binds authenticated identities to registered attendee
//! profiles, enforces registration before protected pages through a
//! per-request access gate, and maintains each attendee's personal agenda
//! projected into a day/time-slot schedule.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
