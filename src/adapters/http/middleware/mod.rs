//! HTTP middleware for axum.
//!
//! This module contains the named stages of the request chain:
//!
//! - `identity` - credential resolution and principal injection
//! - `access_gate` - registration enforcement with route exemptions

pub mod access_gate;
pub mod identity;

pub use access_gate::{
    access_gate_middleware, CurrentAttendee, GateRejection, GateState, RouteExemptions,
};
pub use identity::{
    identity_middleware, IdentityRejection, IdentityState, OptionalIdentity, RequireIdentity,
};
