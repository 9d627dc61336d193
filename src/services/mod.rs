//! Business logic services
//!
//! Request construction and result handling, separated from HTTP concerns.
//! Services are stateless and can be tested without a server.

pub mod auth;
