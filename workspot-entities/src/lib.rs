#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # workspot-entities
//!
//! Reusable, agnostic domain entities for Workspot.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod favorite;
pub mod geo;
pub mod id;
pub mod rating;
pub mod review;
pub mod spot;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
