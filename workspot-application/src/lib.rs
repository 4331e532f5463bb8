//! Composed flows that require the per-spot concurrency contract.
//!
//! Every mutation of a spot's review set is logically a two-step
//! sequence: (1) mutate the review set, (2) recompute and persist the
//! spot's rating aggregate from a fresh read of the whole set. The
//! flows in this crate hold the spot's mutex across both steps so that
//! concurrent writers of the same spot serialize, while writers of
//! different spots proceed in parallel.
//!
//! Spot attribute patches also take the lock: they rewrite the whole
//! spot record and would otherwise revert an aggregate that a review
//! flow recomputed in between their read and their write. Reads, spot
//! creation, and favorite operations have no aggregate side effects
//! and call the usecases directly.

#[macro_use]
extern crate log;

mod create_review;
mod delete_review;
mod delete_spot;
mod spot_locks;
mod update_review;
mod update_spot;

pub mod prelude {
    pub use super::{
        create_review::*, delete_review::*, delete_spot::*, spot_locks::*, update_review::*,
        update_spot::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use workspot_core::{db::Db, entities::*, usecases};
