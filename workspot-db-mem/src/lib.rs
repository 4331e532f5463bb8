//! Thread-safe in-memory implementation of the Workspot repositories.
//!
//! The uniqueness constraints on `(created_by, spot_id)` for reviews and
//! `(user_id, spot_id)` for favorites are enforced here, like a relational
//! database would enforce them with unique indexes.

use std::collections::HashMap;

use parking_lot::RwLock;

use workspot_core::entities::*;

mod repo_impl;

#[derive(Debug, Default)]
pub struct MemDb {
    spots: RwLock<HashMap<Id, Spot>>,
    reviews: RwLock<HashMap<Id, Review>>,
    favorites: RwLock<HashMap<Id, Favorite>>,
}

impl MemDb {
    pub fn new() -> Self {
        Default::default()
    }
}
