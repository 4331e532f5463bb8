use crate::{id::*, time::*};

/// A bookmark relation between a user and a spot.
///
/// At most one favorite exists per `(user_id, spot_id)` pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id         : Id,
    pub user_id    : Id,
    pub spot_id    : Id,
    pub created_at : Timestamp,
}
