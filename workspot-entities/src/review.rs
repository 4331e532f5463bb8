use crate::{id::*, rating::*, time::*};

/// One user's opinion of one spot.
///
/// At most one review exists per `(created_by, spot_id)` pair.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id         : Id,
    pub spot_id    : Id,
    // The author, immutable after creation.
    pub created_by : Id,
    pub created_at : Timestamp,
    pub rating     : RatingValue,
    pub comment    : Option<String>,
    pub images     : Vec<String>,
}
