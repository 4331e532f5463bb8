use strum::{Display, EnumString};

use crate::{geo::*, id::*, rating::*, time::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum NoiseLevel {
    Quiet,
    Moderate,
    Loud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum PriceRange {
    Free,
    Cheap,
    Moderate,
    Expensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SpotType {
    Cafe,
    Library,
    Coworking,
    Park,
    Other,
}

/// A physical work spot.
///
/// `avg_rating` and `review_count` are derived from the spot's current
/// review set and must never drift from it.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub id            : Id,
    pub created_at    : Timestamp,
    // The owner, immutable after creation.
    pub created_by    : Id,
    pub name          : String,
    pub description   : Option<String>,
    pub address       : String,
    pub city          : String,
    pub country       : String,
    pub pos           : MapPoint,
    pub has_wifi      : bool,
    pub has_power     : bool,
    pub noise_level   : NoiseLevel,
    pub price_range   : PriceRange,
    pub spot_type     : SpotType,
    pub opening_hours : Option<String>,
    pub cover_image   : Option<String>,
    pub images        : Vec<String>,
    pub playlist_url  : Option<String>,
    pub avg_rating    : AvgRating,
    pub review_count  : u64,
}
