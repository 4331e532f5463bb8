use super::prelude::*;
use crate::util::filter::InRadius;

/// Optional, independently combinable search filters.
#[derive(Debug, Default, Clone)]
pub struct SpotQuery {
    pub has_wifi: Option<bool>,
    pub has_power: Option<bool>,
    pub spot_type: Option<SpotType>,
    pub geo: Option<GeoRadius>,
}

/// Center and radius are only ever present as a pair.
#[derive(Debug, Clone, Copy)]
pub struct GeoRadius {
    pub center: MapPoint,
    pub radius: Distance,
}

impl SpotQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            has_wifi,
            has_power,
            spot_type,
            geo,
        } = self;
        has_wifi.is_none() && has_power.is_none() && spot_type.is_none() && geo.is_none()
    }
}

pub fn search_spots<R: SpotRepo>(repo: &R, query: &SpotQuery) -> Result<Vec<Spot>> {
    let mut spots = repo.all_spots()?;
    if let Some(has_wifi) = query.has_wifi {
        spots.retain(|s| s.has_wifi == has_wifi);
    }
    if let Some(has_power) = query.has_power {
        spots.retain(|s| s.has_power == has_power);
    }
    if let Some(spot_type) = query.spot_type {
        spots.retain(|s| s.spot_type == spot_type);
    }
    // The geo filter runs last, on the already reduced candidate set.
    if let Some(GeoRadius { center, radius }) = query.geo {
        spots.retain(|s| s.in_radius(&center, &radius));
    }
    Ok(spots)
}
