use std::{fmt, str::FromStr};

use itertools::Itertools as _;
use thiserror::Error;

/// Geographical latitude in signed degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in signed degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location, validated on construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid map point")]
pub struct MapPointParseError;

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    /// Out-of-range degrees are a caller error, never clamped.
    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() else {
            return Err(MapPointParseError);
        };
        match (lat_deg_str.parse::<f64>(), lng_deg_str.parse::<f64>()) {
            (Ok(lat_deg), Ok(lng_deg)) => {
                MapPoint::try_from_lat_lng_deg(lat_deg, lng_deg).ok_or(MapPointParseError)
            }
            _ => Err(MapPointParseError),
        }
    }
}

/// Distance on the earth's surface in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_kilometers(kilometers: f64) -> Self {
        Self(kilometers)
    }

    pub const fn to_kilometers(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_kilometers(6_371.0);

impl MapPoint {
    /// Great-circle distance between two points on the surface of the
    /// earth using the Haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_half_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_half_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_half_sin * dlat_half_sin
            + lat1_rad.cos() * lat2_rad.cos() * dlng_half_sin * dlng_half_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_kilometers(MEAN_EARTH_RADIUS.to_kilometers() * c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_out_of_range_degrees() {
        assert!(LatCoord::try_from_deg(90.000_1).is_none());
        assert!(LatCoord::try_from_deg(-90.000_1).is_none());
        assert!(LngCoord::try_from_deg(180.000_1).is_none());
        assert!(LngCoord::try_from_deg(-180.000_1).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(91, 0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0, -181).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(90, 180).is_some());
    }

    #[test]
    fn distance_of_a_point_to_itself_is_zero() {
        let p = MapPoint::from_lat_lng_deg(48.8566, 2.3522);
        assert_eq!(0.0, MapPoint::distance(p, p).to_kilometers());
    }

    #[test]
    fn distance_is_symmetric() {
        let paris = MapPoint::from_lat_lng_deg(48.8566, 2.3522);
        let lyon = MapPoint::from_lat_lng_deg(45.764, 4.8357);
        let d1 = MapPoint::distance(paris, lyon).to_kilometers();
        let d2 = MapPoint::distance(lyon, paris).to_kilometers();
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn distance_between_paris_and_lyon() {
        let paris = MapPoint::from_lat_lng_deg(48.8566, 2.3522);
        let lyon = MapPoint::from_lat_lng_deg(45.764, 4.8357);
        let km = MapPoint::distance(paris, lyon).to_kilometers();
        assert!(km > 380.0);
        assert!(km < 400.0);
    }

    #[test]
    fn parse_map_point() {
        let p: MapPoint = "48.8566,2.3522".parse().unwrap();
        assert_eq!(48.8566, p.lat().to_deg());
        assert_eq!(2.3522, p.lng().to_deg());
        assert!("48.8566".parse::<MapPoint>().is_err());
        assert!("91.0,0.0".parse::<MapPoint>().is_err());
        assert!("foo,bar".parse::<MapPoint>().is_err());
    }
}
