use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewSpot {
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
    pub has_wifi: bool,
    pub has_power: bool,
    pub noise_level: NoiseLevel,
    pub price_range: PriceRange,
    pub spot_type: SpotType,
    pub opening_hours: Option<String>,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
    pub playlist_url: Option<String>,
}

pub fn create_spot<R: SpotRepo>(repo: &R, s: NewSpot, created_by: Id) -> Result<Spot> {
    let NewSpot {
        name,
        description,
        address,
        city,
        country,
        lat,
        lng,
        has_wifi,
        has_power,
        noise_level,
        price_range,
        spot_type,
        opening_hours,
        cover_image,
        images,
        playlist_url,
    } = s;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let spot = Spot {
        id: Id::new(),
        created_at: Timestamp::now(),
        created_by,
        name,
        description,
        address,
        city,
        country,
        pos,
        has_wifi,
        has_power,
        noise_level,
        price_range,
        spot_type,
        opening_hours,
        cover_image,
        images,
        playlist_url,
        avg_rating: Default::default(),
        review_count: 0,
    };
    repo.create_spot(spot.clone())?;
    Ok(spot)
}
