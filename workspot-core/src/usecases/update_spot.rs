use super::prelude::*;

/// Partial update of a spot's mutable attributes.
///
/// Absent fields keep their current value.
#[derive(Debug, Default, Clone)]
pub struct SpotPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub has_wifi: Option<bool>,
    pub has_power: Option<bool>,
    pub noise_level: Option<NoiseLevel>,
    pub price_range: Option<PriceRange>,
    pub spot_type: Option<SpotType>,
    pub opening_hours: Option<String>,
    pub cover_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub playlist_url: Option<String>,
}

pub fn update_spot<R: SpotRepo>(repo: &R, id: &Id, actor: &Id, patch: SpotPatch) -> Result<Spot> {
    let mut spot = repo.get_spot(id.as_str())?;
    authorize_mutation(actor, &spot.created_by, SPOT_DENIAL)?;

    let SpotPatch {
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
    } = patch;

    if lat.is_some() || lng.is_some() {
        let lat = lat.unwrap_or_else(|| spot.pos.lat().to_deg());
        let lng = lng.unwrap_or_else(|| spot.pos.lng().to_deg());
        spot.pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    }
    if let Some(name) = name {
        spot.name = name;
    }
    if let Some(description) = description {
        spot.description = Some(description);
    }
    if let Some(address) = address {
        spot.address = address;
    }
    if let Some(city) = city {
        spot.city = city;
    }
    if let Some(country) = country {
        spot.country = country;
    }
    if let Some(has_wifi) = has_wifi {
        spot.has_wifi = has_wifi;
    }
    if let Some(has_power) = has_power {
        spot.has_power = has_power;
    }
    if let Some(noise_level) = noise_level {
        spot.noise_level = noise_level;
    }
    if let Some(price_range) = price_range {
        spot.price_range = price_range;
    }
    if let Some(spot_type) = spot_type {
        spot.spot_type = spot_type;
    }
    if let Some(opening_hours) = opening_hours {
        spot.opening_hours = Some(opening_hours);
    }
    if let Some(cover_image) = cover_image {
        spot.cover_image = Some(cover_image);
    }
    if let Some(images) = images {
        spot.images = images;
    }
    if let Some(playlist_url) = playlist_url {
        spot.playlist_url = Some(playlist_url);
    }

    repo.update_spot(&spot)?;
    Ok(spot)
}

#[cfg(test)]
mod tests {

    use super::super::tests::MockDb;
    use super::*;
    use workspot_entities::builders::*;

    #[test]
    fn owner_updates_attributes() {
        let db = MockDb::default();
        db.spots
            .borrow_mut()
            .push(Spot::build().id("s1").created_by("u1").finish());
        let patch = SpotPatch {
            name: Some("New name".into()),
            has_wifi: Some(true),
            ..Default::default()
        };
        let spot = update_spot(&db, &"s1".into(), &"u1".into(), patch).unwrap();
        assert_eq!("New name", spot.name);
        assert!(spot.has_wifi);
        assert_eq!(spot, db.get_spot("s1").unwrap());
    }

    #[test]
    fn non_owner_is_answered_with_not_found() {
        let db = MockDb::default();
        db.spots
            .borrow_mut()
            .push(Spot::build().id("s1").created_by("u1").finish());
        let patch = SpotPatch {
            name: Some("hijack".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_spot(&db, &"s1".into(), &"u2".into(), patch),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn patched_position_is_validated() {
        let db = MockDb::default();
        db.spots
            .borrow_mut()
            .push(Spot::build().id("s1").created_by("u1").finish());
        let patch = SpotPatch {
            lat: Some(123.0),
            ..Default::default()
        };
        assert!(matches!(
            update_spot(&db, &"s1".into(), &"u1".into(), patch),
            Err(Error::InvalidPosition)
        ));
    }
}
