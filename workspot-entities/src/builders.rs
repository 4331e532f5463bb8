pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{review_builder::*, spot_builder::*};

pub mod spot_builder {

    use super::*;
    use crate::{geo::*, id::*, spot::*, time::*};

    #[derive(Debug)]
    pub struct SpotBuild {
        spot: Spot,
    }

    impl SpotBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.spot.id = id.into();
            self
        }
        pub fn created_by(mut self, created_by: &str) -> Self {
            self.spot.created_by = created_by.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.spot.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.spot.pos = pos;
            self
        }
        pub fn has_wifi(mut self, has_wifi: bool) -> Self {
            self.spot.has_wifi = has_wifi;
            self
        }
        pub fn has_power(mut self, has_power: bool) -> Self {
            self.spot.has_power = has_power;
            self
        }
        pub fn spot_type(mut self, spot_type: SpotType) -> Self {
            self.spot.spot_type = spot_type;
            self
        }

        pub fn finish(self) -> Spot {
            self.spot
        }
    }

    impl Builder for Spot {
        type Build = SpotBuild;
        fn build() -> Self::Build {
            Self::Build {
                spot: Spot {
                    id: Id::new(),
                    created_at: Timestamp::now(),
                    created_by: Id::new(),
                    name: "".into(),
                    description: None,
                    address: "".into(),
                    city: "".into(),
                    country: "".into(),
                    pos: MapPoint::default(),
                    has_wifi: false,
                    has_power: false,
                    noise_level: NoiseLevel::Moderate,
                    price_range: PriceRange::Moderate,
                    spot_type: SpotType::Cafe,
                    opening_hours: None,
                    cover_image: None,
                    images: vec![],
                    playlist_url: None,
                    avg_rating: Default::default(),
                    review_count: 0,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn spot_id(mut self, spot_id: &str) -> Self {
            self.review.spot_id = spot_id.into();
            self
        }
        pub fn created_by(mut self, created_by: &str) -> Self {
            self.review.created_by = created_by.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.review.rating = RatingValue::new(rating);
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = Some(comment.into());
            self
        }

        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> Self::Build {
            Self::Build {
                review: Review {
                    id: Id::new(),
                    spot_id: Id::new(),
                    created_by: Id::new(),
                    created_at: Timestamp::now(),
                    rating: RatingValue::min(),
                    comment: None,
                    images: vec![],
                },
            }
        }
    }
}
