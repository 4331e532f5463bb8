use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, _: &[Review]) -> (AvgRating, u64);
}

impl Rated for Spot {
    fn avg_rating(&self, reviews: &[Review]) -> (AvgRating, u64) {
        debug_assert_eq!(
            reviews.len(),
            reviews.iter().filter(|r| r.spot_id == self.id).count()
        );
        let avg = reviews
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, r| {
                acc.add(r.rating);
                acc
            })
            .build();
        (avg, reviews.len() as u64)
    }
}
