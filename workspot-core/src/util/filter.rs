use crate::entities::*;

pub trait InRadius {
    fn in_radius(&self, center: &MapPoint, radius: &Distance) -> bool;
}

impl InRadius for Spot {
    fn in_radius(&self, center: &MapPoint, radius: &Distance) -> bool {
        // A non-positive radius selects nothing, never everything.
        // The boundary itself is inclusive.
        *radius > Distance::from_kilometers(0.0)
            && MapPoint::distance(self.pos, *center) <= *radius
    }
}
