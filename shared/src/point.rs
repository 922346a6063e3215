use serde::{Deserialize, Serialize};

use crate::offer::{OfferDetail, OfferId};

/// Map-plottable coordinate owned by one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: OfferId,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

impl Point {
    pub fn from_offer(offer: &OfferDetail) -> Self {
        Self {
            id: offer.id.clone(),
            latitude: offer.location.latitude,
            longitude: offer.location.longitude,
            zoom: offer.location.zoom,
        }
    }
}

/// One point per listing, in input order, using each listing's location verbatim.
pub fn project_points<'a, I>(offers: I) -> Vec<Point>
where
    I: IntoIterator<Item = &'a OfferDetail>,
{
    offers.into_iter().map(Point::from_offer).collect()
}

pub fn find_point<'p>(points: &'p [Point], id: &OfferId) -> Option<&'p Point> {
    points.iter().find(|point| &point.id == id)
}
