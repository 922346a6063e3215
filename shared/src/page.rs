use crate::map::{MapRequest, OFFER_MAP_CONTEXT};
use crate::offer::{OfferDetail, OfferId};
use crate::point::{Point, find_point, project_points};
use crate::review::{Review, ReviewsMap, reviews_for};
use crate::selection::HoverSelection;

pub const NOT_FOUND_PATH: &str = "/not_found";
pub const DEFAULT_NEARBY_LIMIT: usize = 3;

/// Source of the "other places in the neighbourhood" for a focal listing.
/// Implementations only ever select from the collection they are given.
pub trait NearbyQuery {
    fn nearby<'a>(&self, focal: &OfferDetail, offers: &'a [OfferDetail]) -> Vec<&'a OfferDetail>;
}

/// Other listings in the focal listing's city, in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SameCityNearby {
    pub limit: usize,
}

impl Default for SameCityNearby {
    fn default() -> Self {
        Self {
            limit: DEFAULT_NEARBY_LIMIT,
        }
    }
}

impl NearbyQuery for SameCityNearby {
    fn nearby<'a>(&self, focal: &OfferDetail, offers: &'a [OfferDetail]) -> Vec<&'a OfferDetail> {
        offers
            .iter()
            .filter(|offer| offer.id != focal.id && offer.city.name == focal.city.name)
            .take(self.limit)
            .collect()
    }
}

/// Navigation capability used for the not-found redirect.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

pub fn find_focal<'a>(offers: &'a [OfferDetail], route_id: &str) -> Option<&'a OfferDetail> {
    offers.iter().find(|offer| offer.id.matches_route(route_id))
}

/// Everything the Found state renders, resolved once per collection change.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub offer: OfferDetail,
    pub reviews: Vec<Review>,
    pub nearby: Vec<OfferDetail>,
    pub points: Vec<Point>,
}

impl DetailView {
    pub fn new(offer: &OfferDetail, nearby: Vec<OfferDetail>, reviews: &[Review]) -> Self {
        let points = project_points(&nearby);
        Self {
            offer: offer.clone(),
            reviews: reviews.to_vec(),
            nearby,
            points,
        }
    }

    /// Card hover-enter: only ids with a point in the current set are selected.
    pub fn on_card_enter(&self, selection: &mut HoverSelection, id: &OfferId) {
        if let Some(point) = find_point(&self.points, id) {
            selection.select(point.id.clone());
        }
    }

    /// Card hover-leave always clears, whichever card was active.
    pub fn on_card_leave(&self, selection: &mut HoverSelection) {
        selection.clear();
    }

    pub fn map_request(&self, selection: &HoverSelection) -> MapRequest {
        MapRequest::new(
            self.offer.city.clone(),
            self.points.clone(),
            selection,
            OFFER_MAP_CONTEXT,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPage {
    Found(DetailView),
    NotFound,
}

impl DetailPage {
    pub fn resolve(
        offers: &[OfferDetail],
        reviews: &ReviewsMap,
        route_id: &str,
        query: &impl NearbyQuery,
    ) -> Self {
        let Some(offer) = find_focal(offers, route_id) else {
            return Self::NotFound;
        };
        let nearby = query
            .nearby(offer, offers)
            .into_iter()
            .cloned()
            .collect();
        Self::Found(DetailView::new(offer, nearby, reviews_for(reviews, &offer.id)))
    }

    /// Found yields the view; NotFound issues exactly one redirect and yields nothing.
    pub fn enter(self, navigator: &impl Navigator) -> Option<DetailView> {
        match self {
            Self::Found(view) => Some(view),
            Self::NotFound => {
                navigator.redirect(NOT_FOUND_PATH);
                None
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
