use crate::offer::City;
use crate::point::Point;
use crate::selection::HoverSelection;

/// Styling tag for the map embedded in the offer detail page.
pub const OFFER_MAP_CONTEXT: &str = "offer__map";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Default,
    Active,
}

/// Everything the map capability needs for one render: the city to center on,
/// every point, and the one point (if any) to distinguish.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequest {
    pub city: City,
    pub points: Vec<Point>,
    pub selected: Option<Point>,
    pub context: &'static str,
}

impl MapRequest {
    /// Resolves the highlighted id into the point set. A highlight without a
    /// matching point produces no selection.
    pub fn new(
        city: City,
        points: Vec<Point>,
        selection: &HoverSelection,
        context: &'static str,
    ) -> Self {
        let selected = selection.resolve(&points).cloned();
        Self {
            city,
            points,
            selected,
            context,
        }
    }

    pub fn marker_state(&self, point: &Point) -> MarkerState {
        match &self.selected {
            Some(selected) if selected.id == point.id => MarkerState::Active,
            _ => MarkerState::Default,
        }
    }

    pub fn markers(&self) -> impl Iterator<Item = (&Point, MarkerState)> {
        self.points
            .iter()
            .map(move |point| (point, self.marker_state(point)))
    }
}
