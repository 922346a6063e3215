use crate::offer::OfferId;
use crate::point::{Point, find_point};

/// The nearby listing whose card is hovered, if any. At most one id is ever
/// highlighted; selecting another id replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverSelection {
    highlighted: Option<OfferId>,
}

impl HoverSelection {
    pub const fn new() -> Self {
        Self { highlighted: None }
    }

    pub fn select(&mut self, id: OfferId) {
        self.highlighted = Some(id);
    }

    pub fn clear(&mut self) {
        self.highlighted = None;
    }

    pub fn highlighted(&self) -> Option<&OfferId> {
        self.highlighted.as_ref()
    }

    /// Resolve the highlighted id against the current point set. A highlight
    /// that no longer has a point reads as no selection.
    pub fn resolve<'p>(&self, points: &'p [Point]) -> Option<&'p Point> {
        self.highlighted
            .as_ref()
            .and_then(|id| find_point(points, id))
    }

    /// Drop the highlight if its point left the set. Returns `true` when cleared.
    pub fn retain_in(&mut self, points: &[Point]) -> bool {
        if self.highlighted.is_some() && self.resolve(points).is_none() {
            self.highlighted = None;
            return true;
        }
        false
    }
}
