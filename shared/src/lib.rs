pub mod map;
pub mod offer;
pub mod page;
pub mod point;
pub mod review;
pub mod selection;

pub use map::{MapRequest, MarkerState, OFFER_MAP_CONTEXT};
pub use offer::*;
pub use page::*;
pub use point::*;
pub use review::*;
pub use selection::HoverSelection;
