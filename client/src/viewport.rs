use std::f64::consts::PI;

use sixcities_shared::Location;

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_78;
const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 19.0;

/// Web-Mercator viewport centered on a geographic location, mapping
/// latitude/longitude to canvas pixels (CSS units).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: Location,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: Location, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    fn world_size(&self) -> f64 {
        let zoom = f64::from(self.center.zoom).clamp(MIN_ZOOM, MAX_ZOOM);
        TILE_SIZE * zoom.exp2()
    }

    /// Project to normalized world coordinates in `[0, 1]`.
    fn to_world(latitude: f64, longitude: f64) -> (f64, f64) {
        let lat = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (longitude + 180.0) / 360.0;
        let y = 0.5 - ((PI / 4.0 + lat / 2.0).tan().ln()) / (2.0 * PI);
        (x, y)
    }

    /// Convert a geographic coordinate to canvas coordinates.
    pub fn to_screen(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let size = self.world_size();
        let (cx, cy) = Self::to_world(self.center.latitude, self.center.longitude);
        let (wx, wy) = Self::to_world(latitude, longitude);
        (
            (wx - cx) * size + self.width / 2.0,
            (wy - cy) * size + self.height / 2.0,
        )
    }

    /// Whether a screen coordinate falls inside the canvas, with `margin` pixels of slack.
    pub fn contains(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= -margin && y >= -margin && x <= self.width + margin && y <= self.height + margin
    }
}
