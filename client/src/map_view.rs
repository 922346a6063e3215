use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use sixcities_shared::{MapRequest, MarkerState, OfferId};

use crate::viewport::Viewport;

const PIN_RADIUS: f64 = 9.0;
const PIN_HEIGHT: f64 = 26.0;
const PIN_DEFAULT_FILL: &str = "#4481c3";
const PIN_ACTIVE_FILL: &str = "#ff9000";
const PIN_STROKE: &str = "rgba(255,255,255,0.9)";
const MAP_BACKGROUND: &str = "#dde3e8";
const MAP_GRID: &str = "rgba(255,255,255,0.55)";
const GRID_STEP_PX: f64 = 64.0;
const FALLBACK_WIDTH: f64 = 1144.0;
const FALLBACK_HEIGHT: f64 = 579.0;

/// One marker ready to draw, with its pin tip at `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSprite {
    pub id: OfferId,
    pub x: f64,
    pub y: f64,
    pub state: MarkerState,
}

/// Visible markers for a request, active marker last so it paints on top.
pub fn marker_sprites(request: &MapRequest, viewport: &Viewport) -> Vec<MarkerSprite> {
    let mut sprites: Vec<MarkerSprite> = request
        .markers()
        .filter_map(|(point, state)| {
            let (x, y) = viewport.to_screen(point.latitude, point.longitude);
            viewport
                .contains(x, y, PIN_HEIGHT)
                .then(|| MarkerSprite {
                    id: point.id.clone(),
                    x,
                    y,
                    state,
                })
        })
        .collect();
    sprites.sort_by_key(|sprite| sprite.state == MarkerState::Active);
    sprites
}

pub fn pin_fill(state: MarkerState) -> &'static str {
    match state {
        MarkerState::Default => PIN_DEFAULT_FILL,
        MarkerState::Active => PIN_ACTIVE_FILL,
    }
}

fn render_scale() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .max(1.0)
}

fn canvas_css_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let width = if rect.width() > 0.0 { rect.width() } else { FALLBACK_WIDTH };
    let height = if rect.height() > 0.0 { rect.height() } else { FALLBACK_HEIGHT };
    (width, height)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str(MAP_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str(MAP_GRID);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let mut x = GRID_STEP_PX;
    while x < width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        x += GRID_STEP_PX;
    }
    let mut y = GRID_STEP_PX;
    while y < height {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += GRID_STEP_PX;
    }
    ctx.stroke();
}

fn draw_pin(ctx: &CanvasRenderingContext2d, sprite: &MarkerSprite) {
    let cx = sprite.x;
    let cy = sprite.y - PIN_HEIGHT + PIN_RADIUS;

    ctx.begin_path();
    ctx.move_to(sprite.x, sprite.y);
    ctx.line_to(cx - PIN_RADIUS * 0.8, cy + PIN_RADIUS * 0.6);
    let _ = ctx.arc(cx, cy, PIN_RADIUS, 0.75 * std::f64::consts::PI, 0.25 * std::f64::consts::PI);
    ctx.close_path();
    ctx.set_fill_style_str(pin_fill(sprite.state));
    ctx.fill();
    ctx.set_stroke_style_str(PIN_STROKE);
    ctx.set_line_width(1.5);
    ctx.stroke();

    ctx.begin_path();
    let _ = ctx.arc(cx, cy, PIN_RADIUS * 0.38, 0.0, std::f64::consts::TAU);
    ctx.set_fill_style_str(PIN_STROKE);
    ctx.fill();
}

fn draw_city_label(ctx: &CanvasRenderingContext2d, city: &str) {
    ctx.set_font("600 13px sans-serif");
    ctx.set_fill_style_str("rgba(40,45,60,0.75)");
    let _ = ctx.fill_text(city, 12.0, 22.0);
}

fn render(canvas: &HtmlCanvasElement, request: &MapRequest) {
    let (width, height) = canvas_css_size(canvas);
    let scale = render_scale();
    let expected_w = (width * scale) as u32;
    let expected_h = (height * scale) as u32;
    if canvas.width() != expected_w || canvas.height() != expected_h {
        canvas.set_width(expected_w);
        canvas.set_height(expected_h);
    }
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let _ = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);

    let viewport = Viewport::new(request.city.location, width, height);
    draw_background(&ctx, width, height);
    for sprite in marker_sprites(request, &viewport) {
        draw_pin(&ctx, &sprite);
    }
    draw_city_label(&ctx, &request.city.name);
}

/// Canvas map capability: draws one pin per point, the selected point's pin
/// in the active color. Redraws whenever the request changes.
#[component]
pub fn MapView(#[prop(into)] request: Signal<MapRequest>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        request.with(|request| render(&canvas, request));
    });

    let class = move || request.with(|r| format!("{} map", r.context));

    view! {
        <section class=class>
            <canvas
                node_ref=canvas_ref
                aria-label="Map of nearby places"
                style="display: block; width: 100%; height: 100%;"
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use sixcities_shared::{
        City, HoverSelection, Location, MapRequest, MarkerState, OFFER_MAP_CONTEXT, OfferId, Point,
    };

    use super::{PIN_ACTIVE_FILL, PIN_DEFAULT_FILL, marker_sprites, pin_fill};
    use crate::viewport::Viewport;

    fn city() -> City {
        City {
            name: "Amsterdam".to_string(),
            location: Location {
                latitude: 52.370216,
                longitude: 4.895168,
                zoom: 10,
            },
        }
    }

    fn point(id: &str, latitude: f64, longitude: f64) -> Point {
        Point {
            id: OfferId::from(id),
            latitude,
            longitude,
            zoom: 8,
        }
    }

    fn request(selected: Option<&str>) -> MapRequest {
        let mut selection = HoverSelection::new();
        if let Some(id) = selected {
            selection.select(OfferId::from(id));
        }
        MapRequest::new(
            city(),
            vec![
                point("1", 52.39, 4.85),
                point("2", 52.36, 4.85),
                point("3", 52.38, 4.93),
                point("far", 48.85, 2.35),
            ],
            &selection,
            OFFER_MAP_CONTEXT,
        )
    }

    fn viewport() -> Viewport {
        Viewport::new(city().location, 1144.0, 579.0)
    }

    #[test]
    fn off_canvas_points_are_skipped() {
        let sprites = marker_sprites(&request(None), &viewport());
        let ids: Vec<&str> = sprites.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(sprites.iter().all(|s| s.state == MarkerState::Default));
    }

    #[test]
    fn active_marker_is_drawn_last() {
        let sprites = marker_sprites(&request(Some("1")), &viewport());
        let last = sprites.last().expect("sprites");
        assert_eq!(last.id.as_str(), "1");
        assert_eq!(last.state, MarkerState::Active);
        assert_eq!(
            sprites
                .iter()
                .filter(|s| s.state == MarkerState::Active)
                .count(),
            1
        );
    }

    #[test]
    fn pin_colors_distinguish_active() {
        assert_eq!(pin_fill(MarkerState::Default), PIN_DEFAULT_FILL);
        assert_eq!(pin_fill(MarkerState::Active), PIN_ACTIVE_FILL);
    }
}
