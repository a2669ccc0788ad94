//! Offline egui map canvas: camera, graticule, markers, click detection.

use egui::{pos2, vec2, Align2, FontId, Pos2, Rect, Sense, Stroke, Ui};

use crate::geo::{self, LatLng};
use crate::map::{MapAdapter, Marker};
use crate::ui::theme;

/// Fraction of the remaining glide distance covered per frame.
const GLIDE_RATE: f64 = 0.18;
/// Glide snap threshold in world pixels.
const GLIDE_EPSILON: f64 = 0.5;
/// Graticule spacing in world pixels (one tile).
const GRID_STEP: f64 = 256.0;

/// Interactive map canvas.
///
/// Plays the map capability for the live application: an offline
/// Web-Mercator view with a tile-grid background. No tiles are fetched;
/// the tile provider is an external collaborator this app does without.
pub struct MapPanel {
    center: LatLng,
    zoom: u8,
    glide_target: Option<LatLng>,
    markers: Vec<Marker>,
    initialized: bool,
}

impl MapPanel {
    /// Create an uninitialized panel; it renders a waiting notice until
    /// [`MapAdapter::initialize`] is called.
    pub fn new() -> Self {
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 2,
            glide_target: None,
            markers: Vec::new(),
            initialized: false,
        }
    }

    /// Current view center.
    pub fn center(&self) -> LatLng {
        self.center
    }

    /// Current zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Markers placed so far, in placement order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Whether the start location has arrived.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Render the map; returns the clicked coordinate, if any.
    pub fn show(&mut self, ui: &mut Ui) -> Option<LatLng> {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

        if !self.initialized {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Waiting for location...",
                FontId::proportional(16.0),
                ui.visuals().weak_text_color(),
            );
            return None;
        }

        if self.advance_glide() {
            ui.ctx().request_repaint();
        }

        self.draw_grid(&painter, rect, ui);
        self.draw_markers(&painter, rect, ui);

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let coords = self.to_coords(rect, pos);
                tracing::debug!("map clicked at {}", coords);
                return Some(coords);
            }
        }
        None
    }

    /// Step the animated recenter; true while still moving.
    fn advance_glide(&mut self) -> bool {
        let Some(target) = self.glide_target else {
            return false;
        };
        let (cx, cy) = geo::project(self.center, self.zoom);
        let (tx, ty) = geo::project(target, self.zoom);
        let (dx, dy) = (tx - cx, ty - cy);
        if dx.hypot(dy) < GLIDE_EPSILON {
            self.center = target;
            self.glide_target = None;
            return false;
        }
        self.center = geo::unproject(cx + dx * GLIDE_RATE, cy + dy * GLIDE_RATE, self.zoom);
        true
    }

    fn to_screen(&self, rect: Rect, coords: LatLng) -> Pos2 {
        let (cx, cy) = geo::project(self.center, self.zoom);
        let (x, y) = geo::project(coords, self.zoom);
        pos2(
            rect.center().x + (x - cx) as f32,
            rect.center().y + (y - cy) as f32,
        )
    }

    fn to_coords(&self, rect: Rect, pos: Pos2) -> LatLng {
        let (cx, cy) = geo::project(self.center, self.zoom);
        geo::unproject(
            cx + f64::from(pos.x - rect.center().x),
            cy + f64::from(pos.y - rect.center().y),
            self.zoom,
        )
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: Rect, ui: &Ui) {
        let stroke = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
        let (cx, cy) = geo::project(self.center, self.zoom);
        let left = cx - f64::from(rect.width()) / 2.0;
        let top = cy - f64::from(rect.height()) / 2.0;

        let mut x = (left / GRID_STEP).floor() * GRID_STEP;
        while x < left + f64::from(rect.width()) {
            let sx = rect.left() + (x - left) as f32;
            painter.line_segment([pos2(sx, rect.top()), pos2(sx, rect.bottom())], stroke);
            x += GRID_STEP;
        }

        let mut y = (top / GRID_STEP).floor() * GRID_STEP;
        while y < top + f64::from(rect.height()) {
            let sy = rect.top() + (y - top) as f32;
            painter.line_segment([pos2(rect.left(), sy), pos2(rect.right(), sy)], stroke);
            y += GRID_STEP;
        }
    }

    fn draw_markers(&self, painter: &egui::Painter, rect: Rect, ui: &Ui) {
        for marker in &self.markers {
            let pos = self.to_screen(rect, marker.coords);
            if !rect.expand(48.0).contains(pos) {
                continue;
            }
            let accent = theme::kind_color(marker.kind);

            // Pin: base dot, stem, head.
            painter.circle_filled(pos, 2.5, accent);
            painter.line_segment([pos, pos - vec2(0.0, 14.0)], Stroke::new(2.0, accent));
            painter.circle_filled(pos - vec2(0.0, 18.0), 6.0, accent);

            // Always-open popup above the pin.
            let galley = painter.layout_no_wrap(
                marker.popup_text.clone(),
                FontId::proportional(12.0),
                ui.visuals().strong_text_color(),
            );
            let text_pos = pos - vec2(galley.size().x / 2.0, 32.0 + galley.size().y);
            let bubble = Rect::from_min_size(text_pos, galley.size()).expand(5.0);
            painter.rect_filled(bubble, 6.0, ui.visuals().panel_fill);
            painter.rect_filled(
                Rect::from_min_max(bubble.left_top(), pos2(bubble.left() + 3.0, bubble.bottom())),
                2.0,
                accent,
            );
            painter.galley(text_pos, galley, ui.visuals().strong_text_color());
        }
    }
}

impl Default for MapPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl MapAdapter for MapPanel {
    fn initialize(&mut self, center: LatLng, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
        self.glide_target = None;
        self.initialized = true;
        tracing::info!("map initialized at {} (zoom {})", center, zoom);
    }

    fn place_marker(&mut self, marker: Marker) {
        tracing::debug!("marker placed at {}: {}", marker.coords, marker.popup_text);
        self.markers.push(marker);
    }

    fn recenter(&mut self, center: LatLng, zoom: u8, animate: bool) {
        self.zoom = zoom;
        if animate {
            self.glide_target = Some(center);
        } else {
            self.center = center;
            self.glide_target = None;
        }
    }
}
