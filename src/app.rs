//! Application shell wiring the egui panels to the session controller.

use crossbeam::channel::{Receiver, TryRecvError};
use eframe::egui;

use waymark::geo::LatLng;
use waymark::location::{LocationError, LocationService};
use waymark::map::MapPanel;
use waymark::session::{SessionController, SessionPhase};
use waymark::storage::config::{self, AppConfig};
use waymark::ui::form::FormAction;
use waymark::ui::theme::Theme;
use waymark::ui::workout_list::WorkoutList;

/// Main application state.
pub struct WaymarkApp {
    /// Session controller over the live map panel
    controller: SessionController<MapPanel>,
    /// One-shot location result; dropped after delivery
    location_rx: Option<Receiver<Result<LatLng, LocationError>>>,
    /// Application configuration
    config: AppConfig,
    /// UI theme
    theme: Theme,
}

impl WaymarkApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("using default configuration: {}", e);
            AppConfig::default()
        });

        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme.visuals());

        let controller = SessionController::new(MapPanel::new(), config.map.default_zoom);
        let location_rx = Some(LocationService::request(&config.location));

        Self {
            controller,
            location_rx,
            config,
            theme,
        }
    }

    /// Deliver the location result to the controller once it arrives.
    fn poll_location(&mut self) {
        let Some(rx) = &self.location_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.controller.on_location(result);
                self.location_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.controller.on_location(Err(LocationError::Unavailable));
                self.location_rx = None;
            }
        }
    }

    /// Toggle the theme between dark and light and persist the preference.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.theme {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = self.theme;
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("failed to save configuration: {}", e);
        }
    }

    /// Render the pending alert as a modal dialog.
    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.controller.alert().map(str::to_string) else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Waymark")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);
                ui.add_space(8.0);
                ui.label(&message);
                ui.add_space(12.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.controller.dismiss_alert();
        }
    }

    fn status_text(&self) -> String {
        match self.controller.phase() {
            SessionPhase::AwaitingLocation => "Waiting for location...".to_string(),
            _ => {
                let count = self.controller.store().len();
                format!("{} workout{}", count, if count == 1 { "" } else { "s" })
            }
        }
    }
}

impl eframe::App for WaymarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_location();

        // Keep polling until the location result lands.
        if self.location_rx.is_some() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Waymark");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = match self.theme {
                        Theme::Dark => "🌙",
                        Theme::Light => "☀",
                    };
                    if ui.button(theme_icon).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(self.status_text());
            });
        });

        egui::SidePanel::left("workouts_panel")
            .default_width(300.0)
            .show(ctx, |ui| {
                if self.controller.form().is_open() {
                    match self.controller.form_mut().show(ui) {
                        FormAction::Submitted => self.controller.on_submit(),
                        FormAction::KindChanged(kind) => self.controller.on_kind_change(kind),
                        FormAction::None => {}
                    }
                    ui.separator();
                }

                if let Some(id) = WorkoutList::show(ui, self.controller.store()) {
                    self.controller.on_entry_click(id);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(coords) = self.controller.map_mut().show(ui) {
                self.controller.on_map_click(coords);
            }
        });

        self.render_alert(ctx);
    }
}
