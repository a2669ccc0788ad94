//! Side-panel list of recorded workouts.

use egui::{RichText, Ui};
use uuid::Uuid;

use crate::ui::theme;
use crate::workouts::{WorkoutDetails, WorkoutStore};

/// Renders the recorded workouts in insertion order.
pub struct WorkoutList;

impl WorkoutList {
    /// Render the list and return the id of a clicked entry.
    pub fn show(ui: &mut Ui, store: &WorkoutStore) -> Option<Uuid> {
        if store.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new("Click the map to record a workout.").weak());
            return None;
        }

        let mut clicked = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for workout in store.iter() {
                let card = ui.group(|ui| {
                    ui.set_min_width(ui.available_width() - 8.0);

                    ui.label(
                        RichText::new(workout.description())
                            .strong()
                            .color(theme::kind_color(workout.kind())),
                    );

                    ui.horizontal(|ui| {
                        ui.label(format!("{} km", workout.distance_km()));
                        ui.separator();
                        ui.label(format!("{} min", workout.duration_min()));
                        ui.separator();
                        match workout.details() {
                            WorkoutDetails::Run {
                                cadence_spm,
                                pace_min_per_km,
                            } => {
                                ui.label(format!("{:.2} min/km", pace_min_per_km));
                                ui.separator();
                                ui.label(format!("{} spm", cadence_spm));
                            }
                            WorkoutDetails::Cycle {
                                elevation_gain_m,
                                speed_km_per_h,
                            } => {
                                ui.label(format!("{:.2} km/h", speed_km_per_h));
                                ui.separator();
                                ui.label(format!("{} m", elevation_gain_m));
                            }
                        }
                    });
                });

                if card.response.interact(egui::Sense::click()).clicked() {
                    clicked = Some(workout.id());
                }

                ui.add_space(6.0);
            }
        });

        clicked
    }
}
