//! Workout entry form: field state, visibility toggling, rendering.

use egui::{RichText, Ui};

use crate::workouts::WorkoutKind;

/// Which extra metric row the form currently shows.
///
/// Exactly one is visible at a time; both-visible and both-hidden states
/// cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraField {
    /// Cadence row for running/tracking
    Cadence,
    /// Elevation gain row for cycling
    Elevation,
}

/// What the user asked for in this frame's form interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// No interaction
    None,
    /// The form was submitted (OK button or Enter)
    Submitted,
    /// The activity type selector changed
    KindChanged(WorkoutKind),
}

/// Raw values read from the form; parsing and validation happen later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// Selected activity type
    pub kind: WorkoutKind,
    /// Distance field, unparsed
    pub distance: String,
    /// Duration field, unparsed
    pub duration: String,
    /// Cadence or elevation field depending on the kind, unparsed
    pub extra: String,
}

/// Owns the workout form's field state and renders it.
pub struct FormController {
    kind: WorkoutKind,
    distance_input: String,
    duration_input: String,
    cadence_input: String,
    elevation_input: String,
    visible_extra: ExtraField,
    visible: bool,
    focus_distance: bool,
}

impl FormController {
    /// Create a hidden form with default fields.
    pub fn new() -> Self {
        Self {
            kind: WorkoutKind::default(),
            distance_input: String::new(),
            duration_input: String::new(),
            cadence_input: String::new(),
            elevation_input: String::new(),
            visible_extra: ExtraField::Cadence,
            visible: false,
            focus_distance: false,
        }
    }

    /// Reveal the form and arm a one-shot focus request for the distance
    /// field.
    pub fn open(&mut self) {
        self.visible = true;
        self.focus_distance = true;
    }

    /// Whether the form is currently shown.
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Selected activity type.
    pub fn kind(&self) -> WorkoutKind {
        self.kind
    }

    /// The extra row the form currently shows.
    pub fn visible_extra(&self) -> ExtraField {
        self.visible_extra
    }

    /// Read the current field values without validating.
    pub fn read_submission(&self) -> FormSubmission {
        FormSubmission {
            kind: self.kind,
            distance: self.distance_input.clone(),
            duration: self.duration_input.clone(),
            extra: if self.kind.is_run_shaped() {
                self.cadence_input.clone()
            } else {
                self.elevation_input.clone()
            },
        }
    }

    /// Show the cadence row for run-shaped kinds, the elevation row for
    /// cycling.
    pub fn toggle_fields_for(&mut self, kind: WorkoutKind) {
        self.visible_extra = if kind.is_run_shaped() {
            ExtraField::Cadence
        } else {
            ExtraField::Elevation
        };
    }

    /// Reset every field to its default and hide the form.
    pub fn clear_and_hide(&mut self) {
        self.kind = WorkoutKind::default();
        self.distance_input.clear();
        self.duration_input.clear();
        self.cadence_input.clear();
        self.elevation_input.clear();
        self.visible_extra = ExtraField::Cadence;
        self.visible = false;
        self.focus_distance = false;
    }

    /// Set the activity type as the type selector would.
    pub fn select_kind(&mut self, kind: WorkoutKind) {
        self.kind = kind;
    }

    /// Set the distance field as typed.
    pub fn set_distance(&mut self, value: &str) {
        self.distance_input = value.to_string();
    }

    /// Set the duration field as typed.
    pub fn set_duration(&mut self, value: &str) {
        self.duration_input = value.to_string();
    }

    /// Set the cadence field as typed.
    pub fn set_cadence(&mut self, value: &str) {
        self.cadence_input = value.to_string();
    }

    /// Set the elevation field as typed.
    pub fn set_elevation(&mut self, value: &str) {
        self.elevation_input = value.to_string();
    }

    /// Render the form; no-op while hidden.
    pub fn show(&mut self, ui: &mut Ui) -> FormAction {
        if !self.visible {
            return FormAction::None;
        }

        let mut action = FormAction::None;
        let mut submitted = false;

        ui.add_space(8.0);
        ui.label(RichText::new("New Workout").size(16.0).strong());
        ui.add_space(8.0);

        egui::Grid::new("workout_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Type");
                let previous = self.kind;
                egui::ComboBox::from_id_salt("workout_kind")
                    .selected_text(self.kind.to_string())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.kind, WorkoutKind::Running, "Running");
                        ui.selectable_value(&mut self.kind, WorkoutKind::Tracking, "Tracking");
                        ui.selectable_value(&mut self.kind, WorkoutKind::Cycling, "Cycling");
                    });
                if self.kind != previous {
                    action = FormAction::KindChanged(self.kind);
                }
                ui.end_row();

                ui.label("Distance");
                let distance = ui.add(
                    egui::TextEdit::singleline(&mut self.distance_input)
                        .hint_text("km")
                        .desired_width(110.0),
                );
                if self.focus_distance {
                    distance.request_focus();
                    self.focus_distance = false;
                }
                submitted |=
                    distance.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();

                ui.label("Duration");
                let duration = ui.add(
                    egui::TextEdit::singleline(&mut self.duration_input)
                        .hint_text("min")
                        .desired_width(110.0),
                );
                submitted |=
                    duration.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();

                match self.visible_extra {
                    ExtraField::Cadence => {
                        ui.label("Cadence");
                        let cadence = ui.add(
                            egui::TextEdit::singleline(&mut self.cadence_input)
                                .hint_text("step/min")
                                .desired_width(110.0),
                        );
                        submitted |=
                            cadence.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    }
                    ExtraField::Elevation => {
                        ui.label("Elev Gain");
                        let elevation = ui.add(
                            egui::TextEdit::singleline(&mut self.elevation_input)
                                .hint_text("meters")
                                .desired_width(110.0),
                        );
                        submitted |=
                            elevation.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    }
                }
                ui.end_row();
            });

        ui.add_space(4.0);
        if ui.button("OK").clicked() {
            submitted = true;
        }

        if submitted {
            action = FormAction::Submitted;
        }
        action
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
