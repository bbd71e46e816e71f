use chrono::{DateTime, Local};

use geofence::FenceStatus;
use location::errors::LocationError;

/// A modal-style window reporting the outcome of a geofence check or a
/// location failure. The window stays up until the user dismisses it.
pub struct WidgetAlert {
    title: &'static str,
    message: String,
    raised_at: DateTime<Local>,
    is_open: bool,
}

impl WidgetAlert {
    /// Builds the alert for a finished check.
    pub fn check_result(status: FenceStatus, distance_m: f64) -> Self {
        let verdict = match status {
            FenceStatus::Inside => "You have entered the geofence area!",
            FenceStatus::Outside => "You are outside the geofence area.",
        };

        Self {
            title: "Geofence Alert",
            message: format!("{}\nDistance to center: {:.1} m", verdict, distance_m),
            raised_at: Local::now(),
            is_open: true,
        }
    }

    /// Builds the alert for a permission or provider failure.
    pub fn location_failure(error: &LocationError) -> Self {
        Self {
            title: "Location",
            message: error.to_string(),
            raised_at: Local::now(),
            is_open: true,
        }
    }

    /// Shows the alert window. Returns whether it should stay open.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut is_open = self.is_open;
        let mut should_close = false;

        egui::Window::new(self.title)
            .resizable(false)
            .collapsible(false)
            .open(&mut is_open)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);
                    ui.label(egui::RichText::new(&self.message).size(16.0));
                    ui.add_space(5.0);
                    ui.label(format!("at {}", self.raised_at.format("%H:%M:%S")));
                    ui.add_space(10.0);

                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            });

        self.is_open = is_open && !should_close;
        self.is_open
    }
}
