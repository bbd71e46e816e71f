use geofence::Geofence;

/// A window with the details of the configured geofence, opened by clicking
/// its marker on the map.
pub struct WidgetFence {
    fence: Geofence,
}

impl WidgetFence {
    pub fn new(fence: Geofence) -> Self {
        Self { fence }
    }

    /// Shows the detail window. Returns whether it should stay open.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;

        egui::Window::new("Geofence Area")
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "Center: {:.5}, {:.5}",
                            self.fence.center().latitude,
                            self.fence.center().longitude
                        ))
                        .size(16.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("Radius: {:.0} m", self.fence.radius_m()))
                            .size(16.0),
                    );
                });

                ui.add_space(10.0);
            });

        open
    }
}
