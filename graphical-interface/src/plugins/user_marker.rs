use egui::{include_image, Image, Rect, Response, Vec2};
use walkers::{Plugin, Projector};

use geofence::{FenceStatus, GeoPoint};

pub struct UserMarker {
    position: Option<GeoPoint>,
    last_status: Option<FenceStatus>,
}

impl UserMarker {
    pub fn new(position: Option<GeoPoint>, last_status: Option<FenceStatus>) -> Self {
        Self {
            position,
            last_status,
        }
    }
}

impl Plugin for UserMarker {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        // Nothing to draw until the first fix arrives
        let position = match self.position {
            Some(position) => position,
            None => return,
        };

        let screen_position = projector.project(super::to_position(position));
        let symbol_size = Vec2::new(26.0, 26.0);

        let rect = Rect::from_center_size(screen_position.to_pos2(), symbol_size);

        let hover_text = match self.last_status {
            Some(FenceStatus::Inside) => "You are here (inside the geofence)",
            Some(FenceStatus::Outside) => "You are here (outside the geofence)",
            None => "You are here",
        };

        ui.allocate_rect(rect, egui::Sense::hover())
            .on_hover_text(hover_text);

        let image =
            Image::new(include_image!(r"../../person-solid.svg")).fit_to_exact_size(symbol_size);

        ui.put(rect, image);
    }
}
