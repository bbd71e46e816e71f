use std::{cell::RefCell, rc::Rc};

use egui::{include_image, Color32, Image, Rect, Response, Stroke, Vec2};
use walkers::{Plugin, Position, Projector};

use geofence::Geofence;

use crate::state::SelectionState;

pub struct FenceArea<'a> {
    fence: &'a Geofence,
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> FenceArea<'a> {
    pub fn new(fence: &'a Geofence, selection_state: Rc<RefCell<SelectionState>>) -> Self {
        Self {
            fence,
            selection_state,
        }
    }
}

impl Plugin for FenceArea<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let screen_center = projector.project(super::to_position(self.fence.center())).to_pos2();

        // The on-screen radius is measured by projecting a point one fence
        // radius due east of the center at the current zoom
        let screen_edge = projector.project(eastern_edge(self.fence)).to_pos2();
        let pixel_radius = (screen_edge - screen_center).length();

        ui.painter().circle(
            screen_center,
            pixel_radius,
            Color32::from_rgba_unmultiplied(66, 135, 245, 26),
            Stroke::new(2.0, Color32::from_rgb(66, 135, 245)),
        );

        let symbol_size = Vec2::new(30.0, 30.0);

        // Lift the pin so its tip sits on the center
        let rect = {
            let min_pos =
                screen_center - Vec2::new(symbol_size.x / 2.0, symbol_size.y - 15.0);
            Rect::from_min_size(min_pos, symbol_size)
        };

        let clickable_area = Rect::from_center_size(screen_center, symbol_size);

        let response = ui
            .allocate_rect(clickable_area, egui::Sense::click())
            .on_hover_text("Geofence Area");

        let image = if response.hovered() {
            Image::new(include_image!(r"../../location-pin-selected.svg"))
        } else {
            Image::new(include_image!(r"../../location-pin-solid.svg"))
        }
        .fit_to_exact_size(symbol_size);

        ui.put(rect, image);

        if response.clicked() {
            self.selection_state.borrow_mut().toggle_fence_selection();
        }
    }
}

/// Position one fence radius due east of the center.
fn eastern_edge(fence: &Geofence) -> Position {
    let center = fence.center();
    let delta_lon = (fence.radius_m()
        / (geofence::EARTH_RADIUS_M * center.latitude.to_radians().cos()))
    .to_degrees();

    Position::from_lat_lon(center.latitude, center.longitude + delta_lon)
}
