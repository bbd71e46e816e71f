use std::{cell::RefCell, rc::Rc, time::Duration};

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Tiles};

use geofence::{haversine_distance, FenceStatus, GeoPoint, Geofence};
use location::{errors::LocationError, PositionFetcher};
use logger::{Color, Logger};

use crate::{
    plugins,
    state::{SelectionState, ViewState},
    widgets::{WidgetAlert, WidgetFence},
    windows,
};

const INITIAL_ZOOM: f64 = 16.;
const UPDATE_TICK_MS: u64 = 250;

/// The main application struct that manages the state and UI of the watch.
///
/// `WatchApp` combines the map view, the fence overlay and the check flow:
/// pressing the check button requests a fresh position from the location
/// provider, and the returned sample is classified against the configured
/// fence and reported in an alert window.
pub struct WatchApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    selection_state: Rc<RefCell<SelectionState>>,
    view_state: ViewState,
    fence: Geofence,
    fetcher: PositionFetcher,
    logger: Logger,
    alert_widget: Option<WidgetAlert>,
    fence_widget: Option<WidgetFence>,
    awaiting_check: bool,
}

impl WatchApp {
    /// Creates a new `WatchApp`, requesting location permission and an
    /// initial position fix so the map can center on the user.
    pub fn new(
        egui_ctx: Context,
        fence: Geofence,
        mut fetcher: PositionFetcher,
        logger: Logger,
    ) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        initial_map_memory.set_zoom(INITIAL_ZOOM).unwrap();

        logger
            .info(
                &format!(
                    "Watching fence at {:.5}, {:.5} with radius {:.0} m",
                    fence.center().latitude,
                    fence.center().longitude,
                    fence.radius_m()
                ),
                Color::White,
                true,
            )
            .ok();

        let mut alert_widget = None;
        match fetcher.request_permission() {
            // The initial fix recenters the map on the user once it arrives
            Ok(()) => {
                fetcher.request().ok();
            }
            Err(err) => {
                logger
                    .warn(&format!("Location permission request failed: {}", err), true)
                    .ok();
                alert_widget = Some(WidgetAlert::location_failure(&err));
            }
        }

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            view_state: ViewState::new(),
            fence,
            fetcher,
            logger,
            alert_widget,
            fence_widget: None,
            awaiting_check: false,
        }
    }

    /// Requests a fresh sample for a geofence check.
    fn start_check(&mut self) {
        match self.fetcher.request() {
            Ok(()) => self.awaiting_check = true,
            // The previous press is still resolving
            Err(LocationError::FetchInProgress) => {}
            Err(err) => {
                self.logger
                    .error(&format!("Position request failed: {}", err), true)
                    .ok();
                self.alert_widget = Some(WidgetAlert::location_failure(&err));
            }
        }
    }

    /// Drains the pending fetch, updating the marker and finishing the
    /// check when one was requested.
    fn poll_pending_fix(&mut self) {
        let result = match self.fetcher.try_take() {
            Some(result) => result,
            None => return,
        };

        let was_check = self.awaiting_check;
        self.awaiting_check = false;

        match result {
            Ok(sample) => {
                self.view_state.position = Some(sample);
                if was_check {
                    self.finish_check(sample);
                }
            }
            Err(err) => {
                self.logger
                    .error(&format!("Position fetch failed: {}", err), true)
                    .ok();
                self.alert_widget = Some(WidgetAlert::location_failure(&err));
            }
        }
    }

    fn finish_check(&mut self, sample: GeoPoint) {
        let status = self.fence.evaluate(sample);
        let distance_m = haversine_distance(sample, self.fence.center());
        self.view_state.last_status = Some(status);

        let color = match status {
            FenceStatus::Inside => Color::Green,
            FenceStatus::Outside => Color::Yellow,
        };
        self.logger
            .info(
                &format!("Check: {} ({:.1} m from center)", status.as_str(), distance_m),
                color,
                true,
            )
            .ok();

        self.alert_widget = Some(WidgetAlert::check_result(status, distance_m));
    }
}

impl eframe::App for WatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending_fix();

        ctx.request_repaint_after(Duration::from_millis(UPDATE_TICK_MS));

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let my_position = match self.view_state.position {
                    Some(position) => plugins::to_position(position),
                    None => plugins::to_position(self.fence.center()),
                };

                let tiles = self.tiles.as_mut();

                let fence_plugin =
                    plugins::FenceArea::new(&self.fence, self.selection_state.clone());

                let user_plugin =
                    plugins::UserMarker::new(self.view_state.position, self.view_state.last_status);

                let map = Map::new(Some(tiles), &mut self.map_memory, my_position)
                    .with_plugin(fence_plugin)
                    .with_plugin(user_plugin);

                ui.add(map);

                let fence_selected = self.selection_state.borrow().fence_selected;
                if fence_selected {
                    if self.fence_widget.is_none() {
                        self.fence_widget = Some(WidgetFence::new(self.fence));
                    }
                    if let Some(widget) = &mut self.fence_widget {
                        if !widget.show(ctx) {
                            self.selection_state.borrow_mut().fence_selected = false;
                            self.fence_widget = None;
                        }
                    }
                } else {
                    self.fence_widget = None;
                }

                if let Some(widget) = &mut self.alert_widget {
                    if !widget.show(ctx) {
                        self.alert_widget = None;
                    }
                }

                let _button_response = egui::Area::new("check_geofence_button".into())
                    .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -20.0])
                    .show(ctx, |ui| {
                        let button_size = [160.0, 50.0];
                        let label = if self.awaiting_check {
                            "Locating..."
                        } else {
                            "Check Geofence"
                        };

                        if ui
                            .add_sized(button_size, egui::Button::new(label).rounding(10.0))
                            .clicked()
                        {
                            self.start_check();
                        }
                    });

                {
                    use windows::*;
                    zoom(ui, &mut self.map_memory);
                }
            });
    }
}
