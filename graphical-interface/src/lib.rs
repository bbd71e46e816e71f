use geofence::Geofence;
use location::PositionFetcher;
use logger::Logger;

mod map;
mod plugins;
mod state;
mod widgets;
mod windows;

use map::WatchApp;

/// Opens the map window and runs the geofence watch until the user closes it.
pub fn run(fence: Geofence, fetcher: PositionFetcher, logger: Logger) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Geofence Watch",
        Default::default(),
        Box::new(|cc| {
            Ok(Box::new(WatchApp::new(
                cc.egui_ctx.clone(),
                fence,
                fetcher,
                logger,
            )))
        }),
    )
}
