use std::env;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use geofence::{GeoPoint, Geofence};
use location::{PositionFetcher, SimulatedGps};
use logger::Logger;

const DEFAULT_LAT: f64 = 37.78825;
const DEFAULT_LON: f64 = -122.4324;
const DEFAULT_RADIUS_M: f64 = 100.0;

const FENCE_FILE: &str = "geofence.txt";
const LOG_DIR: &str = "logs";

/// Main entry point for the geofence watch.
///
/// The program opens a map centered on the configured geofence, shows the
/// user's position on it, and classifies a freshly fetched position as
/// inside or outside the fence whenever the check button is pressed.
///
/// The fence definition is taken from the command line as
/// `<lat> <lon> <radius_m>`. When no arguments are given, the `GEOFENCE`
/// environment variable and then a `geofence.txt` file in the current
/// directory are consulted (same three fields), falling back to the
/// built-in default fence.
///
/// # Usage
///
/// ```sh
/// cargo run -- 37.78825 -122.4324 100
/// ```
///
/// Setting `LOCATION_PERMISSION=denied` makes the simulated receiver refuse
/// the permission request, which the interface reports as an alert.
///
/// # Errors
///
/// The program returns an error if:
/// - The number of arguments is incorrect.
/// - A latitude, longitude or radius field cannot be parsed.
/// - The radius is not strictly positive.
/// - The log directory cannot be created.
///
/// # Return Values
///
/// - `Ok(())` - The watch ran and was closed normally.
/// - `Err(String)` - There was an error starting the watch.
fn main() -> Result<(), String> {
    // Collect command-line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() != 1 && args.len() != 4 {
        return Err("Usage: program [<lat> <lon> <radius_m>]".to_string());
    }

    let (center, radius_m) = if args.len() == 4 {
        parse_fence_fields(&args[1..])?
    } else {
        read_fence_definition(FENCE_FILE)?
    };

    // The radius is validated here, before any window opens
    let fence = Geofence::new(center, radius_m).map_err(|e| e.to_string())?;

    let logger = Logger::new(Path::new(LOG_DIR), "geofence_watch").map_err(|e| e.to_string())?;

    let permission_granted = !matches!(env::var("LOCATION_PERMISSION").as_deref(), Ok("denied"));
    let provider = SimulatedGps::new(fence.center()).with_permission(permission_granted);
    let fetcher = PositionFetcher::new(provider);

    graphical_interface::run(fence, fetcher, logger).map_err(|e| e.to_string())
}

/// Reads the fence definition from the environment or a fallback file.
///
/// The `GEOFENCE` environment variable takes precedence. The file is
/// expected to carry `<lat> <lon> <radius_m>` on its first non-empty line.
/// When neither is available the built-in default fence is used.
///
/// # Arguments
///
/// * `file_path` - The path to the fence definition file.
///
/// # Returns
///
/// A `Result` containing:
/// - `Ok((GeoPoint, f64))` - The fence center and radius on success.
/// - `Err(String)` - An error message if a present definition is malformed.
fn read_fence_definition(file_path: &str) -> Result<(GeoPoint, f64), String> {
    if let Ok(definition) = env::var("GEOFENCE") {
        let fields: Vec<String> = definition.split_whitespace().map(String::from).collect();
        return parse_fence_fields(&fields);
    }

    // A missing file is not an error; the default fence applies
    let file = match File::open(file_path) {
        Ok(file) => file,
        Err(_) => return Ok((GeoPoint::new(DEFAULT_LAT, DEFAULT_LON), DEFAULT_RADIUS_M)),
    };

    let reader = io::BufReader::new(file);
    for line in reader.lines() {
        let line = line.map_err(|_| format!("Error reading {}", file_path))?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split_whitespace().map(String::from).collect();
        return parse_fence_fields(&fields);
    }

    Err(format!("{} contains no fence definition", file_path))
}

/// Parses `<lat> <lon> <radius_m>` fields into a fence center and radius.
fn parse_fence_fields(fields: &[String]) -> Result<(GeoPoint, f64), String> {
    if fields.len() != 3 {
        return Err("Fence definition must be: <lat> <lon> <radius_m>".to_string());
    }

    let latitude: f64 = fields[0]
        .parse()
        .map_err(|_| format!("Invalid latitude: {}", fields[0]))?;
    let longitude: f64 = fields[1]
        .parse()
        .map_err(|_| format!("Invalid longitude: {}", fields[1]))?;
    let radius_m: f64 = fields[2]
        .parse()
        .map_err(|_| format!("Invalid radius: {}", fields[2]))?;

    Ok((GeoPoint::new(latitude, longitude), radius_m))
}
