use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_departures;
mod get_directions;
mod get_providers;
mod get_routes;
mod get_stops;
mod get_timepoint_departures;
mod get_vehicle_locations;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/providers", get(get_providers::get_providers))
        .route("/routes", get(get_routes::get_routes))
        .route("/directions/:route", get(get_directions::get_directions))
        .route("/stops/:route/:direction", get(get_stops::get_stops))
        .route("/departures/:stop", get(get_departures::get_departures))
        .route(
            "/timepoint-departures/:route/:direction/:stop",
            get(get_timepoint_departures::get_timepoint_departures),
        )
        .route(
            "/vehicle-locations/:route",
            get(get_vehicle_locations::get_vehicle_locations),
        )
}
