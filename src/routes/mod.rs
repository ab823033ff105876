use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_cell_index;
mod get_fetch;
mod get_location_search;
mod post_fetch;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/fetch",
        get(get_fetch::get_fetch).post(post_fetch::post_fetch),
    )
    .route(
        "/location-search",
        get(get_location_search::get_location_search),
    )
    .route("/cell-index", get(get_cell_index::get_cell_index))
}
