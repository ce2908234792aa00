use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::features::assets::handlers;
use crate::features::assets::services::AssetService;
use crate::features::auth::guards::{require_role_level, RoleGate};

/// Create routes for the assets feature
///
/// Reads are public; POST, PUT and DELETE pass through the role gate first.
pub fn routes(service: Arc<AssetService>, gate: RoleGate) -> Router {
    let guard = from_fn_with_state(gate, require_role_level);

    let collection =
        get(handlers::list_assets).merge(post(handlers::create_asset).route_layer(guard.clone()));
    let item = get(handlers::get_asset).merge(
        put(handlers::update_asset)
            .delete(handlers::delete_asset)
            .route_layer(guard),
    );

    Router::new()
        .route("/assets", collection.clone())
        .route("/assets/", collection)
        .route("/assets/{id}", item)
        .with_state(service)
}
