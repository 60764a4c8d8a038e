//! REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod handy_models;

use axum::Router;
use axum::routing::{delete, get, post, put};

use handyhub_app::ports::HandyModelRepository;

use crate::state::AppState;

/// Build the `/handymodell` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: HandyModelRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/list", get(handy_models::list::<R>))
        .route("/read", get(handy_models::read::<R>))
        .route("/create", post(handy_models::create::<R>))
        .route("/update", put(handy_models::update::<R>))
        .route("/delete", delete(handy_models::delete::<R>))
}
