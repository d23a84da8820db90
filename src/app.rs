use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/signup", post(handlers::signup))
        .route("/api/signin", post(handlers::signin))
        .route(
            "/api/nutrition/:user_id",
            get(handlers::get_nutrition).post(handlers::add_food),
        )
        .route(
            "/api/nutrition/:user_id/:entry_id",
            delete(handlers::remove_food),
        )
        .route(
            "/api/supplements/:user_id",
            get(handlers::get_supplements).post(handlers::add_supplement),
        )
        .route(
            "/api/supplements/:user_id/:supplement_id",
            put(handlers::update_supplement).delete(handlers::remove_supplement),
        )
        .route(
            "/api/hydration/:user_id",
            get(handlers::get_hydration).post(handlers::add_hydration),
        )
        .route("/api/hydration/:user_id/goal", put(handlers::update_hydration_goal))
        .route(
            "/api/hydration/:user_id/:entry_id",
            delete(handlers::remove_hydration),
        )
        .route(
            "/api/profile/:user_id",
            get(handlers::get_profile).put(handlers::update_profile),
        )
        .route("/api/summary/:user_id", get(handlers::get_summary))
        .with_state(state)
}
