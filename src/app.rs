use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/today", get(handlers::get_today))
        .route("/api/meals", get(handlers::list_meals).post(handlers::add_meal))
        .route("/api/meals/today", get(handlers::get_today_meals))
        .route("/api/weights", get(handlers::list_weights).post(handlers::add_weight))
        .route("/api/weights/latest", get(handlers::get_latest_weight))
        .route("/api/weights/weekly", get(handlers::get_weekly_weight))
        .route("/api/weights/monthly", get(handlers::get_monthly_weight))
        .route("/api/water", get(handlers::list_water).post(handlers::add_water))
        .route("/api/water/today", get(handlers::get_today_water))
        .route(
            "/api/water/goal",
            get(handlers::get_water_goal).put(handlers::set_water_goal),
        )
        .route("/api/steps", get(handlers::list_steps).post(handlers::add_steps))
        .route("/api/steps/today", get(handlers::get_today_steps))
        .route("/api/steps/weekly", get(handlers::get_weekly_steps))
        .route("/api/steps/monthly", get(handlers::get_monthly_steps))
        .fallback(handlers::not_found)
        .with_state(state)
}
