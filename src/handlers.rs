use crate::errors::AppError;
use crate::models::{
    DAILY_STEP_GOAL, LatestWeightResponse, MealRecord, NewMeal, NewSteps, NewWater, NewWeight,
    Series, StepsRecord, TodayStepsResponse, TodaySummary, TodayWaterResponse, WaterGoal,
    WaterRecord, WeightRecord,
};
use crate::state::AppState;
use crate::store::today;
use axum::{extract::State, http::StatusCode, Json};

pub async fn get_today(State(state): State<AppState>) -> Json<TodaySummary> {
    let store = state.store.lock().await;
    Json(store.today_summary())
}

pub async fn list_meals(State(state): State<AppState>) -> Json<Vec<MealRecord>> {
    let store = state.store.lock().await;
    Json(store.meals().to_vec())
}

pub async fn get_today_meals(State(state): State<AppState>) -> Json<Vec<MealRecord>> {
    let store = state.store.lock().await;
    Json(store.today_meals())
}

pub async fn add_meal(
    State(state): State<AppState>,
    Json(mut payload): Json<NewMeal>,
) -> Result<(StatusCode, Json<MealRecord>), AppError> {
    payload.meal_type = payload.meal_type.trim().to_string();
    if payload.meal_type.is_empty() {
        return Err(AppError::bad_request("type must not be empty"));
    }
    non_negative("calories", payload.calories)?;

    let mut store = state.store.lock().await;
    Ok((StatusCode::CREATED, Json(store.add_meal(payload).await)))
}

pub async fn list_weights(State(state): State<AppState>) -> Json<Vec<WeightRecord>> {
    let store = state.store.lock().await;
    Json(store.weights().to_vec())
}

pub async fn add_weight(
    State(state): State<AppState>,
    Json(payload): Json<NewWeight>,
) -> Result<(StatusCode, Json<WeightRecord>), AppError> {
    if !payload.weight.is_finite() || payload.weight <= 0.0 {
        return Err(AppError::bad_request("weight must be a positive number"));
    }

    let mut store = state.store.lock().await;
    Ok((StatusCode::CREATED, Json(store.add_weight(payload).await)))
}

pub async fn get_latest_weight(State(state): State<AppState>) -> Json<LatestWeightResponse> {
    let store = state.store.lock().await;
    Json(LatestWeightResponse {
        weight: store.latest_weight(),
    })
}

pub async fn get_weekly_weight(State(state): State<AppState>) -> Json<Series<f64>> {
    let store = state.store.lock().await;
    Json(store.weekly_weight())
}

pub async fn get_monthly_weight(State(state): State<AppState>) -> Json<Series<f64>> {
    let store = state.store.lock().await;
    Json(store.monthly_weight())
}

pub async fn list_water(State(state): State<AppState>) -> Json<Vec<WaterRecord>> {
    let store = state.store.lock().await;
    Json(store.water().to_vec())
}

pub async fn add_water(
    State(state): State<AppState>,
    Json(payload): Json<NewWater>,
) -> Result<(StatusCode, Json<WaterRecord>), AppError> {
    non_negative("amount", payload.amount)?;

    let mut store = state.store.lock().await;
    Ok((StatusCode::CREATED, Json(store.add_water(payload).await)))
}

pub async fn get_today_water(State(state): State<AppState>) -> Json<TodayWaterResponse> {
    let store = state.store.lock().await;
    Json(TodayWaterResponse {
        date: today().to_string(),
        amount: store.today_water(),
        goal: store.water_goal(),
    })
}

pub async fn get_water_goal(State(state): State<AppState>) -> Json<WaterGoal> {
    let store = state.store.lock().await;
    Json(WaterGoal {
        goal: store.water_goal(),
    })
}

pub async fn set_water_goal(
    State(state): State<AppState>,
    Json(payload): Json<WaterGoal>,
) -> Result<Json<WaterGoal>, AppError> {
    non_negative("goal", payload.goal)?;

    let mut store = state.store.lock().await;
    store.set_water_goal(payload.goal).await;
    Ok(Json(WaterGoal {
        goal: store.water_goal(),
    }))
}

pub async fn list_steps(State(state): State<AppState>) -> Json<Vec<StepsRecord>> {
    let store = state.store.lock().await;
    Json(store.steps().to_vec())
}

pub async fn add_steps(
    State(state): State<AppState>,
    Json(payload): Json<NewSteps>,
) -> (StatusCode, Json<StepsRecord>) {
    let mut store = state.store.lock().await;
    (StatusCode::CREATED, Json(store.add_steps(payload).await))
}

pub async fn get_today_steps(State(state): State<AppState>) -> Json<TodayStepsResponse> {
    let store = state.store.lock().await;
    Json(TodayStepsResponse {
        date: today().to_string(),
        steps: store.today_steps(),
        goal: DAILY_STEP_GOAL,
    })
}

pub async fn get_weekly_steps(State(state): State<AppState>) -> Json<Series<u64>> {
    let store = state.store.lock().await;
    Json(store.weekly_steps())
}

pub async fn get_monthly_steps(State(state): State<AppState>) -> Json<Series<u64>> {
    let store = state.store.lock().await;
    Json(store.monthly_steps())
}

pub async fn not_found() -> AppError {
    AppError::not_found("no such route")
}

fn non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::bad_request(format!(
            "{field} must be a non-negative number"
        )))
    }
}
