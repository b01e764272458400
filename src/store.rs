//! Process-wide health record store.
//!
//! A [`HealthStore`] is loaded once at startup and lives until the process
//! exits. Every mutation updates memory first and then rewrites the affected
//! key in full; a failed write is logged and the in-memory update is kept.

use crate::errors::StorageError;
use crate::models::{
    HealthData, MEALS_KEY, MealRecord, NewMeal, NewSteps, NewWater, NewWeight, STEPS_KEY, Series,
    StepsRecord, TodaySummary, WATER_GOAL_KEY, WATER_KEY, WEIGHTS_KEY, WaterRecord, WeightRecord,
};
use crate::stats;
use crate::storage::KeyValueStore;
use chrono::{Local, NaiveDate, Utc};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;

pub struct HealthStore {
    backend: Arc<dyn KeyValueStore>,
    data: HealthData,
}

impl HealthStore {
    /// Reads every key from `backend`. Missing or unreadable keys fall back to
    /// their defaults independently of each other.
    pub async fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        let defaults = HealthData::default();
        let data = HealthData {
            meals: load_key(backend.as_ref(), MEALS_KEY).await.unwrap_or_default(),
            weights: load_key(backend.as_ref(), WEIGHTS_KEY).await.unwrap_or_default(),
            water: load_key(backend.as_ref(), WATER_KEY).await.unwrap_or_default(),
            steps: load_key(backend.as_ref(), STEPS_KEY).await.unwrap_or_default(),
            water_goal: load_key(backend.as_ref(), WATER_GOAL_KEY)
                .await
                .unwrap_or(defaults.water_goal),
        };

        info!(
            meals = data.meals.len(),
            weights = data.weights.len(),
            water = data.water.len(),
            steps = data.steps.len(),
            water_goal = data.water_goal,
            "loaded health data"
        );

        Self { backend, data }
    }

    pub fn data(&self) -> &HealthData {
        &self.data
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.data.meals
    }

    pub fn weights(&self) -> &[WeightRecord] {
        &self.data.weights
    }

    pub fn water(&self) -> &[WaterRecord] {
        &self.data.water
    }

    pub fn steps(&self) -> &[StepsRecord] {
        &self.data.steps
    }

    pub fn water_goal(&self) -> f64 {
        self.data.water_goal
    }

    pub async fn add_meal(&mut self, meal: NewMeal) -> MealRecord {
        let record = MealRecord {
            id: Uuid::new_v4(),
            meal_type: meal.meal_type,
            calories: meal.calories,
            description: meal.description,
            timestamp: Utc::now(),
        };
        self.data.meals.push(record.clone());
        self.persist(MEALS_KEY, &self.data.meals).await;
        record
    }

    pub async fn add_weight(&mut self, weight: NewWeight) -> WeightRecord {
        let record = WeightRecord {
            id: Uuid::new_v4(),
            weight: weight.weight,
            timestamp: Utc::now(),
        };
        self.data.weights.push(record.clone());
        self.persist(WEIGHTS_KEY, &self.data.weights).await;
        record
    }

    pub async fn add_water(&mut self, water: NewWater) -> WaterRecord {
        let record = WaterRecord {
            id: Uuid::new_v4(),
            amount: water.amount,
            timestamp: Utc::now(),
        };
        self.data.water.push(record.clone());
        self.persist(WATER_KEY, &self.data.water).await;
        record
    }

    pub async fn add_steps(&mut self, steps: NewSteps) -> StepsRecord {
        let record = StepsRecord {
            id: Uuid::new_v4(),
            steps: steps.steps,
            timestamp: Utc::now(),
        };
        self.data.steps.push(record.clone());
        self.persist(STEPS_KEY, &self.data.steps).await;
        record
    }

    pub async fn set_water_goal(&mut self, goal: f64) {
        self.data.water_goal = goal;
        self.persist(WATER_GOAL_KEY, &self.data.water_goal).await;
    }

    pub fn today_meals(&self) -> Vec<MealRecord> {
        stats::today_meals_at(&self.data, today())
    }

    pub fn today_calories(&self) -> f64 {
        stats::today_calories_at(&self.data, today())
    }

    pub fn today_water(&self) -> f64 {
        stats::today_water_at(&self.data, today())
    }

    pub fn today_steps(&self) -> u64 {
        stats::today_steps_at(&self.data, today())
    }

    pub fn latest_weight(&self) -> Option<f64> {
        stats::latest_weight(&self.data)
    }

    pub fn weekly_weight(&self) -> Series<f64> {
        stats::weekly_weight_at(&self.data, today())
    }

    pub fn monthly_weight(&self) -> Series<f64> {
        stats::monthly_weight_at(&self.data, today())
    }

    pub fn weekly_steps(&self) -> Series<u64> {
        stats::weekly_steps_at(&self.data, today())
    }

    pub fn monthly_steps(&self) -> Series<u64> {
        stats::monthly_steps_at(&self.data, today())
    }

    pub fn today_summary(&self) -> TodaySummary {
        stats::today_summary_at(&self.data, today())
    }

    async fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match write_key(self.backend.as_ref(), key, value).await {
            Ok(()) => debug!(key, "persisted health data"),
            Err(err) => error!(key, "failed to persist health data: {err}"),
        }
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn load_key<T: DeserializeOwned>(backend: &dyn KeyValueStore, key: &str) -> Option<T> {
    match backend.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                error!(key, "failed to parse stored health data: {err}");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            error!(key, "failed to read stored health data: {err}");
            None
        }
    }
}

async fn write_key<T: Serialize + ?Sized>(
    backend: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let payload = serde_json::to_string(value)?;
    backend.set(key, payload).await
}
