use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MEALS_KEY: &str = "meals";
pub const WEIGHTS_KEY: &str = "weights";
pub const WATER_KEY: &str = "water";
pub const STEPS_KEY: &str = "steps";
pub const WATER_GOAL_KEY: &str = "waterGoal";

/// Daily water goal in milliliters used when nothing has been stored yet.
pub const DEFAULT_WATER_GOAL: f64 = 2500.0;

/// Fixed daily step target shown next to today's step count.
pub const DAILY_STEP_GOAL: u64 = 10_000;

/// Anything logged with a creation timestamp.
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;

    /// Calendar day the record falls on in the local time zone.
    fn local_date(&self) -> NaiveDate {
        self.timestamp().with_timezone(&Local).date_naive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub meal_type: String,
    pub calories: f64,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub id: Uuid,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterRecord {
    pub id: Uuid,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepsRecord {
    pub id: Uuid,
    pub steps: u64,
    pub timestamp: DateTime<Utc>,
}

macro_rules! impl_timestamped {
    ($($ty:ty),*) => {
        $(impl Timestamped for $ty {
            fn timestamp(&self) -> DateTime<Utc> {
                self.timestamp
            }
        })*
    };
}

impl_timestamped!(MealRecord, WeightRecord, WaterRecord, StepsRecord);

/// In-memory mirror of everything the store persists.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthData {
    pub meals: Vec<MealRecord>,
    pub weights: Vec<WeightRecord>,
    pub water: Vec<WaterRecord>,
    pub steps: Vec<StepsRecord>,
    pub water_goal: f64,
}

impl Default for HealthData {
    fn default() -> Self {
        Self {
            meals: Vec::new(),
            weights: Vec::new(),
            water: Vec::new(),
            steps: Vec::new(),
            water_goal: DEFAULT_WATER_GOAL,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMeal {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub calories: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWeight {
    pub weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWater {
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSteps {
    pub steps: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterGoal {
    pub goal: f64,
}

/// Chart-ready series: one label per bucket, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<T> {
    pub labels: Vec<String>,
    pub data: Vec<T>,
}

impl<T> Series<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: String, value: T) {
        self.labels.push(label);
        self.data.push(value);
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LatestWeightResponse {
    pub weight: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayWaterResponse {
    pub date: String,
    pub amount: f64,
    pub goal: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayStepsResponse {
    pub date: String,
    pub steps: u64,
    pub goal: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodaySummary {
    pub date: String,
    pub meal_count: usize,
    pub calories: f64,
    pub water: f64,
    pub water_goal: f64,
    pub water_progress: f64,
    pub water_goal_reached: bool,
    pub steps: u64,
    pub step_goal: u64,
    pub step_progress: f64,
    pub latest_weight: Option<f64>,
}
