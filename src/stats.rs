use crate::models::{
    DAILY_STEP_GOAL, HealthData, MealRecord, Series, Timestamped, TodaySummary,
};
use chrono::{Datelike, Duration, NaiveDate};

const WEEK_DAYS: i64 = 7;
const MONTH_COUNT: i32 = 6;
const STEP_WEEK_COUNT: i64 = 4;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn today_meals_at(data: &HealthData, today: NaiveDate) -> Vec<MealRecord> {
    data.meals
        .iter()
        .filter(|meal| meal.local_date() == today)
        .cloned()
        .collect()
}

pub fn today_calories_at(data: &HealthData, today: NaiveDate) -> f64 {
    data.meals
        .iter()
        .filter(|meal| meal.local_date() == today)
        .map(|meal| meal.calories)
        .sum()
}

pub fn today_water_at(data: &HealthData, today: NaiveDate) -> f64 {
    data.water
        .iter()
        .filter(|water| water.local_date() == today)
        .map(|water| water.amount)
        .sum()
}

pub fn today_steps_at(data: &HealthData, today: NaiveDate) -> u64 {
    steps_between(data, today, today)
}

/// Weight of the last appended record; append order is creation order.
pub fn latest_weight(data: &HealthData) -> Option<f64> {
    data.weights.last().map(|entry| entry.weight)
}

/// Latest weight per day for the 7 days ending `today`, 0 for days without an entry.
pub fn weekly_weight_at(data: &HealthData, today: NaiveDate) -> Series<f64> {
    let mut series = Series::with_capacity(WEEK_DAYS as usize);
    for date in last_days(today, WEEK_DAYS) {
        let weight = data
            .weights
            .iter()
            .rev()
            .find(|entry| entry.local_date() == date)
            .map_or(0.0, |entry| entry.weight);
        series.push(weekday_label(date), weight);
    }
    series
}

/// Latest weight per calendar month for the 6 months ending with the current one.
pub fn monthly_weight_at(data: &HealthData, today: NaiveDate) -> Series<f64> {
    let mut series = Series::with_capacity(MONTH_COUNT as usize);
    let current = today.year() * 12 + today.month0() as i32;

    for offset in (0..MONTH_COUNT).rev() {
        let index = current - offset;
        let (year, month0) = (index.div_euclid(12), index.rem_euclid(12) as u32);
        let weight = data
            .weights
            .iter()
            .rev()
            .find(|entry| {
                let date = entry.local_date();
                date.year() == year && date.month0() == month0
            })
            .map_or(0.0, |entry| entry.weight);
        series.push(MONTH_LABELS[month0 as usize].to_string(), weight);
    }
    series
}

pub fn weekly_steps_at(data: &HealthData, today: NaiveDate) -> Series<u64> {
    let mut series = Series::with_capacity(WEEK_DAYS as usize);
    for date in last_days(today, WEEK_DAYS) {
        series.push(weekday_label(date), steps_between(data, date, date));
    }
    series
}

/// Step totals for four contiguous 7-day windows, the newest ending on `today`.
pub fn monthly_steps_at(data: &HealthData, today: NaiveDate) -> Series<u64> {
    let mut series = Series::with_capacity(STEP_WEEK_COUNT as usize);
    for offset in (0..STEP_WEEK_COUNT).rev() {
        let end = today - Duration::days(offset * WEEK_DAYS);
        let start = end - Duration::days(WEEK_DAYS - 1);
        series.push(
            format!("Week {}", start.day()),
            steps_between(data, start, end),
        );
    }
    series
}

pub fn today_summary_at(data: &HealthData, today: NaiveDate) -> TodaySummary {
    let meal_count = data
        .meals
        .iter()
        .filter(|meal| meal.local_date() == today)
        .count();
    let water = today_water_at(data, today);
    let steps = today_steps_at(data, today);
    let water_progress = progress(water, data.water_goal);

    TodaySummary {
        date: today.to_string(),
        meal_count,
        calories: today_calories_at(data, today),
        water,
        water_goal: data.water_goal,
        water_progress,
        water_goal_reached: water_progress >= 100.0,
        steps,
        step_goal: DAILY_STEP_GOAL,
        step_progress: progress(steps as f64, DAILY_STEP_GOAL as f64),
        latest_weight: latest_weight(data),
    }
}

/// Percent of `target` reached; 0 when there is no positive target.
fn progress(value: f64, target: f64) -> f64 {
    if target > 0.0 { value / target * 100.0 } else { 0.0 }
}

/// Sum of steps whose local calendar day lies in `start..=end`.
fn steps_between(data: &HealthData, start: NaiveDate, end: NaiveDate) -> u64 {
    data.steps
        .iter()
        .filter(|entry| {
            let date = entry.local_date();
            start <= date && date <= end
        })
        .fold(0u64, |sum, entry| sum.saturating_add(entry.steps))
}

/// `count` consecutive days ending on `today`, oldest first.
fn last_days(today: NaiveDate, count: i64) -> impl Iterator<Item = NaiveDate> {
    (0..count).rev().map(move |offset| today - Duration::days(offset))
}

fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StepsRecord, WaterRecord, WeightRecord};
    use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};
    use uuid::Uuid;

    fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        Local
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn weight(date: NaiveDate, hour: u32, value: f64) -> WeightRecord {
        WeightRecord {
            id: Uuid::new_v4(),
            weight: value,
            timestamp: at(date, hour, 0),
        }
    }

    fn steps(date: NaiveDate, count: u64) -> StepsRecord {
        StepsRecord {
            id: Uuid::new_v4(),
            steps: count,
            timestamp: at(date, 12, 0),
        }
    }

    fn water(date: NaiveDate, hour: u32, minute: u32, amount: f64) -> WaterRecord {
        WaterRecord {
            id: Uuid::new_v4(),
            amount,
            timestamp: at(date, hour, minute),
        }
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn today_water_sums_only_today() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        data.water.push(water(today, 8, 0, 250.0));
        data.water.push(water(today, 13, 30, 500.0));
        data.water.push(water(today - Duration::days(1), 18, 0, 1000.0));

        assert_eq!(today_water_at(&data, today), 750.0);
        assert_eq!(today_water_at(&HealthData::default(), today), 0.0);
    }

    #[test]
    fn midnight_splits_calendar_days() {
        let today = day(2026, 3, 10);
        let yesterday = today - Duration::days(1);
        let mut data = HealthData::default();
        data.water.push(water(yesterday, 23, 59, 300.0));
        data.water.push(water(today, 0, 1, 200.0));

        assert_eq!(today_water_at(&data, today), 200.0);
        assert_eq!(today_water_at(&data, yesterday), 300.0);
    }

    #[test]
    fn latest_weight_follows_append_order() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        assert_eq!(latest_weight(&data), None);

        data.weights.push(weight(today, 7, 80.5));
        data.weights.push(weight(today, 21, 80.1));
        assert_eq!(latest_weight(&data), Some(80.1));
    }

    #[test]
    fn weekly_weight_has_seven_labels_ending_today() {
        let today = day(2026, 3, 10);
        let series = weekly_weight_at(&HealthData::default(), today);

        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.data, vec![0.0; 7]);
        assert_eq!(series.labels.last().map(String::as_str), Some("Tue"));
        assert_eq!(series.labels.first().map(String::as_str), Some("Wed"));
    }

    #[test]
    fn weekly_weight_does_not_carry_forward() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        data.weights.push(weight(today - Duration::days(3), 9, 80.0));
        data.weights.push(weight(today - Duration::days(1), 9, 78.0));

        let series = weekly_weight_at(&data, today);
        assert_eq!(series.data, vec![0.0, 0.0, 0.0, 80.0, 0.0, 78.0, 0.0]);
    }

    #[test]
    fn weekly_weight_takes_last_entry_of_the_day() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        data.weights.push(weight(today, 7, 81.0));
        data.weights.push(weight(today, 20, 80.2));

        let series = weekly_weight_at(&data, today);
        assert_eq!(series.data[6], 80.2);
    }

    #[test]
    fn monthly_weight_spans_six_months_across_year_boundary() {
        let today = day(2026, 2, 15);
        let mut data = HealthData::default();
        data.weights.push(weight(day(2025, 9, 3), 9, 84.0));
        data.weights.push(weight(day(2025, 12, 1), 9, 82.0));
        data.weights.push(weight(day(2025, 12, 28), 9, 81.5));
        data.weights.push(weight(day(2026, 2, 2), 9, 80.0));

        let series = monthly_weight_at(&data, today);
        assert_eq!(series.labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert_eq!(series.data, vec![84.0, 0.0, 0.0, 81.5, 0.0, 80.0]);
    }

    #[test]
    fn monthly_weight_on_month_end_keeps_distinct_months() {
        let today = day(2026, 3, 31);
        let series = monthly_weight_at(&HealthData::default(), today);
        assert_eq!(series.labels, vec!["Oct", "Nov", "Dec", "Jan", "Feb", "Mar"]);
    }

    #[test]
    fn weekly_steps_sums_each_day() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        data.steps.push(steps(today, 4000));
        data.steps.push(steps(today, 2500));
        data.steps.push(steps(today - Duration::days(6), 9000));
        data.steps.push(steps(today - Duration::days(7), 1234));

        let series = weekly_steps_at(&data, today);
        assert_eq!(series.data, vec![9000, 0, 0, 0, 0, 0, 6500]);
        assert_eq!(today_steps_at(&data, today), 6500);
    }

    #[test]
    fn monthly_steps_windows_are_contiguous_and_end_today() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        let mut total = 0u64;
        let mut older = 0u64;
        for offset in 0..40 {
            let count = 1000 + offset as u64;
            data.steps.push(steps(today - Duration::days(offset), count));
            total += count;
            if offset >= 28 {
                older += count;
            }
        }

        let series = monthly_steps_at(&data, today);
        assert_eq!(series.labels, vec!["Week 11", "Week 18", "Week 25", "Week 4"]);
        assert_eq!(series.data.len(), 4);
        assert_eq!(series.data.iter().sum::<u64>() + older, total);
        // newest window covers today and the six days before it
        assert_eq!(series.data[3], (0..7).map(|offset| 1000 + offset).sum::<u64>());
    }

    #[test]
    fn summary_reports_progress_against_goals() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        data.water_goal = 2000.0;
        data.water.push(water(today, 9, 0, 1500.0));
        data.water.push(water(today, 15, 0, 500.0));
        data.steps.push(steps(today, 5000));
        data.meals.push(MealRecord {
            id: Uuid::new_v4(),
            meal_type: "Lunch".to_string(),
            calories: 600.0,
            description: "Grilled chicken salad".to_string(),
            timestamp: at(today, 13, 0),
        });

        let summary = today_summary_at(&data, today);
        assert_eq!(summary.date, "2026-03-10");
        assert_eq!(summary.meal_count, 1);
        assert_eq!(summary.calories, 600.0);
        assert_eq!(summary.water, 2000.0);
        assert_eq!(summary.water_progress, 100.0);
        assert!(summary.water_goal_reached);
        assert_eq!(summary.step_progress, 50.0);
        assert_eq!(summary.latest_weight, None);
    }

    #[test]
    fn zero_goal_reports_no_progress() {
        let today = day(2026, 3, 10);
        let mut data = HealthData::default();
        data.water_goal = 0.0;
        data.water.push(water(today, 9, 0, 300.0));

        let summary = today_summary_at(&data, today);
        assert_eq!(summary.water_progress, 0.0);
        assert!(!summary.water_goal_reached);
    }
}
