//! Pure reductions from entry logs to progress metrics. Nothing here does
//! I/O, mutates its inputs, or panics on odd numbers; handlers decide which
//! date the caller cares about and pass it in explicitly.

use crate::models::{
    Completion, DashboardSummary, FoodEntry, HydrationEntry, HydrationSummary, NutritionGoals,
    NutritionSummary, NutritionTotals, Supplement, SupplementGroup,
};
use chrono::NaiveDate;

/// Element-wise nutrient sums across every entry, regardless of meal.
/// An empty slice yields all-zero totals.
pub fn sum_nutrition(entries: &[FoodEntry]) -> NutritionTotals {
    entries.iter().fold(NutritionTotals::default(), |acc, entry| {
        NutritionTotals {
            calories: acc.calories.saturating_add(u64::from(entry.calories)),
            protein: acc.protein.saturating_add(u64::from(entry.protein)),
            carbs: acc.carbs.saturating_add(u64::from(entry.carbs)),
            fat: acc.fat.saturating_add(u64::from(entry.fat)),
        }
    })
}

/// Returns `current / goal * 100`. A goal that is zero, negative, or
/// non-finite has no usable denominator, so the result is a defined `0.0`
/// rather than NaN or infinity.
pub fn progress_percent(current: f64, goal: f64) -> f64 {
    if !goal.is_finite() || goal <= 0.0 {
        return 0.0;
    }
    current / goal * 100.0
}

/// Groups items into buckets keyed by `key_fn`, preserving first-seen key
/// order. An item whose key set is empty lands in the `fallback` bucket; an
/// item with several keys appears in every one of its buckets (fan-out).
pub fn group_by_keys<T: Clone>(
    items: &[T],
    key_fn: impl Fn(&T) -> Vec<String>,
    fallback: &str,
) -> Vec<(String, Vec<T>)> {
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();

    for item in items {
        let mut keys = key_fn(item);
        keys.retain(|key| !key.is_empty());
        if keys.is_empty() {
            keys.push(fallback.to_string());
        }

        for key in keys {
            match groups.iter_mut().find(|(name, _)| *name == key) {
                Some((_, bucket)) => bucket.push(item.clone()),
                None => groups.push((key, vec![item.clone()])),
            }
        }
    }

    groups
}

/// Adherence over a set of countable items. `rate` is zero for an empty
/// set, and an empty set is never complete.
pub fn completion(taken: usize, total: usize) -> Completion {
    let rate = if total > 0 {
        taken as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    Completion {
        taken,
        total,
        rate,
        is_complete: total > 0 && taken == total,
    }
}

/// Unrounded sum of intake volumes. Formatting is a presentation concern.
pub fn hydration_total(entries: &[HydrationEntry]) -> f64 {
    entries.iter().map(|entry| entry.amount).sum()
}

/// Hydration entries logged on the given calendar date (UTC).
pub fn entries_on(entries: &[HydrationEntry], date: NaiveDate) -> Vec<HydrationEntry> {
    entries
        .iter()
        .filter(|entry| entry.time.date_naive() == date)
        .cloned()
        .collect()
}

/// Food entries logged on the given calendar date (UTC).
pub fn foods_on(entries: &[FoodEntry], date: NaiveDate) -> Vec<FoodEntry> {
    entries
        .iter()
        .filter(|entry| entry.logged_at.date_naive() == date)
        .cloned()
        .collect()
}

// Display order for supplement time slots; anything else sorts last.
const TIME_ORDER: [&str; 4] = ["morning", "afternoon", "evening", "anytime"];

fn time_rank(slot: &str) -> usize {
    TIME_ORDER
        .iter()
        .position(|name| *name == slot)
        .unwrap_or(TIME_ORDER.len())
}

/// Supplements fanned out into time-of-day buckets. A supplement with no
/// time tags shows up under "anytime"; one tagged morning and evening shows
/// up in both buckets while still counting once toward completion.
pub fn supplements_by_time(supplements: &[Supplement]) -> Vec<SupplementGroup> {
    let mut groups = group_by_keys(
        supplements,
        |supplement| {
            supplement
                .time_of_day
                .iter()
                .map(|slot| slot.as_str().to_string())
                .collect()
        },
        "anytime",
    );
    groups.sort_by_key(|(slot, _)| time_rank(slot));

    groups
        .into_iter()
        .map(|(time_of_day, supplements)| SupplementGroup {
            time_of_day,
            supplements,
        })
        .collect()
}

/// Composes the daily overview for one user on one date. Foods and
/// hydration entries are scoped to `date`; supplements carry day-level
/// state already and are counted as-is.
pub fn summary(
    date: NaiveDate,
    foods: &[FoodEntry],
    supplements: &[Supplement],
    hydration: &[HydrationEntry],
    goals: &NutritionGoals,
    hydration_goal: f64,
) -> DashboardSummary {
    let todays_foods = foods_on(foods, date);
    let totals = sum_nutrition(&todays_foods);

    let taken = supplements.iter().filter(|s| s.taken).count();

    let todays_hydration = entries_on(hydration, date);
    let intake = hydration_total(&todays_hydration);

    DashboardSummary {
        date: date.to_string(),
        nutrition: NutritionSummary {
            totals,
            goals: *goals,
            calorie_percent: progress_percent(totals.calories as f64, f64::from(goals.calories)),
            protein_percent: progress_percent(totals.protein as f64, f64::from(goals.protein)),
            carb_percent: progress_percent(totals.carbs as f64, f64::from(goals.carbs)),
            fat_percent: progress_percent(totals.fat as f64, f64::from(goals.fat)),
        },
        supplements: completion(taken, supplements.len()),
        supplement_groups: supplements_by_time(supplements),
        hydration: HydrationSummary {
            total: intake,
            goal: hydration_goal,
            percent: progress_percent(intake, hydration_goal),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrinkType, Frequency, Meal, TimeOfDay};
    use chrono::{TimeZone, Utc};

    fn food(name: &str, calories: u32, protein: u32, carbs: u32, fat: u32) -> FoodEntry {
        FoodEntry {
            id: name.to_string(),
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            meal: Meal::Breakfast,
            logged_at: Utc.with_ymd_and_hms(2026, 8, 27, 8, 0, 0).unwrap(),
        }
    }

    fn supplement(name: &str, times: Vec<TimeOfDay>, taken: bool) -> Supplement {
        Supplement {
            id: name.to_string(),
            name: name.to_string(),
            dosage: "1 capsule".to_string(),
            frequency: Frequency::Daily,
            time_of_day: times,
            taken,
            last_taken: None,
        }
    }

    fn hydration(id: &str, amount: f64) -> HydrationEntry {
        HydrationEntry {
            id: id.to_string(),
            amount,
            time: Utc.with_ymd_and_hms(2026, 8, 27, 9, 30, 0).unwrap(),
            drink: DrinkType::Water,
        }
    }

    #[test]
    fn sum_nutrition_empty_is_all_zero() {
        let totals = sum_nutrition(&[]);
        assert_eq!(totals, NutritionTotals::default());
    }

    #[test]
    fn sum_nutrition_is_element_wise() {
        let entries = vec![food("oatmeal", 300, 8, 54, 6), food("salad", 450, 35, 15, 28)];
        let totals = sum_nutrition(&entries);
        assert_eq!(totals.calories, 750);
        assert_eq!(totals.protein, 43);
        assert_eq!(totals.carbs, 69);
        assert_eq!(totals.fat, 34);
    }

    #[test]
    fn progress_percent_clamps_bad_goals_to_zero() {
        assert_eq!(progress_percent(150.0, 0.0), 0.0);
        assert_eq!(progress_percent(150.0, -5.0), 0.0);
        assert_eq!(progress_percent(150.0, f64::NAN), 0.0);
    }

    #[test]
    fn progress_percent_against_calorie_goal() {
        // 300 + 450 against a 2000 kcal goal.
        let totals = sum_nutrition(&[food("a", 300, 0, 0, 0), food("b", 450, 0, 0, 0)]);
        assert_eq!(progress_percent(totals.calories as f64, 2000.0), 37.5);
    }

    #[test]
    fn grouping_uses_fallback_for_untagged_items() {
        let supplements = vec![supplement("magnesium", vec![], false)];
        let groups = supplements_by_time(&supplements);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].time_of_day, "anytime");
        assert_eq!(groups[0].supplements.len(), 1);
    }

    #[test]
    fn grouping_fans_multi_tagged_items_into_each_bucket() {
        let supplements = vec![supplement(
            "omega-3",
            vec![TimeOfDay::Morning, TimeOfDay::Evening],
            false,
        )];
        let groups = supplements_by_time(&supplements);
        let slots: Vec<&str> = groups.iter().map(|g| g.time_of_day.as_str()).collect();
        assert_eq!(slots, vec!["morning", "evening"]);
        assert!(groups.iter().all(|g| g.supplements.len() == 1));
    }

    #[test]
    fn grouping_preserves_first_seen_key_order() {
        let entries = vec![
            food("dinner-roll", 100, 0, 0, 0),
            food("toast", 120, 0, 0, 0),
        ];
        let mut entries = entries;
        entries[0].meal = Meal::Dinner;
        entries[1].meal = Meal::Breakfast;

        let groups = group_by_keys(&entries, |e| vec![e.meal.as_str().to_string()], "other");
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["dinner", "breakfast"]);
    }

    #[test]
    fn completion_of_nothing_is_incomplete_zero() {
        let result = completion(0, 0);
        assert_eq!(result.rate, 0.0);
        assert!(!result.is_complete);
    }

    #[test]
    fn completion_of_everything_is_complete() {
        let result = completion(3, 3);
        assert_eq!(result.rate, 100.0);
        assert!(result.is_complete);
    }

    #[test]
    fn fanned_out_supplement_still_counts_once() {
        let supplements = vec![
            supplement("omega-3", vec![TimeOfDay::Morning, TimeOfDay::Evening], true),
            supplement("vitamin-d", vec![TimeOfDay::Morning], false),
        ];
        let taken = supplements.iter().filter(|s| s.taken).count();
        let result = completion(taken, supplements.len());
        assert_eq!(result.taken, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.rate, 50.0);
    }

    #[test]
    fn hydration_total_is_unrounded_sum() {
        let entries = vec![hydration("a", 0.5), hydration("b", 0.3)];
        let total = hydration_total(&entries);
        assert!((total - 0.8).abs() < 1e-9);
        assert!((progress_percent(total, 2.5) - 32.0).abs() < 1e-9);
    }

    #[test]
    fn entries_on_scopes_to_the_given_date() {
        let mut yesterday = hydration("old", 1.0);
        yesterday.time = Utc.with_ymd_and_hms(2026, 8, 26, 22, 0, 0).unwrap();
        let entries = vec![yesterday, hydration("fresh", 0.5)];

        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let today = entries_on(&entries, date);
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].id, "fresh");
    }

    #[test]
    fn summary_composes_all_three_trackers() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let foods = vec![food("oatmeal", 300, 8, 54, 6), food("salad", 450, 35, 15, 28)];
        let supplements = vec![
            supplement("vitamin-d", vec![TimeOfDay::Morning], true),
            supplement("magnesium", vec![], false),
        ];
        let water = vec![hydration("a", 0.5), hydration("b", 0.3)];

        let report = summary(
            date,
            &foods,
            &supplements,
            &water,
            &NutritionGoals::default(),
            2.5,
        );

        assert_eq!(report.nutrition.totals.calories, 750);
        assert_eq!(report.nutrition.calorie_percent, 37.5);
        assert_eq!(report.supplements.taken, 1);
        assert_eq!(report.supplements.total, 2);
        assert!(!report.supplements.is_complete);
        assert!((report.hydration.percent - 32.0).abs() < 1e-9);
        let slots: Vec<&str> = report
            .supplement_groups
            .iter()
            .map(|g| g.time_of_day.as_str())
            .collect();
        assert_eq!(slots, vec!["morning", "anytime"]);
    }
}
