//! Mutation contract shared by the three entry collections: add assigns a
//! fresh id and appends, remove is an idempotent filter, and supplement
//! updates stamp `last_taken` on the false-to-true transition.

use crate::models::{
    FoodEntry, HydrationEntry, HydrationLog, NewFood, NewHydration, NewSupplement, Supplement,
    SupplementUpdate,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn add_food(entries: &mut Vec<FoodEntry>, new: NewFood, now: DateTime<Utc>) -> FoodEntry {
    let entry = FoodEntry {
        id: new_id(),
        name: new.name,
        calories: new.calories,
        protein: new.protein,
        carbs: new.carbs,
        fat: new.fat,
        meal: new.meal,
        logged_at: now,
    };
    entries.push(entry.clone());
    entry
}

pub fn add_supplement(supplements: &mut Vec<Supplement>, new: NewSupplement) -> Supplement {
    let supplement = Supplement {
        id: new_id(),
        name: new.name,
        dosage: new.dosage,
        frequency: new.frequency,
        time_of_day: new.time_of_day,
        taken: false,
        last_taken: None,
    };
    supplements.push(supplement.clone());
    supplement
}

pub fn add_hydration(
    log: &mut HydrationLog,
    new: NewHydration,
    now: DateTime<Utc>,
) -> HydrationEntry {
    let entry = HydrationEntry {
        id: new_id(),
        amount: new.amount,
        time: now,
        drink: new.drink,
    };
    log.entries.push(entry.clone());
    entry
}

/// Removes the record with the given id, if present. Removing an absent id
/// leaves the collection unchanged; callers report success either way.
pub fn remove_by_id<T>(items: &mut Vec<T>, id: &str, id_of: impl Fn(&T) -> &str) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

/// Applies a partial update to the supplement with the given id. Flipping
/// `taken` to true stamps `last_taken` with `now`; flipping it to false
/// keeps the previous stamp. Updating an absent id is a no-op.
pub fn update_supplement(
    supplements: &mut [Supplement],
    id: &str,
    update: SupplementUpdate,
    now: DateTime<Utc>,
) -> Option<Supplement> {
    let supplement = supplements.iter_mut().find(|s| s.id == id)?;

    if let Some(name) = update.name {
        supplement.name = name;
    }
    if let Some(dosage) = update.dosage {
        supplement.dosage = dosage;
    }
    if let Some(frequency) = update.frequency {
        supplement.frequency = frequency;
    }
    if let Some(time_of_day) = update.time_of_day {
        supplement.time_of_day = time_of_day;
    }
    if let Some(taken) = update.taken {
        if taken && !supplement.taken {
            supplement.last_taken = Some(now);
        }
        supplement.taken = taken;
    }

    Some(supplement.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DrinkType, Frequency, Meal, TimeOfDay};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap()
    }

    #[test]
    fn add_food_assigns_unique_ids() {
        let mut entries = Vec::new();
        let first = add_food(
            &mut entries,
            NewFood {
                name: "oatmeal".to_string(),
                calories: 300,
                protein: 8,
                carbs: 54,
                fat: 6,
                meal: Meal::Breakfast,
            },
            now(),
        );
        let second = add_food(
            &mut entries,
            NewFood {
                name: "salad".to_string(),
                calories: 450,
                protein: 35,
                carbs: 15,
                fat: 28,
                meal: Meal::Lunch,
            },
            now(),
        );

        assert_eq!(entries.len(), 2);
        assert_ne!(first.id, second.id);
        assert_eq!(entries[0].id, first.id);
    }

    #[test]
    fn add_supplement_starts_untaken() {
        let mut supplements = Vec::new();
        let created = add_supplement(
            &mut supplements,
            NewSupplement {
                name: "vitamin-d".to_string(),
                dosage: "2000 IU".to_string(),
                frequency: Frequency::Daily,
                time_of_day: vec![TimeOfDay::Morning],
            },
        );
        assert!(!created.taken);
        assert!(created.last_taken.is_none());
    }

    #[test]
    fn remove_absent_id_is_a_no_op() {
        let mut log = HydrationLog::default();
        add_hydration(
            &mut log,
            NewHydration {
                amount: 0.5,
                drink: DrinkType::Water,
            },
            now(),
        );

        let removed = remove_by_id(&mut log.entries, "does-not-exist", |e| &e.id);
        assert!(!removed);
        assert_eq!(log.entries.len(), 1);
    }

    #[test]
    fn remove_existing_id_drops_exactly_that_record() {
        let mut entries = Vec::new();
        let keep = add_food(
            &mut entries,
            NewFood {
                name: "keep".to_string(),
                calories: 100,
                protein: 0,
                carbs: 0,
                fat: 0,
                meal: Meal::Snack,
            },
            now(),
        );
        let drop = add_food(
            &mut entries,
            NewFood {
                name: "drop".to_string(),
                calories: 200,
                protein: 0,
                carbs: 0,
                fat: 0,
                meal: Meal::Snack,
            },
            now(),
        );

        assert!(remove_by_id(&mut entries, &drop.id, |e| &e.id));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, keep.id);
    }

    #[test]
    fn toggling_taken_stamps_last_taken_once() {
        let mut supplements = Vec::new();
        let created = add_supplement(
            &mut supplements,
            NewSupplement {
                name: "omega-3".to_string(),
                dosage: "1000mg".to_string(),
                frequency: Frequency::Daily,
                time_of_day: vec![],
            },
        );

        let stamp = now();
        let updated = update_supplement(
            &mut supplements,
            &created.id,
            SupplementUpdate {
                taken: Some(true),
                ..SupplementUpdate::default()
            },
            stamp,
        )
        .expect("supplement exists");
        assert!(updated.taken);
        assert_eq!(updated.last_taken, Some(stamp));

        // Un-toggling keeps the history.
        let later = Utc.with_ymd_and_hms(2026, 8, 27, 18, 0, 0).unwrap();
        let reverted = update_supplement(
            &mut supplements,
            &created.id,
            SupplementUpdate {
                taken: Some(false),
                ..SupplementUpdate::default()
            },
            later,
        )
        .expect("supplement exists");
        assert!(!reverted.taken);
        assert_eq!(reverted.last_taken, Some(stamp));
    }

    #[test]
    fn re_taking_refreshes_the_stamp() {
        let mut supplements = Vec::new();
        let created = add_supplement(
            &mut supplements,
            NewSupplement {
                name: "magnesium".to_string(),
                dosage: "400mg".to_string(),
                frequency: Frequency::Daily,
                time_of_day: vec![],
            },
        );

        let first = now();
        update_supplement(
            &mut supplements,
            &created.id,
            SupplementUpdate {
                taken: Some(true),
                ..SupplementUpdate::default()
            },
            first,
        );
        update_supplement(
            &mut supplements,
            &created.id,
            SupplementUpdate {
                taken: Some(false),
                ..SupplementUpdate::default()
            },
            first,
        );

        let second = Utc.with_ymd_and_hms(2026, 8, 28, 9, 0, 0).unwrap();
        let updated = update_supplement(
            &mut supplements,
            &created.id,
            SupplementUpdate {
                taken: Some(true),
                ..SupplementUpdate::default()
            },
            second,
        )
        .expect("supplement exists");
        assert_eq!(updated.last_taken, Some(second));
    }

    #[test]
    fn updating_absent_supplement_changes_nothing() {
        let mut supplements: Vec<Supplement> = Vec::new();
        let result = update_supplement(
            &mut supplements,
            "missing",
            SupplementUpdate {
                taken: Some(true),
                ..SupplementUpdate::default()
            },
            now(),
        );
        assert!(result.is_none());
    }
}
