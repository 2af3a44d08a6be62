use chrono::{Days, NaiveDate};
use log::info;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{
    ConsumedTotals, ConsumptionEntry, DiaryRow, FoodItem, NewFood, UserProfile,
};

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// How a food query was matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodMatch<'a> {
    /// Id, barcode, or case-insensitive name.
    Exact(&'a FoodItem),
    /// Closest name by similarity; callers should confirm.
    Fuzzy(&'a FoodItem),
}

impl<'a> FoodMatch<'a> {
    pub fn food(&self) -> &'a FoodItem {
        match self {
            FoodMatch::Exact(f) | FoodMatch::Fuzzy(f) => f,
        }
    }
}

/// Food catalog, consumption log and user profile.
///
/// Foods keep insertion order so catalog snapshots are deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionStore {
    #[serde(default)]
    foods: Vec<FoodItem>,

    #[serde(default)]
    consumption: Vec<ConsumptionEntry>,

    #[serde(default)]
    profile: Option<UserProfile>,

    #[serde(default)]
    next_food_id: u64,

    #[serde(default)]
    next_entry_id: u64,
}

impl NutritionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_food_id(&mut self) -> u64 {
        let floor = self.foods.iter().map(|f| f.id).max().unwrap_or(0);
        self.next_food_id = self.next_food_id.max(floor) + 1;
        self.next_food_id
    }

    fn allocate_entry_id(&mut self) -> u64 {
        let floor = self.consumption.iter().map(|e| e.id).max().unwrap_or(0);
        self.next_entry_id = self.next_entry_id.max(floor) + 1;
        self.next_entry_id
    }

    /// Insert a food, or update the existing one with the same barcode.
    ///
    /// Returns the food's id.
    pub fn upsert_food(&mut self, new_food: NewFood) -> Result<u64> {
        if new_food.name.trim().is_empty() {
            return Err(NutriError::InvalidInput(
                "food name must not be empty".to_string(),
            ));
        }

        if let Some(barcode) = new_food.barcode.as_deref() {
            if let Some(existing) = self
                .foods
                .iter_mut()
                .find(|f| f.barcode.as_deref() == Some(barcode))
            {
                let id = existing.id;
                *existing = new_food.into_item(id);
                info!("Updated food #{} ({})", id, existing.name);
                return Ok(id);
            }
        }

        let id = self.allocate_food_id();
        let item = new_food.into_item(id);
        info!("Added food #{} ({})", id, item.name);
        self.foods.push(item);
        Ok(id)
    }

    pub fn food(&self, id: u64) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn food_by_barcode(&self, barcode: &str) -> Option<&FoodItem> {
        self.foods
            .iter()
            .find(|f| f.barcode.as_deref() == Some(barcode))
    }

    /// Find a food by id, barcode, exact name, or closest name.
    pub fn resolve_food(&self, query: &str) -> Option<FoodMatch<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Ok(id) = query.parse::<u64>() {
            if let Some(food) = self.food(id) {
                return Some(FoodMatch::Exact(food));
            }
        }

        if let Some(food) = self.food_by_barcode(query) {
            return Some(FoodMatch::Exact(food));
        }

        let lowered = query.to_lowercase();
        if let Some(food) = self.foods.iter().find(|f| f.name.to_lowercase() == lowered) {
            return Some(FoodMatch::Exact(food));
        }

        self.foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &lowered)))
            .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
            .map(|(f, _)| FoodMatch::Fuzzy(f))
    }

    /// Read-only snapshot of every food, in insertion order.
    pub fn catalog(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Remove a food together with its consumption entries.
    pub fn remove_food(&mut self, id: u64) -> Result<FoodItem> {
        let idx = self
            .foods
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| NutriError::FoodNotFound(id.to_string()))?;

        let removed = self.foods.remove(idx);
        self.consumption.retain(|e| e.food_id != id);
        info!("Removed food #{} ({})", id, removed.name);
        Ok(removed)
    }

    /// Log a portion of a catalog food. Returns the entry id.
    pub fn add_consumption(&mut self, food_id: u64, grams: f64, date: NaiveDate) -> Result<u64> {
        if self.food(food_id).is_none() {
            return Err(NutriError::FoodNotFound(food_id.to_string()));
        }
        if !(grams.is_finite() && grams > 0.0) {
            return Err(NutriError::InvalidInput(format!(
                "grams must be positive, got {}",
                grams
            )));
        }

        let id = self.allocate_entry_id();
        self.consumption.push(ConsumptionEntry {
            id,
            food_id,
            date,
            grams,
        });
        Ok(id)
    }

    fn diary_row(&self, entry: &ConsumptionEntry) -> Option<DiaryRow> {
        let food = self.food(entry.food_id)?;
        let portion = food.nutrients_for_grams(entry.grams);
        Some(DiaryRow {
            id: entry.id,
            name: food.name.clone(),
            barcode: food.barcode.clone(),
            date: entry.date,
            grams: entry.grams,
            calories: round1(portion.calories),
            proteins: round1(portion.proteins),
            fats: round1(portion.fats),
            carbs: round1(portion.carbs),
        })
    }

    /// Diary rows from `today - days` onward, newest first.
    pub fn food_diary(&self, today: NaiveDate, days: u64) -> Vec<DiaryRow> {
        let since = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);

        let mut rows: Vec<DiaryRow> = self
            .consumption
            .iter()
            .filter(|e| e.date >= since)
            .filter_map(|e| self.diary_row(e))
            .collect();

        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        rows
    }

    /// Sum of the diary rows logged on `date`.
    pub fn totals_for(&self, date: NaiveDate) -> ConsumedTotals {
        self.consumption
            .iter()
            .filter(|e| e.date == date)
            .filter_map(|e| self.diary_row(e))
            .fold(ConsumedTotals::default(), |mut acc, row| {
                acc.total_calories += row.calories;
                acc.total_proteins += row.proteins;
                acc.total_fats += row.fats;
                acc.total_carbs += row.carbs;
                acc
            })
    }

    /// Replace the saved profile.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<()> {
        profile.validate()?;
        self.profile = Some(profile);
        Ok(())
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn clear_profile(&mut self) {
        self.profile = None;
    }

    /// Drop every food, entry and the profile.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn food_count(&self) -> usize {
        self.foods.len()
    }

    pub fn entry_count(&self) -> usize {
        self.consumption.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty() && self.consumption.is_empty() && self.profile.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn new_food(name: &str, barcode: Option<&str>) -> NewFood {
        NewFood {
            name: name.to_string(),
            barcode: barcode.map(str::to_string),
            calories: Some(100.0),
            proteins: Some(10.0),
            fats: Some(5.0),
            carbs: Some(20.0),
        }
    }

    fn sample_store() -> NutritionStore {
        let mut store = NutritionStore::new();
        store.upsert_food(new_food("Apple", None)).unwrap();
        store.upsert_food(new_food("Bread", Some("4600000000001"))).unwrap();
        store
    }

    #[test]
    fn test_upsert_by_barcode_keeps_id() {
        let mut store = sample_store();
        let mut updated = new_food("Rye Bread", Some("4600000000001"));
        updated.calories = Some(250.0);

        let id = store.upsert_food(updated).unwrap();
        assert_eq!(id, 2);
        assert_eq!(store.food_count(), 2);
        let bread = store.food(2).unwrap();
        assert_eq!(bread.name, "Rye Bread");
        assert_eq!(bread.calories, Some(250.0));
    }

    #[test]
    fn test_foods_without_barcode_never_merge() {
        let mut store = sample_store();
        let id = store.upsert_food(new_food("Apple", None)).unwrap();
        assert_eq!(id, 3);
        assert_eq!(store.food_count(), 3);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut store = NutritionStore::new();
        assert!(store.upsert_food(new_food("  ", None)).is_err());
    }

    #[test]
    fn test_resolve_food() {
        let store = sample_store();

        assert_eq!(store.resolve_food("1"), Some(FoodMatch::Exact(store.food(1).unwrap())));
        assert_eq!(
            store.resolve_food("4600000000001").map(|m| m.food().id),
            Some(2)
        );
        assert_eq!(store.resolve_food("APPLE").map(|m| m.food().id), Some(1));
        assert!(matches!(store.resolve_food("Bred"), Some(FoodMatch::Fuzzy(f)) if f.id == 2));
        assert!(store.resolve_food("Zucchini").is_none());
        assert!(store.resolve_food("").is_none());
    }

    #[test]
    fn test_add_consumption_validates() {
        let mut store = sample_store();
        assert!(matches!(
            store.add_consumption(99, 100.0, date(1)),
            Err(NutriError::FoodNotFound(_))
        ));
        assert!(store.add_consumption(1, 0.0, date(1)).is_err());
        assert!(store.add_consumption(1, f64::NAN, date(1)).is_err());
        assert_eq!(store.add_consumption(1, 150.0, date(1)).unwrap(), 1);
    }

    #[test]
    fn test_diary_order_and_window() {
        let mut store = sample_store();
        store.add_consumption(1, 100.0, date(1)).unwrap();
        store.add_consumption(2, 50.0, date(10)).unwrap();
        store.add_consumption(1, 200.0, date(10)).unwrap();

        let rows = store.food_diary(date(10), 5);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(rows[0].calories, 200.0);

        assert_eq!(store.food_diary(date(10), 30).len(), 3);
    }

    #[test]
    fn test_totals_for_date() {
        let mut store = sample_store();
        store.add_consumption(1, 150.0, date(2)).unwrap();
        store.add_consumption(2, 50.0, date(2)).unwrap();
        store.add_consumption(2, 500.0, date(3)).unwrap();

        let totals = store.totals_for(date(2));
        assert_eq!(totals, ConsumedTotals::new(200.0, 20.0, 10.0, 40.0));
        assert_eq!(store.totals_for(date(4)), ConsumedTotals::default());
    }

    #[test]
    fn test_remove_food_cascades() {
        let mut store = sample_store();
        store.add_consumption(1, 100.0, date(1)).unwrap();
        store.add_consumption(2, 100.0, date(1)).unwrap();

        store.remove_food(1).unwrap();
        assert_eq!(store.entry_count(), 1);
        assert!(store.food(1).is_none());
        assert!(store.remove_food(1).is_err());
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = sample_store();
        store.remove_food(2).unwrap();
        let id = store.upsert_food(new_food("Cheese", None)).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn test_profile_lifecycle() {
        let mut store = sample_store();
        assert!(store.profile().is_none());

        let profile = UserProfile {
            weight: 70.0,
            height: 175.0,
            age: 30,
            gender: Gender::Female,
            activity_level: 1.375,
        };
        store.set_profile(profile.clone()).unwrap();
        assert_eq!(store.profile(), Some(&profile));

        let mut bad = profile;
        bad.activity_level = 3.0;
        assert!(store.set_profile(bad).is_err());

        store.clear_profile();
        assert!(store.profile().is_none());
    }

    #[test]
    fn test_reset() {
        let mut store = sample_store();
        store.add_consumption(1, 100.0, date(1)).unwrap();
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.upsert_food(new_food("Apple", None)).unwrap(), 1);
    }
}
