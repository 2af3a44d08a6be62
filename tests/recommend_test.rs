use assert_float_eq::*;

use nutri_diary_rs::models::{ConsumedTotals, FoodItem, Nutrient, NutrientTargets};
use nutri_diary_rs::recommender::{
    MAX_MASS, MIN_MASS, RecommendConfig, calculate_balance, recommend, recommended_mass,
    score_food, calculate_priorities,
};

fn make_food(id: u64, name: &str, cal: f64, p: f64, f: f64, c: f64) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        barcode: None,
        calories: Some(cal),
        proteins: Some(p),
        fats: Some(f),
        carbs: Some(c),
    }
}

fn targets() -> NutrientTargets {
    NutrientTargets::new(2000.0, 150.0, 65.0, 250.0)
}

fn sample_catalog() -> Vec<FoodItem> {
    vec![
        make_food(1, "Apple", 52.0, 0.3, 0.2, 14.0),
        make_food(2, "Chicken Breast", 165.0, 31.0, 3.6, 0.0),
        make_food(3, "White Rice", 130.0, 2.7, 0.3, 28.0),
        make_food(4, "Olive Oil", 884.0, 0.0, 100.0, 0.0),
        make_food(5, "Greek Yogurt", 59.0, 10.0, 0.4, 3.6),
        make_food(6, "Sugar", 387.0, 0.0, 0.0, 100.0),
    ]
}

#[test]
fn test_apple_with_empty_day() {
    let apple = make_food(1, "Apple", 52.0, 0.3, 0.2, 14.0);
    let consumed = ConsumedTotals::default();

    let balance = calculate_balance(&targets(), &consumed);
    for n in Nutrient::ALL {
        assert_float_absolute_eq!(balance.absolute.get(n), targets().get(n), 1e-9);
        assert_float_absolute_eq!(balance.percent.get(n), 100.0, 1e-9);
    }

    let recs = recommend(&targets(), &consumed, &[apple], 5);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].food.name, "Apple");
    assert_eq!(recs[0].match_score, 100.0);
    assert_eq!(recs[0].recommended_mass, MAX_MASS);
}

#[test]
fn test_carb_surplus_scenario() {
    // carbs 20 g over the target, the rest half eaten
    let consumed = ConsumedTotals::new(1000.0, 75.0, 32.5, 270.0);
    let config = RecommendConfig::default();
    let balance = calculate_balance(&targets(), &consumed);
    assert_float_absolute_eq!(balance.absolute.carbs, -20.0, 1e-9);

    let priorities = calculate_priorities(&targets(), &balance, &config);
    let bread = make_food(1, "Bread", 265.0, 9.0, 3.2, 49.0).nutrients();
    let no_carbs = make_food(2, "Bread without carbs", 265.0, 9.0, 3.2, 0.0).nutrients();

    let with_carbs = score_food(&bread, &targets(), &balance, &priorities, &config);
    let without_carbs = score_food(&no_carbs, &targets(), &balance, &priorities, &config);
    let penalty = (49.0 / 250.0 * 100.0) * 0.75;
    assert_float_absolute_eq!(without_carbs - with_carbs, penalty, 1e-9);

    // the carb candidate uses the 5%-of-target cap: 12.5 g carbs at 49 g/100g
    let mass = recommended_mass(&bread, &targets(), &balance.absolute, &config);
    assert_float_absolute_eq!(mass, 12.5 / 49.0 * 100.0, 1e-9);
}

#[test]
fn test_empty_catalog() {
    let recs = recommend(&targets(), &ConsumedTotals::default(), &[], 5);
    assert!(recs.is_empty());
}

#[test]
fn test_all_zero_food() {
    let empty = make_food(1, "Water", 0.0, 0.0, 0.0, 0.0);
    let config = RecommendConfig::default();
    let balance = calculate_balance(&targets(), &ConsumedTotals::default());

    assert_eq!(
        recommended_mass(&empty.nutrients(), &targets(), &balance.absolute, &config),
        MIN_MASS
    );
    assert!(recommend(&targets(), &ConsumedTotals::default(), &[empty], 5).is_empty());
}

#[test]
fn test_non_positive_scores_never_recommended() {
    // everything eaten: every macro and calories in surplus
    let consumed = ConsumedTotals::new(2600.0, 180.0, 90.0, 300.0);
    let recs = recommend(&targets(), &consumed, &sample_catalog(), 10);
    assert!(recs.is_empty());
}

#[test]
fn test_protein_gap_puts_protein_first() {
    // fats already 15 g over target
    let consumed = ConsumedTotals::new(1400.0, 40.0, 80.0, 240.0);
    let recs = recommend(&targets(), &consumed, &sample_catalog(), 10);

    assert_eq!(recs[0].food.name, "Chicken Breast");
    assert!(recs.iter().all(|r| r.food.name != "Olive Oil"));
}

#[test]
fn test_scores_descend_and_stay_in_range() {
    let consumed = ConsumedTotals::new(800.0, 60.0, 20.0, 100.0);
    let recs = recommend(&targets(), &consumed, &sample_catalog(), 10);

    assert!(!recs.is_empty());
    assert_eq!(recs[0].match_score, 100.0);
    for pair in recs.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    for r in &recs {
        assert!((0.0..=100.0).contains(&r.match_score));
        assert!((MIN_MASS..=MAX_MASS).contains(&r.recommended_mass));
    }
}

#[test]
fn test_missing_values_treated_as_zero() {
    let mut partial = make_food(1, "Protein Powder", 0.0, 80.0, 0.0, 0.0);
    partial.calories = None;
    partial.fats = None;
    partial.carbs = None;

    let recs = recommend(&targets(), &ConsumedTotals::default(), &[partial], 5);
    assert_eq!(recs.len(), 1);
    // 150 g protein gap at 80 g/100g
    assert_eq!(recs[0].recommended_mass, 187.5);
}

#[test]
fn test_all_zero_targets() {
    let zero = NutrientTargets::default();
    let recs = recommend(&zero, &ConsumedTotals::default(), &sample_catalog(), 10);
    for r in &recs {
        assert!((0.0..=100.0).contains(&r.match_score));
        assert!((MIN_MASS..=MAX_MASS).contains(&r.recommended_mass));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let consumed = ConsumedTotals::new(900.0, 70.0, 30.0, 120.0);
    let catalog = sample_catalog();

    let first = recommend(&targets(), &consumed, &catalog, 5);
    let second = recommend(&targets(), &consumed, &catalog, 5);
    assert_eq!(first, second);
}
