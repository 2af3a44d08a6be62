use crate::models::{
    ConsumedTotals, DiaryRow, FoodItem, Nutrient, NutrientTargets, ScoredFood, UserProfile,
};
use crate::recommender::NutrientBalance;

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "?".to_string(), |v| format!("{:.1}", v))
}

/// Display recommended foods with match and portion.
pub fn display_recommendations(recommendations: &[ScoredFood]) {
    if recommendations.is_empty() {
        println!("No recommendations (empty catalog or nothing fits today's balance).");
        return;
    }

    println!();
    println!("=== Recommended Foods ===");
    println!();

    let max_name_len = recommendations
        .iter()
        .map(|r| r.food.name.len())
        .max()
        .unwrap_or(10);

    for (i, rec) in recommendations.iter().enumerate() {
        let n = rec.food.nutrients();
        println!(
            "{:>3}. {:<width$} - match {:>5.1}% | {:>5.1} g | per 100g: {:.0} kcal P:{:.1} F:{:.1} C:{:.1}",
            i + 1,
            rec.food.name,
            rec.match_score,
            rec.recommended_mass,
            n.calories,
            n.proteins,
            n.fats,
            n.carbs,
            width = max_name_len
        );
    }

    println!();
}

/// Display the catalog.
pub fn display_food_list(foods: &[FoodItem]) {
    if foods.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Catalog ({} items) ===", foods.len());
    println!();

    for food in foods {
        println!(
            "  #{:<4} {} [{}] - per 100g: {} kcal, P:{} F:{} C:{}",
            food.id,
            food.name,
            food.barcode.as_deref().unwrap_or("-"),
            fmt_opt(food.calories),
            fmt_opt(food.proteins),
            fmt_opt(food.fats),
            fmt_opt(food.carbs)
        );
    }

    println!();
}

/// Display diary rows grouped by date.
pub fn display_diary(rows: &[DiaryRow]) {
    if rows.is_empty() {
        println!("Diary is empty for this period.");
        return;
    }

    println!();
    println!("=== Food Diary ===");

    let mut current_date = None;
    for row in rows {
        if current_date != Some(row.date) {
            println!();
            println!("{}", row.date);
            current_date = Some(row.date);
        }
        println!(
            "  #{:<4} {:<24} {:>6.1} g | {:>6.1} kcal P:{:.1} F:{:.1} C:{:.1}",
            row.id, row.name, row.grams, row.calories, row.proteins, row.fats, row.carbs
        );
    }

    println!();
}

/// Display today's totals against targets.
pub fn display_day_summary(
    targets: &NutrientTargets,
    consumed: &ConsumedTotals,
    balance: &NutrientBalance,
) {
    println!();
    println!("=== Today ===");
    println!();
    println!(
        "  {:<9} {:>9} {:>9} {:>9} {:>8}",
        "", "target", "eaten", "left", "left %"
    );

    for nutrient in Nutrient::ALL {
        println!(
            "  {:<9} {:>9.1} {:>9.1} {:>9.1} {:>7.1}%",
            nutrient.label(),
            targets.get(nutrient),
            consumed.get(nutrient),
            balance.absolute.get(nutrient),
            balance.percent.get(nutrient)
        );
    }

    println!();
}

/// Display the saved profile and the targets derived from it.
pub fn display_profile(profile: &UserProfile, targets: &NutrientTargets) {
    println!();
    println!("=== Profile ===");
    println!("Weight: {:.1} kg", profile.weight);
    println!("Height: {:.1} cm", profile.height);
    println!("Age: {}", profile.age);
    println!("Gender: {:?}", profile.gender);
    println!("Activity level: {:.3}", profile.activity_level);
    println!();
    println!("--- Daily targets ---");
    println!("Calories: {:.0} kcal", targets.calories);
    println!("Proteins: {:.1} g", targets.proteins);
    println!("Fats: {:.1} g", targets.fats);
    println!("Carbs: {:.1} g", targets.carbs);
    println!();
}
