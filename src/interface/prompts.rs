use dialoguer::{Confirm, Input, Select};

use crate::error::{NutriError, Result};
use crate::models::profile::{ACTIVITY_LEVEL_MAX, ACTIVITY_LEVEL_MIN};
use crate::models::{Gender, UserProfile};

/// Common activity multipliers offered when none is given.
const ACTIVITY_PRESETS: [(f64, &str); 5] = [
    (1.2, "sedentary"),
    (1.375, "light exercise 1-3 days/week"),
    (1.55, "moderate exercise 3-5 days/week"),
    (1.725, "hard exercise 6-7 days/week"),
    (1.9, "very hard exercise or physical job"),
];

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for body weight in kg.
pub fn prompt_weight() -> Result<f64> {
    prompt_number("Weight (kg)", "70")
}

/// Prompt for height in cm.
pub fn prompt_height() -> Result<f64> {
    prompt_number("Height (cm)", "170")
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    prompt_number("Age (years)", "30")
}

pub fn prompt_gender() -> Result<Gender> {
    let options = vec!["male", "female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        Gender::Male
    } else {
        Gender::Female
    })
}

/// Prompt for an activity multiplier from the presets.
pub fn prompt_activity_level() -> Result<f64> {
    let options: Vec<String> = ACTIVITY_PRESETS
        .iter()
        .map(|(level, label)| format!("{:.3} ({})", level, label))
        .collect();

    let selection = Select::new()
        .with_prompt(format!(
            "Activity level ({}-{})",
            ACTIVITY_LEVEL_MIN, ACTIVITY_LEVEL_MAX
        ))
        .items(&options)
        .default(2)
        .interact()?;

    Ok(ACTIVITY_PRESETS
        .get(selection)
        .map(|(level, _)| *level)
        .unwrap_or(ACTIVITY_LEVEL_MIN))
}

/// Build a profile, prompting only for the values not already given.
pub fn collect_profile(
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
    activity_level: Option<f64>,
) -> Result<UserProfile> {
    let weight = weight.map_or_else(prompt_weight, Ok)?;
    let height = height.map_or_else(prompt_height, Ok)?;
    let age = age.map_or_else(prompt_age, Ok)?;
    let gender = gender.map_or_else(prompt_gender, Ok)?;
    let activity_level = activity_level.map_or_else(prompt_activity_level, Ok)?;

    Ok(UserProfile {
        weight,
        height,
        age,
        gender,
        activity_level,
    })
}

/// Ask whether a fuzzy name match is the intended food.
pub fn confirm_food_match(query: &str, name: &str) -> Result<bool> {
    prompt_yes_no(&format!("No exact match for '{}'. Did you mean '{}'?", query, name), true)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
