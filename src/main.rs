use chrono::{Local, NaiveDate};
use clap::Parser;
use log::info;
use std::path::Path;

use nutri_diary_rs::cli::{Cli, Command, FoodCommand, ProfileArgs, ProfileCommand};
use nutri_diary_rs::error::{NutriError, Result};
use nutri_diary_rs::interface::{
    collect_profile, confirm_food_match, display_day_summary, display_diary, display_food_list,
    display_profile, display_recommendations, prompt_yes_no,
};
use nutri_diary_rs::lookup::{BarcodeLookup, OpenFoodFactsClient};
use nutri_diary_rs::models::{NewFood, NutrientTargets};
use nutri_diary_rs::recommender::{calculate_balance, recommend};
use nutri_diary_rs::state::{FoodMatch, NutritionStore, load_store, save_store, write_diary_csv};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    match command {
        Command::Profile(cmd) => cmd_profile(path, cmd),
        Command::Food(cmd) => cmd_food(path, cmd),
        Command::Lookup { barcode, save } => cmd_lookup(path, &barcode, save),
        Command::Eat { food, grams, date } => cmd_eat(path, &food, grams, day_or_today(date)),
        Command::Diary { days, csv } => cmd_diary(path, days, csv.as_deref()),
        Command::Today { date } => cmd_today(path, day_or_today(date)),
        Command::Recommend { n, date } => cmd_recommend(path, n, day_or_today(date)),
        Command::Reset { yes } => cmd_reset(path, yes),
    }
}

fn day_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Targets derived from the saved profile.
fn current_targets(store: &NutritionStore) -> Result<NutrientTargets> {
    store
        .profile()
        .map(NutrientTargets::from_profile)
        .ok_or(NutriError::MissingProfile)
}

fn cmd_profile(path: &Path, cmd: ProfileCommand) -> Result<()> {
    let mut store = load_store(path)?;

    match cmd {
        ProfileCommand::Set(ProfileArgs {
            weight,
            height,
            age,
            gender,
            activity,
        }) => {
            let profile = collect_profile(weight, height, age, gender, activity)?;
            store.set_profile(profile.clone())?;
            save_store(path, &store)?;
            display_profile(&profile, &NutrientTargets::from_profile(&profile));
            println!("Profile saved.");
        }
        ProfileCommand::Show => match store.profile() {
            Some(profile) => display_profile(profile, &NutrientTargets::from_profile(profile)),
            None => println!("No profile saved. Use 'profile set' to create one."),
        },
        ProfileCommand::Clear => {
            store.clear_profile();
            save_store(path, &store)?;
            println!("Profile cleared.");
        }
    }

    Ok(())
}

fn cmd_food(path: &Path, cmd: FoodCommand) -> Result<()> {
    let mut store = load_store(path)?;

    match cmd {
        FoodCommand::Add {
            name,
            barcode,
            calories,
            proteins,
            fats,
            carbs,
        } => {
            let id = store.upsert_food(NewFood {
                name,
                barcode,
                calories,
                proteins,
                fats,
                carbs,
            })?;
            save_store(path, &store)?;
            println!("Saved food #{}.", id);
        }
        FoodCommand::List => display_food_list(store.catalog()),
        FoodCommand::Remove { id } => {
            let removed = store.remove_food(id)?;
            save_store(path, &store)?;
            println!("Removed '{}' and its diary entries.", removed.name);
        }
    }

    Ok(())
}

/// Look up a barcode and optionally add the product to the catalog.
fn cmd_lookup(path: &Path, barcode: &str, save: bool) -> Result<()> {
    let client = OpenFoodFactsClient::new();

    let Some(found) = client.lookup(barcode) else {
        println!("No product found for barcode {}.", barcode);
        return Ok(());
    };

    let fmt = |v: Option<f64>| v.map_or_else(|| "?".to_string(), |v| format!("{:.1}", v));
    println!("{} [{}]", found.name, barcode);
    println!(
        "  per 100g: {} kcal, P:{} F:{} C:{}",
        fmt(found.calories),
        fmt(found.proteins),
        fmt(found.fats),
        fmt(found.carbs)
    );

    if save {
        let mut store = load_store(path)?;
        let id = store.upsert_food(found)?;
        save_store(path, &store)?;
        println!("Saved food #{}.", id);
    }

    Ok(())
}

fn cmd_eat(path: &Path, query: &str, grams: f64, date: NaiveDate) -> Result<()> {
    let mut store = load_store(path)?;

    let food_id = match store.resolve_food(query) {
        Some(FoodMatch::Exact(food)) => food.id,
        Some(FoodMatch::Fuzzy(food)) => {
            if !confirm_food_match(query, &food.name)? {
                println!("Nothing logged.");
                return Ok(());
            }
            food.id
        }
        None => return Err(NutriError::FoodNotFound(query.to_string())),
    };

    store.add_consumption(food_id, grams, date)?;
    save_store(path, &store)?;
    info!("Logged {} g of food #{} on {}", grams, food_id, date);
    println!("Logged {:.1} g on {}.", grams, date);

    // Suggestions are advisory; a missing profile only skips them.
    if let Ok(targets) = current_targets(&store) {
        let recommendations = recommend(&targets, &store.totals_for(date), store.catalog(), 3);
        display_recommendations(&recommendations);
    }

    Ok(())
}

fn cmd_diary(path: &Path, days: u64, csv: Option<&str>) -> Result<()> {
    let store = load_store(path)?;
    let rows = store.food_diary(Local::now().date_naive(), days);

    display_diary(&rows);

    if let Some(csv_path) = csv {
        write_diary_csv(&rows, csv_path)?;
        println!("Wrote {} rows to {}", rows.len(), csv_path);
    }

    Ok(())
}

fn cmd_today(path: &Path, date: NaiveDate) -> Result<()> {
    let store = load_store(path)?;
    let targets = current_targets(&store)?;
    let consumed = store.totals_for(date);
    let balance = calculate_balance(&targets, &consumed);

    println!("{}", date);
    display_day_summary(&targets, &consumed, &balance);
    Ok(())
}

fn cmd_recommend(path: &Path, n: usize, date: NaiveDate) -> Result<()> {
    let store = load_store(path)?;
    let targets = current_targets(&store)?;
    let consumed = store.totals_for(date);

    if store.catalog().is_empty() {
        println!("The catalog is empty. Add foods with 'food add' or 'lookup --save'.");
        return Ok(());
    }

    let recommendations = recommend(&targets, &consumed, store.catalog(), n);
    display_recommendations(&recommendations);
    Ok(())
}

fn cmd_reset(path: &Path, yes: bool) -> Result<()> {
    if !yes && !prompt_yes_no("Delete all foods, diary entries and the profile?", false)? {
        println!("Nothing changed.");
        return Ok(());
    }

    let mut store = load_store(path)?;
    store.reset();
    save_store(path, &store)?;
    println!("Store reset.");
    Ok(())
}
