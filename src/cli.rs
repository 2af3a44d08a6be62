use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::models::Gender;
use crate::recommender::DEFAULT_RECOMMENDATIONS;

/// NutriDiary: a nutrition diary that suggests foods to close today's macro gap.
#[derive(Parser, Debug)]
#[command(name = "nutri_diary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the store JSON file.
    #[arg(short, long, env = "NUTRI_DIARY_FILE", default_value = "nutrition_store.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage body parameters and daily targets.
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Manage the food catalog.
    #[command(subcommand)]
    Food(FoodCommand),

    /// Look up a product by barcode on OpenFoodFacts.
    Lookup {
        barcode: String,

        /// Add the product to the catalog.
        #[arg(long)]
        save: bool,
    },

    /// Log a portion of a catalog food (by id, barcode or name).
    Eat {
        food: String,

        /// Portion in grams.
        #[arg(short, long)]
        grams: f64,

        /// Day to log for (defaults to today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the food diary.
    Diary {
        /// How many days back to include.
        #[arg(long, default_value = "30")]
        days: u64,

        /// Also export the rows to this CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Show a day's totals against the targets.
    Today {
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Recommend foods for the rest of the day.
    Recommend {
        /// Number of recommendations.
        #[arg(short, default_value_t = DEFAULT_RECOMMENDATIONS)]
        n: usize,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete all foods, diary entries and the profile.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Today { date: None }
    }
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Save body parameters. Missing values are prompted for.
    Set(ProfileArgs),

    /// Show the profile and the derived daily targets.
    Show,

    /// Remove the saved profile.
    Clear,
}

#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long, value_enum)]
    pub gender: Option<Gender>,

    /// Activity multiplier, 1.2 to 1.9.
    #[arg(long)]
    pub activity: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum FoodCommand {
    /// Add a food (or update the one with the same barcode). Values are per 100g.
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        barcode: Option<String>,

        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        proteins: Option<f64>,

        #[arg(long)]
        fats: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,
    },

    /// List the catalog.
    List,

    /// Remove a food and its diary entries.
    Remove { id: u64 },
}
