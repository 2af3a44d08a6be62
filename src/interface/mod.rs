pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, confirm_food_match, prompt_activity_level, prompt_age, prompt_gender,
    prompt_height, prompt_weight, prompt_yes_no,
};
pub use render::{
    display_day_summary, display_diary, display_food_list, display_profile,
    display_recommendations,
};
