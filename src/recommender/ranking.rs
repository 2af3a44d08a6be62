use std::cmp::Ordering;

use log::{debug, warn};

use crate::error::{NutriError, Result};
use crate::models::{ConsumedTotals, FoodItem, NutrientTargets, ScoredFood};
use crate::recommender::balance::{NutrientBalance, calculate_balance};
use crate::recommender::constants::RecommendConfig;
use crate::recommender::portion::recommended_mass;
use crate::recommender::priority::{Priority, calculate_priorities};
use crate::recommender::scoring::{match_score, score_food};

/// Catalog food with its raw score.
#[derive(Debug)]
struct Candidate<'a> {
    food: &'a FoodItem,
    raw_score: f64,
}

/// Score every food and keep the ones that help, best first.
///
/// Foods with no usable nutrient data are skipped. The sort is stable so
/// equal scores keep catalog order.
fn rank_candidates<'a>(
    catalog: &'a [FoodItem],
    targets: &NutrientTargets,
    balance: &NutrientBalance,
    priorities: &Priority,
    config: &RecommendConfig,
) -> Vec<Candidate<'a>> {
    let mut candidates: Vec<Candidate> = catalog
        .iter()
        .filter(|food| {
            let usable = food.has_nutrient_data();
            if !usable {
                debug!("Skipping food without nutrient data: {}", food.debug_string());
            }
            usable
        })
        .map(|food| Candidate {
            food,
            raw_score: score_food(&food.nutrients(), targets, balance, priorities, config),
        })
        .filter(|c| c.raw_score > 0.0)
        .collect();

    candidates.sort_by(|a, b| {
        b.raw_score
            .partial_cmp(&a.raw_score)
            .unwrap_or(Ordering::Equal)
    });

    candidates
}

fn check_inputs(
    targets: &NutrientTargets,
    consumed: &ConsumedTotals,
    catalog: &[FoodItem],
) -> Result<()> {
    if !targets.as_nutrients().is_finite() {
        return Err(NutriError::InvalidInput(format!(
            "non-finite daily targets: {:?}",
            targets
        )));
    }
    if !consumed.as_nutrients().is_finite() {
        return Err(NutriError::InvalidInput(format!(
            "non-finite consumed totals: {:?}",
            consumed
        )));
    }
    if let Some(food) = catalog.iter().find(|f| !f.nutrients().is_finite()) {
        return Err(NutriError::InvalidInput(format!(
            "malformed food record: {}",
            food.debug_string()
        )));
    }
    Ok(())
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rank catalog foods by how well they close today's gap.
///
/// Returns at most `n_recommendations` entries. Malformed input is reported
/// as an error; an empty catalog or no helpful food is an empty list.
pub fn try_recommend(
    targets: &NutrientTargets,
    consumed: &ConsumedTotals,
    catalog: &[FoodItem],
    n_recommendations: usize,
    config: &RecommendConfig,
) -> Result<Vec<ScoredFood>> {
    check_inputs(targets, consumed, catalog)?;

    if catalog.is_empty() || n_recommendations == 0 {
        return Ok(Vec::new());
    }

    let balance = calculate_balance(targets, consumed);
    let priorities = calculate_priorities(targets, &balance, config);
    debug!("Balance: {:?}", balance);
    debug!("Priorities: {:?}", priorities);

    let candidates = rank_candidates(catalog, targets, &balance, &priorities, config);
    debug!(
        "{} of {} foods scored positively",
        candidates.len(),
        catalog.len()
    );

    let top_raw = candidates.first().map(|c| c.raw_score).unwrap_or(1.0);

    Ok(candidates
        .into_iter()
        .take(n_recommendations)
        .map(|c| {
            let mass = recommended_mass(&c.food.nutrients(), targets, &balance.absolute, config);
            ScoredFood::new(
                c.food.clone(),
                match_score(c.raw_score, top_raw),
                round1(mass),
            )
        })
        .collect())
}

/// Like [`try_recommend`] but never fails: errors are logged and yield an
/// empty list.
pub fn recommend_with_config(
    targets: &NutrientTargets,
    consumed: &ConsumedTotals,
    catalog: &[FoodItem],
    n_recommendations: usize,
    config: &RecommendConfig,
) -> Vec<ScoredFood> {
    match try_recommend(targets, consumed, catalog, n_recommendations, config) {
        Ok(recommendations) => recommendations,
        Err(e) => {
            warn!("Recommendations unavailable: {}", e);
            Vec::new()
        }
    }
}

/// Recommend foods using the default weights.
pub fn recommend(
    targets: &NutrientTargets,
    consumed: &ConsumedTotals,
    catalog: &[FoodItem],
    n_recommendations: usize,
) -> Vec<ScoredFood> {
    recommend_with_config(
        targets,
        consumed,
        catalog,
        n_recommendations,
        &RecommendConfig::default(),
    )
}
