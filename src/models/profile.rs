use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};

/// Lowest accepted activity multiplier (sedentary).
pub const ACTIVITY_LEVEL_MIN: f64 = 1.2;

/// Highest accepted activity multiplier (very hard daily training).
pub const ACTIVITY_LEVEL_MAX: f64 = 1.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Body parameters used to derive daily targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kg.
    pub weight: f64,

    /// Height in cm.
    pub height: f64,

    /// Age in years.
    pub age: u32,

    pub gender: Gender,

    /// Activity multiplier, 1.2 to 1.9.
    pub activity_level: f64,
}

impl UserProfile {
    pub fn validate(&self) -> Result<()> {
        if !(self.weight.is_finite() && self.weight > 0.0) {
            return Err(NutriError::InvalidInput(format!(
                "weight must be positive, got {}",
                self.weight
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(NutriError::InvalidInput(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        if self.age == 0 {
            return Err(NutriError::InvalidInput("age must be positive".to_string()));
        }
        if !(ACTIVITY_LEVEL_MIN..=ACTIVITY_LEVEL_MAX).contains(&self.activity_level) {
            return Err(NutriError::InvalidInput(format!(
                "activity level must be between {} and {}, got {}",
                ACTIVITY_LEVEL_MIN, ACTIVITY_LEVEL_MAX, self.activity_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            weight: 70.0,
            height: 175.0,
            age: 30,
            gender: Gender::Male,
            activity_level: 1.55,
        }
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut p = sample_profile();
        p.weight = 0.0;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.age = 0;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.activity_level = 2.5;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.height = f64::NAN;
        assert!(p.validate().is_err());
    }
}
