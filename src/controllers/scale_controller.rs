use tracing::{debug, warn};

use crate::error::{Result, ValidationError};
use crate::models::{IngredientWarning, Quantity, Recipe, ScaledIngredient, ScaledRecipe};

/// Every recipe is written for this weight
pub const BASE_WEIGHT: f64 = 100.0;

/// Read the target weight form field
///
/// Takes the same shape as an ingredient quantity, so a unit suffix is
/// allowed and ignored. Zero is rejected.
pub fn parse_target_weight(input: &str) -> Result<f64> {
    let invalid = || ValidationError::InvalidTargetWeight(input.to_string());

    let weight = Quantity::parse(input).map_err(|_| invalid())?.value;
    if weight <= 0.0 {
        return Err(invalid().into());
    }

    Ok(weight)
}

/// Scale every ingredient of `recipe` from [`BASE_WEIGHT`] to `target_weight`
///
/// Ingredients whose quantity can't be parsed are left out and reported in
/// [`ScaledRecipe::warnings`]; the others are still scaled.
pub fn scale_recipe(recipe: &Recipe, target_weight: f64) -> Result<ScaledRecipe> {
    if !target_weight.is_finite() || target_weight <= 0.0 {
        return Err(ValidationError::InvalidTargetWeight(target_weight.to_string()).into());
    }

    let factor = target_weight / BASE_WEIGHT;
    debug!(target_weight, factor, ingredients = recipe.len(), "Scaling recipe");

    let mut scaled = ScaledRecipe::default();
    for (name, quantity) in recipe.iter() {
        match Quantity::parse(quantity) {
            Ok(Quantity { value, unit }) => scaled.ingredients.push(ScaledIngredient {
                name: name.to_string(),
                value: value * factor,
                unit,
            }),
            Err(error) => {
                warn!(ingredient = name, quantity, "Skipping unparsable quantity");
                scaled.warnings.push(IngredientWarning {
                    ingredient: name.to_string(),
                    error,
                });
            }
        }
    }

    Ok(scaled)
}
