use tracing::info;

use crate::error::{Result, ScalerError, ValidationError};
use crate::models::{Cookbook, IngredientRow, Recipe};
use crate::store::KeyValueStore;

/// Store key holding the whole cookbook as one JSON object
pub const SAVED_RECIPES_KEY: &str = "savedRecipes";

/// Load every saved dish
/// Returns an empty cookbook if nothing has been saved yet
pub async fn load_saved_recipes(store: &impl KeyValueStore) -> Result<Cookbook> {
    match store.get(SAVED_RECIPES_KEY).await? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Cookbook::default()),
    }
}

/// Dish names in the order they were first saved
pub async fn list_dishes(store: &impl KeyValueStore) -> Result<Vec<String>> {
    Ok(load_saved_recipes(store).await?.dish_names())
}

/// Save the form rows as `dish_name`, replacing any dish with that name
/// Returns the updated cookbook
pub async fn save_dish(
    store: &impl KeyValueStore,
    dish_name: &str,
    rows: &[IngredientRow],
) -> Result<Cookbook> {
    let dish_name = dish_name.trim();
    if dish_name.is_empty() {
        return Err(ValidationError::MissingDishName.into());
    }

    let recipe = Recipe::from_rows(rows);
    if recipe.is_empty() {
        return Err(ValidationError::NoIngredients.into());
    }

    let mut cookbook = load_saved_recipes(store).await?;
    let ingredients = recipe.len();
    cookbook.insert(dish_name, recipe);

    store
        .set(SAVED_RECIPES_KEY, &serde_json::to_string(&cookbook)?)
        .await?;

    info!(dish_name, ingredients, "Saved recipe");
    Ok(cookbook)
}

/// Fetch a saved dish by name
pub async fn get_dish(store: &impl KeyValueStore, dish_name: &str) -> Result<Recipe> {
    load_saved_recipes(store)
        .await?
        .get(dish_name)
        .cloned()
        .ok_or_else(|| ScalerError::DishNotFound(dish_name.to_string()))
}
