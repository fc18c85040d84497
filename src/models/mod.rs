mod kv_record;
mod quantity;
mod recipe;
mod scaled;

#[cfg(test)]
pub mod test_fixtures;

pub use kv_record::KeyValueRecord;
pub use quantity::Quantity;
pub use recipe::{Cookbook, IngredientRow, Recipe};
pub use scaled::{IngredientWarning, ScaledIngredient, ScaledRecipe};
