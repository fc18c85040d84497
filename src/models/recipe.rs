use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RowFormatError;

/// A single name/quantity pair as typed into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub name: String,
    pub quantity: String,
}

impl IngredientRow {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// Trimmed name and quantity, or `None` if either is blank
    fn filled(&self) -> Option<(&str, &str)> {
        let name = self.name.trim();
        let quantity = self.quantity.trim();
        if name.is_empty() || quantity.is_empty() {
            None
        } else {
            Some((name, quantity))
        }
    }
}

/// Parses `name=quantity`, as accepted on the command line
impl FromStr for IngredientRow {
    type Err = RowFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, quantity)) => Ok(Self::new(name.trim(), quantity.trim())),
            None => Err(RowFormatError(s.to_string())),
        }
    }
}

/// Ingredient name -> quantity string, in the order the ingredients were entered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    ingredients: IndexMap<String, String>,
}

impl Recipe {
    /// Build a recipe from form rows
    ///
    /// Rows with a blank name or quantity are dropped. A repeated name keeps
    /// its first position and takes the last quantity.
    pub fn from_rows(rows: &[IngredientRow]) -> Self {
        let ingredients = rows
            .iter()
            .filter_map(IngredientRow::filled)
            .map(|(name, quantity)| (name.to_string(), quantity.to_string()))
            .collect();

        Self { ingredients }
    }

    pub fn to_rows(&self) -> Vec<IngredientRow> {
        self.ingredients
            .iter()
            .map(|(name, quantity)| IngredientRow::new(name, quantity))
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, quantity: impl Into<String>) {
        self.ingredients.insert(name.into(), quantity.into());
    }

    pub fn quantity(&self, name: &str) -> Option<&str> {
        self.ingredients.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ingredients
            .iter()
            .map(|(name, quantity)| (name.as_str(), quantity.as_str()))
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, quantity) in self.iter() {
            writeln!(f, "  - {}: {}", name, quantity)?;
        }
        Ok(())
    }
}

/// Every saved dish, keyed by dish name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cookbook {
    dishes: IndexMap<String, Recipe>,
}

impl Cookbook {
    pub fn get(&self, dish_name: &str) -> Option<&Recipe> {
        self.dishes.get(dish_name)
    }

    /// Insert or replace a dish. A replaced dish keeps its position.
    pub fn insert(&mut self, dish_name: impl Into<String>, recipe: Recipe) {
        self.dishes.insert(dish_name.into(), recipe);
    }

    pub fn dish_names(&self) -> Vec<String> {
        self.dishes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_skips_blank_rows() {
        let rows = vec![
            IngredientRow::new(" flour ", " 50g "),
            IngredientRow::new("", "10g"),
            IngredientRow::new("salt", "   "),
            IngredientRow::new("sugar", "20g"),
        ];

        let recipe = Recipe::from_rows(&rows);

        assert_eq!(recipe.len(), 2);
        assert_eq!(recipe.quantity("flour"), Some("50g"));
        assert_eq!(recipe.quantity("sugar"), Some("20g"));
        assert_eq!(recipe.quantity("salt"), None);
    }

    #[test]
    fn test_from_rows_duplicate_name_keeps_position_and_last_quantity() {
        let rows = vec![
            IngredientRow::new("flour", "50g"),
            IngredientRow::new("sugar", "20g"),
            IngredientRow::new("flour", "70g"),
        ];

        let recipe = Recipe::from_rows(&rows);

        assert_eq!(
            recipe.to_rows(),
            vec![
                IngredientRow::new("flour", "70g"),
                IngredientRow::new("sugar", "20g"),
            ]
        );
    }

    #[test]
    fn test_recipe_json_is_plain_object() {
        let mut recipe = Recipe::default();
        recipe.insert("flour", "50g");
        recipe.insert("eggs", "2");

        let mut cookbook = Cookbook::default();
        cookbook.insert("Pancakes", recipe);

        let json = serde_json::to_string(&cookbook).expect("Failed to serialize");

        assert_eq!(json, r#"{"Pancakes":{"flour":"50g","eggs":"2"}}"#);

        let parsed: Cookbook = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(parsed, cookbook);
    }

    #[test]
    fn test_ingredient_row_from_str() {
        let row: IngredientRow = "chocolate chips = 30g".parse().expect("Failed to parse row");

        assert_eq!(row, IngredientRow::new("chocolate chips", "30g"));
        assert_eq!(
            "flour".parse::<IngredientRow>(),
            Err(RowFormatError("flour".to_string()))
        );
        assert_eq!(
            RowFormatError("flour".to_string()).to_string(),
            "Expected name=quantity: flour"
        );
    }

    #[test]
    fn test_recipe_display() {
        let recipe = Recipe::from_rows(&[
            IngredientRow::new("flour", "50g"),
            IngredientRow::new("milk", "30ml"),
        ]);

        assert_eq!(recipe.to_string(), "  - flour: 50g\n  - milk: 30ml\n");
    }
}
