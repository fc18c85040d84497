use std::fmt;

use crate::error::ParseError;

/// One line of a scaled recipe
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledIngredient {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}{}", self.name, self.value, self.unit)
    }
}

/// An ingredient left out of a scaled recipe because its quantity did not parse
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientWarning {
    pub ingredient: String,
    pub error: ParseError,
}

impl fmt::Display for IngredientWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error with ingredient \"{}\": {}", self.ingredient, self.error)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaledRecipe {
    pub ingredients: Vec<ScaledIngredient>,
    pub warnings: Vec<IngredientWarning>,
}

impl ScaledRecipe {
    /// Output list lines, with a placeholder line when nothing could be scaled
    pub fn lines(&self) -> Vec<String> {
        if self.ingredients.is_empty() {
            vec!["No ingredients to scale.".to_string()]
        } else {
            self.ingredients.iter().map(ToString::to_string).collect()
        }
    }
}

impl fmt::Display for ScaledRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_ingredient_two_decimals() {
        let ingredient = ScaledIngredient {
            name: "flour".to_string(),
            value: 100.0 / 3.0,
            unit: "g".to_string(),
        };

        assert_eq!(ingredient.to_string(), "flour: 33.33g");
    }

    #[test]
    fn test_empty_scaled_recipe_lines() {
        let scaled = ScaledRecipe::default();

        assert_eq!(scaled.lines(), vec!["No ingredients to scale."]);
    }

    #[test]
    fn test_warning_message() {
        let warning = IngredientWarning {
            ingredient: "salt".to_string(),
            error: ParseError {
                quantity: "a pinch".to_string(),
            },
        };

        assert_eq!(
            warning.to_string(),
            "Error with ingredient \"salt\": Invalid quantity format: a pinch"
        );
    }
}
