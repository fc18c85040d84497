use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Saved recipes are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Dish not found: {0}")]
    DishNotFound(String),
}

/// Rejected user input. The messages are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a dish name.")]
    MissingDishName,

    #[error("Please add at least one ingredient.")]
    NoIngredients,

    #[error("Please enter a valid target weight.")]
    InvalidTargetWeight(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid quantity format: {quantity}")]
pub struct ParseError {
    pub quantity: String,
}

/// A command-line ingredient that isn't written as `name=quantity`
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Expected name=quantity: {0}")]
pub struct RowFormatError(pub String);

pub type Result<T> = std::result::Result<T, ScalerError>;
