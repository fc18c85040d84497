use recipe_scaler::controllers::{
    SAVED_RECIPES_KEY, get_dish, list_dishes, load_saved_recipes, save_dish, scale_recipe,
};
use recipe_scaler::error::{ScalerError, ValidationError};
use recipe_scaler::models::IngredientRow;
use recipe_scaler::store::{KeyValueStore, SqliteStore};

#[tokio::test]
async fn test_save_reload_and_scale_roundtrip() {
    let store = SqliteStore::in_memory()
        .await
        .expect("Failed to create in-memory store");

    let rows = vec![
        IngredientRow::new("flour", "50g"),
        IngredientRow::new("sugar", "20g"),
        IngredientRow::new("chocolate chips", "15g"),
        IngredientRow::new("butter", "15g"),
        IngredientRow::new("vanilla", "1tsp"),
    ];

    save_dish(&store, "Chocolate Chip Cookies", &rows)
        .await
        .expect("Failed to save dish");

    // Stored as one JSON object under the well-known key
    let json = store
        .get(SAVED_RECIPES_KEY)
        .await
        .expect("Failed to read store")
        .expect("Saved recipes should be present");
    assert!(json.starts_with(r#"{"Chocolate Chip Cookies":{"flour":"50g""#));

    // Selecting the dish gives back the same rows, in order
    let recipe = get_dish(&store, "Chocolate Chip Cookies")
        .await
        .expect("Failed to fetch dish");
    assert_eq!(recipe.to_rows(), rows);

    let doubled = scale_recipe(&recipe, 200.0).expect("Failed to scale");
    assert_eq!(
        doubled.lines(),
        vec![
            "flour: 100.00g",
            "sugar: 40.00g",
            "chocolate chips: 30.00g",
            "butter: 30.00g",
            "vanilla: 2.00tsp",
        ]
    );

    let halved = scale_recipe(&recipe, 50.0).expect("Failed to scale");
    for (original, scaled) in doubled.ingredients.iter().zip(&halved.ingredients) {
        assert_eq!(scaled.value * 4.0, original.value);
    }
}

#[tokio::test]
async fn test_multiple_dishes_and_rejected_save() {
    let store = SqliteStore::in_memory()
        .await
        .expect("Failed to create in-memory store");

    save_dish(
        &store,
        "Pancakes",
        &[
            IngredientRow::new("flour", "40g"),
            IngredientRow::new("milk", "50ml"),
            IngredientRow::new("eggs", "1"),
        ],
    )
    .await
    .expect("Failed to save pancakes");

    save_dish(
        &store,
        "Waffles",
        &[
            IngredientRow::new("flour", "45g"),
            IngredientRow::new("butter", "10g"),
            IngredientRow::new("salt", "a pinch"),
        ],
    )
    .await
    .expect("Failed to save waffles");

    // A dish with only blank rows is rejected and changes nothing
    let result = save_dish(&store, "Air", &[IngredientRow::new("", "")]).await;
    assert!(matches!(
        result,
        Err(ScalerError::Validation(ValidationError::NoIngredients))
    ));

    let dishes = list_dishes(&store).await.expect("Failed to list dishes");
    assert_eq!(dishes, vec!["Pancakes", "Waffles"]);

    // Bad quantities are reported but don't stop the rest
    let waffles = load_saved_recipes(&store)
        .await
        .expect("Failed to load recipes")
        .get("Waffles")
        .cloned()
        .expect("Waffles should be saved");
    let scaled = scale_recipe(&waffles, 1000.0).expect("Failed to scale");

    assert_eq!(scaled.lines(), vec!["flour: 450.00g", "butter: 100.00g"]);
    assert_eq!(scaled.warnings.len(), 1);
    assert_eq!(
        scaled.warnings[0].to_string(),
        "Error with ingredient \"salt\": Invalid quantity format: a pinch"
    );
}
