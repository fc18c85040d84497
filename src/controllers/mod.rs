mod dish_controller;
mod scale_controller;

pub use dish_controller::{SAVED_RECIPES_KEY, get_dish, list_dishes, load_saved_recipes, save_dish};
pub use scale_controller::{BASE_WEIGHT, parse_target_weight, scale_recipe};
