use crossterm::event::KeyCode;
use ratatui::Frame;

use super::scaler_states::DishPicker;
use crate::error::Result;
use crate::models::{Cookbook, IngredientRow, ScaledRecipe};

pub enum AppAction {
    Continue, // Keep running
    SaveDish, // Caller should persist the current form
    Exit,     // Esc pressed
}

pub struct ScalerApp {
    state: Box<dyn ScalerState>,
    context: ScalerContext,
}

/// The form contents shared by every screen
pub struct ScalerContext {
    pub dish_name: String,
    pub rows: Vec<IngredientRow>,
    pub cookbook: Cookbook,
    pub locked: bool, // Rows came from a saved dish and can't be re-saved
    pub scaled: Option<ScaledRecipe>,
    pub notice: Option<String>,
    pub save_requested: bool,
}

impl ScalerContext {
    pub fn new(cookbook: Cookbook) -> Self {
        Self {
            dish_name: String::new(),
            rows: Vec::new(),
            cookbook,
            locked: false,
            scaled: None,
            notice: None,
            save_requested: false,
        }
    }

    /// Empty the form, keeping the cookbook and any notice
    pub fn clear_form(&mut self) {
        self.dish_name.clear();
        self.rows.clear();
        self.locked = false;
        self.scaled = None;
    }
}

pub(crate) trait ScalerState {
    fn render(&self, context: &ScalerContext, frame: &mut Frame);
    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ScalerContext,
    ) -> Option<Box<dyn ScalerState>>;
}

impl ScalerApp {
    pub fn new(cookbook: Cookbook) -> Self {
        Self {
            state: Box::new(DishPicker::new()),
            context: ScalerContext::new(cookbook),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.state.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc {
            return AppAction::Exit;
        }

        if let Some(next_state) = self.state.handle_key(key, &mut self.context) {
            self.state = next_state
        }

        if std::mem::take(&mut self.context.save_requested) {
            AppAction::SaveDish
        } else {
            AppAction::Continue
        }
    }

    pub fn context(&self) -> &ScalerContext {
        &self.context
    }

    /// Report the outcome of a [`AppAction::SaveDish`]
    ///
    /// On success the form is cleared and the dish picker shown again. On
    /// failure the form is kept and the error shown.
    pub fn save_finished(&mut self, result: Result<Cookbook>) {
        match result {
            Ok(cookbook) => {
                self.context.notice = Some(format!(
                    "Recipe for \"{}\" saved successfully.",
                    self.context.dish_name.trim()
                ));
                self.context.cookbook = cookbook;
                self.context.clear_form();
                self.state = Box::new(DishPicker::new());
            }
            Err(error) => self.context.notice = Some(error.to_string()),
        }
    }
}
