use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{ScalerContext, ScalerState};
use crate::controllers::{parse_target_weight, scale_recipe};
use crate::error::ValidationError;
use crate::models::{IngredientRow, Recipe};

fn ingredient_lines(rows: &[IngredientRow]) -> Vec<Line<'_>> {
    rows.iter()
        .map(|row| Line::from(format!("{}: {}", row.name, row.quantity)))
        .collect()
}

/// Ingredient list on top, single-line input box below
fn render_with_input(
    frame: &mut Frame,
    context: &ScalerContext,
    input: &str,
    title: String,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(frame.area());

    let ingredient_list = Paragraph::new(ingredient_lines(&context.rows)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Ingredients for {}", context.dish_name)),
    );
    frame.render_widget(ingredient_list, chunks[0]);

    let input = Paragraph::new(input).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, chunks[1]);
}

fn with_error(title: String, error: &Option<String>) -> String {
    match error {
        Some(error) => format!("{} - ERROR: {}", title, error),
        None => title,
    }
}

pub(crate) struct DishPicker {
    selected: usize,
}

impl DishPicker {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl ScalerState for DishPicker {
    fn render(&self, context: &ScalerContext, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(frame.area());

        let dish_names = context.cookbook.dish_names();
        let lines: Vec<Line> = if dish_names.is_empty() {
            vec![Line::from("No saved dishes yet")]
        } else {
            dish_names
                .into_iter()
                .enumerate()
                .map(|(i, name)| {
                    if i == self.selected {
                        Line::from(Span::styled(
                            format!("> {}", name),
                            Style::default().add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(format!("  {}", name))
                    }
                })
                .collect()
        };

        let dishes = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a dish (Enter to scale, N for a new dish, Esc to quit)"),
        );
        frame.render_widget(dishes, chunks[0]);

        let notice = Paragraph::new(context.notice.as_deref().unwrap_or_default())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, chunks[1]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ScalerContext,
    ) -> Option<Box<dyn ScalerState>> {
        let dish_count = context.cookbook.len();
        match key {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.selected + 1 < dish_count {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => {
                let dish_name = context.cookbook.dish_names().into_iter().nth(self.selected)?;
                let rows = context.cookbook.get(&dish_name)?.to_rows();

                context.clear_form();
                context.notice = None;
                context.dish_name = dish_name;
                context.rows = rows;
                context.locked = true;
                Some(Box::new(TargetWeight::new()))
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                context.clear_form();
                context.notice = None;
                Some(Box::new(DishName::new()))
            }
            _ => None,
        }
    }
}

pub(crate) struct DishName {
    current_input: String,
    error_message: Option<String>,
}

impl DishName {
    pub fn new() -> Self {
        Self::editing(String::new())
    }

    /// Start from an existing name, keeping the rows already entered
    pub fn editing(dish_name: String) -> Self {
        Self {
            current_input: dish_name,
            error_message: None,
        }
    }
}

impl ScalerState for DishName {
    fn render(&self, _context: &ScalerContext, frame: &mut Frame) {
        let title = with_error("Dish Name (Enter to Continue)".to_string(), &self.error_message);
        let block = Paragraph::new(self.current_input.as_str())
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(block, frame.area());
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ScalerContext,
    ) -> Option<Box<dyn ScalerState>> {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                self.error_message = None;
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message = None;
                None
            }
            KeyCode::Enter => {
                let dish_name = self.current_input.trim();
                if dish_name.is_empty() {
                    self.error_message = Some(ValidationError::MissingDishName.to_string());
                    return None;
                }

                context.dish_name = dish_name.to_string();
                Some(Box::new(IngredientList::new()))
            }
            _ => None,
        }
    }
}

pub(crate) struct IngredientList {
    current_input: String,
    error_message: Option<String>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
            error_message: None,
        }
    }
}

impl ScalerState for IngredientList {
    fn render(&self, context: &ScalerContext, frame: &mut Frame) {
        let title = with_error(
            "Ingredient name (Enter on empty to set the target weight)".to_string(),
            &self.error_message,
        );
        render_with_input(frame, context, &self.current_input, title);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ScalerContext,
    ) -> Option<Box<dyn ScalerState>> {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                self.error_message = None;
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message = None;
                None
            }
            KeyCode::Enter => {
                let ingredient_name = self.current_input.trim().to_string();

                if ingredient_name.is_empty() {
                    Some(Box::new(TargetWeight::new()))
                } else if context.rows.iter().any(|row| row.name == ingredient_name) {
                    self.error_message = Some(format!("'{}' already added", ingredient_name));
                    self.current_input.clear();
                    None
                } else {
                    Some(Box::new(IngredientQuantity::new(ingredient_name)))
                }
            }
            _ => None,
        }
    }
}

pub(crate) struct IngredientQuantity {
    current_input: String,
    ingredient: String,
}

impl IngredientQuantity {
    pub fn new(ingredient: String) -> Self {
        Self {
            ingredient,
            current_input: String::new(),
        }
    }
}

impl ScalerState for IngredientQuantity {
    fn render(&self, context: &ScalerContext, frame: &mut Frame) {
        let title = format!("Quantity for {} (e.g. 50g, 1tbsp)", self.ingredient);
        render_with_input(frame, context, &self.current_input, title);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ScalerContext,
    ) -> Option<Box<dyn ScalerState>> {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                let quantity = self.current_input.trim();
                if quantity.is_empty() {
                    return None;
                }

                context
                    .rows
                    .push(IngredientRow::new(self.ingredient.clone(), quantity));
                Some(Box::new(IngredientList::new()))
            }
            _ => None,
        }
    }
}

pub(crate) struct TargetWeight {
    current_input: String,
    error_message: Option<String>,
}

impl TargetWeight {
    pub fn new() -> Self {
        Self {
            current_input: String::new(),
            error_message: None,
        }
    }
}

impl ScalerState for TargetWeight {
    fn render(&self, context: &ScalerContext, frame: &mut Frame) {
        let title = with_error(
            "Target weight (Enter to calculate)".to_string(),
            &self.error_message,
        );
        render_with_input(frame, context, &self.current_input, title);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ScalerContext,
    ) -> Option<Box<dyn ScalerState>> {
        match key {
            KeyCode::Char(c) => {
                self.current_input.push(c);
                self.error_message = None;
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                self.error_message = None;
                None
            }
            KeyCode::Enter => {
                let scaled = parse_target_weight(&self.current_input).and_then(|weight| {
                    scale_recipe(&Recipe::from_rows(&context.rows), weight)
                });

                match scaled {
                    Ok(scaled) => {
                        context.scaled = Some(scaled);
                        Some(Box::new(Results))
                    }
                    Err(error) => {
                        self.error_message = Some(error.to_string());
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

pub(crate) struct Results;

impl ScalerState for Results {
    fn render(&self, context: &ScalerContext, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Scaled recipe
                Constraint::Length(5), // Warnings
                Constraint::Length(3), // Notice
            ])
            .split(frame.area());

        let (lines, warnings): (Vec<String>, Vec<String>) = match &context.scaled {
            Some(scaled) => (
                scaled.lines(),
                scaled.warnings.iter().map(ToString::to_string).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        let scaled_lines: Vec<Line> = lines.into_iter().map(Line::from).collect();
        let scaled_list = Paragraph::new(scaled_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Scaled recipe for {}", context.dish_name)),
        );
        frame.render_widget(scaled_list, chunks[0]);

        let warning_lines: Vec<Line> = warnings
            .into_iter()
            .map(|warning| {
                Line::from(Span::styled(
                    warning,
                    Style::default().add_modifier(Modifier::ITALIC),
                ))
            })
            .collect();
        let warning_list = Paragraph::new(warning_lines)
            .block(Block::default().borders(Borders::ALL).title("Warnings"));
        frame.render_widget(warning_list, chunks[1]);

        let help = if context.locked {
            "W new weight, D dishes"
        } else {
            "S save, E edit, W new weight, D dishes"
        };
        let notice = Paragraph::new(context.notice.as_deref().unwrap_or_default())
            .block(Block::default().borders(Borders::ALL).title(help));
        frame.render_widget(notice, chunks[2]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut ScalerContext,
    ) -> Option<Box<dyn ScalerState>> {
        match key {
            KeyCode::Char('s') | KeyCode::Char('S') if !context.locked => {
                context.save_requested = true;
                None
            }
            KeyCode::Char('e') | KeyCode::Char('E') if !context.locked => {
                context.scaled = None;
                Some(Box::new(DishName::editing(context.dish_name.clone())))
            }
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Box::new(TargetWeight::new())),
            KeyCode::Char('d') | KeyCode::Char('D') => {
                context.clear_form();
                Some(Box::new(DishPicker::new()))
            }
            _ => None,
        }
    }
}
