use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use recipe_scaler::{
    config::Config,
    controllers::{load_saved_recipes, save_dish},
    logging,
    store::SqliteStore,
    tui::app::{AppAction, ScalerApp},
};

/// Interactive dish entry and scaling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging to the terminal would draw over the UI
    let log_file = args
        .config
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from("recipe-scaler.log"));
    logging::init(&args.config.log_filter, Some(&log_file))?;

    let store = SqliteStore::connect(&args.config.database_url)
        .await
        .with_context(|| format!("Failed to open {}", args.config.database_url))?;
    let mut app = ScalerApp::new(load_saved_recipes(&store).await?);

    enable_raw_mode()?;
    let result = setup_and_run(&mut app, &store).await;

    // Cleanup terminal even if setup or the loop failed
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;

    result
}

async fn setup_and_run(app: &mut ScalerApp, store: &SqliteStore) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run(&mut terminal, app, store).await
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut ScalerApp,
    store: &SqliteStore,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key.code) {
                AppAction::Continue => {}
                AppAction::SaveDish => {
                    let context = app.context();
                    let result = save_dish(store, &context.dish_name, &context.rows).await;
                    app.save_finished(result);
                }
                AppAction::Exit => return Ok(()),
            }
        }
    }
}
