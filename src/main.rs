use anyhow::Context;
use clap::{Parser, Subcommand};
use recipe_scaler::{
    config::Config,
    controllers::{get_dish, list_dishes, parse_target_weight, save_dish, scale_recipe},
    logging,
    models::IngredientRow,
    store::SqliteStore,
};

/// Save dishes and scale them to a target weight
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List saved dishes
    List,
    /// Print a saved dish as entered
    Show { dish: String },
    /// Save a dish, replacing any dish with the same name
    Save {
        dish: String,
        /// Ingredients as `name=quantity`, e.g. `flour=50g`
        #[arg(required = true)]
        ingredients: Vec<IngredientRow>,
    },
    /// Scale a saved dish from its 100 unit base to a target weight
    Scale { dish: String, target_weight: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.config.log_filter, cli.config.log_file.as_deref())?;

    let store = SqliteStore::connect(&cli.config.database_url)
        .await
        .with_context(|| format!("Failed to open {}", cli.config.database_url))?;

    match cli.command {
        Command::List => {
            let dishes = list_dishes(&store).await?;
            if dishes.is_empty() {
                println!("No saved dishes.");
            }
            for dish in dishes {
                println!("{}", dish);
            }
        }
        Command::Show { dish } => {
            let recipe = get_dish(&store, &dish).await?;
            print!("{}", recipe);
        }
        Command::Save { dish, ingredients } => {
            save_dish(&store, &dish, &ingredients).await?;
            println!("Recipe for \"{}\" saved successfully.", dish.trim());
        }
        Command::Scale {
            dish,
            target_weight,
        } => {
            let target_weight = parse_target_weight(&target_weight)?;
            let recipe = get_dish(&store, &dish).await?;
            let scaled = scale_recipe(&recipe, target_weight)?;

            for warning in &scaled.warnings {
                eprintln!("{}", warning);
            }
            print!("{}", scaled);
        }
    }

    Ok(())
}
