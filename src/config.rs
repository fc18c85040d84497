use std::path::PathBuf;

use clap::Args;

/// Settings shared by every binary, read from flags or the environment
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// SQLite database holding the saved dishes
    #[arg(long, env = "RECIPE_SCALER_DATABASE_URL", default_value = "sqlite://recipes.db")]
    pub database_url: String,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, env = "RECIPE_SCALER_LOG", default_value = "info")]
    pub log_filter: String,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "RECIPE_SCALER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
