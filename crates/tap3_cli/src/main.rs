// tap3_cli/src/main.rs
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::env;

mod commands;

#[derive(Parser)]
#[command(name = "tap3_forge")]
#[command(about = "TAP3 roaming file validation toolchain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the mandatory-element rule check against a decoded TAP fixture
    Check(commands::check::CheckArgs),

    /// Validate a decoded TAP fixture and emit a RAP file on fatal errors
    Validate(commands::validate::ValidateArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables (.env) and wire up the log output
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => {
            // Check doesn't need the pool, keeping it pure logic.
            commands::check::execute(args)?;
        }
        Commands::Validate(args) => {
            let database_url = env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set in .env");

            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;
            commands::validate::execute(pool, args).await?;
        }
    }

    Ok(())
}
