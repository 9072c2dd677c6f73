use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use sqlx::PgPool;

use tap3_core::codec::{JsonCodec, TapDecoder};
use tap3_core::validation::TapValidationResult;
use tap3_service::{RapService, Settings};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the decoded TAP interchange fixture (JSON)
    #[arg(short, long)]
    pub file: PathBuf,
}

pub async fn execute(pool: PgPool, args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Validating: {:?}", args.file);

    let bytes = fs::read(&args.file)
        .map_err(|e| format!("Failed to read file: {e}"))?;
    let interchange = JsonCodec
        .decode(&bytes)
        .map_err(|e| format!("Decode error: {e}"))?;

    let settings = Settings::from_env()?;
    let service = RapService::new(pool, settings, Arc::new(JsonCodec));

    let mut validator = service.validator();
    let result = validator.validate(&interchange).await;

    match result {
        TapValidationResult::TapValid => {
            println!("🎉 TAP VALID. No rejection produced.");
        }
        TapValidationResult::FatalError => {
            println!("⚠️  FATAL ERROR. RAP file created and registered.");
            if let Some(sequence) = validator.rap_sequence_number() {
                println!("   RAP sequence number: {sequence}");
            }
            if let Some(file_id) = validator.rap_file_id() {
                println!("   Catalogue file id: {file_id}");
            }
        }
        TapValidationResult::ValidationImpossible => {
            println!("🛑 VALIDATION IMPOSSIBLE. No RAP file could be produced.");
            println!("   See the log output for the failing step.");
        }
    }

    Ok(())
}
