use clap::Args;
use std::fs;
use std::path::PathBuf;

use tap3_core::codec::{JsonCodec, TapDecoder};
use tap3_core::validation::{check, CheckOutcome};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to the decoded TAP interchange fixture (JSON)
    #[arg(short, long)]
    pub file: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Checking: {:?}", args.file);

    let bytes = fs::read(&args.file)
        .map_err(|e| format!("Failed to read file: {e}"))?;

    let interchange = match JsonCodec.decode(&bytes) {
        Ok(interchange) => interchange,
        Err(e) => {
            eprintln!("❌ FATAL: the file is not a decodable TAP interchange.");
            eprintln!("Error: {e}");
            return Ok(()); // Exit gracefully with error printed
        }
    };

    println!("✅ Structure OK. Running TD.57 mandatory-element rules...");

    match check(&interchange) {
        CheckOutcome::Valid => {
            println!("🎉 TAP VALID!");
            println!("No fatal errors found. This batch is ready for loading.");
        }
        CheckOutcome::Unaddressable(reason) => {
            println!("🛑 VALIDATION IMPOSSIBLE");
            println!("   {reason}");
            println!("   No RAP file could be addressed for this input.");
        }
        CheckOutcome::Violation(violation) => {
            println!("⚠️  FATAL ERROR: a RAP file would be produced.");
            println!("{:-<50}", "-");
            println!("🛑 [{}] scope: {}", violation.code.value(), violation.scope);
            println!("   Msg: {}", violation.message);
            println!("   Detail: {}", serde_json::to_string(&violation)?);
            println!("{:-<50}", "-");
        }
    }

    Ok(())
}
