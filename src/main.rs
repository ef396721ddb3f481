use std::process;

use clap::Parser;
use copilot_header_fix::commands::fix::{self, Progress};
use copilot_header_fix::patch::{PatchOutcome, MANUAL_FIX_URL};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "copilot-header-fix")]
#[command(about = "Let VS Code's GitHub Copilot Chat use newer models by removing the x-onbehalf-extension-id header")]
#[command(version)]
struct Cli {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    println!("Fixing GitHub Copilot Chat model support in VS Code...");

    let result = fix::run_on_host(Some(|p: Progress<'_>| match p {
        Progress::ExtensionsDir(path) => println!("VS Code extensions: {}", path.display()),
        Progress::ExtensionFound(path) => println!("Found GitHub Copilot Chat: {}", path.display()),
        Progress::BackedUp(path) => println!("Original file backed up to: {}", path.display()),
        Progress::Patching(path) => println!("Patching {}", path.display()),
    }));

    match result {
        Ok(report) => match report.outcome {
            PatchOutcome::Patched { .. } => {
                println!();
                println!("Fix applied. Restart VS Code for the change to take effect.");
                println!();
                println!("Notes:");
                println!("1. If the model is still unavailable, check that your API key is set up correctly.");
                println!("2. Updates to GitHub Copilot Chat undo this fix; run the tool again afterwards.");
                println!(
                    "3. To restore the original, rename {} back to {}.",
                    report.backup.display(),
                    report.script.display()
                );
            }
            PatchOutcome::PatternNotFound => {
                println!("Warning: the code to remove was not found; the extension may have been updated or already patched.");
                println!();
                println!("Fix not applied. See {} to make the change by hand.", MANUAL_FIX_URL);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
