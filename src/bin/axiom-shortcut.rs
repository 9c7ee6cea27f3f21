//! Creates a desktop shortcut for the Axiom browser.

use axiom::shortcut;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Create a desktop shortcut for Axiom")]
struct Args {
    /// Directory to search for the program and icon (default: Downloads)
    #[arg(long)]
    start_dir: Option<PathBuf>,

    /// Icon file name to look for
    #[arg(long, default_value = "AxiomLogo.ico")]
    icon: String,

    /// Program file name to look for
    #[arg(long, default_value = default_program())]
    program: String,

    /// Shortcut name on the desktop
    #[arg(long, default_value = "Axiom")]
    name: String,

    /// Desktop directory override
    #[arg(long)]
    desktop: Option<PathBuf>,
}

fn default_program() -> &'static str {
    if cfg!(windows) {
        "axiom.exe"
    } else {
        "axiom"
    }
}

fn run(args: Args) -> Result<PathBuf, axiom::error::ShortcutError> {
    let start = args
        .start_dir
        .or_else(shortcut::downloads_dir)
        .ok_or(axiom::error::ShortcutError::NoHome)?;

    let icon = shortcut::find_file(&args.icon, &start)?;
    let program = shortcut::find_file(&args.program, &start)?;
    let desktop = match args.desktop {
        Some(dir) => dir,
        None => shortcut::desktop_dir()?,
    };
    shortcut::create_shortcut(&program, &icon, &desktop, &args.name)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(path) => {
            println!("Shortcut created at: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "no shortcut created");
            ExitCode::FAILURE
        }
    }
}
