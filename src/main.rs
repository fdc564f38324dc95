mod cli;

use cg_manifest::adapters::outbound::console::StderrProgressReporter;
use cg_manifest::adapters::outbound::filesystem::FileSystemReader;
use cg_manifest::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use cg_manifest::application::use_cases::FormatComponentsUseCase;
use cg_manifest::config::{self, ConfigFile};
use cg_manifest::ports::inbound::ComponentFormattingPort;
use cg_manifest::shared::error::ExitCode;
use cg_manifest::shared::Result;
use cli::{Args, Settings};
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref(), &args.input)?;
    let settings = Settings::resolve(args, config)?;

    let use_case = FormatComponentsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.format_components(settings.request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let rendered = FormatterFactory::create(settings.format).format(&response.entries)?;

    PresenterFactory::create(PresenterType::from_output(settings.output)).present(&rendered)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise look next to the inventory
fn load_config(explicit: Option<&Path>, inventory: &Path) -> Result<Option<ConfigFile>> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path).map(Some);
    }

    let dir = match inventory.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    };
    config::discover_config(dir)
}
