use cg_manifest::application::dto::{FormatRequest, OutputFormat};
use cg_manifest::config::ConfigFile;
use cg_manifest::shared::Result;
use clap::Parser;
use std::path::PathBuf;

/// Format collected package inventories into component manifest records
#[derive(Parser, Debug)]
#[command(name = "cg-manifest")]
#[command(version)]
#[command(
    about = "Format collected package inventories into component manifest records",
    long_about = None
)]
pub struct Args {
    /// Inventory file (.json, .yml, .yaml or .toml) keyed by ecosystem tag
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output format: json or ndjson [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Distribution id reported on linux components, e.g. Debian
    #[arg(long, value_name = "ID", requires = "distro_version")]
    pub distro_id: Option<String>,

    /// Distribution release reported on linux components, e.g. 10
    #[arg(long, value_name = "VERSION", requires = "distro_id")]
    pub distro_version: Option<String>,

    /// Leave an ecosystem out of the manifest entirely
    /// Can be specified multiple times: -x pipx -x languages
    #[arg(short = 'x', long = "exclude-ecosystem", value_name = "TAG")]
    pub exclude_ecosystems: Vec<String>,

    /// Config file path (defaults to cg-manifest.config.yml next to the inventory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective settings after layering CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub request: FormatRequest,
}

impl Settings {
    /// CLI flag > config file > default, field by field
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = args
            .format
            .or_else(|| config.output_format())
            .unwrap_or_default();

        let excluded_ecosystems = if args.exclude_ecosystems.is_empty() {
            config.exclude_ecosystems.unwrap_or_default()
        } else {
            args.exclude_ecosystems
        };

        let builder = FormatRequest::builder()
            .inventory_path(args.input)
            .excluded_ecosystems(excluded_ecosystems);

        let builder = if args.distro_id.is_some() || args.distro_version.is_some() {
            builder
                .distro_id(args.distro_id)
                .distro_version(args.distro_version)
        } else {
            builder.distro(config.distro)
        };

        Ok(Self {
            format,
            output: args.output,
            request: builder.build()?,
        })
    }
}
