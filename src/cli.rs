use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jni-codegen", version, about)]
pub struct Args {
    /// Path to jni-codegen.toml (defaults to ./jni-codegen.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Library name used for the module provider and the Android.mk module
    #[arg(long)]
    pub library: Option<String>,

    /// Base name of the generated header (default: Native<Library>Spec)
    #[arg(long)]
    pub spec_name: Option<String>,

    /// Directory the generated files are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Target platform; modules excluding it are skipped (default: android)
    #[arg(long)]
    pub platform: Option<String>,

    /// Schema JSON file or glob pattern (repeatable)
    #[arg(long)]
    pub schema: Vec<String>,

    /// Print generated files to stdout instead of writing them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print a generation report to stderr
    #[arg(long, value_enum, default_value_t = ReportMode::Off)]
    pub report: ReportMode,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    Off,
    Summary,
    Full,
}
