use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jni_codegen::{cli::Args, cli::ReportMode, Config, GenerationReport, RunSettings};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let cfg = Config::locate(args.config.as_deref())?;
    let settings = RunSettings::resolve(&args, cfg.as_ref())?;

    let schema = jni_codegen::load_schemas(&settings.schemas)?;
    let files = jni_codegen::generate(
        &settings.library_name,
        &schema,
        &settings.spec_name,
        &settings.platform,
    );

    if args.report != ReportMode::Off {
        let report =
            GenerationReport::build(&settings.library_name, &schema, &settings.platform, &files);
        eprint!("{}", report.render(args.report));
    }

    if args.dry_run {
        for (name, text) in &files {
            println!("// ----- {name} -----");
            print!("{text}");
        }
        return Ok(());
    }

    let written = jni_codegen::write_output_set(&settings.output_dir, &files)?;
    info!(
        output_dir = %settings.output_dir.display(),
        files = written.len(),
        "Generated JNI sources."
    );
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
