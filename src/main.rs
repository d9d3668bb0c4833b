use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use pdfdump::{PdfDumpConfig, run};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print the text of the bundled PDF documents",
    long_about = None
)]
struct Args {
    /// Log extraction details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file, falling back to defaults
    let loaded = PdfDumpConfig::load_from_file();
    let mut config = match &loaded {
        Ok(Some(c)) => c.clone(),
        _ => PdfDumpConfig::default(),
    };

    // 2. Override with CLI args
    if args.verbose {
        config.verbose = true;
    }

    init_logger(config.verbose);

    if let Err(e) = &loaded {
        log::warn!("{:#}; using defaults", e);
    }
    if let Err(e) = config.validate() {
        log::warn!("invalid configuration: {}; using defaults", e);
        config = PdfDumpConfig {
            verbose: config.verbose,
            ..Default::default()
        };
    }

    run(&config)?;

    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
