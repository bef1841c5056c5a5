use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use aa_lsm_hook::cli::{Args, OutputFormat};
use aa_lsm_hook::output::{
    format_directories, format_directories_json, format_report, format_report_json,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging(args.verbose);

    let resolver = args.resolver();

    if args.check {
        let report = resolver.inspect();
        match args.format {
            OutputFormat::Text => print!("{}", format_report(&report)),
            OutputFormat::Json => println!("{}", format_report_json(&report)),
        }
        if report.has_failures() || report.directories().is_empty() {
            std::process::exit(1);
        }
        return;
    }

    match resolver.resolve() {
        Ok(dirs) => match args.format {
            OutputFormat::Text => print!("{}", format_directories(&dirs)),
            OutputFormat::Json => println!("{}", format_directories_json(&dirs)),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(path) = e.path()
                && !e.partial().is_empty()
            {
                eprintln!(
                    "Note: {} profile director{} resolved before {} failed; the list is incomplete",
                    e.partial().len(),
                    if e.partial().len() == 1 { "y was" } else { "ies were" },
                    path.display()
                );
            }
            std::process::exit(1);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
