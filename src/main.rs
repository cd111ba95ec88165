use anyhow::Result;
use clap::Parser;
use tracing::error;

use complainee::{feedback, keywords, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if args.init {
        return keywords::init_default_keywords();
    }

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let keywords = keywords::load_keywords(args.keywords.as_deref())?;
    let input = feedback::read_input(args.input.as_deref())?;

    let report = feedback::analyze_feedback(&input, &keywords);
    println!("{}", report);

    if let Some(path) = &args.output {
        feedback::save_report(&report, path)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
