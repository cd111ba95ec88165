use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "complainee",
    about = "Analyze email feedback batches for common complaint keywords",
    version,
    long_about = None
)]
pub struct Args {
    /// Input file with email records (JSON or CSV); stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Write the report to a file as well as stdout
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = "email_feedback_analysis_report.md",
        value_name = "PATH"
    )]
    pub output: Option<PathBuf>,

    /// Path to custom complaint keyword file
    #[arg(short, long)]
    pub keywords: Option<PathBuf>,

    /// Initialize complaint_keywords.txt with default keywords
    #[arg(long)]
    pub init: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
