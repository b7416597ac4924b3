//! CLI command definitions

use clap::Parser;
use jobscout_application::CredentialPolicy;
use jobscout_domain::JobCategory;
use std::path::PathBuf;

/// CLI arguments for jobscout
#[derive(Parser, Debug)]
#[command(name = "jobscout")]
#[command(author, version, about = "Austin, TX job listings through Gemini web search")]
#[command(long_about = r#"
jobscout asks Gemini (with Google Search grounding) for current job postings
in Austin, TX and renders them as a markdown table.

Without --category an interactive form opens: enter your Gemini API key,
pick a category and start the search. With --category a single search runs
headless using the API key from the environment.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./jobscout.toml          Project-level config
3. ~/.config/jobscout/config.toml   Global config

Example:
  jobscout
  jobscout --credential-source memoized
  GEMINI_API_KEY=... jobscout --category teacher
  jobscout --list-categories
"#)]
pub struct Cli {
    /// Run one headless search for this category and exit
    /// (math-tutor, teacher, school-bus-driver)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<JobCategory>,

    /// How the API key is obtained (prompt, memoized, environment)
    #[arg(long, value_name = "SOURCE")]
    pub credential_source: Option<CredentialPolicy>,

    /// Gemini model to use (overrides config)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Disable colored output in headless mode
    #[arg(long)]
    pub plain: bool,

    /// List the job categories with their search queries and exit
    #[arg(long)]
    pub list_categories: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether this invocation runs one search without the form
    pub fn is_headless(&self) -> bool {
        self.category.is_some()
    }
}
