//! Console output formatter for search results

use colored::Colorize;
use jobscout_application::RESULT_CAPTION;
use jobscout_domain::{JobCategory, Notice, NoticeLevel, SearchResult};

/// Formats search results and notices for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (`--plain`)
    pub fn set_plain(plain: bool) {
        if plain {
            colored::control::set_override(false);
        }
    }

    /// Format a search result: heading, markdown verbatim, caption
    pub fn format(result: &SearchResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&result.heading()));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Fetched:".cyan().bold(),
            result.fetched_at.format("%Y-%m-%d %H:%M:%S")
        ));

        if result.is_fallback {
            output.push_str(&format!("{}\n", result.text.yellow()));
        } else {
            output.push_str(&result.text);
            output.push('\n');
        }

        output.push_str(&format!("\n{}\n", RESULT_CAPTION.dimmed()));
        output.push_str(&Self::footer());
        output
    }

    /// Format a single notice with a level marker
    pub fn format_notice(notice: &Notice) -> String {
        match notice.level {
            NoticeLevel::Info => format!("{} {}", "info:".blue().bold(), notice.message),
            NoticeLevel::Success => format!("{} {}", "ok:".green().bold(), notice.message),
            NoticeLevel::Warning => format!("{} {}", "warning:".yellow().bold(), notice.message),
            NoticeLevel::Error => format!("{} {}", "error:".red().bold(), notice.message),
        }
    }

    /// Format the category table printed by `--list-categories`
    pub fn format_categories() -> String {
        let mut output = Self::section_header("Job categories");
        for category in JobCategory::ALL {
            output.push_str(&format!(
                "  {:<18} {}\n{}\n",
                category.as_str().bold(),
                category.label(),
                Self::indent(category.search_query(), "                     ").dimmed()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
