//! One-shot search without the interactive form

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::SearchSpinner;
use jobscout_application::SessionController;
use jobscout_domain::{JobCategory, SearchResult};
use std::io::{self, Write};

/// Run one search for `category` and write the result to `out`.
///
/// Returns `None` when the session was not ready (no credential).
pub async fn run_once<W: Write>(
    controller: &mut SessionController,
    category: JobCategory,
    model: &str,
    quiet: bool,
    out: &mut W,
) -> io::Result<Option<SearchResult>> {
    if !controller.select_category(category) {
        for notice in controller.take_notices() {
            writeln!(out, "{}", ConsoleFormatter::format_notice(&notice))?;
        }
        return Ok(None);
    }

    let spinner = SearchSpinner::start(category, model, quiet);
    let result = controller.run_search().await;
    if let Some(result) = &result {
        spinner.finish(result);
    }

    for notice in controller.take_notices() {
        writeln!(out, "{}", ConsoleFormatter::format_notice(&notice))?;
    }
    if let Some(result) = &result {
        write!(out, "{}", ConsoleFormatter::format(result))?;
    }
    out.flush()?;
    Ok(result)
}
