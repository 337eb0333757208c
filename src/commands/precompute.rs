//! Opening entropy precomputation command

use crate::solver::Context;
use crate::solver::entropy::EntropyTable;
use indicatif::ProgressBar;
use std::time::Duration;

/// Score every dictionary word against the full dictionary
#[must_use]
pub fn precompute_opening(ctx: &Context, show_progress: bool) -> EntropyTable {
    let spinner = if show_progress {
        let spinner = ProgressBar::new_spinner();
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Scoring {} words...", ctx.len()));
        spinner
    } else {
        ProgressBar::hidden()
    };

    let all = ctx.candidates();
    let table = EntropyTable::compute(&all, &all);
    spinner.finish_with_message(format!("Scored {} words", table.len()));
    table
}
