//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, format_weight};
use crate::commands::{AnalysisResult, SimulationReport, SolveResult};
use crate::solver::entropy::EntropyTable;
use crate::solver::{OptimizationResult, SimulationSummary};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            println!("  Expected:   {:.1} candidates", step.expected_remaining);

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        let reason = result
            .exhausted
            .map_or_else(String::new, |r| format!(" ({r})"));
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses{reason}",
                result.guesses.len()
            )
            .red()
            .bold()
        );
    }
}

/// Print the score breakdown of a word
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, result.total_candidates, 30);
    let b = &result.breakdown;

    println!("\n📊 Against {} dictionary words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", b.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.metrics.max_partition);

    println!("\n🧮 {}", "Components:".bright_cyan().bold());
    println!("   Letter frequency:      {:.0}", b.base);
    println!("   Positional frequency:  {:.0}", b.positional);
    println!("   Uniqueness:            {:.3}", b.uniqueness);
    println!(
        "   Composite score:       {}",
        format!("{:.3}", b.total).bright_yellow().bold()
    );
    if let Some(rank) = result.rank {
        println!("   Rank:                  {rank} of {}", result.total_candidates);
    }
}

/// Print batch statistics with the guess distribution
pub fn print_simulation_summary(report: &SimulationReport) {
    let summary: &SimulationSummary = &report.summary;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", summary.total_games);
    println!(
        "   Solved:           {} ({:.1}%)",
        summary.solved.to_string().green(),
        summary.success_rate() * 100.0
    );
    println!(
        "   Failed:           {} ({} out of guesses, {} no candidates)",
        summary.failed().to_string().red(),
        summary.out_of_guesses,
        summary.no_candidates
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", summary.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = summary
        .guess_distribution
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    for (i, &count) in summary.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {}: {} {count:5}", i + 1, bar.green());
    }
}

/// Print every grid point and the winner
pub fn print_optimization_result(result: &OptimizationResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WEIGHT OPTIMIZATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if verbose {
        println!("\n   w_base  w_pos  w_ent   avg     solved  failed");
        for point in &result.points {
            println!(
                "   {:>6}  {:>5}  {:>5}  {:>6.3}  {:>6}  {:>6}",
                format_weight(point.weights.base()),
                format_weight(point.weights.positional()),
                format_weight(point.weights.entropy()),
                point.average_attempts,
                point.solved,
                point.failed
            );
        }
    }

    let best = &result.best;
    println!(
        "\n🏆 Best: {} | avg {} ({} solved, {} failed)",
        best.weights.to_string().bright_white().bold(),
        format!("{:.3}", best.average_attempts).bright_yellow().bold(),
        best.solved,
        best.failed
    );
}

/// Print the top opening words of an entropy table
pub fn print_entropy_table(table: &EntropyTable, top: usize) {
    println!("\n🔝 {}", "Best opening words:".bright_cyan().bold());
    for (i, (word, entropy)) in table.ranked().into_iter().take(top).enumerate() {
        println!(
            "   {:>3}. {} {:.4} bits",
            i + 1,
            word.to_uppercase().bright_white(),
            entropy
        );
    }
}
