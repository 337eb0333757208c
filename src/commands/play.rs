//! Interactive play command
//!
//! Suggests a guess each turn and reads the feedback the game showed.

use crate::solver::entropy::calculate_metrics;
use crate::solver::{Context, GuessSelector, Session, SessionStatus, Strategy};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run an interactive session over `input` and `out`
///
/// Returns the final status, or `None` if the player quit or input ended
/// first.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<S, R, W>(
    ctx: &Context,
    selector: &GuessSelector<S>,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<SessionStatus>>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    let mut session = Session::new(ctx, selector);

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "WORDLE ASSISTANT".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "After each guess, enter the feedback pattern:")?;
    writeln!(out, "  - G or 🟩 for green (correct position)")?;
    writeln!(out, "  - Y or 🟨 for yellow (wrong position)")?;
    writeln!(out, "  - B, - or ⬛ for gray (not in word)")?;
    writeln!(out, "  - N if the game rejected the word, Q to quit\n")?;

    loop {
        let Ok(guess) = session.suggest() else {
            return Ok(Some(session.status()));
        };

        let metrics = calculate_metrics(guess, session.candidates());
        writeln!(out, "{}", "─".repeat(60))?;
        writeln!(
            out,
            "Guesses left: {} | Candidates: {}",
            session.remaining_guesses(),
            session.candidates().len()
        )?;
        writeln!(
            out,
            "Suggested guess: {}  ({:.3} bits, worst case {})",
            guess.text().to_uppercase().bright_yellow().bold(),
            metrics.entropy,
            metrics.max_partition
        )?;
        if session.candidates().len() <= 10 {
            let listed: Vec<String> = session
                .candidates()
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            writeln!(out, "Remaining: {}", listed.join(", "))?;
        }

        let status = loop {
            let Some(line) = prompt(input, out, "Feedback")? else {
                return Ok(None);
            };
            if matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit") {
                return Ok(None);
            }

            match session.submit(&line) {
                Ok(status) => break status,
                Err(e) => writeln!(out, "{} {e}", "Invalid feedback:".red())?,
            }
        };

        match status {
            SessionStatus::Continue => {}
            SessionStatus::Solved { guesses } => {
                writeln!(
                    out,
                    "\n{}",
                    format!("✅ Solved in {guesses} guesses!").green().bold()
                )?;
                for (i, (word, pattern)) in session.history().iter().enumerate() {
                    writeln!(
                        out,
                        "  {}. {} {}",
                        i + 1,
                        word.text().to_uppercase(),
                        pattern.to_emoji()
                    )?;
                }
                return Ok(Some(status));
            }
            SessionStatus::Exhausted(reason) => {
                writeln!(out, "\n{}", format!("❌ Game over: {reason}").red().bold())?;
                return Ok(Some(status));
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
