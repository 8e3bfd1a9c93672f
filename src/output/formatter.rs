use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Band, ScoreReport};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Proportional bar for a pillar score, e.g. "████████░░░░".
fn render_bar(score: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (score as usize * width) / max as usize
    };
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

fn band_heading(band: Band, use_colors: bool) -> String {
    if !use_colors {
        return format!("{} - {}", band.label(), band.description());
    }
    let label = match band {
        Band::HighClarity => band.label().green().to_string(),
        Band::GoodPotential => band.label().cyan().to_string(),
        Band::DirectionForming => band.label().yellow().to_string(),
        Band::Exploration => band.label().magenta().to_string(),
        Band::LowClarity => band.label().dimmed().to_string(),
    };
    format!("{} - {}", label, band.description())
}

/// Format a full score report for the terminal.
///
/// Summary block (total, band, peer percentile) followed by one row per
/// pillar with a proportional bar. `show_details` appends each pillar's
/// per-rule detail strings, indented.
pub fn format_report(report: &ScoreReport, use_colors: bool, show_details: bool) -> String {
    // Bar shrinks on narrow terminals; pillar labels are up to 35 chars
    // and the score/weight columns take another ~15.
    let bar_width = match get_terminal_width() {
        Some(w) if w < 75 => 10,
        _ => 20,
    };

    let mut out = String::new();

    let total_line = format!("GC Score: {}/100", report.total_score);
    if use_colors {
        out.push_str(&format!("{}\n", total_line.bold()));
    } else {
        out.push_str(&total_line);
        out.push('\n');
    }
    out.push_str(&band_heading(report.band, use_colors));
    out.push('\n');
    out.push_str(&format!(
        "Top {}% in your peer group\n",
        100 - report.percentile
    ));
    out.push('\n');

    for (pillar, result) in report.pillars() {
        let bar = render_bar(result.score, result.max_score, bar_width);
        let row = format!(
            "{:<35} {:>2}/{:<2}  {}  ({})",
            pillar.label(),
            result.score,
            result.max_score,
            bar,
            pillar.weight_label()
        );
        out.push_str(&row);
        out.push('\n');

        if show_details {
            for detail in &result.details {
                if use_colors {
                    out.push_str(&format!("    - {}\n", detail.dimmed()));
                } else {
                    out.push_str(&format!("    - {}\n", detail));
                }
            }
        }
    }

    out
}
