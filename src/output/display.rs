//! Display functions for command results

use super::formatters::{create_progress_bar, percentage};
use crate::commands::{AnalysisResult, SimulationResult};
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION RESULTS:".bright_cyan().bold(),
        result.guesser.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let win_pct = percentage(result.wins, result.total_games);

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Guesser wins:     {} ({win_pct:.1}%)",
        format!("{}", result.wins).green()
    );
    println!(
        "   Engine wins:      {} ({:.1}%)",
        format!("{}", result.losses).red(),
        100.0 - win_pct
    );
    println!(
        "   Letters/game:     {}",
        format!("{:.2}", result.average_letters)
            .bright_yellow()
            .bold()
    );
    println!("   Misses/game:      {:.2}", result.average_misses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if !result.by_length.is_empty() {
        println!("\n📈 {}", "Guesser win rate by word length:".bright_cyan().bold());
        for (length, stats) in &result.by_length {
            let pct = percentage(stats.wins, stats.games);
            let bar = create_progress_bar(pct, 100.0, 30);
            println!(
                "   {length:2}: {} {:4} games ({pct:5.1}%)",
                bar.green(),
                stats.games
            );
        }
    }

    if let Some(game) = &result.longest_game {
        println!("\n🏆 {}", "Longest game:".bright_cyan().bold());
        println!(
            "   {} letters on a {}-letter word, {} missed",
            game.letters_guessed, game.word_length, game.misses
        );
        if let Some(answer) = &game.final_answer {
            println!("   The word was {}", answer.bright_yellow().bold());
        }
    }
}

/// Print the result of a letter analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FAMILY ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Pattern {} with {} guesses left, {} candidates",
        result.pattern.bright_white().bold(),
        result.guesses_remaining,
        result.total_candidates
    );

    println!("\n{}", "Families:".bright_cyan().bold());
    for family in &result.families {
        let pct = percentage(family.size, result.total_candidates);
        let bar = create_progress_bar(pct, 100.0, 20);
        let marker = if family.selected { "▶" } else { " " };
        let line = format!(
            " {marker} {}  {} {:5} ({pct:5.1}%)  {}",
            family.key,
            bar,
            family.size,
            family.sample.join(", ")
        );

        if family.selected {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{line}");
        }
    }

    println!();
    if result.revealed {
        println!(
            "{}",
            format!("The engine would reveal {}.", result.letter).yellow()
        );
    } else {
        println!(
            "{}",
            format!("The engine would answer: no {}.", result.letter).red()
        );
    }
}
