//! Interactive terminal board.
//!
//! Same behavior as the web board, driven from a terminal: paste a URL, get a
//! short link, and watch every link count down. The list is redrawn in place
//! once per second while the prompt waits for input.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin console
//! cargo run --bin console -- --origin https://s.example.com
//! ```
//!
//! An empty line submits nothing; Ctrl-D quits.
//! All links are discarded on exit.

use linkdrop::config::normalize_origin;
use linkdrop::domain::expiry_clock::TICK_INTERVAL;
use linkdrop::prelude::*;

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Input, console::Term};
use std::sync::Arc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing_subscriber::EnvFilter;

/// Screen rows above the list: title, origin, hint, blank line.
const BOARD_TOP: usize = 4;

/// Terminal board for short links that expire after 30 minutes.
#[derive(Parser)]
#[command(name = "console")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Origin used as the prefix of generated short links
    #[arg(long, default_value = "http://localhost:3000")]
    origin: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let origin = normalize_origin(&cli.origin)?;
    let service = LinkService::new(Arc::new(InMemoryLinkRepository::new()), origin);
    let term = Term::stdout();

    loop {
        draw(&term, &service).await?;

        // Prompt off the event loop so countdown tasks keep ticking while waiting.
        let mut pending = tokio::task::spawn_blocking(prompt);
        let mut ticker = tokio::time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let answer = loop {
            tokio::select! {
                joined = &mut pending => break joined?,
                _ = ticker.tick() => redraw_list(&term, &service.entries().await)?,
            }
        };

        let Ok(input) = answer else { break };
        service.submit(&input).await;
    }

    term.write_line(&"Bye. All links discarded.".dimmed().to_string())?;

    Ok(())
}

fn prompt() -> dialoguer::Result<String> {
    Input::<String>::new()
        .with_prompt("URL")
        .allow_empty(true)
        .interact_text()
}

/// Clears the screen and prints the header and list; the prompt follows below.
async fn draw(term: &Term, service: &BoardService) -> std::io::Result<()> {
    let entries = service.entries().await;

    term.clear_screen()?;
    term.write_line(&"linkdrop".bold().cyan().to_string())?;
    term.write_line(&format!("Short links under {}", service.origin()).dimmed().to_string())?;
    term.write_line(
        &"Paste a URL and press Enter. Ctrl-D quits."
            .dimmed()
            .to_string(),
    )?;
    term.write_line("")?;

    for line in list_lines(&entries) {
        term.write_line(&line)?;
    }
    term.write_line("")
}

/// Rewrites the list rows in place, leaving the cursor in the prompt.
fn redraw_list(term: &Term, entries: &[LinkSnapshot]) -> std::io::Result<()> {
    term.write_str("\x1b7")?;
    for (i, line) in list_lines(entries).iter().enumerate() {
        term.move_cursor_to(0, BOARD_TOP + i)?;
        term.clear_line()?;
        term.write_str(line)?;
    }
    term.write_str("\x1b8")?;
    term.flush()
}

fn list_lines(entries: &[LinkSnapshot]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No links yet.".dimmed().to_string()];
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, snapshot)| {
            let countdown = match snapshot.countdown.display() {
                CountdownDisplay::Expired => "Expired".red().bold(),
                counting => counting.to_string().yellow(),
            };

            format!(
                "{:>3}. {}  {:>7}  {}",
                i + 1,
                snapshot.entry.short_url().cyan(),
                countdown,
                snapshot.entry.original_url().dimmed()
            )
        })
        .collect()
}
