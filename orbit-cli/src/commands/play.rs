use colored::Colorize;
use orbit_core::{
    Catalog, LogEntry, PlaybackDriver, PlaybackEngine, PlaybackEventKind, PlaybackUpdate,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use super::{agent_name, is_json};
use crate::config::CliConfig;

pub async fn handle_play_command(
    config: &CliConfig,
    scenario: Option<String>,
    interval_ms: Option<u64>,
    format: &str,
) -> anyhow::Result<()> {
    let catalog = Arc::new(config.load_catalog()?);

    let period = match interval_ms {
        Some(0) => anyhow::bail!("--interval-ms must be greater than 0"),
        Some(ms) => Duration::from_millis(ms),
        None => config.tick_interval(),
    };

    let engine = match scenario.as_deref().or(config.default_scenario()) {
        Some(id) => PlaybackEngine::with_scenario(Arc::clone(&catalog), id)?,
        None => PlaybackEngine::new(Arc::clone(&catalog)),
    };

    let json = is_json(format);
    if !json {
        print_banner(&engine, period);
    }

    let mut driver = PlaybackDriver::new(engine, period);
    let (tx, mut rx) = mpsc::unbounded_channel::<PlaybackUpdate>();
    driver
        .subscribe(move |update| {
            let _ = tx.send(update.clone());
        })
        .await;

    driver.run().await;

    loop {
        tokio::select! {
            update = rx.recv() => {
                let Some(update) = update else { break };
                if json {
                    println!("{}", serde_json::to_string(&update)?);
                } else {
                    print_update(&catalog, &update);
                }
                if update.kind == PlaybackEventKind::Completed {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                driver.pause().await;
                let snapshot = driver.snapshot().await;
                debug!(cursor = snapshot.cursor, "Playback interrupted");
                if !json {
                    println!();
                    println!(
                        "  {} Interrupted at step {}/{}",
                        "!".yellow(),
                        snapshot.cursor,
                        snapshot.total
                    );
                }
                break;
            }
        }
    }

    Ok(())
}

fn print_banner(engine: &PlaybackEngine, period: Duration) {
    let scenario = engine.scenario();
    println!("{} {}", "▶".green().bold(), scenario.label.cyan().bold());
    println!(
        "  {}",
        format!(
            "{} - {} hand-offs, one every {} ms",
            scenario.id,
            scenario.len(),
            period.as_millis()
        )
        .dimmed()
    );
    println!();
}

fn print_update(catalog: &Catalog, update: &PlaybackUpdate) {
    match &update.kind {
        PlaybackEventKind::Advanced { entry } => {
            println!("{}", format_entry(catalog, entry, update.snapshot.total));
        }
        PlaybackEventKind::Completed => {
            println!();
            println!(
                "{} {}",
                "✓".green().bold(),
                format!("Delivered in {} steps", update.snapshot.total).green()
            );
        }
        _ => {}
    }
}

fn format_entry(catalog: &Catalog, entry: &LogEntry, total: usize) -> String {
    format!(
        "  {} {} {} {}  {}",
        format!("[{}/{}]", entry.step, total).dimmed(),
        agent_name(catalog, &entry.event.from),
        "→".blue(),
        agent_name(catalog, &entry.event.to),
        entry.event.note
    )
}
