use anyhow::Context;
use chrono::{Datelike, Local};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{debug, info, warn};

use crate::application::commands::utils::render_delivered;
use crate::application::handlers::{CommandHandler, HandlerOutcome};
use crate::application::services::{AgendaService, ReminderService};
use crate::config::AppConfig;
use crate::domain::entities::NotificationPolicy;
use crate::domain::repositories::AgendaRepository;
use crate::infrastructure::notifier::TokioNotifier;
use crate::infrastructure::repositories::MemoryAgendaRepository;

const PROMPT: &str = "> ";

/// Wires the agenda to the notifier and runs the input loop until `quit` or end of input
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let policy = NotificationPolicy {
        play_sound: config.play_sound,
        ..NotificationPolicy::default()
    };
    let (notifier, mut delivered) = TokioNotifier::new(policy, config.notifications_granted);
    let _delivery_loop = notifier.start();

    let reminders = ReminderService::new(notifier.clone());
    reminders.request_permission().await;

    let repo: Box<dyn AgendaRepository> = if config.seed_samples {
        Box::new(MemoryAgendaRepository::with_samples())
    } else {
        Box::new(MemoryAgendaRepository::new())
    };
    let today = Local::now().weekday();
    let mut handler = CommandHandler::new(AgendaService::new(repo, reminders, today));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut delivered_count = 0usize;

    write_block(
        &mut stdout,
        &format!(
            "Weekly agenda (type `help` for commands)\n\n{}",
            handler.render_screen()
        ),
    )
    .await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match handler.handle_line(&line).await {
                    HandlerOutcome::Reply(text) => write_block(&mut stdout, &text).await?,
                    HandlerOutcome::Quit => break,
                }
            }
            Some(reminder) = delivered.recv() => {
                delivered_count += 1;
                debug!("Displaying reminder {}", reminder.handle);
                if let Some(text) = render_delivered(&reminder, delivered_count) {
                    write_block(&mut stdout, &format!("\n{}", text)).await?;
                }
            }
        }
    }

    let pending = notifier.pending_count().await;
    if pending > 0 {
        warn!("Closing with {} pending reminder(s), they will not fire", pending);
    }
    info!("Agenda closed");
    Ok(())
}

async fn write_block(stdout: &mut Stdout, text: &str) -> anyhow::Result<()> {
    let mut out = String::with_capacity(text.len() + 4);
    if !text.is_empty() {
        out.push_str(text);
        out.push('\n');
    }
    out.push_str(PROMPT);

    stdout
        .write_all(out.as_bytes())
        .await
        .context("Failed to write to stdout")?;
    stdout.flush().await.context("Failed to flush stdout")?;
    Ok(())
}
