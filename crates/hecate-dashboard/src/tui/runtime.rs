/*
[INPUT]:  Dashboard config, task API client, task creator, log buffer, shutdown token
[OUTPUT]: Ratatui-based TUI run loop
[POS]:    TUI runtime loop
[UPDATE]: When changing event sources, tick handling, or shutdown behaviour
*/

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use hecate_client::HecateClient;
use hecate_dashboard::TaskCreator;
use hecate_dashboard::config::DashboardConfig;
use hecate_dashboard::logging::LogBufferHandle;

use super::app::{AppEvent, AppState};
use super::events::handle_key_event;
use super::terminal::TerminalGuard;
use super::ui::draw_ui;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);
const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(15);
/// When set, exit after this many ticks (headless smoke runs).
const EXIT_AFTER_TICKS_ENV: &str = "HECATE_TUI_TEST_EXIT_AFTER_TICKS";

fn spawn_input_reader(event_tx: UnboundedSender<AppEvent>, shutdown: CancellationToken) {
    tokio::task::spawn_blocking(move || {
        while !shutdown.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(AppEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

fn spawn_health_probe(
    client: HecateClient,
    event_tx: UnboundedSender<AppEvent>,
    shutdown: CancellationToken,
) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(HEALTH_CHECK_INTERVAL);
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = interval.tick() => {
                    let reachable = match client.health().await {
                        Ok(()) => true,
                        Err(err) => {
                            debug!(error = %err, "health check failed");
                            false
                        }
                    };
                    if event_tx.send(AppEvent::Health(reachable)).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

fn exit_after_ticks() -> Option<u64> {
    std::env::var(EXIT_AFTER_TICKS_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
}

pub async fn run_tui(
    config: DashboardConfig,
    client: HecateClient,
    creator: Arc<dyn TaskCreator>,
    log_buffer: LogBufferHandle,
    shutdown: CancellationToken,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let tasks_shutdown = shutdown.child_token();

    spawn_input_reader(event_tx.clone(), tasks_shutdown.clone());
    spawn_health_probe(client, event_tx.clone(), tasks_shutdown.clone());

    let tick_interval = config.tick_interval();
    let mut app = AppState::new(
        creator,
        event_tx,
        log_buffer,
        config.clusters,
        config.ui.form_variant,
    );

    let mut tick = tokio::time::interval(tick_interval);
    let exit_after = exit_after_ticks();
    let mut ticks: u64 = 0;
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = shutdown.cancelled() => {
                should_quit = true;
            }
            _ = tick.tick() => {
                ticks += 1;
                if exit_after.is_some_and(|limit| ticks > limit) {
                    should_quit = true;
                }
            }
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(AppEvent::Input(CrosstermEvent::Key(key))) => {
                        if handle_key_event(&mut app, key) {
                            should_quit = true;
                        }
                    }
                    Some(AppEvent::Input(_)) => {}
                    Some(AppEvent::FormClosed { form_id }) => app.on_form_closed(form_id),
                    Some(AppEvent::SubmissionSettled { form_id, outcome }) => {
                        app.on_submission_settled(form_id, outcome);
                    }
                    Some(AppEvent::Health(reachable)) => app.on_health(reachable),
                    None => should_quit = true,
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    tasks_shutdown.cancel();
    if app.is_loading {
        info!("exiting with a task submission still in flight");
    }
    Ok(())
}
