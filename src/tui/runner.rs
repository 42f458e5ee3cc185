//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render → handle events → process actions → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::state::PendingAction;
use super::views::render;
use crate::browser::{self, LinkOpener, SystemOpener};
use crate::submission::{self, SimulatedSubmitter, Submitter};
use eyre::Result;
use log::{info, warn};

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    submitter: Box<dyn Submitter>,
    opener: Box<dyn LinkOpener>,
}

impl TuiRunner {
    /// Create a runner with the simulated submitter and the system browser
    pub fn new(terminal: Tui, app: App, submission_delay_ms: u64) -> Self {
        let event_handler = EventHandler::new(app.tui_config().tick_rate_ms);
        Self {
            terminal,
            app,
            event_handler,
            submitter: Box::new(SimulatedSubmitter::new(submission_delay_ms)),
            opener: Box::new(SystemOpener),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(&self.app, f))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                Event::Tick => self.app.on_tick(),
                Event::Resize(_, _) => {}
            }

            self.process_pending_action().await?;

            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }

    async fn process_pending_action(&mut self) -> Result<()> {
        let Some(action) = self.app.state_mut().pending_action.take() else {
            return Ok(());
        };

        match action {
            PendingAction::Submit => {
                self.app.begin_submission();
                // Show the in-flight state before waiting on the submitter
                self.terminal.draw(|f| render(&self.app, f))?;

                let mut form = std::mem::take(&mut self.app.state_mut().submit.form);
                let outcome = submission::submit_form(&mut form, self.app.catalog(), self.submitter.as_ref()).await;
                match &outcome {
                    Ok(ack) => info!("Submission accepted: {}", ack.reference),
                    Err(e) => warn!("Submission failed: {}", e),
                }
                self.app.state_mut().submit.form = form;
                self.app.finish_submission(&outcome);
            }
            PendingAction::OpenLink { tool_id, kind } => {
                let outcome = match self.app.catalog().require_tool(&tool_id) {
                    Ok(tool) => browser::open_link(self.opener.as_ref(), tool, kind).map(str::to_string),
                    Err(e) => Err(e),
                };
                if let Err(e) = &outcome {
                    warn!("Failed to open {} link for {}: {}", kind, tool_id, e);
                }
                self.app.finish_open_link(outcome);
            }
        }

        Ok(())
    }
}
