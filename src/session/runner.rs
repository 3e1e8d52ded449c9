//! Interactive session: routes commands to components and prints panels.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, mpsc};

use crate::calculator::{calculate_all, evaluate, parse_operand};
use crate::config::LabConfig;
use crate::display::{random_color, Panel};
use crate::effects::{AnimatedBox, FlipCard};
use crate::loading::{LoadingController, LoadingState};
use crate::notice::{Key, Modal, NoticeKind};
use crate::scope::ScopeContext;
use crate::session::command::{Command, SessionError, HELP};

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Show(Vec<Panel>),
    Quit,
}

/// All component state behind one terminal.
pub struct Session {
    scope: ScopeContext,
    loading: LoadingController,
    modal: Modal,
    card: FlipCard,
    animated_box: AnimatedBox,
}

impl Session {
    /// Create a session. Returns it with the loading notice receiver.
    pub fn new(config: &LabConfig) -> (Self, mpsc::UnboundedReceiver<NoticeKind>) {
        let (loading, notices) = LoadingController::new(config.loading.clone());
        let session = Self {
            scope: ScopeContext::new(),
            loading,
            modal: Modal::new(),
            card: FlipCard::new(),
            animated_box: AnimatedBox::new(Duration::from_millis(
                config.effects.effect_duration_ms,
            )),
        };
        (session, notices)
    }

    pub fn loading(&self) -> &LoadingController {
        &self.loading
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn animated_box(&self) -> &AnimatedBox {
        &self.animated_box
    }

    /// Parse and handle one input line. Parse errors become error panels.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(SessionError::Empty) => Reply::Show(Vec::new()),
            Err(e) => {
                tracing::debug!(line, error = %e, "Rejected command");
                Reply::Show(vec![Panel::error(e.to_string())])
            }
        }
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        let panels = match command {
            Command::Calc { lhs, rhs } => match calculate_all(&lhs, &rhs) {
                Ok(report) => vec![Panel::success(report.lines())],
                Err(e) => vec![Panel::error(e.notice())],
            },
            Command::Eval { lhs, rhs, op } => {
                match parse_operand(&lhs).and_then(|a| parse_operand(&rhs).map(|b| (a, b))) {
                    Ok((a, b)) => vec![Panel::success(evaluate(a, b, &op).lines(a, b))],
                    Err(e) => vec![Panel::error(e.notice())],
                }
            }
            Command::Scope => vec![Panel::info(self.scope.demonstrate().lines())],
            Command::Toggle => {
                let state = self.loading.toggle();
                vec![loading_panel(state)]
            }
            Command::Modal(kind) => {
                self.modal.open(kind);
                self.modal.panel().into_iter().collect()
            }
            Command::Close => {
                self.modal.close();
                Vec::new()
            }
            Command::Escape => {
                self.modal.handle_key(Key::Escape);
                Vec::new()
            }
            Command::Flip => {
                self.card.flip();
                vec![Panel::info(vec![format!("Card is now {}", self.card.face())])]
            }
            Command::Animate(animation) => {
                self.animated_box.animate(animation);
                vec![Panel::info(vec![self.animated_box.label().to_string()])]
            }
            Command::Reset => {
                self.animated_box.reset();
                vec![Panel::info(vec![self.animated_box.label().to_string()])]
            }
            Command::Color => vec![Panel::info(vec![format!("Accent: {}", random_color())])],
            Command::Help => vec![Panel::info(HELP.iter().map(|l| l.to_string()).collect())],
            Command::Quit => return Reply::Quit,
        };
        Reply::Show(panels)
    }

    /// Show a notice raised outside the command flow.
    pub fn notify(&mut self, kind: NoticeKind) -> Vec<Panel> {
        self.modal.open(kind);
        self.modal.panel().into_iter().collect()
    }
}

fn loading_panel(state: LoadingState) -> Panel {
    Panel::info(vec![format!(
        "Loading: {} [{} {}]",
        state.as_str(),
        state.button_label(),
        state.button_color()
    )])
}

/// Drive a session from line input until EOF, `quit` or shutdown.
pub async fn run<R, W>(
    mut session: Session,
    input: R,
    mut output: W,
    mut notices: mpsc::UnboundedReceiver<NoticeKind>,
    mut shutdown: broadcast::Receiver<()>,
    color: bool,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut state_changes = session.loading().subscribe();
    let mut shown = *state_changes.borrow_and_update();
    tracing::info!("Session started");

    loop {
        let panels = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    let before = session.loading().state();
                    match session.handle_line(&line) {
                        Reply::Show(panels) => {
                            // A toggle renders its own loading panel.
                            let after = session.loading().state();
                            if after != before {
                                shown = after;
                            }
                            panels
                        }
                        Reply::Quit => break,
                    }
                }
                None => {
                    tracing::debug!("Input closed");
                    break;
                }
            },
            Ok(()) = state_changes.changed() => {
                let state = *state_changes.borrow_and_update();
                if state == shown {
                    Vec::new()
                } else {
                    shown = state;
                    vec![loading_panel(state)]
                }
            }
            Some(kind) = notices.recv() => session.notify(kind),
            _ = shutdown.recv() => {
                tracing::info!("Session received shutdown signal, exiting loop");
                break;
            }
        };

        for panel in panels {
            output.write_all(panel.render(color).as_bytes()).await?;
        }
        output.flush().await?;
    }

    tracing::info!("Session ended");
    Ok(())
}
