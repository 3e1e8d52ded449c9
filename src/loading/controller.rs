//! Loading controller.
//!
//! # State Transitions
//! ```text
//! Idle → Loading: toggle(); schedules one completion after a random delay
//! Loading → Idle: toggle(); cancels the pending completion
//! Loading → Idle: completion fires; success notice follows after a short pause
//! ```
//!
//! Every transition starts a new episode. A completion only acts if its
//! episode is still current, so one that woke just before being cancelled
//! does nothing.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rand::Rng;
use tokio::sync::{mpsc, watch};
use uuid::Uuid;

use crate::config::LoadingConfig;
use crate::loading::deferred::Deferred;
use crate::loading::state::LoadingState;
use crate::notice::NoticeKind;
use crate::observability::metrics;

struct Inner {
    state: LoadingState,
    episode: u64,
    episode_id: Option<Uuid>,
    completion: Deferred,
}

struct Shared {
    inner: Mutex<Inner>,
    config: LoadingConfig,
    state_tx: watch::Sender<LoadingState>,
    notice_tx: mpsc::UnboundedSender<NoticeKind>,
}

/// Owner of the loading state and its pending completion.
///
/// Cheap to clone; clones share state. Must be used from within a Tokio runtime.
#[derive(Clone)]
pub struct LoadingController {
    shared: Arc<Shared>,
}

impl LoadingController {
    /// Create a controller in the `Idle` state.
    ///
    /// Returns the controller and a receiver for completion notices.
    pub fn new(config: LoadingConfig) -> (Self, mpsc::UnboundedReceiver<NoticeKind>) {
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();
        let (state_tx, _) = watch::channel(LoadingState::Idle);

        let shared = Shared {
            inner: Mutex::new(Inner {
                state: LoadingState::Idle,
                episode: 0,
                episode_id: None,
                completion: Deferred::new(),
            }),
            config,
            state_tx,
            notice_tx,
        };

        (Self { shared: Arc::new(shared) }, notice_rx)
    }

    /// Flip the state and return the new one.
    pub fn toggle(&self) -> LoadingState {
        let mut inner = self.shared.lock();
        if inner.completion.cancel() {
            metrics::record_loading_completion("cancelled");
            tracing::debug!(episode_id = ?inner.episode_id, "Pending completion cancelled");
        }
        let next = Shared::transition(&self.shared, &mut inner);
        // Published under the lock so watchers see transitions in order.
        self.shared.publish(next, "manual");
        next
    }

    pub fn state(&self) -> LoadingState {
        self.shared.lock().state
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Whether a completion is scheduled and has not run yet.
    pub fn has_pending_completion(&self) -> bool {
        self.shared.lock().completion.is_pending()
    }

    /// Watch state changes, e.g. to relabel the control.
    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.shared.state_tx.subscribe()
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("loading state mutex poisoned")
    }

    /// Flip the state under the lock, scheduling a completion when entering `Loading`.
    fn transition(this: &Arc<Self>, inner: &mut Inner) -> LoadingState {
        let next = inner.state.toggled();
        inner.state = next;
        inner.episode += 1;
        inner.episode_id = None;

        if next.is_loading() {
            let delay = this.draw_delay();
            let episode = inner.episode;
            let id = Uuid::new_v4();
            inner.episode_id = Some(id);

            tracing::debug!(episode_id = %id, delay_ms = delay.as_millis() as u64, "Completion scheduled");
            inner
                .completion
                .schedule(delay, Shared::complete(this.clone(), episode));
        }

        next
    }

    fn publish(&self, state: LoadingState, cause: &'static str) {
        self.state_tx.send_replace(state);
        metrics::record_loading_toggle(state.as_str(), state.is_loading());
        tracing::info!(state = state.as_str(), cause, "Loading toggled");
    }

    /// Uniform in `[min_delay_ms, max_delay_ms)`.
    fn draw_delay(&self) -> Duration {
        let LoadingConfig {
            min_delay_ms,
            max_delay_ms,
            ..
        } = self.config;

        let ms = if min_delay_ms < max_delay_ms {
            rand::thread_rng().gen_range(min_delay_ms..max_delay_ms)
        } else {
            min_delay_ms
        };
        Duration::from_millis(ms)
    }

    /// Body of the scheduled completion for `episode`.
    async fn complete(this: Arc<Self>, episode: u64) {
        {
            let mut inner = this.lock();
            // Already counted as cancelled by the toggle that superseded it.
            if inner.episode != episode || !inner.state.is_loading() {
                tracing::debug!(episode, current = inner.episode, "Stale completion ignored");
                return;
            }

            inner.completion.release();
            let next = Shared::transition(&this, &mut inner);
            this.publish(next, "completed");
            metrics::record_loading_completion("completed");
        }

        tokio::time::sleep(Duration::from_millis(this.config.notice_delay_ms)).await;
        if this.notice_tx.send(NoticeKind::Success).is_err() {
            tracing::debug!("Notice receiver dropped; completion notice discarded");
        }
    }
}
