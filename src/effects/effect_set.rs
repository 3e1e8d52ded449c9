//! A set of named effects, some of which expire on their own.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Debug, Default)]
struct EffectState {
    /// Active effect name → generation that added it.
    active: BTreeMap<String, u64>,
    generation: u64,
}

/// Shared set of active effects.
///
/// Clones share state. Expiring effects need a Tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct EffectSet {
    state: Arc<Mutex<EffectState>>,
}

impl EffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, EffectState> {
        self.state.lock().expect("effect set mutex poisoned")
    }

    /// Add an effect that stays until removed.
    pub fn add(&self, name: &str) {
        let mut state = self.lock();
        state.generation += 1;
        let generation = state.generation;
        state.active.insert(name.to_string(), generation);
    }

    /// Add an effect and remove it after `duration`.
    ///
    /// Re-adding the same effect restarts its clock; the earlier expiry
    /// becomes a no-op.
    pub fn add_temporary(&self, name: &str, duration: Duration) {
        let generation = {
            let mut state = self.lock();
            state.generation += 1;
            let generation = state.generation;
            state.active.insert(name.to_string(), generation);
            generation
        };

        let this = self.clone();
        let name = name.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut state = this.lock();
            if state.active.get(&name) == Some(&generation) {
                state.active.remove(&name);
                tracing::trace!(effect = %name, "Temporary effect expired");
            }
        });
    }

    /// Returns whether the effect was active.
    pub fn remove(&self, name: &str) -> bool {
        self.lock().active.remove(name).is_some()
    }

    pub fn clear(&self) {
        self.lock().active.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().active.contains_key(name)
    }

    /// Active effect names in sorted order.
    pub fn active(&self) -> Vec<String> {
        self.lock().active.keys().cloned().collect()
    }
}
