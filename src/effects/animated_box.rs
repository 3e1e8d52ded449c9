//! The animated box.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::effects::effect_set::EffectSet;

/// Label shown when no animation is running.
pub const RESTING_LABEL: &str = "Animated Box";

/// Animations the box supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    Bounce,
    Shake,
    /// Runs until reset.
    Glow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown animation `{0}` (expected bounce, shake or glow)")]
pub struct UnknownAnimation(pub String);

impl Animation {
    pub const ALL: [Animation; 3] = [Animation::Bounce, Animation::Shake, Animation::Glow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Animation::Bounce => "bounce",
            Animation::Shake => "shake",
            Animation::Glow => "glow",
        }
    }

    /// Whether the animation reverts on its own.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Animation::Glow)
    }

    /// Label shown while the animation runs.
    pub fn progress_label(&self) -> &'static str {
        match self {
            Animation::Bounce => "Bouncing...",
            Animation::Shake => "Shaking...",
            Animation::Glow => "Glowing...",
        }
    }
}

impl FromStr for Animation {
    type Err = UnknownAnimation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Animation::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAnimation(s.to_string()))
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A box that plays one animation at a time.
#[derive(Debug, Clone)]
pub struct AnimatedBox {
    effects: EffectSet,
    duration: Duration,
}

impl AnimatedBox {
    /// `duration` is how long transient animations stay applied.
    pub fn new(duration: Duration) -> Self {
        Self {
            effects: EffectSet::new(),
            duration,
        }
    }

    /// Replace any running animation with `animation`.
    pub fn animate(&self, animation: Animation) {
        for a in Animation::ALL {
            self.effects.remove(a.as_str());
        }

        if animation.is_transient() {
            self.effects.add_temporary(animation.as_str(), self.duration);
        } else {
            self.effects.add(animation.as_str());
        }
        tracing::debug!(animation = %animation, "Box animation started");
    }

    /// Stop everything and restore the resting label.
    pub fn reset(&self) {
        self.effects.clear();
        tracing::debug!("Box reset");
    }

    /// The running animation, if any.
    pub fn current(&self) -> Option<Animation> {
        Animation::ALL
            .into_iter()
            .find(|a| self.effects.contains(a.as_str()))
    }

    pub fn label(&self) -> &'static str {
        self.current()
            .map_or(RESTING_LABEL, |a| a.progress_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animated_box() -> AnimatedBox {
        AnimatedBox::new(Duration::from_millis(1000))
    }

    #[test]
    fn test_parse_animation() {
        assert_eq!("shake".parse::<Animation>(), Ok(Animation::Shake));
        assert_eq!(
            "spin".parse::<Animation>(),
            Err(UnknownAnimation("spin".into()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounce_reverts() {
        let b = animated_box();
        b.animate(Animation::Bounce);
        assert_eq!(b.current(), Some(Animation::Bounce));
        assert_eq!(b.label(), "Bouncing...");

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(b.current(), None);
        assert_eq!(b.label(), RESTING_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_glow_persists_until_reset() {
        let b = animated_box();
        b.animate(Animation::Glow);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(b.label(), "Glowing...");

        b.reset();
        assert_eq!(b.current(), None);
        assert_eq!(b.label(), RESTING_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_animation_replaces_old() {
        let b = animated_box();
        b.animate(Animation::Glow);
        b.animate(Animation::Shake);
        assert_eq!(b.current(), Some(Animation::Shake));

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(b.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_supersedes_pending_revert() {
        let b = animated_box();
        b.animate(Animation::Bounce);
        b.reset();

        tokio::time::sleep(Duration::from_millis(500)).await;
        b.animate(Animation::Bounce);

        // The first revert fires at 1000ms and must not cut the second short.
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(b.current(), Some(Animation::Bounce));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(b.current(), None);
    }
}
