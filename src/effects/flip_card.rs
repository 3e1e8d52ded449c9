//! A two-faced card.

/// Card that shows its back after a flip.
#[derive(Debug, Default)]
pub struct FlipCard {
    flipped: bool,
}

impl FlipCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the card over; returns whether it now shows its back.
    pub fn flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        tracing::info!("Card is now {}", self.face());
        self.flipped
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn face(&self) -> &'static str {
        if self.flipped {
            "flipped"
        } else {
            "normal"
        }
    }
}
