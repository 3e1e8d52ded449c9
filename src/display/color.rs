//! Accent colours.

/// Accent colours a random pick is drawn from.
pub const ACCENT_COLORS: [&str; 6] = [
    "#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe",
];

/// Pick one accent colour uniformly at random.
pub fn random_color() -> &'static str {
    ACCENT_COLORS[fastrand::usize(..ACCENT_COLORS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_color_from_palette() {
        for _ in 0..100 {
            assert!(ACCENT_COLORS.contains(&random_color()));
        }
    }

    #[test]
    fn test_random_color_seeded() {
        fastrand::seed(7);
        let first: Vec<_> = (0..8).map(|_| random_color()).collect();
        fastrand::seed(7);
        let second: Vec<_> = (0..8).map(|_| random_color()).collect();
        assert_eq!(first, second);
    }
}
