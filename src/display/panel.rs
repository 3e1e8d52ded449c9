//! Result panels.

use std::fmt::Write as _;

use serde::Serialize;

/// How a panel should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Success,
    Error,
    Info,
}

/// Border and background colors for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub border: &'static str,
    pub background: &'static str,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Success => "success",
            ResultKind::Error => "error",
            ResultKind::Info => "info",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ResultKind::Success => Palette {
                border: "#28a745",
                background: "#d4edda",
            },
            ResultKind::Error => Palette {
                border: "#dc3545",
                background: "#f8d7da",
            },
            ResultKind::Info => Palette {
                border: "#667eea",
                background: "#e7f3ff",
            },
        }
    }
}

/// A block of text with a kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub kind: ResultKind,
    pub lines: Vec<String>,
}

impl Panel {
    pub fn new(kind: ResultKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    pub fn success(lines: Vec<String>) -> Self {
        Self::new(ResultKind::Success, lines)
    }

    pub fn error(line: impl Into<String>) -> Self {
        Self::new(ResultKind::Error, vec![line.into()])
    }

    pub fn info(lines: Vec<String>) -> Self {
        Self::new(ResultKind::Info, lines)
    }

    /// Render with a left border bar; `color` adds 24-bit ANSI styling.
    pub fn render(&self, color: bool) -> String {
        let bar = if color {
            match hex_to_rgb(self.kind.palette().border) {
                Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m▌\x1b[0m"),
                None => "▌".to_string(),
            }
        } else {
            "▌".to_string()
        };

        let mut out = String::new();
        for line in &self.lines {
            let _ = writeln!(out, "{bar} {line}");
        }
        out
    }
}

/// Parse `#rrggbb`.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
