//! Shared utilities for integration tests.

use std::time::Duration;

use tokio::io::{AsyncWriteExt, BufReader, DuplexStream};
use tokio::task::JoinHandle;

use interactive_lab::config::LabConfig;
use interactive_lab::lifecycle::Shutdown;
use interactive_lab::session::{self, Session};

/// Config with a fixed one-second loading delay.
pub fn fixed_delay_config() -> LabConfig {
    let mut config = LabConfig::default();
    config.loading.min_delay_ms = 1000;
    config.loading.max_delay_ms = 1001;
    config.loading.notice_delay_ms = 300;
    config
}

/// A session running on its own task, fed through an in-memory pipe.
pub struct SessionHarness {
    pub input: DuplexStream,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<String>,
}

impl SessionHarness {
    pub fn start(config: &LabConfig) -> Self {
        let (input, session_side) = tokio::io::duplex(4096);
        let shutdown = Shutdown::new();
        let shutdown_rx = shutdown.subscribe();
        let (lab, notices) = Session::new(config);

        let handle = tokio::spawn(async move {
            let mut output = Vec::new();
            session::run(
                lab,
                BufReader::new(session_side),
                &mut output,
                notices,
                shutdown_rx,
                false,
            )
            .await
            .expect("session failed");
            String::from_utf8(output).expect("non-utf8 output")
        });

        Self {
            input,
            shutdown,
            handle,
        }
    }

    pub async fn send(&mut self, line: &str) {
        self.input.write_all(line.as_bytes()).await.unwrap();
        self.input.write_all(b"\n").await.unwrap();
        // Let the session task pick the line up.
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    /// Quit and return everything the session printed.
    pub async fn finish(mut self) -> String {
        self.send("quit").await;
        self.handle.await.unwrap()
    }
}
