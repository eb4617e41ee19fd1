use agentlog_core::cli::run_tail;
use agentlog_core::conf::AgentlogConfig;
use agentlog_core::logging::OutputMode;
use agentlog_core::logs::ShutdownHandle;
use integration_tests::harness::{TestLogDir, line};
use pretty_assertions::assert_eq;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

async fn wait_for(buf: &SharedBuf, needle: &str) {
    for _ in 0..200 {
        if buf.text().contains(needle) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {needle:?}; got {:?}", buf.text());
}

fn fast_config() -> AgentlogConfig {
    AgentlogConfig {
        poll_interval_ms: 10,
        ..AgentlogConfig::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn replays_then_streams_appended_entries() {
    // Arrange
    let dir = TestLogDir::initialized();
    dir.append_lines([line("frontend", "UNCAUGHT_ERROR", "existing")]);
    let ctx = dir.context_with(fast_config(), OutputMode::Human);
    let shutdown = ShutdownHandle::new();
    let buf = SharedBuf::default();

    let signal = shutdown.subscribe();
    let mut sink = buf.clone();
    let task = tokio::spawn(async move { run_tail(&ctx, signal, &mut sink).await });

    // Act
    wait_for(&buf, "existing").await;
    dir.append_lines([line("backend", "NETWORK_ERROR", "appended")]);
    wait_for(&buf, "appended").await;
    shutdown.trigger();
    task.await.unwrap().unwrap();

    // Assert
    assert_eq!(
        buf.text(),
        "[2025-01-15T10:30:00Z] existing\n  Source: frontend | Type: UNCAUGHT_ERROR\n\n\
         [2025-01-15T10:30:00Z] appended\n  Source: backend | Type: NETWORK_ERROR\n\n"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn json_mode_emits_one_object_per_line() {
    let dir = TestLogDir::initialized();
    dir.append_lines([
        line("frontend", "UNCAUGHT_ERROR", "a"),
        "garbage".to_string(),
        line("frontend", "UNCAUGHT_ERROR", "b"),
    ]);
    let ctx = dir.context_with(fast_config(), OutputMode::Json);
    let shutdown = ShutdownHandle::new();
    let buf = SharedBuf::default();

    let signal = shutdown.subscribe();
    let mut sink = buf.clone();
    let task = tokio::spawn(async move { run_tail(&ctx, signal, &mut sink).await });

    wait_for(&buf, "\"b\"").await;
    shutdown.trigger();
    task.await.unwrap().unwrap();

    let messages: Vec<String> = buf
        .text()
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["message"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(messages, vec!["a", "b"]);
}

#[tokio::test]
async fn missing_log_prints_hint_and_returns() {
    let dir = TestLogDir::bare();
    let ctx = dir.context(OutputMode::Human);
    let shutdown = ShutdownHandle::new();
    let mut out = Vec::new();

    run_tail(&ctx, shutdown.subscribe(), &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "No errors file found. Run 'agentlog init' to set up.\n"
    );
}
