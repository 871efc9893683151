use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use authfuzz::telemetry;
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();

        if std::env::var("TEST_LOG").is_ok() {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        } else {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            telemetry::init_subscriber(subscriber).expect("Failed to init tracing");
        };
    });
}

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a bunyan subscriber writing into memory and returns what it
/// logged alongside `f`'s result.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber =
        telemetry::get_subscriber("test".to_string(), "info".to_string(), logs.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, logs.contents())
}

/// A throwaway corpus folder under the system temp dir.
pub struct TestCorpus {
    pub dir: PathBuf,
}

impl TestCorpus {
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("authfuzz-corpus-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("Failed to create corpus folder");
        Self { dir }
    }

    pub fn add(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, data).expect("Failed to write test case");
        path
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl Drop for TestCorpus {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
