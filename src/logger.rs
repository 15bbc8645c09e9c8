use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open (or reopen) the debug log. The terminal belongs to the UI, so nothing is echoed there.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    if let Ok(mut logger) = LOGGER.lock() {
        *logger = Some(file);
    }
    Ok(())
}

pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let _ = writeln!(file, "{}", format_line(message));
    }
}

fn format_line(message: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] {}", timestamp, message)
}

/// Routes the global log into a temporary file for the length of one test.
///
/// Tests that read the log hold the capture so they never see each other's `init`.
#[cfg(test)]
pub(crate) struct LogCapture {
    _guard: std::sync::MutexGuard<'static, ()>,
    dir: tempfile::TempDir,
}

#[cfg(test)]
static CAPTURE_GUARD: Mutex<()> = Mutex::new(());

#[cfg(test)]
impl LogCapture {
    pub(crate) fn start() -> Self {
        let guard = CAPTURE_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        init(&dir.path().join("quiz_debug.log")).unwrap();
        LogCapture { _guard: guard, dir }
    }

    pub(crate) fn contents(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("quiz_debug.log")).unwrap()
    }
}

#[cfg(test)]
impl Drop for LogCapture {
    fn drop(&mut self) {
        if let Ok(mut logger) = LOGGER.lock() {
            *logger = None;
        }
    }
}
