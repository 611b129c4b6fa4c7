use std::fs;
use std::path::{Path, PathBuf};

/// Maximum number of accepted submissions per installation.
pub const TRIAL_CEILING: u32 = 50;

/// File name of the persisted counter slot inside the data directory.
pub const TRIALS_FILE: &str = "chat_trials";

/// File-backed submission counter.
///
/// One non-negative integer stored as a decimal string. Reads fail open
/// to 0 and writes are best-effort; a crash between increment and the
/// next read loses at most the last increment. Single-session access
/// assumed, no locking.
#[derive(Debug)]
pub struct TrialCounter {
    path: PathBuf,
    value: u32,
}

impl TrialCounter {
    /// Read the persisted value; absent, unreadable, or non-integer
    /// content all yield 0. Never errors.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let value = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);
        Self { path, value }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::open(data_dir.join(TRIALS_FILE))
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    pub fn limit_reached(&self) -> bool {
        self.value >= TRIAL_CEILING
    }

    pub fn remaining(&self) -> u32 {
        TRIAL_CEILING.saturating_sub(self.value)
    }

    /// Increment in memory and write the new value back synchronously.
    /// Write failures are swallowed.
    pub fn increment_and_persist(&mut self) -> u32 {
        self.value += 1;
        let _ = fs::write(&self.path, self.value.to_string());
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_file_reads_as_zero() {
        let dir = TempDir::new().unwrap();
        let counter = TrialCounter::in_dir(dir.path());
        assert_eq!(counter.get(), 0);
        assert!(!counter.limit_reached());
        assert_eq!(counter.remaining(), TRIAL_CEILING);
    }

    #[test]
    fn garbage_content_fails_open_to_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TRIALS_FILE);
        fs::write(&path, "not-a-number").unwrap();
        assert_eq!(TrialCounter::open(&path).get(), 0);

        fs::write(&path, "-3").unwrap();
        assert_eq!(TrialCounter::open(&path).get(), 0);
    }

    #[test]
    fn increment_persists_for_a_fresh_instance() {
        let dir = TempDir::new().unwrap();
        let mut counter = TrialCounter::in_dir(dir.path());
        assert_eq!(counter.increment_and_persist(), 1);
        assert_eq!(counter.increment_and_persist(), 2);

        let reread = TrialCounter::in_dir(dir.path());
        assert_eq!(reread.get(), 2);
    }

    #[test]
    fn stored_value_is_decimal_string() {
        let dir = TempDir::new().unwrap();
        let mut counter = TrialCounter::in_dir(dir.path());
        counter.increment_and_persist();
        let raw = fs::read_to_string(dir.path().join(TRIALS_FILE)).unwrap();
        assert_eq!(raw, "1");
    }

    #[test]
    fn write_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-subdir").join(TRIALS_FILE);
        let mut counter = TrialCounter::open(missing);
        // Returns the in-memory value even though the write failed.
        assert_eq!(counter.increment_and_persist(), 1);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn ceiling_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TRIALS_FILE), TRIAL_CEILING.to_string()).unwrap();
        let counter = TrialCounter::in_dir(dir.path());
        assert!(counter.limit_reached());
        assert_eq!(counter.remaining(), 0);
    }
}
