//! Hermetic end-to-end test environment
//!
//! Each environment owns a temp data directory and builds commands that
//! point the real binary at it, so tests never touch the user's catalogue.

use assert_cmd::Command;
use tempfile::TempDir;

pub struct TestEnvironment {
    data_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("temp data dir"),
        }
    }

    /// A morsel invocation scoped to this environment's data dir
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("morsel").expect("morsel binary");
        cmd.env("MORSEL_DATA_DIR", self.data_dir.path());
        cmd.env("MORSEL_LOG_LEVEL", "0");
        cmd.env("MORSEL_COLOR", "never");
        cmd
    }

    /// Shrink the catalogue so assertions stay readable and fast
    pub fn seed_small(&self) {
        self.command()
            .args(["seed", "--food", "60", "--cocktails", "10"])
            .assert()
            .success();
    }

    /// Parse a persisted key's JSON document
    pub fn read_key(&self, file_name: &str) -> serde_json::Value {
        let path = self.data_dir.path().join(file_name);
        let payload = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
        serde_json::from_str(&payload).unwrap_or_else(|e| panic!("parse {file_name}: {e}"))
    }

    pub fn key_exists(&self, file_name: &str) -> bool {
        self.data_dir.path().join(file_name).is_file()
    }

    /// Overwrite a persisted key with an arbitrary payload (corruption tests)
    pub fn write_key_raw(&self, file_name: &str, payload: &str) {
        std::fs::write(self.data_dir.path().join(file_name), payload).expect("write key");
    }

    /// Typed view of a persisted recipe list
    pub fn read_recipes(&self, file_name: &str) -> Vec<morsel_lib::Recipe> {
        serde_json::from_value(self.read_key(file_name)).expect("recipes parse")
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
