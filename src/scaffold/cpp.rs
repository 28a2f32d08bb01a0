use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};

use super::{ScaffoldOutcome, ensure_file};

const TEST_DIR: &str = "tests";
const TEST_FILE: &str = "test_basic.cpp";
const TEST_TEMPLATE: &str = "cpp/test_basic.cpp";

/// Relative location of the placeholder smoke test.
pub fn test_file_path() -> Utf8PathBuf {
    Utf8Path::new(TEST_DIR).join(TEST_FILE)
}

/// Recreate `tests/test_basic.cpp` under `root` if it has gone missing.
pub fn ensure_test_file(root: &Utf8Path) -> Result<ScaffoldOutcome> {
    ensure_file(root, &test_file_path(), TEST_TEMPLATE)
}
