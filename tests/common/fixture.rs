use std::{path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::{self, TempDir};

/// Path within a temporary directory. The directory is removed once the fixture is dropped.
pub struct Fixture {
    path: PathBuf,
    _tempdir: TempDir,
}

impl Fixture {
    /// Reserve `name` within a fresh temporary directory, without creating it.
    pub fn blank(name: &str) -> Self {
        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let path = tempdir.path().join(name);
        Fixture { _tempdir: tempdir, path }
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.path.deref()
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.to_str().expect("Invalid path (non UTF8 characters ?)"))
    }
}
