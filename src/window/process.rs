//! Process command names from procfs

use std::path::PathBuf;

use super::{ProcessTable, ResolveError};

/// Reads `<root>/<pid>/comm`
#[derive(Debug, Clone)]
pub struct ProcFs {
    root: PathBuf,
}

impl ProcFs {
    pub fn new() -> Self {
        Self::with_root("/proc")
    }

    /// Use a different mount point, e.g. a fixture directory in tests
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for ProcFs {
    fn command_name(&self, pid: u32) -> Result<String, ResolveError> {
        let path = self.root.join(pid.to_string()).join("comm");
        std::fs::read_to_string(&path)
            .map_err(|source| ResolveError::ProcessUnavailable { pid, source })
    }
}
