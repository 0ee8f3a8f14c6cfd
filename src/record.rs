use serde::{Deserialize, Serialize};

/// Immutable snapshot of a single process at the moment it was fetched.
///
/// `parent_pid` is `None` when the process has no live parent (a process
/// table root, or a parent that already exited). A raw parent pid of zero
/// is normalized to `None` as well.
#[derive(Eq, PartialEq, Hash, Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub parent_pid: Option<u32>,
}

impl ProcessRecord {
    pub fn new(pid: u32, name: impl Into<String>, parent_pid: Option<u32>) -> Self {
        ProcessRecord {
            pid,
            name: name.into(),
            // Zero is the "no parent" marker in raw process tables
            parent_pid: parent_pid.filter(|&ppid| ppid != 0),
        }
    }
}
