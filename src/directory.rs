use std::ffi::OsStr;

use itertools::Itertools;
use sysinfo::{Pid, Process, ProcessRefreshKind, RefreshKind, System};

use crate::prelude::*;
use crate::record::ProcessRecord;

/// Read-only view of the operating system's process table.
///
/// `get_by_id` distinguishes "no such process" (`Ok(None)`) from a failed
/// lookup (`Err`). The resolver treats both as terminal for a walk, but
/// callers may want to report them differently.
pub trait ProcessDirectory {
    fn list_by_name(&self, name: &str) -> Result<Vec<ProcessRecord>>;
    fn get_by_id(&self, pid: u32) -> Result<Option<ProcessRecord>>;
}

/// Process directory backed by a one-shot `sysinfo` snapshot of the live
/// process table. Records reflect the state at construction time.
pub struct SystemDirectory {
    system: System,
}

impl SystemDirectory {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::nothing().with_processes(ProcessRefreshKind::nothing()),
        );
        SystemDirectory { system }
    }
}

impl Default for SystemDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn to_record(process: &Process) -> ProcessRecord {
    ProcessRecord::new(
        process.pid().as_u32(),
        process.name().to_string_lossy().into_owned(),
        process.parent().map(|ppid| ppid.as_u32()),
    )
}

impl ProcessDirectory for SystemDirectory {
    fn list_by_name(&self, name: &str) -> Result<Vec<ProcessRecord>> {
        let records = self
            .system
            .processes_by_exact_name(OsStr::new(name))
            .map(to_record)
            .sorted_by_key(|record| record.pid)
            .collect();
        Ok(records)
    }

    fn get_by_id(&self, pid: u32) -> Result<Option<ProcessRecord>> {
        Ok(self.system.process(Pid::from_u32(pid)).map(to_record))
    }
}
