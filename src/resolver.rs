use std::collections::HashSet;

use crate::directory::ProcessDirectory;
use crate::prelude::*;
use crate::record::ProcessRecord;

/// Walk parent links upward from `start` and return the most distant
/// ancestor whose name equals `start`'s name.
///
/// The walk stops at the first parent that is missing, cannot be looked up,
/// has a different name, or was already visited (a cycle in the parent
/// chain). None of these conditions is an error: the last same-named
/// process seen is always returned, and `start` itself is the worst case.
pub fn find_root_ancestor(
    start: &ProcessRecord,
    directory: &impl ProcessDirectory,
) -> ProcessRecord {
    let mut visited = HashSet::from([start.pid]);
    let mut root = start.clone();

    loop {
        let Some(parent_pid) = root.parent_pid else {
            // Reached the top of the process tree
            return root;
        };

        let parent = match directory.get_by_id(parent_pid) {
            Ok(Some(parent)) => parent,
            Ok(None) => {
                debug!("parent {parent_pid} of {} no longer exists, stopping", root.pid);
                return root;
            }
            Err(err) => {
                // A failed lookup ends this walk but is not fatal: the
                // chain confirmed so far is still a valid answer.
                warn!("failed to look up parent {parent_pid} of {}: {err:#}", root.pid);
                return root;
            }
        };

        if visited.contains(&parent.pid) {
            debug!("cycle detected at pid {}, stopping at {}", parent.pid, root.pid);
            return root;
        }
        if parent.name != start.name {
            debug!(
                "parent {} is named {:?}, not {:?}, stopping at {}",
                parent.pid, parent.name, start.name, root.pid
            );
            return root;
        }

        visited.insert(parent.pid);
        root = parent;
    }
}

/// Resolve the root ancestor of every process in `starts`, deduplicated by
/// pid. Two starting processes that converge on the same root contribute a
/// single entry; first-seen order is preserved.
pub fn find_root_ancestors<'a>(
    starts: impl IntoIterator<Item = &'a ProcessRecord>,
    directory: &impl ProcessDirectory,
) -> Vec<ProcessRecord> {
    let mut seen = HashSet::new();
    let mut roots = Vec::new();
    for start in starts {
        let root = find_root_ancestor(start, directory);
        if seen.insert(root.pid) {
            roots.push(root);
        }
    }
    roots
}
