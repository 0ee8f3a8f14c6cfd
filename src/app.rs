use clap::{
    Parser, Subcommand,
    builder::{Styles, styling},
};

use crate::directory::{ProcessDirectory, SystemDirectory};
use crate::display;
use crate::prelude::*;
use crate::record::ProcessRecord;
use crate::resolver::{find_root_ancestor, find_root_ancestors};

fn create_styles() -> Styles {
    styling::Styles::styled()
        .header(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .usage(styling::AnsiColor::Green.on_default() | styling::Effects::BOLD)
        .literal(styling::AnsiColor::Cyan.on_default() | styling::Effects::BOLD)
        .placeholder(styling::AnsiColor::Cyan.on_default())
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find the topmost ancestor of a process that still shares its name",
    styles = create_styles()
)]
pub struct Cli {
    /// Print resolved roots as JSON instead of a table
    #[arg(long, env = "PROCROOT_JSON", global = true)]
    pub json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the root ancestor of every live process with this exact name
    Name { name: String },
    /// Resolve the root ancestor of the process with this pid
    Pid { pid: u32 },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let directory = SystemDirectory::new();

    let roots = match &cli.command {
        Commands::Name { name } => resolve_by_name(name, &directory)?,
        Commands::Pid { pid } => vec![resolve_by_id(*pid, &directory)?],
    };

    if cli.json {
        println!("{}", display::to_json(&roots)?);
    } else if roots.is_empty() {
        info!("No matching live process");
    } else {
        println!("{}", display::build_roots_table(&roots));
    }

    Ok(())
}

pub fn resolve_by_name(
    name: &str,
    directory: &impl ProcessDirectory,
) -> Result<Vec<ProcessRecord>> {
    if name.trim().is_empty() {
        bail!("process name must not be empty");
    }

    let starts = directory
        .list_by_name(name)
        .with_context(|| format!("failed to list processes named {name:?}"))?;
    if starts.is_empty() {
        // Not an error: an empty RootSet is the answer
        debug!("no live process named {name:?}");
        return Ok(vec![]);
    }

    Ok(find_root_ancestors(&starts, directory))
}

pub fn resolve_by_id(pid: u32, directory: &impl ProcessDirectory) -> Result<ProcessRecord> {
    if pid == 0 {
        bail!("pid must be a positive integer");
    }

    let start = directory
        .get_by_id(pid)
        .with_context(|| format!("failed to look up pid {pid}"))?
        .ok_or_else(|| anyhow!("no live process with pid {pid}"))?;

    Ok(find_root_ancestor(&start, directory))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct StaticDirectory {
        processes: HashMap<u32, ProcessRecord>,
    }

    impl StaticDirectory {
        fn new(records: Vec<ProcessRecord>) -> Self {
            StaticDirectory {
                processes: records.into_iter().map(|r| (r.pid, r)).collect(),
            }
        }
    }

    impl ProcessDirectory for StaticDirectory {
        fn list_by_name(&self, name: &str) -> Result<Vec<ProcessRecord>> {
            let mut records: Vec<_> = self
                .processes
                .values()
                .filter(|record| record.name == name)
                .cloned()
                .collect();
            records.sort_by_key(|record| record.pid);
            Ok(records)
        }

        fn get_by_id(&self, pid: u32) -> Result<Option<ProcessRecord>> {
            Ok(self.processes.get(&pid).cloned())
        }
    }

    fn worker_tree() -> StaticDirectory {
        StaticDirectory::new(vec![
            ProcessRecord::new(100, "worker", None),
            ProcessRecord::new(101, "worker", Some(100)),
            ProcessRecord::new(102, "worker", Some(101)),
        ])
    }

    #[test]
    fn test_cli_arguments_are_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_by_name_returns_the_shared_root_once() {
        let roots = resolve_by_name("worker", &worker_tree()).unwrap();
        assert_eq!(roots, vec![ProcessRecord::new(100, "worker", None)]);
    }

    #[test]
    fn test_resolve_by_name_with_no_match_is_an_empty_result() {
        let roots = resolve_by_name("ghost", &worker_tree()).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn test_resolve_by_name_rejects_a_blank_name() {
        assert!(resolve_by_name("  ", &worker_tree()).is_err());
    }

    #[test]
    fn test_resolve_by_id_walks_to_the_root() {
        let root = resolve_by_id(102, &worker_tree()).unwrap();
        assert_eq!(root.pid, 100);
    }

    #[test]
    fn test_resolve_by_id_rejects_pid_zero() {
        assert!(resolve_by_id(0, &worker_tree()).is_err());
    }

    #[test]
    fn test_resolve_by_id_reports_a_missing_process() {
        let err = resolve_by_id(999, &worker_tree()).unwrap_err();
        assert!(err.to_string().contains("no live process"));
    }
}
