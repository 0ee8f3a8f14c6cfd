//! Process root-ancestor resolution: given a process, walk parent links
//! upward and find the most distant ancestor that still shares its name.

mod display;
mod prelude;

pub mod app;
pub mod directory;
pub mod record;
pub mod resolver;

pub use directory::{ProcessDirectory, SystemDirectory};
pub use record::ProcessRecord;
pub use resolver::{find_root_ancestor, find_root_ancestors};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
