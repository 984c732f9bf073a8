mod git;
mod issue_map;
mod memory;
mod store;

pub use git::GitRepository;
pub use issue_map::{IssueCommitMap, IssuePattern};
pub use memory::MemoryRepository;
pub use store::SourceRepository;
