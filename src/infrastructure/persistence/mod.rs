mod memory_store;
mod memory_tag_index;

pub use memory_store::MemoryAliasStore;
pub use memory_tag_index::MemoryTagIndex;
