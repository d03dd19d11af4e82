mod alias_store;
mod tag_index;

pub use alias_store::AliasStore;
pub use tag_index::TagIndex;

#[cfg(test)]
pub use alias_store::MockAliasStore;
#[cfg(test)]
pub use tag_index::MockTagIndex;
