mod link;

pub use link::{LinkRecord, LinkUpdate};
