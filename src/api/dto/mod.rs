pub mod health;
pub mod link;
pub mod shorten;
pub mod tag;
