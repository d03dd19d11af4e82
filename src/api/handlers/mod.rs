mod health;
mod links;
mod resolve;
mod shorten;
mod tag;

pub use health::health_handler;
pub use links::{delete_link_handler, update_link_handler};
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
pub use tag::add_tag_handler;
