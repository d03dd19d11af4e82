pub mod reaper;
pub mod services;
