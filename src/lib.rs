//! # URL Alias Service
//!
//! A small service that resolves short aliases to long URLs and manages
//! their lifecycle: creation (random or custom code), expiry, mutation,
//! deletion, and tagging.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and the expiry reaper
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory storage
//! - **API Layer** ([`api`]) - REST API handlers and DTOs
//!
//! ## Features
//!
//! - Random or caller-chosen short codes with atomic uniqueness enforcement
//! - Per-link expiry (whole hours), evaluated at read time
//! - Background reaper that physically removes expired links
//! - Tagging via a secondary index, independent of the primary record
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{LinkRecord, LinkUpdate};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
