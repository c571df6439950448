//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Settings, Portfolio content, Messages)
//! - `controllers/` - Orchestration (theme, navigation, scroll effects, form, ...)
//! - `services/` - Pure operations (validation, geometry, counters, submission)
//! - `infrastructure/` - External integrations (platform probes, timers)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, Message, Portfolio, SectionId, Theme, ThemeMode};
pub use error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
