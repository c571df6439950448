//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Application settings and theme preference
//! - Portfolio content (sections, projects, certificates, stats)
//! - Message types for the event system

pub mod content;
pub mod messages;
pub mod settings;

pub use content::{
    Certificate, Contact, Owner, Portfolio, PreviewKind, Project, SectionId, SkillGroup, Stat,
};
pub use messages::{FieldId, Message, Severity};
pub use settings::{AppSettings, Theme, ThemeMode};
