//! Services layer - pure operations with no widget dependencies.
//!
//! This module contains the logic the controllers orchestrate:
//! - Field validation rules
//! - Scroll geometry (active section, visibility, anchor targets)
//! - Stat counter animation arithmetic
//! - Contact form submission

pub mod counters;
pub mod sections;
pub mod submit;
pub mod validation;
