//! # Story Model
//!
//! The narrative data model for the adaptive storytelling core. This crate
//! defines the mood taxonomy, story elements with per-mood affinity weights,
//! user choices, and the per-user preference profile that the engine crate
//! (`adaptive_core`) builds on.
//!
//! ## Core Types
//!
//! - **mood**: The closed 7-value mood taxonomy and engagement levels
//! - **element**: Story elements (characters, locations, items) and their relationships
//! - **choice**: Immutable user choice records with per-mood impact
//! - **profile**: Per-user accumulating preference state

pub mod choice;
pub mod element;
pub mod mood;
pub mod profile;

pub use choice::*;
pub use element::*;
pub use mood::*;
pub use profile::*;
