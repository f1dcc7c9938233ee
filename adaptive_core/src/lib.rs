//! # Adaptive Core
//!
//! The content-selection engine of the adaptive storytelling system. This
//! crate builds on the data model in `story_model`, stores narrative
//! fragments in a knowledge graph, infers a user's current mood from their
//! choice history, and ranks content against their accumulated preferences.
//!
//! ## Core Components
//!
//! - **knowledge_graph**: Story elements and directed typed relationships
//! - **analysis**: Keyword-based mood impact scoring of raw choice text
//! - **engagement**: Response-latency classification and windowed mood inference
//! - **discovery**: Preference-driven recommendation and branching-path ranking
//! - **platform**: The facade the application layer calls per request
//!
//! ## Design Philosophy
//!
//! - **Profile-driven**: Every ranking decision derives from the user's
//!   accumulated choice history, not from per-request configuration
//! - **Deterministic**: All tie-breaks are pinned to mood declaration order
//!   and then element ID, so identical state always ranks identically
//! - **Forgiving lookups**: Unknown IDs and empty histories yield empty
//!   results or fallbacks, never errors

pub mod analysis;
pub mod discovery;
pub mod engagement;
pub mod knowledge_graph;
pub mod platform;

pub use analysis::*;
pub use discovery::*;
pub use engagement::*;
pub use knowledge_graph::*;
pub use platform::*;
