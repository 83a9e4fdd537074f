#![forbid(unsafe_code)]

//! Configuration resolver and event model for LA.IO partner badges.
//!
//! Design goals:
//! - untrusted embed attributes always resolve to a safe, bounded [`BadgeConfig`]
//! - no panics and no errors on the embed path; invalid input falls back to defaults
//! - the same event model on both ends of the wire (badge runtime and collector)

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod ingest;
pub mod palette;
pub mod sanitize;

pub use color::{DEFAULT_COLOR, HexColor};
pub use config::{BadgeConfig, BadgeLayout, BadgeSize, EmbedAttributes, Slug, TargetId};
pub use error::{Error, IngestError, Result, ValidationError};
pub use event::{EMBED_VERSION, EventKind, PageContext, TrackPayload};

#[cfg(test)]
mod tests;
