#![forbid(unsafe_code)]

//! Data model and plumbing types for the steambadge renderer.
//!
//! The rendering core (`steambadge-render`) consumes a plain [`DisplayFields`]
//! record and has no knowledge of where its strings come from. This crate owns
//! that record plus the surrounding-service concerns that stay useful without
//! any network code: locale label tables, Steam id recognition, the status
//! palette, avatar data-URI helpers, and an injectable TTL cache for resolved
//! profiles.

pub mod avatar;
pub mod cache;
pub mod error;
pub mod fields;
pub mod locale;
pub mod status;
pub mod steamid;

pub use avatar::FALLBACK_AVATAR;
pub use cache::{ProfileCache, TtlCache};
pub use error::{Error, Result};
pub use fields::{DisplayFields, Stat, Theme};
pub use locale::{Labels, labels_for};
pub use status::StatusKind;
pub use steamid::{SteamId64, SteamIdKind};
