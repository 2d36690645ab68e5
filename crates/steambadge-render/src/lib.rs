#![forbid(unsafe_code)]

//! Badge rendering: pixel-estimated text wrapping, canvas sizing, and SVG/HTML
//! template substitution.
//!
//! The whole render path is a pure function of a [`DisplayFields`] record (plus
//! the timestamp in the trailing render comment) — no I/O, no shared state, no
//! suspension points. Concurrent renders need no coordination.
//!
//! [`DisplayFields`]: steambadge_core::DisplayFields

pub mod html;
pub mod layout;
pub mod svg;
pub mod text;

pub use html::render_html;
pub use layout::{LayoutPlan, TextLayout, lay_out};
pub use svg::{Template, compose, escape_xml};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("template is missing required token: {token}")]
    TemplateMissingToken { token: String },
}

pub type Result<T> = std::result::Result<T, Error>;
