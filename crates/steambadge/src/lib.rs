#![forbid(unsafe_code)]

//! `steambadge` renders a Steam profile stats badge as SVG (or an HTML
//! fragment) from a plain record of display fields.
//!
//! The heavy lifting lives in the member crates — `steambadge-core` for the
//! data model and service plumbing types, `steambadge-render` for the text
//! layout engine and template substitution. This facade re-exports both and
//! adds [`render::Renderer`], a convenience wrapper that holds a validated
//! template.

pub use steambadge_core::*;

pub mod render {
    pub use steambadge_render::{
        LayoutPlan, Template, TextLayout, compose, escape_xml, lay_out, render_html,
    };

    use steambadge_core::DisplayFields;

    #[derive(Debug, thiserror::Error)]
    pub enum BadgeError {
        #[error(transparent)]
        Core(#[from] steambadge_core::Error),
        #[error(transparent)]
        Render(#[from] steambadge_render::Error),
    }

    pub type Result<T> = std::result::Result<T, BadgeError>;

    /// A badge renderer bound to one template.
    ///
    /// Rendering is a pure function of the field record; a `Renderer` is
    /// cheap to clone and safe to share across concurrent requests.
    #[derive(Debug, Clone, Default)]
    pub struct Renderer {
        template: Template,
    }

    impl Renderer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Uses a caller-supplied template instead of the built-in one. The
        /// source is validated here, once, so per-request rendering cannot
        /// fail later.
        pub fn with_template_source(source: impl Into<String>) -> Result<Self> {
            Ok(Self {
                template: Template::from_source(source)?,
            })
        }

        pub fn template(&self) -> &Template {
            &self.template
        }

        /// Renders the SVG badge (`image/svg+xml`).
        pub fn render_svg(&self, fields: &DisplayFields) -> String {
            compose(fields, &self.template)
        }

        /// Renders the HTML fragment variant.
        pub fn render_html(&self, fields: &DisplayFields) -> String {
            render_html(fields)
        }
    }
}
