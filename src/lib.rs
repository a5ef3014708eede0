//! Renders the header of a volume page in a digital library.
//!
//! # Features
//!
//! - The volume title, linked to the volume landing page except when the
//!   current request *is* the landing page.
//! - The optional volume label and the volume dates.
//! - Optional RDFa attributes for structured-data consumers.
//! - A volume search form, inline or behind a collapsed toggle, and an
//!   optional annotation search form, both provided as named partials.
//! - Render to a [`String`] or any [`std::io::Write`] implementor.
//! - Deserialize the context from any [`serde`] format.
//!
//! # Getting started
//!
//! Your entry point is the [`Renderer`] struct. The renderer stores the
//! [`Settings`], the [`Router`] used to compute volume URLs and the partials.
//! Generally, you only need to construct one renderer during the lifetime of
//! a program.
//!
//! ```
//! let renderer = volume_header::Renderer::new();
//! ```
//!
//! Next, build a [`HeaderContext`] for the request and render it.
//!
//! ```
//! use volume_header::{HeaderContext, Renderer, Volume};
//!
//! let renderer = Renderer::new();
//!
//! let vol = Volume::new("emory:7tk5v", "The Lost Colony")
//!     .with_date("1923")
//!     .with_date("1925");
//! let ctx = HeaderContext::new(vol).with_request_path("/books/");
//!
//! let html = renderer.render(&ctx)?;
//! assert!(html.contains(r#"<a href="/books/emory:7tk5v/">The Lost Colony</a>"#));
//! assert!(html.contains("(1923); (1925)"));
//! # Ok::<(), volume_header::Error>(())
//! ```
//!
//! # Examples
//!
//! ### Render using deserialized data
//!
//! The context can be deserialized from whatever the view layer produces.
//! Optional values follow template truthiness, so for example a page object
//! can be passed as `page`.
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! let ctx: volume_header::HeaderContext = serde_json::from_str(r#"{
//!     "vol": { "pid": "emory:7tk5v", "title": "The Lost Colony", "date": "1923" },
//!     "request_path": "/books/emory:7tk5v/pages/emory:b/",
//!     "page": { "number": 3 }
//! }"#).unwrap();
//!
//! let html = volume_header::Renderer::new().render(&ctx)?;
//! assert!(html.contains(r#"class="search-toggle""#));
//! # }
//! # Ok::<(), volume_header::Error>(())
//! ```
//!
//! ### Provide the annotation search form
//!
//! ```
//! use std::fmt::Write;
//! use volume_header::{HeaderContext, Renderer, Volume, ANNOTATION_SEARCH_FORM};
//!
//! let mut renderer = Renderer::new();
//! renderer.add_partial(ANNOTATION_SEARCH_FORM, |f, _| {
//!     f.write_str("<form>annotations</form>")?;
//!     Ok(())
//! });
//!
//! let ctx = HeaderContext::new(Volume::new("emory:1", "Lorem")).with_annotation_search(true);
//! assert!(renderer.render(&ctx)?.contains("<form>annotations</form>"));
//! # Ok::<(), volume_header::Error>(())
//! ```
//!
//! ### Render to an `impl io::Write`
//!
//! ```
//! use std::io;
//! use volume_header::{HeaderContext, Renderer, Volume};
//!
//! let stdout = io::BufWriter::new(io::stdout());
//! let ctx = HeaderContext::new(Volume::new("emory:1", "Lorem"));
//!
//! Renderer::new().render_to_writer(stdout, &ctx)?;
//! # Ok::<(), volume_header::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod context;
mod error;
pub mod fmt;
mod partials;
mod render;
mod routes;
mod settings;
pub mod urlencode;

use std::collections::BTreeMap;
use std::fmt as std_fmt;
use std::io;

pub use crate::context::{HeaderContext, Volume};
pub use crate::error::{Error, ErrorKind, Result};
#[cfg(feature = "builtins")]
pub use crate::partials::builtins;
pub use crate::partials::{PartialContext, ANNOTATION_SEARCH_FORM, VOLUME_SEARCH_FORM};
pub use crate::routes::{Router, Routes};
pub use crate::settings::{Settings, SettingsBuilder};

use crate::fmt::{Formatter, PartialFn};

/// The volume header renderer.
pub struct Renderer<'r> {
    settings: Settings,
    router: Box<dyn Router + Send + Sync + 'r>,
    partials: BTreeMap<&'r str, Box<PartialFn>>,
}

impl Default for Renderer<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Renderer<'r> {
    /// Construct a new renderer with the default settings.
    ///
    /// The router is [`Routes::library()`] and, with the `builtins` feature,
    /// the volume search form partial is registered.
    #[inline]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Construct a new renderer with custom settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use volume_header::{Renderer, Settings};
    ///
    /// let settings = Settings::builder().date_property("dc:date").build();
    /// let renderer = Renderer::with_settings(settings);
    /// ```
    pub fn with_settings(settings: Settings) -> Self {
        #[allow(unused_mut)]
        let mut renderer = Self {
            settings,
            router: Box::new(Routes::library()),
            partials: BTreeMap::new(),
        };
        #[cfg(feature = "builtins")]
        renderer.add_partial(VOLUME_SEARCH_FORM, builtins::volume_search_form);
        renderer
    }

    /// Returns the renderer settings.
    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the router used to compute volume URLs.
    #[inline]
    pub fn set_router<R>(&mut self, router: R)
    where
        R: Router + Send + Sync + 'r,
    {
        self.router = Box::new(router);
    }

    /// Add a partial to the renderer, replacing any partial with the same
    /// name.
    #[inline]
    pub fn add_partial<F>(&mut self, name: &'r str, f: F)
    where
        F: Fn(&mut Formatter<'_>, &PartialContext<'_>) -> fmt::Result + Send + Sync + 'static,
    {
        self.partials.insert(name, Box::new(f));
    }

    /// Remove a partial, returning `true` if it existed.
    #[inline]
    pub fn remove_partial(&mut self, name: &str) -> bool {
        self.partials.remove(name).is_some()
    }

    /// Returns the canonical URL of the volume.
    ///
    /// # Examples
    ///
    /// ```
    /// use volume_header::{Renderer, Volume};
    ///
    /// let url = Renderer::new().volume_url(&Volume::new("emory:1", "Lorem"))?;
    /// assert_eq!(url, "/books/emory:1/");
    /// # Ok::<(), volume_header::Error>(())
    /// ```
    pub fn volume_url(&self, vol: &Volume) -> Result<String> {
        self.router.reverse(
            &self.settings.volume_route,
            &[(self.settings.pid_arg.as_str(), vol.pid.as_str())],
        )
    }

    /// Render the header to a string.
    #[inline]
    pub fn render(&self, ctx: &HeaderContext) -> Result<String> {
        render::to_string(self, ctx)
    }

    /// Render the header to a writer.
    #[inline]
    pub fn render_to_writer<W>(&self, writer: W, ctx: &HeaderContext) -> Result<()>
    where
        W: io::Write,
    {
        render::to_writer(self, ctx, writer)
    }
}

impl std_fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.debug_struct("Renderer")
            .field("settings", &self.settings)
            .field("partials", &self.partials.keys())
            .finish_non_exhaustive()
    }
}
