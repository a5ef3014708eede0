//! Named partials included by the header.

#[cfg(feature = "builtins")]
pub mod builtins;

use crate::context::{HeaderContext, Volume};

/// The name of the volume search form partial.
pub const VOLUME_SEARCH_FORM: &str = "volume_search_form";

/// The name of the annotation search form partial.
pub const ANNOTATION_SEARCH_FORM: &str = "annotation_search_form";

/// The data passed to a partial function.
#[derive(Debug, Clone, Copy)]
pub struct PartialContext<'a> {
    ctx: &'a HeaderContext,
    volume_url: &'a str,
}

impl<'a> PartialContext<'a> {
    pub(crate) fn new(ctx: &'a HeaderContext, volume_url: &'a str) -> Self {
        Self { ctx, volume_url }
    }

    /// Returns the context the header is being rendered with.
    #[inline]
    pub fn context(&self) -> &'a HeaderContext {
        self.ctx
    }

    /// Returns the volume being rendered.
    #[inline]
    pub fn volume(&self) -> &'a Volume {
        &self.ctx.vol
    }

    /// Returns the URL of the volume as returned by the router, before
    /// [`urlencode`][crate::urlencode::urlencode].
    #[inline]
    pub fn volume_url(&self) -> &'a str {
        self.volume_url
    }

    /// Returns the search terms of the current request, if any.
    #[inline]
    pub fn keyword(&self) -> Option<&'a str> {
        self.ctx.keyword()
    }
}
