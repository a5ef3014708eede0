//! Defines the data a volume header is rendered from.

#[cfg(feature = "serde")]
mod de;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A bibliographic volume, for example a scanned book or issue.
///
/// Only `pid` and `title` are required. Empty strings in the optional fields
/// are treated as if the field was not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Volume {
    /// The persistent identifier, used to build the volume URL.
    pub pid: String,

    /// The full title.
    pub title: String,

    /// The first part of the title, shown on the landing page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_part1: Option<String>,

    /// The continuation of the title, shown after the first part.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title_part2: Option<String>,

    /// The volume label, for example `2` or `v.3`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub volume: Option<String>,

    /// Date labels in display order.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::dates"))]
    pub date: Vec<String>,
}

/// Everything needed to render the header for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct HeaderContext {
    /// The volume being displayed.
    pub vol: Volume,

    /// The path of the current request.
    #[cfg_attr(feature = "serde", serde(default))]
    pub request_path: String,

    /// Whether the header is part of a paginated page view.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::truthy"))]
    pub page: bool,

    /// Whether to emit RDFa attributes.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::truthy"))]
    pub rdfa: bool,

    /// Whether to include the annotation search form.
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::truthy"))]
    pub annotation_search_enabled: bool,

    /// The search terms of the current request, shown again in the volume
    /// search form.
    #[cfg_attr(feature = "serde", serde(default))]
    pub keyword: Option<String>,
}

impl Volume {
    /// Construct a volume with the required fields.
    pub fn new(pid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the two title parts shown on the landing page.
    pub fn with_title_parts(
        mut self,
        part1: impl Into<String>,
        part2: Option<impl Into<String>>,
    ) -> Self {
        self.title_part1 = Some(part1.into());
        self.title_part2 = part2.map(Into::into);
        self
    }

    /// Set the volume label.
    pub fn with_volume(mut self, volume: impl Into<String>) -> Self {
        self.volume = Some(volume.into());
        self
    }

    /// Append a date label.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date.push(date.into());
        self
    }

    /// Returns the first title part, falling back to the full title.
    pub fn title_part1(&self) -> &str {
        non_empty(&self.title_part1).unwrap_or(&self.title)
    }

    /// Returns the title continuation, if any.
    pub fn title_part2(&self) -> Option<&str> {
        non_empty(&self.title_part2)
    }

    /// Returns the volume label, if any.
    pub fn volume_label(&self) -> Option<&str> {
        non_empty(&self.volume)
    }
}

impl HeaderContext {
    /// Construct a context for the given volume with all flags unset.
    pub fn new(vol: Volume) -> Self {
        Self {
            vol,
            ..Self::default()
        }
    }

    /// Set the path of the current request.
    pub fn with_request_path(mut self, path: impl Into<String>) -> Self {
        self.request_path = path.into();
        self
    }

    /// Set whether the header is part of a paginated page view.
    pub fn with_page(mut self, page: bool) -> Self {
        self.page = page;
        self
    }

    /// Set whether to emit RDFa attributes.
    pub fn with_rdfa(mut self, rdfa: bool) -> Self {
        self.rdfa = rdfa;
        self
    }

    /// Set whether to include the annotation search form.
    pub fn with_annotation_search(mut self, enabled: bool) -> Self {
        self.annotation_search_enabled = enabled;
        self
    }

    /// Set the search terms of the current request.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Returns the search terms of the current request, if any.
    pub fn keyword(&self) -> Option<&str> {
        non_empty(&self.keyword)
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
