//! URL reversal for named routes.

use std::collections::BTreeMap;

use crate::urlencode::encode_path_arg;
use crate::{Error, Result};

/// Reverses a named route into a URL path.
///
/// This trait is used by the [`Renderer`][crate::Renderer] to compute the
/// canonical URL of a volume. It is implemented for [`Routes`] and for any
/// function or closure with the following signature.
///
/// ```text
/// Fn(&str, &[(&str, &str)]) -> volume_header::Result<String>
/// ```
///
/// # Examples
///
/// Delegating to the URL table of a hosting application.
///
/// ```
/// use volume_header::{Renderer, Result};
///
/// fn reverse(name: &str, args: &[(&str, &str)]) -> Result<String> {
///     let pid = args.iter().find(|(k, _)| *k == "pid").map(|(_, v)| *v).unwrap_or("");
///     Ok(format!("/library/{name}/{pid}"))
/// }
///
/// let mut renderer = Renderer::new();
/// renderer.set_router(reverse);
/// ```
pub trait Router {
    /// Returns the path for the route `name` with the given arguments.
    fn reverse(&self, name: &str, args: &[(&str, &str)]) -> Result<String>;
}

impl<F> Router for F
where
    F: Fn(&str, &[(&str, &str)]) -> Result<String>,
{
    #[inline]
    fn reverse(&self, name: &str, args: &[(&str, &str)]) -> Result<String> {
        self(name, args)
    }
}

/// A table of named path patterns.
///
/// Patterns are paths with `<name>` placeholders, for example
/// `/books/<pid>/`. Arguments are percent-encoded when substituted.
#[derive(Debug, Clone, Default)]
pub struct Routes {
    patterns: BTreeMap<String, Pattern>,
}

/// The library routes, as alternating literal and argument parts.
const LIBRARY: &[(&str, &[&str])] = &[
    ("books:volume", &["/books/", "pid", "/"]),
    ("books:pages", &["/books/", "pid", "/pages/"]),
    ("books:page", &["/books/", "vol_pid", "/pages/", "pid", "/"]),
    ("books:pdf", &["/books/", "pid", "/pdf/"]),
    ("books:text", &["/books/", "pid", "/text/"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg(String),
}

impl Routes {
    /// Construct an empty route table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a route table with the library's volume routes.
    ///
    /// | name          | pattern                          |
    /// | ------------- | -------------------------------- |
    /// | `books:volume`| `/books/<pid>/`                  |
    /// | `books:pages` | `/books/<pid>/pages/`            |
    /// | `books:page`  | `/books/<vol_pid>/pages/<pid>/`  |
    /// | `books:pdf`   | `/books/<pid>/pdf/`              |
    /// | `books:text`  | `/books/<pid>/text/`             |
    pub fn library() -> Self {
        let mut routes = Self::new();
        for (name, parts) in LIBRARY {
            routes
                .patterns
                .insert((*name).to_owned(), Pattern::from_parts(parts));
        }
        routes
    }

    /// Add a named route, replacing any route with the same name.
    ///
    /// # Examples
    ///
    /// ```
    /// use volume_header::{Router, Routes};
    ///
    /// let mut routes = Routes::new();
    /// routes.add("books:volume", "/vol/<pid>")?;
    /// assert_eq!(routes.reverse("books:volume", &[("pid", "a b")])?, "/vol/a%20b");
    /// # Ok::<(), volume_header::Error>(())
    /// ```
    pub fn add(&mut self, name: impl Into<String>, pattern: &str) -> Result<()> {
        let pattern = Pattern::parse(pattern)?;
        self.patterns.insert(name.into(), pattern);
        Ok(())
    }

    /// Remove a named route, returning `true` if it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.patterns.remove(name).is_some()
    }

    /// Returns the pattern source for the named route.
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.patterns.get(name).map(|p| p.source.as_str())
    }
}

impl Router for Routes {
    fn reverse(&self, name: &str, args: &[(&str, &str)]) -> Result<String> {
        let pattern = self
            .patterns
            .get(name)
            .ok_or_else(|| Error::route(format!("unknown route `{name}`")))?;
        pattern.reverse(name, args)
    }
}

impl Pattern {
    fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;
        while let Some(i) = rest.find('<') {
            if i > 0 {
                segments.push(Segment::Literal(rest[..i].to_owned()));
            }
            let after = &rest[i + 1..];
            let j = after.find('>').ok_or_else(|| {
                Error::route(format!("unterminated placeholder in pattern `{source}`"))
            })?;
            let name = &after[..j];
            if name.is_empty() {
                return Err(Error::route(format!(
                    "empty placeholder in pattern `{source}`"
                )));
            }
            if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(Error::route(format!(
                    "invalid placeholder `{name}` in pattern `{source}`"
                )));
            }
            segments.push(Segment::Arg(name.to_owned()));
            rest = &after[j + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }
        Ok(Self {
            source: source.to_owned(),
            segments,
        })
    }

    /// Construct a pattern from parts that alternate between literals and
    /// argument names, starting with a literal.
    fn from_parts(parts: &[&str]) -> Self {
        let mut source = String::new();
        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            if i % 2 == 0 {
                source.push_str(part);
                if !part.is_empty() {
                    segments.push(Segment::Literal((*part).to_owned()));
                }
            } else {
                source.push('<');
                source.push_str(part);
                source.push('>');
                segments.push(Segment::Arg((*part).to_owned()));
            }
        }
        Self { source, segments }
    }

    fn reverse(&self, name: &str, args: &[(&str, &str)]) -> Result<String> {
        if let Some((key, _)) = args.iter().find(|(key, _)| !self.has_arg(key)) {
            return Err(Error::route(format!(
                "unexpected argument `{key}` for route `{name}`"
            )));
        }
        let mut url = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => url.push_str(s),
                Segment::Arg(arg) => {
                    let (_, value) = args.iter().find(|(key, _)| *key == arg.as_str()).ok_or_else(|| {
                        Error::route(format!("missing argument `{arg}` for route `{name}`"))
                    })?;
                    url.push_str(&encode_path_arg(value));
                }
            }
        }
        Ok(url)
    }

    fn has_arg(&self, key: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Arg(arg) if arg == key))
    }
}
