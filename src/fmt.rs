//! Types for writing header markup and partials.
//!
//! This module defines a [`Formatter`] type that is similar to
//! [`std::fmt::Formatter`] so it should be a familiar API. A mutable reference
//! to this struct is passed to partial functions and writing to it will update
//! the underlying buffer, be it a [`String`] or an arbitrary
//! [`std::io::Write`] buffer.
//!
//! All partial functions must have the following signature.
//!
//! ```text
//! use volume_header::{fmt, PartialContext};
//! Fn(&mut fmt::Formatter<'_>, &PartialContext<'_>) -> fmt::Result;
//! ```
//!
//! Since [`Error`] implements `From<String>` and `From<&str>` it is possible
//! to return custom messages from partial functions. You can also easily
//! propagate the standard library [`std::fmt::Error`].
//!
//! Text taken from the context should always be written through
//! [`Escaped`] or [`escape_html`].
//!
//! # Examples
//!
//! ```
//! use std::fmt::Write;
//! use volume_header::fmt::{self, Escaped};
//! use volume_header::{PartialContext, Renderer, ANNOTATION_SEARCH_FORM};
//!
//! fn annotation_search(f: &mut fmt::Formatter<'_>, p: &PartialContext<'_>) -> fmt::Result {
//!     write!(
//!         f,
//!         r#"<form method="get" action="/annotations/"><input type="hidden" name="uri" value="{}"/></form>"#,
//!         Escaped(p.volume_url())
//!     )?;
//!     Ok(())
//! }
//!
//! let mut renderer = Renderer::new();
//! renderer.add_partial(ANNOTATION_SEARCH_FORM, annotation_search);
//! ```

use std::fmt;
use std::io;

use crate::partials::PartialContext;

/// A partial function or closure.
pub(crate) type PartialFn =
    dyn Fn(&mut Formatter<'_>, &PartialContext<'_>) -> Result + Sync + Send + 'static;

/// A [`std::fmt::Write`] façade.
pub struct Formatter<'a> {
    buf: &'a mut (dyn fmt::Write + 'a),
}

/// The result type returned from a partial function.
pub type Result = std::result::Result<(), Error>;

/// The error type returned from a partial function.
#[derive(Debug, Clone)]
pub struct Error(Option<String>);

pub(crate) struct Writer<W> {
    writer: W,
    err: Option<io::Error>,
}

/// Displays a string with HTML special characters escaped.
///
/// # Examples
///
/// ```
/// use volume_header::fmt::Escaped;
///
/// let s = format!("<a>{}</a>", Escaped("Tom & \"Jerry\""));
/// assert_eq!(s, "<a>Tom &amp; &quot;Jerry&quot;</a>");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a str);

impl<'a> Formatter<'a> {
    pub(crate) fn with_string(buf: &'a mut String) -> Self {
        Self { buf }
    }

    pub(crate) fn with_writer<W>(buf: &'a mut Writer<W>) -> Self
    where
        W: io::Write,
    {
        Self { buf }
    }
}

impl fmt::Write for Formatter<'_> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(self.buf, s)
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        fmt::Write::write_char(self.buf, c)
    }

    #[inline]
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        fmt::Write::write_fmt(self.buf, args)
    }
}

impl Error {
    pub(crate) fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(msg) => write!(f, "{msg}"),
            None => write!(f, "format error"),
        }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self(Some(msg.to_owned()))
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self(Some(msg))
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self(None)
    }
}

impl<W> Writer<W>
where
    W: io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer, err: None }
    }

    pub fn take_err(&mut self) -> Option<io::Error> {
        self.err.take()
    }
}

impl<W> fmt::Write for Writer<W>
where
    W: io::Write,
{
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writer.write_all(s.as_bytes()).map_err(|e| {
            self.err = Some(e);
            fmt::Error
        })
    }

    #[inline]
    fn write_char(&mut self, c: char) -> fmt::Result {
        self.writer
            .write_all(c.encode_utf8(&mut [0; 4]).as_bytes())
            .map_err(|e| {
                self.err = Some(e);
                fmt::Error
            })
    }
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        escape_html(f, self.0)
    }
}

/// Writes `s` to `w` with `<`, `>`, `&`, `'` and `"` replaced by entities.
///
/// Adapted from the rustdoc HTML escaper.
pub fn escape_html<W>(w: &mut W, s: &str) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    let mut last = 0;
    for (i, byte) in s.bytes().enumerate() {
        let entity = match byte {
            b'>' => "&gt;",
            b'<' => "&lt;",
            b'&' => "&amp;",
            b'\'' => "&#39;",
            b'"' => "&quot;",
            _ => continue,
        };
        w.write_str(&s[last..i])?;
        w.write_str(entity)?;
        last = i + 1;
    }
    if last < s.len() {
        w.write_str(&s[last..])?;
    }
    Ok(())
}
