use std::fmt::Write;

use crate::fmt::{self, Escaped, Formatter};
use crate::partials::PartialContext;

/// Searches within a single volume.
///
/// A `GET` form targeting the volume landing page, with the search terms in
/// the `keyword` parameter. The terms of the current request, if any, are
/// filled in.
pub fn volume_search_form(f: &mut Formatter<'_>, p: &PartialContext<'_>) -> fmt::Result {
    write!(
        f,
        r#"<form class="volume-search-form" method="get" action="{}">"#,
        Escaped(p.volume_url())
    )?;
    f.write_str(r#"<input type="search" name="keyword""#)?;
    if let Some(keyword) = p.keyword() {
        write!(f, r#" value="{}""#, Escaped(keyword))?;
    }
    f.write_str(r#" placeholder="Search in this volume" aria-label="Search in this volume"/>"#)?;
    f.write_str(r#"<button type="submit">Search</button>"#)?;
    f.write_str("</form>")?;
    Ok(())
}
