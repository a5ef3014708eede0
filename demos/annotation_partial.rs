use std::fmt::Write;

use volume_header::fmt::Escaped;
use volume_header::{HeaderContext, Renderer, Volume, ANNOTATION_SEARCH_FORM};

fn main() -> volume_header::Result<()> {
    let mut renderer = Renderer::new();

    // The annotation search form is provided by the hosting application. It
    // is only included when the context enables it.
    renderer.add_partial(ANNOTATION_SEARCH_FORM, |f, p| {
        write!(
            f,
            r#"<form class="annotation-search-form" method="get" action="{}annotations/">"#,
            Escaped(p.volume_url())
        )?;
        f.write_str(r#"<input type="search" name="keyword" placeholder="Search your annotations"/>"#)?;
        f.write_str("</form>")?;
        Ok(())
    });

    let vol = Volume::new("emory:7tk5v", "The Lost Colony: a history")
        .with_title_parts("The Lost Colony", Some("a history"))
        .with_volume("2")
        .with_date("1923");

    // A search results page for the volume, so the terms show up again in the
    // builtin volume search form.
    let ctx = HeaderContext::new(vol)
        .with_request_path("/books/emory:7tk5v/")
        .with_keyword("\"roanoke\" <island>")
        .with_annotation_search(true);

    println!("{}", renderer.render(&ctx)?);
    Ok(())
}
