mod helpers;

use std::fmt::Write;

use volume_header::{
    HeaderContext, Renderer, Settings, Volume, ANNOTATION_SEARCH_FORM, VOLUME_SEARCH_FORM,
};

use crate::helpers::{elsewhere, landing, volume};

fn renderer() -> Renderer<'static> {
    let mut renderer = Renderer::new();
    renderer.add_partial(VOLUME_SEARCH_FORM, |f, p| {
        write!(f, "<form action=\"{}\"></form>", p.volume_url())?;
        Ok(())
    });
    renderer.add_partial(ANNOTATION_SEARCH_FORM, |f, _| {
        f.write_str("<form>annotations</form>")?;
        Ok(())
    });
    renderer
}

#[test]
fn render_landing_page() {
    let result = renderer().render(&landing(volume())).unwrap();
    assert_eq!(
        result,
        concat!(
            r#"<header class="volume-header">"#,
            r#"<h1 class="volume-title">The Lost Colony <span class="continued">a history</span>"#,
            r#" <span class="small">[2]</span></h1>"#,
            r#"<p class="volume-date">(1923); (1925)</p>"#,
            r#"<div class="volume-search" id="volume-search">"#,
            r#"<form action="/books/emory:7tk5v/"></form>"#,
            r#"</div>"#,
            r#"</header>"#,
        )
    );
}

#[test]
fn render_landing_page_title_is_not_linked() {
    let result = renderer().render(&landing(volume())).unwrap();
    assert!(!result.contains("<a href="));
    assert!(!result.contains("The Lost Colony: a history"));
}

#[test]
fn render_landing_page_without_continuation() {
    let vol = Volume::new("emory:1", "Lorem ipsum").with_title_parts("Lorem ipsum", None::<&str>);
    let result = renderer().render(&landing(vol)).unwrap();
    assert!(result.contains(r#"<h1 class="volume-title">Lorem ipsum</h1>"#));
    assert!(!result.contains("continued"));
}

#[test]
fn render_landing_page_encoded_request_path() {
    let ctx = HeaderContext::new(volume()).with_request_path("/books/emory%3A7tk5v/");
    let result = renderer().render(&ctx).unwrap();
    assert!(!result.contains("<a href="));
    assert!(result.contains(r#"<span class="continued">a history</span>"#));
}

#[test]
fn render_other_page_links_title() {
    let result = renderer().render(&elsewhere(volume())).unwrap();
    assert!(result.contains(
        r#"<h1 class="volume-title"><a href="/books/emory:7tk5v/">The Lost Colony: a history</a> <span class="small">[2]</span></h1>"#
    ));
    assert!(!result.contains("continued"));
}

#[test]
fn render_sub_page_links_title() {
    let ctx = HeaderContext::new(volume()).with_request_path("/books/emory:7tk5v/pages/");
    let result = renderer().render(&ctx).unwrap();
    assert!(result.contains(r#"<a href="/books/emory:7tk5v/">"#));
}

#[test]
fn render_dates_no_trailing_separator() {
    let result = renderer().render(&elsewhere(volume())).unwrap();
    assert!(result.contains(r#"<p class="volume-date">(1923); (1925)</p>"#));
    assert!(!result.contains("(1925);"));
}

#[test]
fn render_single_date() {
    let vol = Volume::new("emory:1", "Lorem").with_date("1899");
    let result = renderer().render(&elsewhere(vol)).unwrap();
    assert!(result.contains(r#"<p class="volume-date">(1899)</p>"#));
}

#[test]
fn render_no_dates() {
    let vol = Volume::new("emory:1", "Lorem");
    let result = renderer().render(&elsewhere(vol)).unwrap();
    assert!(!result.contains("volume-date"));
}

#[test]
fn render_dates_custom_separator() {
    let settings = Settings::builder().date_separator(" / ").build();
    let mut renderer = Renderer::with_settings(settings);
    renderer.add_partial(VOLUME_SEARCH_FORM, |_, _| Ok(()));
    let result = renderer.render(&elsewhere(volume())).unwrap();
    assert!(result.contains("(1923) / (1925)"));
}

#[test]
fn render_volume_label() {
    let result = renderer().render(&elsewhere(volume())).unwrap();
    assert!(result.contains(r#"<span class="small">[2]</span>"#));
}

#[test]
fn render_no_volume_label() {
    let vol = Volume::new("emory:1", "Lorem");
    let result = renderer().render(&elsewhere(vol)).unwrap();
    assert!(!result.contains(r#"class="small""#));
}

#[test]
fn render_rdfa() {
    let ctx = elsewhere(volume()).with_rdfa(true);
    let result = renderer().render(&ctx).unwrap();
    assert!(result.contains(
        r#"<a href="/books/emory:7tk5v/"><span property="schema:name">The Lost Colony: a history</span></a>"#
    ));
    assert!(result.contains(concat!(
        r#"<span property="schema:datePublished">(1923)</span>; "#,
        r#"<span property="schema:datePublished">(1925)</span>"#
    )));
    assert_eq!(result.matches("schema:datePublished").count(), 2);
}

#[test]
fn render_rdfa_landing_page() {
    let ctx = landing(volume()).with_rdfa(true);
    let result = renderer().render(&ctx).unwrap();
    assert!(result.contains(
        r#"<span property="schema:name">The Lost Colony <span class="continued">a history</span></span>"#
    ));
}

#[test]
fn render_rdfa_custom_properties() {
    let settings = Settings::builder()
        .title_property("dc:title")
        .date_property("dc:date")
        .build();
    let mut renderer = Renderer::with_settings(settings);
    renderer.add_partial(VOLUME_SEARCH_FORM, |_, _| Ok(()));
    let result = renderer.render(&elsewhere(volume()).with_rdfa(true)).unwrap();
    assert!(result.contains(r#"property="dc:title""#));
    assert!(result.contains(r#"<span property="dc:date">(1923)</span>"#));
}

#[test]
fn render_no_rdfa() {
    let result = renderer().render(&elsewhere(volume())).unwrap();
    assert!(!result.contains("property="));
}

#[test]
fn render_page_shows_toggle() {
    let ctx = elsewhere(volume()).with_page(true);
    let result = renderer().render(&ctx).unwrap();
    assert!(result.contains(concat!(
        r##"<a class="search-toggle" role="button" data-toggle="collapse" href="#volume-search""##,
        r#" aria-expanded="false" aria-controls="volume-search">Search this volume</a>"#,
        r#"<div class="volume-search collapse" id="volume-search">"#,
        r#"<form action="/books/emory:7tk5v/"></form></div>"#,
    )));
    assert!(!result.contains(r#"<div class="volume-search" id="volume-search">"#));
}

#[test]
fn render_no_page_shows_inline_form() {
    let result = renderer().render(&elsewhere(volume())).unwrap();
    assert!(result.contains(r#"<div class="volume-search" id="volume-search">"#));
    assert!(!result.contains("search-toggle"));
    assert!(!result.contains("collapse"));
}

#[test]
fn render_annotation_search() {
    for page in [false, true] {
        let ctx = elsewhere(volume())
            .with_page(page)
            .with_annotation_search(true);
        let result = renderer().render(&ctx).unwrap();
        assert!(result.ends_with(
            r#"<div class="annotation-search"><form>annotations</form></div></header>"#
        ));
    }
}

#[test]
fn render_no_annotation_search() {
    let result = renderer().render(&elsewhere(volume())).unwrap();
    assert!(!result.contains("annotation"));
}

#[test]
fn render_escapes_context() {
    let vol = Volume::new("emory:1", "<b>Bold</b> & \"quoted\"")
        .with_volume("v.<2>")
        .with_date("'23");
    let result = renderer().render(&elsewhere(vol)).unwrap();
    assert!(result.contains("&lt;b&gt;Bold&lt;/b&gt; &amp; &quot;quoted&quot;"));
    assert!(result.contains("[v.&lt;2&gt;]"));
    assert!(result.contains("(&#39;23)"));
    assert!(!result.contains("<b>"));
}

#[test]
fn render_escapes_volume_url() {
    let vol = Volume::new("a\"b", "Lorem");
    let result = renderer().render(&elsewhere(vol)).unwrap();
    assert!(result.contains(r#"<a href="/books/a%22b/">"#));
    // Partials get the path as the router returned it.
    assert!(result.contains(r#"<form action="/books/a%22b/"></form>"#));
}

#[test]
fn render_partial_sees_context() {
    let mut renderer = Renderer::new();
    renderer.add_partial(VOLUME_SEARCH_FORM, |f, p| {
        write!(f, "{}|{}", p.volume().pid, p.context().page)?;
        Ok(())
    });
    let result = renderer.render(&elsewhere(volume())).unwrap();
    assert!(result.contains("emory:7tk5v|false"));
}

#[test]
fn render_partial_sees_keyword() {
    let mut renderer = Renderer::new();
    renderer.add_partial(VOLUME_SEARCH_FORM, |f, p| {
        write!(f, "[{}]", p.keyword().unwrap_or("-"))?;
        Ok(())
    });
    let result = renderer.render(&elsewhere(volume())).unwrap();
    assert!(result.contains("[-]"));
    let result = renderer
        .render(&elsewhere(volume()).with_keyword("colony"))
        .unwrap();
    assert!(result.contains("[colony]"));
}
