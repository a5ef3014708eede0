use std::fmt::Write;
use std::io;

use tracing::{debug, trace};

use crate::fmt::{Escaped, Formatter, Writer};
use crate::partials::{PartialContext, ANNOTATION_SEARCH_FORM, VOLUME_SEARCH_FORM};
use crate::urlencode::is_current;
use crate::{Error, HeaderContext, Renderer, Result};

pub(crate) fn to_string(renderer: &Renderer<'_>, ctx: &HeaderContext) -> Result<String> {
    let mut s = String::with_capacity(1024);
    let mut f = Formatter::with_string(&mut s);
    HeaderRenderer::new(renderer, ctx).render(&mut f)?;
    Ok(s)
}

pub(crate) fn to_writer<W>(renderer: &Renderer<'_>, ctx: &HeaderContext, writer: W) -> Result<()>
where
    W: io::Write,
{
    let mut w = Writer::new(writer);
    let mut f = Formatter::with_writer(&mut w);
    HeaderRenderer::new(renderer, ctx)
        .render(&mut f)
        .map_err(|err| w.take_err().map(Error::from).unwrap_or(err))
}

/// Writes the header for a single context.
struct HeaderRenderer<'a, 'r> {
    renderer: &'a Renderer<'r>,
    ctx: &'a HeaderContext,
}

impl<'a, 'r> HeaderRenderer<'a, 'r> {
    fn new(renderer: &'a Renderer<'r>, ctx: &'a HeaderContext) -> Self {
        Self { renderer, ctx }
    }

    fn render(&self, f: &mut Formatter<'_>) -> Result<()> {
        let url = self.renderer.volume_url(&self.ctx.vol)?;
        let current = is_current(&url, &self.ctx.request_path);
        debug!(
            pid = %self.ctx.vol.pid,
            url = %url,
            current,
            "rendering volume header"
        );

        f.write_str(r#"<header class="volume-header">"#)?;
        self.render_title(f, &url, current)?;
        self.render_dates(f)?;
        self.render_search(f, &url)?;
        f.write_str("</header>")?;
        Ok(())
    }

    /// On the landing page the title is unlinked and split in two parts.
    fn render_title(&self, f: &mut Formatter<'_>, url: &str, current: bool) -> Result<()> {
        let vol = &self.ctx.vol;
        f.write_str(r#"<h1 class="volume-title">"#)?;
        if current {
            self.open_title_property(f)?;
            write!(f, "{}", Escaped(vol.title_part1()))?;
            if let Some(part2) = vol.title_part2() {
                write!(f, r#" <span class="continued">{}</span>"#, Escaped(part2))?;
            }
            self.close_title_property(f)?;
        } else {
            write!(f, r#"<a href="{}">"#, Escaped(url))?;
            self.open_title_property(f)?;
            write!(f, "{}", Escaped(&vol.title))?;
            self.close_title_property(f)?;
            f.write_str("</a>")?;
        }
        if let Some(volume) = vol.volume_label() {
            write!(f, r#" <span class="small">[{}]</span>"#, Escaped(volume))?;
        }
        f.write_str("</h1>")?;
        Ok(())
    }

    fn open_title_property(&self, f: &mut Formatter<'_>) -> Result<()> {
        if self.ctx.rdfa {
            write!(
                f,
                r#"<span property="{}">"#,
                Escaped(self.renderer.settings.title_property())
            )?;
        }
        Ok(())
    }

    fn close_title_property(&self, f: &mut Formatter<'_>) -> Result<()> {
        if self.ctx.rdfa {
            f.write_str("</span>")?;
        }
        Ok(())
    }

    fn render_dates(&self, f: &mut Formatter<'_>) -> Result<()> {
        let dates = &self.ctx.vol.date;
        if dates.is_empty() {
            return Ok(());
        }
        let settings = &self.renderer.settings;
        f.write_str(r#"<p class="volume-date">"#)?;
        for (i, date) in dates.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", Escaped(settings.date_separator()))?;
            }
            if self.ctx.rdfa {
                write!(
                    f,
                    r#"<span property="{}">({})</span>"#,
                    Escaped(settings.date_property()),
                    Escaped(date)
                )?;
            } else {
                write!(f, "({})", Escaped(date))?;
            }
        }
        f.write_str("</p>")?;
        Ok(())
    }

    fn render_search(&self, f: &mut Formatter<'_>, url: &str) -> Result<()> {
        let target = Escaped(self.renderer.settings.search_target());
        debug!(page = self.ctx.page, "rendering volume search");
        if self.ctx.page {
            write!(
                f,
                r##"<a class="search-toggle" role="button" data-toggle="collapse" href="#{target}" aria-expanded="false" aria-controls="{target}">Search this volume</a>"##
            )?;
            write!(f, r#"<div class="volume-search collapse" id="{target}">"#)?;
        } else {
            write!(f, r#"<div class="volume-search" id="{target}">"#)?;
        }
        self.include(f, VOLUME_SEARCH_FORM, url)?;
        f.write_str("</div>")?;

        if self.ctx.annotation_search_enabled {
            f.write_str(r#"<div class="annotation-search">"#)?;
            self.include(f, ANNOTATION_SEARCH_FORM, url)?;
            f.write_str("</div>")?;
        }
        Ok(())
    }

    fn include(&self, f: &mut Formatter<'_>, name: &str, url: &str) -> Result<()> {
        let partial = self
            .renderer
            .partials
            .get(name)
            .ok_or_else(|| Error::partial_not_found(name))?;
        trace!(partial = name, "including partial");
        partial(f, &PartialContext::new(self.ctx, url)).map_err(|err| Error::partial(name, err))
    }
}
