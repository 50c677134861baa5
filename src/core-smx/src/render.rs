//! XML document rendering for sitemap pages and the sitemap index.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};

use crate::dates::normalize_lastmod;
use crate::errors::{Result, SitemapError};
use crate::model::SitemapUrl;
use crate::stylesheet::STYLESHEET_FILENAME;
use crate::url_utils::{join_url, resolve_location};

/// XML namespace of the sitemap protocol.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// XML namespace for alternate-language link annotations.
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

fn render_err<E: std::fmt::Display>(err: E) -> SitemapError {
    SitemapError::Render(err.to_string())
}

/// Renders one page of URL entries as a `<urlset>` document.
///
/// Site-relative locations are resolved against `base_url`. `lastmod` values
/// that do not parse as `YYYY-MM-DD` are replaced with `today`. The
/// `xmlns:xhtml` namespace is declared on the root element exactly when at
/// least one entry in the page carries alternates.
pub fn render_urlset(urls: &[SitemapUrl], base_url: &str, today: NaiveDate) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_preamble(&mut writer)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    if urls.iter().any(|u| !u.alternates.is_empty()) {
        urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
    }
    writer
        .write_event(Event::Start(urlset))
        .map_err(render_err)?;

    for url in urls {
        writer
            .write_event(Event::Start(BytesStart::new("url")))
            .map_err(render_err)?;

        write_text_element(&mut writer, "loc", &resolve_location(base_url, &url.loc))?;
        write_text_element(&mut writer, "lastmod", &normalize_lastmod(&url.lastmod, today))?;
        write_text_element(&mut writer, "changefreq", &url.changefreq)?;
        write_text_element(&mut writer, "priority", &url.priority)?;

        for alternate in &url.alternates {
            let mut link = BytesStart::new("xhtml:link");
            link.push_attribute(("rel", "alternate"));
            link.push_attribute(("hreflang", alternate.hreflang.as_str()));
            link.push_attribute(("href", alternate.href.as_str()));
            writer.write_event(Event::Empty(link)).map_err(render_err)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("url")))
            .map_err(render_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("urlset")))
        .map_err(render_err)?;
    into_document(writer)
}

/// Renders the `<sitemapindex>` document referencing every generated page.
///
/// Each `<loc>` is `public_base_url` joined with the page's filename.
pub fn render_sitemap_index(filenames: &[String], public_base_url: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_preamble(&mut writer)?;

    let mut index = BytesStart::new("sitemapindex");
    index.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(index)).map_err(render_err)?;

    for filename in filenames {
        writer
            .write_event(Event::Start(BytesStart::new("sitemap")))
            .map_err(render_err)?;
        write_text_element(&mut writer, "loc", &join_url(public_base_url, filename))?;
        writer
            .write_event(Event::End(BytesEnd::new("sitemap")))
            .map_err(render_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("sitemapindex")))
        .map_err(render_err)?;
    into_document(writer)
}

/// XML declaration plus the stylesheet processing instruction; every
/// generated document starts with these two lines.
fn write_preamble<W: std::io::Write>(writer: &mut Writer<W>) -> Result<()> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(render_err)?;
    let pi = format!(r#"xml-stylesheet type="text/xsl" href="{STYLESHEET_FILENAME}""#);
    writer
        .write_event(Event::PI(BytesPI::new(pi.as_str())))
        .map_err(render_err)?;
    Ok(())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(render_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(render_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(render_err)?;
    Ok(())
}

fn into_document(writer: Writer<Vec<u8>>) -> Result<String> {
    let mut xml = String::from_utf8(writer.into_inner()).map_err(render_err)?;
    xml.push('\n');
    Ok(xml)
}
