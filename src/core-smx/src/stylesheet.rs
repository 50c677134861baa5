//! Static XSL stylesheet written next to the generated sitemap files.

use indoc::indoc;

/// Filename of the stylesheet; every generated document references it in an
/// `xml-stylesheet` processing instruction.
pub const STYLESHEET_FILENAME: &str = "sitemap.xsl";

/// XSL 1.0 document rendering both `<urlset>` and `<sitemapindex>` files as
/// an HTML table in a browser. Static content, independent of the entries.
pub const STYLESHEET: &str = indoc! { r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <xsl:stylesheet version="1.0"
                    xmlns:xsl="http://www.w3.org/1999/XSL/Transform"
                    xmlns:sitemap="http://www.sitemaps.org/schemas/sitemap/0.9"
                    xmlns:xhtml="http://www.w3.org/1999/xhtml">
      <xsl:output method="html" indent="yes" encoding="UTF-8"/>

      <xsl:template match="/">
        <html>
          <head>
            <title>XML Sitemap</title>
            <style>
              body { font-family: sans-serif; font-size: 14px; color: #333; margin: 2em; }
              h1 { font-size: 20px; }
              p.count { color: #777; }
              table { border-collapse: collapse; width: 100%; }
              th { text-align: left; background: #f0f0f0; padding: 6px 10px; }
              td { padding: 6px 10px; border-bottom: 1px solid #eee; }
              a { color: #0055cc; text-decoration: none; }
              a:hover { text-decoration: underline; }
            </style>
          </head>
          <body>
            <h1>XML Sitemap</h1>
            <xsl:apply-templates select="sitemap:sitemapindex"/>
            <xsl:apply-templates select="sitemap:urlset"/>
          </body>
        </html>
      </xsl:template>

      <xsl:template match="sitemap:sitemapindex">
        <p class="count">
          <xsl:value-of select="count(sitemap:sitemap)"/> sitemaps in this index
        </p>
        <table>
          <tr>
            <th>Sitemap</th>
          </tr>
          <xsl:for-each select="sitemap:sitemap">
            <tr>
              <td>
                <a href="{sitemap:loc}"><xsl:value-of select="sitemap:loc"/></a>
              </td>
            </tr>
          </xsl:for-each>
        </table>
      </xsl:template>

      <xsl:template match="sitemap:urlset">
        <p class="count">
          <xsl:value-of select="count(sitemap:url)"/> URLs in this sitemap
        </p>
        <table>
          <tr>
            <th>URL</th>
            <th>Last modified</th>
            <th>Change freq.</th>
            <th>Priority</th>
            <th>Alternates</th>
          </tr>
          <xsl:for-each select="sitemap:url">
            <tr>
              <td>
                <a href="{sitemap:loc}"><xsl:value-of select="sitemap:loc"/></a>
              </td>
              <td><xsl:value-of select="sitemap:lastmod"/></td>
              <td><xsl:value-of select="sitemap:changefreq"/></td>
              <td><xsl:value-of select="sitemap:priority"/></td>
              <td><xsl:value-of select="count(xhtml:link)"/></td>
            </tr>
          </xsl:for-each>
        </table>
      </xsl:template>
    </xsl:stylesheet>
"# };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_handles_both_document_kinds() {
        assert!(STYLESHEET.starts_with("<?xml version=\"1.0\""));
        assert!(STYLESHEET.contains("sitemap:urlset"));
        assert!(STYLESHEET.contains("sitemap:sitemapindex"));
    }
}
