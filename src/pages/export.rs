// src/pages/export.rs
use roxmltree::{Document, Node};

use super::models::Page;
use crate::utils::error::PageError;

/// Reads the pages of a MediaWiki `Special:Export` document.
///
/// Tags are matched by local name so any export schema version works. The
/// text of the last `<revision>` is used; a page with no revision text is
/// reported as missing.
pub fn parse_export(xml: &str) -> Result<Vec<Result<Page, PageError>>, PageError> {
    let document = Document::parse(xml)?;

    let pages = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "page")
        .map(read_page)
        .collect::<Vec<_>>();

    tracing::debug!("Export document contains {} pages", pages.len());
    Ok(pages)
}

fn read_page(node: Node) -> Result<Page, PageError> {
    let title = child(node, "title")
        .and_then(|t| t.text())
        .map(str::to_string)
        .unwrap_or_default();

    let text = node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "revision")
        .last()
        .and_then(|revision| child(revision, "text"))
        .and_then(|t| t.text())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(PageError::Missing(title));
    }

    let mut page = Page::new(title, text);
    page.redirect = child(node, "redirect").is_some();
    Ok(page)
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.is_element() && n.tag_name().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"<mediawiki xmlns="http://www.mediawiki.org/xml/export-0.11/" version="0.11" xml:lang="nia">
  <siteinfo><sitename>Wiktionary</sitename></siteinfo>
  <page>
    <title>omo</title>
    <ns>0</ns>
    <revision>
      <id>1</id>
      <text xml:space="preserve">{{nia}}
# lama</text>
    </revision>
    <revision>
      <id>2</id>
      <text xml:space="preserve">{{nia}}
# omo
[[Kategori:Nomina]]</text>
    </revision>
  </page>
  <page>
    <title>Omo</title>
    <redirect title="omo" />
    <revision><text xml:space="preserve">#ALIH [[omo]]</text></revision>
  </page>
  <page>
    <title>kosong</title>
    <revision><text xml:space="preserve" /></revision>
  </page>
</mediawiki>"#;

    #[test]
    fn test_parse_export_pages() {
        let pages = parse_export(EXPORT).unwrap();
        assert_eq!(pages.len(), 3);

        let omo = pages[0].as_ref().unwrap();
        assert_eq!(omo.title, "omo");
        assert_eq!(omo.text, "{{nia}}\n# omo\n[[Kategori:Nomina]]");
        assert!(!omo.redirect);

        assert!(pages[1].as_ref().unwrap().redirect);
        assert!(matches!(&pages[2], Err(PageError::Missing(t)) if t == "kosong"));
    }

    #[test]
    fn test_crlf_revision_text_is_normalized() {
        let xml = "<mediawiki><page><title>omo</title><revision><text>{{sinonim}}\r\n* [[nomo]]</text></revision></page></mediawiki>";
        let pages = parse_export(xml).unwrap();
        assert_eq!(pages[0].as_ref().unwrap().text, "{{sinonim}}\n* [[nomo]]");
    }

    #[test]
    fn test_invalid_xml() {
        assert!(matches!(parse_export("<mediawiki><page>"), Err(PageError::Xml(_))));
    }
}
