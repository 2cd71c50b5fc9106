//! Atom/OData XML decoding
//!
//! SAP answers entity reads with a root `<entry>` and collection reads with
//! a root `<feed>` of `<entry>` elements. Field values live under
//! `entry > content > m:properties > d:<Field>`. Elements are matched by
//! local name so the namespace prefixes SAP picks do not matter.

use pmrelay_domain::{ODataEntry, RelayError, Result};
use roxmltree::{Document, Node};

use crate::errors::InfraError;

/// Decode a single-entity response.
pub fn parse_entry(xml: &str) -> Result<ODataEntry> {
    let doc = parse_document(xml)?;
    let root = doc.root_element();
    expect_root(&root, "entry")?;
    decode_entry(&root)
}

/// Decode a collection response. A feed without entries yields an empty list.
pub fn parse_feed(xml: &str) -> Result<Vec<ODataEntry>> {
    let doc = parse_document(xml)?;
    let root = doc.root_element();
    expect_root(&root, "feed")?;

    root.children()
        .filter(|node| node.is_element() && node.tag_name().name() == "entry")
        .map(|entry| decode_entry(&entry))
        .collect()
}

fn parse_document(xml: &str) -> Result<Document<'_>> {
    // An empty body parses to nothing rather than failing, so it is reported
    // as a missing entry/feed instead of a syntax error.
    if xml.trim().is_empty() {
        return Err(RelayError::UnexpectedStructure("empty response body".into()));
    }

    Document::parse(xml).map_err(|err| RelayError::from(InfraError::from(err)))
}

fn expect_root(root: &Node<'_, '_>, expected: &str) -> Result<()> {
    let found = root.tag_name().name();
    if found == expected {
        Ok(())
    } else {
        Err(RelayError::UnexpectedStructure(format!(
            "expected root element '{expected}', found '{found}'"
        )))
    }
}

fn child_element<'a, 'input>(
    node: &Node<'a, 'input>,
    name: &'static str,
) -> Result<Node<'a, 'input>> {
    node.children().find(|child| child.is_element() && child.tag_name().name() == name).ok_or_else(
        || {
            RelayError::UnexpectedStructure(format!(
                "'{}' element has no '{name}' child",
                node.tag_name().name()
            ))
        },
    )
}

fn decode_entry(entry: &Node<'_, '_>) -> Result<ODataEntry> {
    let content = child_element(entry, "content")?;
    let properties = child_element(&content, "properties")?;

    let mut decoded = ODataEntry::new();
    for property in properties.children().filter(Node::is_element) {
        if is_null(&property) {
            continue;
        }
        decoded.insert(property.tag_name().name(), property.text().unwrap_or_default());
    }

    Ok(decoded)
}

/// `m:null="true"` marks a property SAP explicitly left unset.
fn is_null(property: &Node<'_, '_>) -> bool {
    property.attributes().any(|attr| attr.name() == "null" && attr.value() == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATOM_HEADER: &str = concat!(
        r#"xmlns="http://www.w3.org/2005/Atom" "#,
        r#"xmlns:m="http://schemas.microsoft.com/ado/2007/08/dataservices/metadata" "#,
        r#"xmlns:d="http://schemas.microsoft.com/ado/2007/08/dataservices""#,
    );

    fn entry_xml(properties: &str) -> String {
        format!(
            concat!(
                r#"<entry><id>x</id><content type="application/xml">"#,
                r#"<m:properties>{properties}</m:properties></content></entry>"#,
            ),
            properties = properties
        )
    }

    #[test]
    fn parses_single_entry() {
        let xml = format!(
            concat!(
                r#"<?xml version="1.0" encoding="utf-8"?><entry {}>"#,
                r#"<content type="application/xml"><m:properties>"#,
                r#"<d:EmployeeId>E123</d:EmployeeId><d:Password>pw</d:Password>"#,
                r#"</m:properties></content></entry>"#,
            ),
            ATOM_HEADER
        );

        let entry = parse_entry(&xml).expect("entry should decode");
        assert_eq!(entry.property("EmployeeId"), Some("E123"));
        assert_eq!(entry.property("Password"), Some("pw"));
    }

    #[test]
    fn parses_feed_entries_in_order() {
        let xml = format!(
            "<feed {ATOM_HEADER}><title>Orders</title>{}{}</feed>",
            entry_xml("<d:Aufnr>1</d:Aufnr>"),
            entry_xml("<d:Aufnr>2</d:Aufnr>")
        );

        let entries = parse_feed(&xml).expect("feed should decode");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].property("Aufnr"), Some("1"));
        assert_eq!(entries[1].property("Aufnr"), Some("2"));
    }

    #[test]
    fn empty_feed_is_empty_list() {
        let xml = format!("<feed {ATOM_HEADER}><title>Orders</title></feed>");
        assert!(parse_feed(&xml).expect("feed").is_empty());
    }

    #[test]
    fn null_and_empty_properties() {
        let xml = format!(
            "<feed {ATOM_HEADER}>{}</feed>",
            entry_xml(r#"<d:Equnr m:null="true"/><d:Priokx></d:Priokx><d:Qmnum>7</d:Qmnum>"#)
        );

        let entries = parse_feed(&xml).expect("feed");
        assert_eq!(entries[0].property("Equnr"), None);
        assert_eq!(entries[0].property("Priokx"), Some(""));
        assert_eq!(entries[0].property("Qmnum"), Some("7"));
    }

    #[test]
    fn malformed_xml_is_parse_error() {
        let result = parse_feed("<feed><entry></feed>");
        assert!(matches!(result, Err(RelayError::XmlParse(_))));

        let result = parse_entry("not xml at all");
        assert!(matches!(result, Err(RelayError::XmlParse(_))));
    }

    #[test]
    fn wrong_root_is_unexpected_structure() {
        let xml = format!("<error {ATOM_HEADER}><message>boom</message></error>");
        assert!(matches!(parse_feed(&xml), Err(RelayError::UnexpectedStructure(_))));
        assert!(matches!(parse_entry(&xml), Err(RelayError::UnexpectedStructure(_))));
    }

    #[test]
    fn entry_without_properties_is_unexpected_structure() {
        let xml = format!("<feed {ATOM_HEADER}><entry><content/></entry></feed>");
        match parse_feed(&xml) {
            Err(RelayError::UnexpectedStructure(msg)) => assert!(msg.contains("properties")),
            other => panic!("expected structure error, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_is_unexpected_structure() {
        assert!(matches!(parse_entry("  "), Err(RelayError::UnexpectedStructure(_))));
    }
}
