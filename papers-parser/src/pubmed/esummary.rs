//! ESummary XML extraction
//!
//! Turns `eSummaryResult/DocSum` elements into [`DocumentSummary`] records.
//! Fields missing from a document fall back to [`UNKNOWN`]; authors without a
//! name are skipped.

use tracing::{debug, instrument};

use crate::error::Result;
use crate::pubmed::models::{Author, DocumentSummary, UNKNOWN};
use crate::xml::XmlNode;

/// Parse an ESummary XML response into document summaries
pub fn parse_esummary_xml(xml: &str) -> Result<Vec<DocumentSummary>> {
    let root = XmlNode::parse(xml)?;
    Ok(parse_document_summaries(&root))
}

/// Extract one [`DocumentSummary`] per `DocSum` below `root`
///
/// # Example
///
/// ```
/// use papers_parser::{parse_document_summaries, XmlNode};
///
/// let root = XmlNode::parse(
///     r#"<eSummaryResult><DocSum><Id>42</Id>
///        <Item Name="Title" Type="String">Answer</Item></DocSum></eSummaryResult>"#,
/// )?;
/// let docs = parse_document_summaries(&root);
/// assert_eq!(docs[0].pmid, "42");
/// assert_eq!(docs[0].publication_date, "N/A");
/// # Ok::<(), papers_parser::ParseError>(())
/// ```
#[instrument(skip(root))]
pub fn parse_document_summaries(root: &XmlNode) -> Vec<DocumentSummary> {
    let summaries: Vec<DocumentSummary> = root
        .descendants_named("DocSum")
        .map(document_summary)
        .collect();

    debug!(papers = summaries.len(), "Parsed raw data from ESummary");
    summaries
}

fn document_summary(doc: &XmlNode) -> DocumentSummary {
    let authors = doc
        .find_item("AuthorList")
        .map(|list| list.items_named("Author").filter_map(author).collect())
        .unwrap_or_default();

    DocumentSummary {
        pmid: text_or_unknown(doc.child("Id")),
        title: text_or_unknown(doc.find_item("Title")),
        publication_date: text_or_unknown(doc.find_item("PubDate")),
        authors,
        corresponding_author_email: None,
    }
}

/// Build an author from an `Item Name="Author"` element.
///
/// Structured entries carry `Name`/`Affiliation` sub-items; the flat form NCBI
/// returns for PubMed has the name as the item's own text and no affiliation.
fn author(item: &XmlNode) -> Option<Author> {
    let name = match item.find_item("Name") {
        Some(name) => name.non_empty_text(),
        None => item.non_empty_text(),
    }?;

    let affiliation = item
        .find_item("Affiliation")
        .and_then(XmlNode::non_empty_text)
        .map(str::to_string);

    Some(Author::new(name, affiliation))
}

fn text_or_unknown(node: Option<&XmlNode>) -> String {
    node.and_then(XmlNode::non_empty_text)
        .unwrap_or(UNKNOWN)
        .to_string()
}
