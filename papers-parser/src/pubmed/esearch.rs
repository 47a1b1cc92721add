//! ESearch XML response handling

use tracing::debug;

use crate::error::Result;
use crate::xml::XmlNode;

/// Identifiers and bookkeeping returned by ESearch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// PMIDs in the order PubMed returned them
    pub ids: Vec<String>,
    /// Total number of matching records (not just the returned page)
    pub count: Option<usize>,
    /// In-band error message; NCBI reports some failures with a 200 status
    pub error: Option<String>,
}

impl SearchResult {
    /// Read a search result from a parsed `eSearchResult` document
    pub fn from_root(root: &XmlNode) -> Self {
        let ids = root
            .descendants_named("Id")
            .filter_map(|id| id.non_empty_text())
            .map(str::to_string)
            .collect();

        let count = root.child("Count").and_then(|c| c.text().parse().ok());

        let error = root
            .descendants_named("ERROR")
            .find_map(|e| e.non_empty_text())
            .map(str::to_string);

        Self { ids, count, error }
    }
}

/// Parse an ESearch XML response
pub fn parse_esearch_xml(xml: &str) -> Result<SearchResult> {
    let root = XmlNode::parse(xml)?;
    let result = SearchResult::from_root(&root);
    debug!(ids = result.ids.len(), count = ?result.count, "Parsed ESearch response");
    Ok(result)
}
