//! Forward pagination for server-paged listings.
//!
//! Pages are 1-indexed. The server does not report a total count, so
//! exhaustion is inferred from a short page.

use serde::{Deserialize, Serialize};

/// One page of a (possibly filtered) listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number, starting at 1.
    pub page: usize,
    /// Maximum number of items the server returns per page.
    pub page_size: usize,
    /// Optional search term forwarded to the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageRequest {
    /// Create a request for the first page.
    pub fn first(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            search: None,
        }
    }

    /// Set the search term. Blank terms are treated as no filter.
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|s| !s.trim().is_empty());
        self
    }

    /// Request for the page after this one, keeping size and search term.
    pub fn next(&self) -> Self {
        Self {
            page: self.page + 1,
            page_size: self.page_size,
            search: self.search.clone(),
        }
    }

    /// Whether more pages may follow a page of `returned` items.
    ///
    /// Only a page that is exactly full signals more; a short page means the
    /// listing is exhausted.
    pub fn has_more(&self, returned: usize) -> bool {
        has_more(returned, self.page_size)
    }
}

/// Has-more heuristic: true iff the page came back exactly full.
pub fn has_more(returned: usize, page_size: usize) -> bool {
    page_size > 0 && returned == page_size
}
