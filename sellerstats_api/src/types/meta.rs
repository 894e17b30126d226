use serde::{Deserialize, Serialize};

/// One page of `T` plus pagination bookkeeping, as returned by every
/// collection endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub links: Links,
    pub meta: Meta,
}

/// Navigation URLs for the current page. `prev` is null on the first page
/// and `next` is null on the last.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Links {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Meta {
    /// 1-indexed; never greater than `last_page`.
    pub current_page: i64,
    /// 1-based index of the first item on this page, null when the page is
    /// empty.
    pub from: Option<i64>,
    pub last_page: i64,
    pub links: Vec<MetaLink>,
    pub path: String,
    /// Page size, string-encoded on the wire.
    pub per_page: String,
    /// 1-based index of the last item on this page, null when the page is
    /// empty.
    pub to: Option<i64>,
    pub total: i64,
}

/// One pagination control: a page URL (null for inert entries), its label,
/// and whether it marks the current page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetaLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}
