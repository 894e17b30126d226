//! Caller-supplied filter and pagination parameters for one request.

use serde::Serialize;
use url::Url;

/// Filter and pagination parameters forwarded with a fetch.
///
/// Every field is individually optional; a field left `None` is absent from
/// the request entirely, which is distinct from sending an empty string.
/// Callers supplying a payload are expected to set `date_from`; the client
/// forwards whatever it is given without validating that contract.
///
/// `date_from` and `date_to` are `YYYY-MM-DD` dates or
/// `YYYY-MM-DD HH:mm:ss` date-times, passed through verbatim.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FetchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl FetchPayload {
    /// Sets the inclusive start of the date filter.
    pub fn with_date_from(mut self, date_from: &str) -> Self {
        self.date_from = Some(date_from.to_string());
        self
    }

    /// Sets the inclusive end of the date filter.
    pub fn with_date_to(mut self, date_to: &str) -> Self {
        self.date_to = Some(date_to.to_string());
        self
    }

    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the API key sent with the request.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Appends the present fields as query pairs, in field order, returning
    /// the augmented URL. Numbers become decimal text; values are
    /// form-urlencoded. Absent fields contribute nothing.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(date_from) = &self.date_from {
            url.query_pairs_mut()
                .append_pair("dateFrom", date_from.as_str());
        }
        if let Some(date_to) = &self.date_to {
            url.query_pairs_mut().append_pair("dateTo", date_to.as_str());
        }
        if let Some(page) = self.page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        }
        if let Some(key) = &self.key {
            url.query_pairs_mut().append_pair("key", key.as_str());
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        url
    }
}
