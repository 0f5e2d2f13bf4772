//! Filter and pagination parameters for the designer listing.
//!
//! # Design
//! A parameter appears in the query string only when the caller actually
//! supplied a usable value: `None`, empty strings, and zero page numbers are
//! omitted entirely rather than sent as empty parameters. Serialization goes
//! through `serde_html_form`, so values are percent-encoded and the emission
//! order follows the field order below.

use serde::Serialize;

/// Query parameters accepted by `GET /designers/`. All optional; a default
/// value produces no query string at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DesignerQuery {
    #[serde(skip_serializing_if = "blank")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "blank")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "blank")]
    pub ordering: Option<String>,
    #[serde(skip_serializing_if = "unset")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "unset")]
    pub page_size: Option<u32>,
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn unset(value: &Option<u32>) -> bool {
    matches!(value, None | Some(0))
}

impl DesignerQuery {
    /// Render as a query string without the leading `?`. Empty when no
    /// parameter survives the omission rules.
    pub fn to_query_string(&self) -> String {
        // Plain strings and integers; form serialization cannot fail here.
        serde_html_form::to_string(self).unwrap_or_default()
    }
}
