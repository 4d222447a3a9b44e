//! Page aggregation for the list endpoints.
//!
//! Every list response carries the same pagination envelope
//! (`total_pages`, `page_number`, `<resource>_per_page`) around a
//! resource-named items array, so one routine serves all three resource
//! groups, parameterized by the items key and the per-page key.

use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// Largest page size the server accepts.
pub const MAX_PER_PAGE: u32 = 250;

const PAGE_NUMBER_PARAM: &str = "page_number";

/// Pagination fields of a list response. Anything else in the envelope is
/// left untouched.
#[derive(Debug, Deserialize)]
struct PageMeta {
    #[serde(default, deserialize_with = "lenient_total_pages")]
    total_pages: u64,
}

/// A missing, null, or non-numeric `total_pages` counts as 0: the page-1
/// items stand alone and no further requests are issued.
fn lenient_total_pages<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().unwrap_or(0))
}

/// Fetch every page of a collection and concatenate the items in server
/// order. `fetch_page` performs one single-page list request with the given
/// parameters; `items_field` names the resource array in each response and
/// `per_page_param` the resource's page-size key.
///
/// Caller-supplied `page_number`/`<per_page_param>` options are discarded:
/// an aggregating call always controls pagination itself. Page 1 is
/// requested at the maximum page size, `total_pages` is read from its
/// envelope, and pages 2 through `total_pages` follow one at a time. A
/// `total_pages` of 0 (or a missing, null, or non-numeric field) issues no
/// further requests and yields whatever page 1 contained.
pub(crate) fn fetch_all<F>(
    mut fetch_page: F,
    items_field: &str,
    per_page_param: &str,
    options: &[(&str, &str)],
) -> Result<Vec<Value>>
where
    F: FnMut(Vec<(String, String)>) -> Result<Value>,
{
    let passthrough: Vec<(String, String)> = options
        .iter()
        .filter(|(key, _)| *key != PAGE_NUMBER_PARAM && *key != per_page_param)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    let first = fetch_page(page_params(&passthrough, per_page_param, 1))?;
    let meta: PageMeta = PageMeta::deserialize(&first)?;
    let mut items = page_items(&first, items_field);

    for page_number in 2..=meta.total_pages {
        let page = fetch_page(page_params(&passthrough, per_page_param, page_number))?;
        items.extend(page_items(&page, items_field));
    }

    Ok(items)
}

fn page_params(
    passthrough: &[(String, String)],
    per_page_param: &str,
    page_number: u64,
) -> Vec<(String, String)> {
    let mut params = passthrough.to_vec();
    params.push((PAGE_NUMBER_PARAM.to_string(), page_number.to_string()));
    params.push((per_page_param.to_string(), MAX_PER_PAGE.to_string()));
    params
}

fn page_items(page: &Value, items_field: &str) -> Vec<Value> {
    page.get(items_field)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
