//! Cursor pagination via the Admin API `Link` response header.
//!
//! Each `products.json` response carries URLs for adjacent pages in `Link`;
//! the cursor is the `page_info` query parameter of the `rel="next"` URL.
//!
//! ```text
//! <https://loja.myshopify.com/admin/api/2023-07/products.json?limit=250&page_info=PREV>; rel="previous",
//! <https://loja.myshopify.com/admin/api/2023-07/products.json?limit=250&page_info=NEXT>; rel="next"
//! ```

use reqwest::Url;

/// Extracts the `page_info` cursor of the next page from a `Link` header.
///
/// Returns `None` when the header is absent, has no `rel="next"` link
/// (last page), or the next URL carries no `page_info`.
#[must_use]
pub fn extract_next_cursor(link_header: Option<&str>) -> Option<String> {
    let next = next_link(link_header?)?;
    let url = Url::parse(next).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page_info")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// URL of the `rel="next"` directive, without its angle brackets.
fn next_link(header: &str) -> Option<&str> {
    header
        .split(',')
        .map(str::trim)
        .find(|segment| segment.contains(r#"rel="next""#))
        .and_then(|segment| {
            let start = segment.find('<')? + 1;
            let end = segment.find('>')?;
            (start < end).then(|| &segment[start..end])
        })
}
