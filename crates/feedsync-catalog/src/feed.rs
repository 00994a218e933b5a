//! Reader for the supplier's semicolon-delimited product feed.
//!
//! Columns are located by header name, so extra or reordered columns are
//! fine. Rows that cannot be used (blank SKU, unparsable or out-of-range
//! cost) are skipped
//! with a warning and counted; they never abort the read.

use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use feedsync_core::{FeedEncoding, FeedRow};
use rust_decimal::Decimal;

use crate::error::FeedError;
use crate::normalize::{normalize_ean, parse_json_cell};
use crate::pricing::is_priceable;

const DELIMITER: u8 = b';';

/// Rows read from a feed plus the number of rows that were unusable.
#[derive(Debug, Default)]
pub struct FeedContents {
    pub rows: Vec<FeedRow>,
    pub skipped: usize,
}

/// Reads and decodes the feed at `path`.
///
/// # Errors
///
/// - [`FeedError::NotFound`] if `path` does not exist.
/// - [`FeedError::Io`] if the file cannot be read.
/// - [`FeedError::Encoding`] if a UTF-8 feed holds invalid bytes.
/// - [`FeedError::Csv`] / [`FeedError::MissingColumn`] from [`parse_feed`].
pub fn read_feed(path: &Path, encoding: FeedEncoding) -> Result<FeedContents, FeedError> {
    if !path.exists() {
        return Err(FeedError::NotFound {
            path: path.display().to_string(),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| FeedError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let text = decode(bytes, encoding)?;
    parse_feed(&text)
}

/// Decodes raw feed bytes with the configured encoding.
///
/// # Errors
///
/// Returns [`FeedError::Encoding`] when `encoding` is UTF-8 and the bytes are not.
pub fn decode(bytes: Vec<u8>, encoding: FeedEncoding) -> Result<String, FeedError> {
    match encoding {
        FeedEncoding::Utf8 => {
            let text = String::from_utf8(bytes)?;
            Ok(text.trim_start_matches('\u{FEFF}').to_owned())
        }
        FeedEncoding::Latin1 => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Parses decoded feed text.
///
/// # Errors
///
/// Returns [`FeedError::MissingColumn`] if a required header is absent, or
/// [`FeedError::Csv`] if the header row cannot be read.
pub fn parse_feed(text: &str) -> Result<FeedContents, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = Columns::locate(&headers)?;

    let mut contents = FeedContents::default();
    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(line, error = %e, "skipping malformed CSV record");
                contents.skipped += 1;
                continue;
            }
        };

        match columns.row(&record) {
            Ok(row) => contents.rows.push(row),
            Err(reason) => {
                tracing::warn!(line, %reason, "skipping feed row");
                contents.skipped += 1;
            }
        }
    }

    tracing::info!(
        rows = contents.rows.len(),
        skipped = contents.skipped,
        "read supplier feed"
    );
    Ok(contents)
}

/// Header positions of the columns this reader uses.
struct Columns {
    name: usize,
    ean: usize,
    brand: usize,
    category: usize,
    short_description: usize,
    description: usize,
    specifications: Option<usize>,
    image_path: usize,
    extra_images_paths: Option<usize>,
    params: Option<usize>,
    stock: usize,
    cost: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, FeedError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require =
            |name: &str| find(name).ok_or_else(|| FeedError::MissingColumn(name.to_owned()));

        Ok(Self {
            name: require("name")?,
            ean: require("ean")?,
            brand: require("brand")?,
            category: require("category")?,
            short_description: require("short_description")?,
            description: require("description")?,
            specifications: find("specifications"),
            image_path: require("image_path")?,
            extra_images_paths: find("extra_images_paths"),
            params: find("params"),
            stock: require("stock")?,
            cost: require("precio_neto_compra")?,
        })
    }

    fn row(&self, record: &StringRecord) -> Result<FeedRow, String> {
        let text = |idx: usize| record.get(idx).unwrap_or_default().trim().to_owned();
        let optional = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("nan"))
        };

        let name = text(self.name);
        if name.is_empty() {
            return Err("blank supplier SKU".to_owned());
        }

        let raw_cost = text(self.cost);
        let cost_price = parse_cost(&raw_cost)
            .ok_or_else(|| format!("{name}: unparsable cost \"{raw_cost}\""))?;
        if !is_priceable(cost_price) {
            return Err(format!("{name}: cost {cost_price} out of range"));
        }

        Ok(FeedRow {
            ean: normalize_ean(record.get(self.ean)),
            brand: text(self.brand),
            category: text(self.category),
            short_description: text(self.short_description),
            description: text(self.description),
            specifications: optional(self.specifications).map(str::to_owned),
            image_path: text(self.image_path),
            extra_images: parse_json_cell(optional(self.extra_images_paths)),
            params: parse_json_cell(optional(self.params)),
            stock: text(self.stock),
            cost_price,
            name,
        })
    }
}

/// Parses a cost cell, accepting either `.` or `,` as the decimal separator.
fn parse_cost(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_str(&raw.replace(',', ".")))
        .ok()
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
