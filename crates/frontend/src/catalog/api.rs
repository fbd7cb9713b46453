use catalog::{cached_rows, normalize_rows, store_rows, KeyValueStore, Product};

use crate::shared::excel_importer::parse_sheet_rows;

/// Relative path of the price sheet next to the pages.
const SHEET_URL: &str = "Data.xlsx";

/// Loads the product set: cache first, then the published sheet.
///
/// A successfully parsed sheet is written back to the cache; an
/// unreadable cache entry counts as a miss and gets overwritten by the
/// next successful load.
pub async fn load_products(store: &dyn KeyValueStore) -> Result<Vec<Product>, String> {
    if let Some(rows) = cached_rows(store) {
        log::debug!("catalog: {} rows from cache", rows.len());
        return Ok(normalize_rows(&rows));
    }

    log::debug!("catalog: cache empty, fetching {}", SHEET_URL);
    let bytes = fetch_sheet().await?;
    log::debug!("catalog: fetched {} bytes", bytes.len());

    let rows = parse_sheet_rows(&bytes)?;
    store_rows(store, &rows);

    Ok(normalize_rows(&rows))
}

async fn fetch_sheet() -> Result<Vec<u8>, String> {
    let response = gloo_net::http::Request::get(SHEET_URL)
        .send()
        .await
        .map_err(|e| format!("Errore di rete: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Errore di lettura: {}", e))
}
