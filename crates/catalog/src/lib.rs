//! Общая доменная логика каталога: нормализация строк листа,
//! контекст страницы, фильтрация и кодек кэша.

pub mod cache;
pub mod context;
pub mod filter;
pub mod record;
pub mod resolve;

pub use cache::{cached_rows, store_rows, KeyValueStore, PRODUCTS_CACHE_KEY};
pub use context::PageContext;
pub use filter::filter_products;
pub use record::{
    match_columns, normalize_row, normalize_rows, price_line, ColumnMatch, Price, Product, RawRow,
    FIELD_CANDIDATES,
};
pub use resolve::resolve_field;
