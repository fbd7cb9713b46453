use crate::context::PageContext;
use crate::record::Product;

/// Отбирает товары для текущей страницы.
///
/// На главной остаются только отмеченные в колонке evidenza ("si" в
/// любом регистре), на страницах категорий — товары с совпадающей
/// категорией без учёта регистра. Товары без соответствующего поля
/// отбрасываются.
pub fn filter_products(products: &[Product], context: PageContext) -> Vec<Product> {
    products
        .iter()
        .filter(|product| match context {
            PageContext::Home => product
                .highlighted
                .as_ref()
                .map_or(false, |h| h.to_lowercase() == "si"),
            category => product
                .category
                .as_ref()
                .map_or(false, |c| c.to_lowercase() == category.as_str()),
        })
        .cloned()
        .collect()
}
