use catalog::Product;
use leptos::prelude::*;

use super::card::ProductCard;

/// Содержимое #products-container: карточки отобранных товаров,
/// заглушка при пустом наборе или подсказка о ручном импорте при
/// ошибке загрузки. Пока набор не загружен, контейнер остаётся пустым.
#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || {
            if loading.get() {
                view! { <></> }.into_any()
            } else if error.get().is_some() {
                view! {
                    <p class="error-message">
                        "Nessun database trovato."
                        <br />
                        <br />
                        <a
                            href="excel-reader.html"
                            style="color: #2d8a8a; text-decoration: underline;"
                        >
                            "Clicca qui per caricare il file Excel"
                        </a>
                    </p>
                }
                .into_any()
            } else if products.get().is_empty() {
                view! { <p class="no-products">"Nessun prodotto disponibile"</p> }.into_any()
            } else {
                view! {
                    <>
                        {products
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect_view()}
                    </>
                }
                .into_any()
            }
        }}
    }
}
