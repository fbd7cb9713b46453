use catalog::{price_line, Product};
use leptos::prelude::*;

use super::popup::PopupService;

/// Каталожные фото лежат рядом со страницами, имя файла — код товара.
const IMAGE_DIR: &str = "foto";
const PLACEHOLDER_IMAGE: &str = "assets/placeholder.png";

/// Путь к фото товара по его коду.
pub fn image_url(code: &str) -> String {
    format!("{}/{}.png", IMAGE_DIR, code)
}

/// Карточка товара: фото, название, описание и строка цены.
/// Клик по карточке открывает общий попап с теми же полями.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let popup = use_context::<PopupService>().expect("PopupService not provided in context");

    // Недоступное фото подменяется заглушкой один раз, без повторных попыток
    let (image_src, set_image_src) = signal(image_url(&product.code));
    let handle_image_error = move |_| {
        if image_src.get_untracked() != PLACEHOLDER_IMAGE {
            set_image_src.set(PLACEHOLDER_IMAGE.to_string());
        }
    };

    let article = product.article.clone();
    let alt = article.clone();
    let description = product.description.clone().unwrap_or_default();
    let price = price_line(product.price.as_ref());

    let open_details = move |_| popup.open(product.clone());

    view! {
        <div class="product-card" on:click=open_details>
            <div class="product-image">
                <img src=image_src alt=alt on:error=handle_image_error />
            </div>
            <div class="product-info">
                <h3 class="product-title">{article}</h3>
                <p class="product-description">{description}</p>
                <p class="product-price">{price}</p>
            </div>
        </div>
    }
}
