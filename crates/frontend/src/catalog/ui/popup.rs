use catalog::{price_line, Product};
use leptos::prelude::*;

use super::card::image_url;

/// Сервис общего детального попапа: карточки открывают его через контекст.
#[derive(Clone, Copy)]
pub struct PopupService {
    selected: RwSignal<Option<Product>>,
}

impl PopupService {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
        }
    }

    /// Показать попап с товаром. Повторный вызов при открытом попапе
    /// просто заменяет содержимое на месте.
    pub fn open(&self, product: Product) {
        self.selected.set(Some(product));
    }

    /// Скрыть попап
    pub fn close(&self) {
        self.selected.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.selected.with(|p| p.is_some())
    }
}

impl Default for PopupService {
    fn default() -> Self {
        Self::new()
    }
}

/// Оверлей с деталями товара, монтируется в body один раз на страницу.
/// Закрывается крестиком или кликом по фону, но не по содержимому.
#[component]
pub fn ProductPopup(service: PopupService) -> impl IntoView {
    let image_src = move || {
        service
            .selected
            .with(|p| p.as_ref().map(|p| image_url(&p.code)))
            .unwrap_or_default()
    };
    let title = move || {
        service
            .selected
            .with(|p| p.as_ref().map(|p| p.article.clone()))
            .unwrap_or_default()
    };
    let description = move || {
        service
            .selected
            .with(|p| p.as_ref().and_then(|p| p.description.clone()))
            .unwrap_or_default()
    };
    let price = move || {
        service
            .selected
            .with(|p| p.as_ref().map(|p| price_line(p.price.as_ref())))
            .unwrap_or_default()
    };

    view! {
        <div
            id="product-popup"
            class="popup-overlay"
            style:display=move || if service.is_open() { "flex" } else { "none" }
            on:click=move |_| service.close()
        >
            <div class="popup-content" on:click=|e| e.stop_propagation()>
                <span class="popup-close" on:click=move |_| service.close()>
                    "\u{00d7}"
                </span>
                <div class="popup-image">
                    <img id="popup-img" src=image_src alt=title />
                </div>
                <div class="popup-info">
                    <h2 id="popup-title">{title}</h2>
                    <p id="popup-description">{description}</p>
                    <p id="popup-price">{price}</p>
                </div>
            </div>
        </div>
    }
}
