pub mod app;
pub mod catalog;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::catalog::ui::{PopupService, ProductPopup};

/// Container the catalog renders into, present on every product page.
const PRODUCTS_CONTAINER_ID: &str = "products-container";
/// Container the manual import widget renders into (excel-reader.html).
const IMPORT_CONTAINER_ID: &str = "import-container";

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_catalog();
    mount_importer();
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

/// Mounts the product grid into its container and the shared detail
/// popup onto the document body. Pages without the container are left
/// untouched.
fn mount_catalog() {
    let Some(container) = element_by_id(PRODUCTS_CONTAINER_ID) else {
        log::debug!("no #{} on this page, catalog not mounted", PRODUCTS_CONTAINER_ID);
        return;
    };

    let popup = PopupService::new();
    leptos::mount::mount_to_body(move || view! { <ProductPopup service=popup /> });
    leptos::mount::mount_to(container, move || view! { <app::CatalogApp popup=popup /> })
        .forget();
}

/// Mounts the manual import widget on the fallback page.
fn mount_importer() {
    let Some(container) = element_by_id(IMPORT_CONTAINER_ID) else {
        log::debug!("no #{} on this page, importer not mounted", IMPORT_CONTAINER_ID);
        return;
    };

    leptos::mount::mount_to(container, app::ImportApp).forget();
}

fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}
