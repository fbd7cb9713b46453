use catalog::{filter_products, PageContext, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::api::load_products;
use crate::catalog::ui::{PopupService, ProductGrid};
use crate::shared::excel_importer::ExcelImporter;
use crate::shared::storage::LocalStorage;

/// Context of the page the catalog is embedded in, read once at mount.
fn current_page_context() -> PageContext {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| PageContext::from_path(&path))
        .unwrap_or_default()
}

/// Root of the product grid mounted into #products-container.
#[component]
pub fn CatalogApp(popup: PopupService) -> impl IntoView {
    // Cards open the shared popup through context
    provide_context(popup);

    let context = current_page_context();
    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    spawn_local(async move {
        match load_products(&LocalStorage).await {
            Ok(all) => {
                let visible = filter_products(&all, context);
                log::info!(
                    "catalog: showing {} of {} products on '{}'",
                    visible.len(),
                    all.len(),
                    context.as_str()
                );
                set_products.set(visible);
            }
            Err(e) => {
                log::error!("catalog: load failed: {}", e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    view! { <ProductGrid products=products loading=loading error=error /> }
}

/// Root of the manual import page (excel-reader.html).
#[component]
pub fn ImportApp() -> impl IntoView {
    view! { <ExcelImporter /> }
}
