use catalog::{cached_rows, match_columns, store_rows, RawRow};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use super::parser::read_sheet_from_file;
use crate::shared::icons::icon;
use crate::shared::storage::LocalStorage;

/// Страница ручного импорта (excel-reader.html): выбор файла xlsx,
/// проверка сопоставления колонок и сохранение строк в кэш каталога.
/// Сохранённый набор подхватывается витриной при следующем открытии.
#[component]
pub fn ExcelImporter() -> impl IntoView {
    let (selected_file_name, set_selected_file_name) = signal(Option::<String>::None);
    let (selected_file_size, set_selected_file_size) = signal(0u64);
    let (rows, set_rows) = signal(Option::<Vec<RawRow>>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (saved_count, set_saved_count) = signal(Option::<usize>::None);

    // Сколько строк опубликовано сейчас; обновляется после сохранения
    let (published, set_published) = signal(cached_rows(&LocalStorage).map(|r| r.len()));

    // Выбранный файл парсится сразу, сохранение — отдельной кнопкой
    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                if let Some(file) = files.get(0) {
                    set_selected_file_name.set(Some(file.name()));
                    set_selected_file_size.set(file.size() as u64);
                    set_error.set(None);
                    set_rows.set(None);
                    set_saved_count.set(None);

                    set_is_loading.set(true);
                    leptos::task::spawn_local(async move {
                        match read_sheet_from_file(file).await {
                            Ok(parsed) if parsed.is_empty() => {
                                set_error
                                    .set(Some("Il file non contiene righe di dati".to_string()));
                            }
                            Ok(parsed) => {
                                log::debug!("importer: parsed {} rows", parsed.len());
                                set_rows.set(Some(parsed));
                            }
                            Err(e) => {
                                log::error!("importer: {}", e);
                                set_error.set(Some(e));
                            }
                        }
                        set_is_loading.set(false);
                    });
                }
            }
        }
    };

    let handle_save = move |_| {
        let Some(parsed) = rows.get() else {
            return;
        };
        store_rows(&LocalStorage, &parsed);
        log::info!("importer: saved {} rows to the catalog cache", parsed.len());
        set_published.set(Some(parsed.len()));
        set_saved_count.set(Some(parsed.len()));
    };

    view! {
        <div class="excel-importer">
            <div class="excel-importer__header">
                <h2 class="excel-importer__title">"Importa listino da Excel"</h2>
                {move || published.get().map(|n| view! {
                    <span class="excel-importer__published">
                        "Catalogo attuale: " <strong>{n}</strong> " prodotti"
                    </span>
                })}
            </div>

            <div class="excel-importer__filebar">
                <div class="excel-importer__filebar-row">
                    <label class="button button--primary excel-importer__file-btn" for="excel-file-input">
                        {icon("file")}
                        " Scegli file xlsx"
                    </label>
                    <input
                        id="excel-file-input"
                        type="file"
                        accept=".xlsx"
                        on:change=handle_file_select
                        class="hidden"
                    />
                    {move || if let Some(name) = selected_file_name.get() {
                        let size = selected_file_size.get();
                        view! {
                            <span class="excel-importer__fileinfo">
                                <strong>{name}</strong>
                                {" ("}
                                {format!("{:.2} KB", size as f64 / 1024.0)}
                                {")"}
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="excel-importer__filehint">"Nessun file selezionato"</span>
                        }.into_any()
                    }}
                </div>
            </div>

            {move || error.get().map(|e| {
                view! {
                    <div class="warning-box warning-box--error excel-importer__error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                }
            })}

            {move || if is_loading.get() {
                view! { <div class="loading">"Elaborazione del file..."</div> }.into_any()
            } else if let Some(parsed) = rows.get() {
                let row_count = parsed.len();
                let mapping = match_columns(&parsed);
                view! {
                    <div class="excel-importer__content">
                        <div class="excel-importer__pane-header">
                            <h3 class="excel-importer__pane-title">"Colonne riconosciute"</h3>
                            <div class="excel-importer__pane-meta">
                                "Righe lette: " <strong>{row_count}</strong>
                            </div>
                        </div>

                        <div class="excel-importer__table-wrap">
                            <table class="excel-importer__table">
                                <thead>
                                    <tr>
                                        <th class="excel-importer__status-col"></th>
                                        <th>"Campo"</th>
                                        <th>"Colonna nel file"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {mapping.into_iter().map(|m| {
                                        let row_class = if m.header.is_some() {
                                            "excel-importer__map-row excel-importer__map-row--found"
                                        } else {
                                            "excel-importer__map-row excel-importer__map-row--missing"
                                        };
                                        let status = if m.header.is_some() { "✓" } else { "✗" };
                                        view! {
                                            <tr class=row_class>
                                                <td class="excel-importer__status-cell">{status}</td>
                                                <td><strong>{m.field}</strong></td>
                                                <td>
                                                    {match m.header {
                                                        Some(header) => view! { <span>{header}</span> }.into_any(),
                                                        None => view! {
                                                            <span class="excel-importer__not-found">"non trovata"</span>
                                                        }.into_any(),
                                                    }}
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>

                        <div class="excel-importer__actions-center">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=handle_save
                                disabled=Signal::derive(move || saved_count.get().is_some())
                            >
                                {icon("upload")}
                                {format!(" Salva {} righe nel catalogo", row_count)}
                            </Button>
                        </div>

                        {move || saved_count.get().map(|n| view! {
                            <div class="excel-importer__result">
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <Space gap=SpaceGap::Small>
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                            "Listino salvato"
                                        </Badge>
                                        <span>{format!("Righe salvate: {}", n)}</span>
                                    </Space>
                                    <a href="index.html">"Torna al negozio"</a>
                                </Flex>
                            </div>
                        })}
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="excel-importer__empty">
                        <div class="excel-importer__empty-icon">"📁"</div>
                        <div class="excel-importer__empty-text">"Seleziona il file Excel del listino"</div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
