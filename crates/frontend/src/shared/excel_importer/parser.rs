use catalog::RawRow;
use wasm_bindgen::prelude::*;

/// JS binding для парсинга Excel через SheetJS: первый лист файла,
/// строки как объекты "заголовок -> значение ячейки".
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = parseExcelSheet, catch)]
    fn parse_excel_sheet(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Парсит байты xlsx в сырые строки листа.
pub fn parse_sheet_rows(bytes: &[u8]) -> Result<Vec<RawRow>, String> {
    let rows =
        parse_excel_sheet(bytes).map_err(|e| format!("Errore di parsing Excel: {:?}", e))?;
    serde_wasm_bindgen::from_value(rows)
        .map_err(|e| format!("Formato del foglio inatteso: {}", e))
}

/// Читает выбранный файл и парсит его тем же биндингом, что и каталог.
pub async fn read_sheet_from_file(file: web_sys::File) -> Result<Vec<RawRow>, String> {
    use wasm_bindgen_futures::JsFuture;

    // Читаем файл как ArrayBuffer
    let array_buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Errore di lettura del file: {:?}", e))?;

    // Конвертируем ArrayBuffer в Uint8Array
    let uint8_array = js_sys::Uint8Array::new(&array_buffer);
    let mut bytes = vec![0; uint8_array.length() as usize];
    uint8_array.copy_to(&mut bytes);

    parse_sheet_rows(&bytes)
}
