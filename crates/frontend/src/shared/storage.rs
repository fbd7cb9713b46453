use catalog::KeyValueStore;
use web_sys::window;

/// Кэш каталога в localStorage браузера.
///
/// Любой сбой браузерного API равносилен отсутствию значения: в
/// приватном режиме загрузчик просто каждый раз перечитывает файл.
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}
