/// Page context the catalog is rendered in.
///
/// Derived from the current page path; unknown pages fall back to home.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PageContext {
    #[default]
    Home,
    Libri,
    Regali,
    Scuola,
}

impl PageContext {
    /// Category name as it appears in the sheet and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageContext::Home => "home",
            PageContext::Libri => "libri",
            PageContext::Regali => "regali",
            PageContext::Scuola => "scuola",
        }
    }

    /// Detect the context from a page path.
    pub fn from_path(path: &str) -> Self {
        if path.contains("libri.html") {
            PageContext::Libri
        } else if path.contains("regali.html") {
            PageContext::Regali
        } else if path.contains("scuola.html") {
            PageContext::Scuola
        } else {
            PageContext::Home
        }
    }
}
