pub mod card;
pub mod grid;
pub mod popup;

pub use card::ProductCard;
pub use grid::ProductGrid;
pub use popup::{PopupService, ProductPopup};
