pub mod count_page;
pub mod product_picker;
pub mod view_model;

pub use count_page::CountPage;
