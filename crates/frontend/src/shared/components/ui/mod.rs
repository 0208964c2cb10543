pub mod text_area_field;
pub mod text_field;

pub use text_area_field::TextAreaField;
pub use text_field::TextField;
