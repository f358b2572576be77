pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;
