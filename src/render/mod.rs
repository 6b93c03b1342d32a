pub mod card;
pub mod text;

pub use card::{Card, render_card};
pub use text::{format_card, format_view};
