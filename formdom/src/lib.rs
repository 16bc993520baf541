pub mod element;
pub mod render;
pub mod selector;

pub use element::{Content, Element, find_all, find_element};
pub use render::to_html;
pub use selector::{Selector, SelectorError};
