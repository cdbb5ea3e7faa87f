//! Renderer-agnostic view state for the search control.
//!
//! Nothing in this crate draws; every component is a plain state struct plus
//! the render models a host toolkit turns into widgets.

pub mod input;
pub mod items;
pub mod message;
pub mod popup;
pub mod results;
pub mod tabs;

pub use input::{EmptyKeyword, KeywordInput};
pub use items::{MAX_LABEL_WIDTH, ResultIcon, ResultItem};
pub use message::MessageBox;
pub use popup::AttributeTable;
pub use results::{PAGE_SIZE, ResultsPager};
pub use tabs::{CityPicker, LayerPicker, PagerBar, SourceTab, SourceTabs};
