//! Inspector UI widgets.
//!
//! - SearchField: a click-to-focus text input driving the object search

pub mod search_field;

pub use search_field::{
    apply_search_key, search_field_display, spawn_search_field, sync_search_field, SearchField,
    SearchFieldPlugin, SearchFieldText,
};
