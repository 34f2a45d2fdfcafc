//! UI panels for the inspector.

pub mod object_list;
pub mod search_bar;

pub use object_list::*;
pub use search_bar::*;
