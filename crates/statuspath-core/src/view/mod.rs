//! # View Module
//!
//! Caller-owned path state and the navigation context it may draw a record
//! id from. The projection stays in `projector`; this module only decides
//! when to run it and what the renderer sees.

mod page_ref;
mod path_view;

pub use page_ref::*;
pub use path_view::*;
