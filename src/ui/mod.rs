//! UI module - reusable rendering components
//!
//! Page layout lives in `app::views`; this module holds the widgets it is
//! built from.

pub mod components;
