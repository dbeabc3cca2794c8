//! Custom reusable widgets

pub mod sheet_overlay;

pub use sheet_overlay::sheet_overlay;
