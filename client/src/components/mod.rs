//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome and summary output while reading
//! shared state from Leptos context providers.

pub mod formatted_text;
pub mod history_list;
pub mod nav_bar;
pub mod result_sections;
pub mod section_toggles;
