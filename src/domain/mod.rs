//! Domain model: cell states and their rule, display colors, editing policy
//! and the settings bundle.

pub mod cell;
pub mod click_policy;
pub mod palette;
pub mod settings;
