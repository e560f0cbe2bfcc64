//! Terminal UI
//!
//! - `theme` - icon tokens
//! - `terminal` - capability detection
//! - `widgets` - interactive widgets (tree menu)

pub mod terminal;
pub mod theme;
pub mod widgets;
