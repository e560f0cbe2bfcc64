//! Design tokens for the Checktree UI.
//!
//! All icons must be sourced from this module.

pub mod icons {
    pub const POINTER: &str = ">";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const ELLIPSIS: &str = "…";
    pub const SEPARATOR: &str = "─";
}

pub mod icons_ascii {
    pub const POINTER: &str = ">";

    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const ELLIPSIS: &str = "...";
    pub const SEPARATOR: &str = "-";
}

/// Pick the unicode or ascii variant of a token
pub fn icon(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}
