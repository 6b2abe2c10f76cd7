//! Status coloring for the clear-all report.
//!
//! Each line qclear prints carries one status: a deleted collection, the
//! destructive-action warning, a failed request, or plain information.
//! Colors come from the Ayu Dark palette
//! (<https://github.com/ayu-theme/ayu-colors>) and are dropped entirely
//! when [`supports_color`] says no.

use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Status colors
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // deleted, reachable server
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // confirmation prompt
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // failed request, cancellation
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // collection bullets
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // headings, info lines

// ---------------------------------------------------------------------------
// Line markers
// ---------------------------------------------------------------------------

pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_WARN: &str = "\u{26A0}"; // ⚠
pub const ICON_FAIL: &str = "\u{2716}"; // ✖
pub const ICON_INFO: &str = "\u{2139}"; // ℹ
pub const ICON_BULLET: &str = "\u{2022}"; // •

// ---------------------------------------------------------------------------
// Truecolor only when the terminal takes it
// ---------------------------------------------------------------------------

fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Status text
// ---------------------------------------------------------------------------

/// Green: a collection was deleted or the server answered.
pub fn render_pass(s: &str) -> String {
    color_str(s, PASS)
}

/// Yellow: the destructive-action warning.
pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

/// Red: a failed request or a cancelled run.
pub fn render_fail(s: &str) -> String {
    color_str(s, FAIL)
}

/// Bold blue section heading, e.g. `Summary:`.
pub fn render_heading(s: &str) -> String {
    color_bold_str(s, ACCENT)
}

// ---------------------------------------------------------------------------
// Icon renderers
// ---------------------------------------------------------------------------

pub fn render_pass_icon() -> String {
    color_str(ICON_PASS, PASS)
}

pub fn render_warn_icon() -> String {
    color_str(ICON_WARN, WARN)
}

pub fn render_fail_icon() -> String {
    color_str(ICON_FAIL, FAIL)
}

pub fn render_info_icon() -> String {
    color_str(ICON_INFO, ACCENT)
}

pub fn render_bullet() -> String {
    color_str(ICON_BULLET, MUTED)
}
