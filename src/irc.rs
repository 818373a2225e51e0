//! The mIRC colour convention: `\x03` plus a two-digit code selects a
//! foreground colour, a bare `\x03` switches back to the client
//! default, `\x02` toggles bold. See
//! http://www.irssi.org/documentation/formats for the colour table.
//!
//! These are wire bytes shared with every consumer of the feed. Never
//! change them.

/// Switch back to the default colour.
pub const RESET: &str = "\x03";
/// Bold toggle.
pub const BOLD: &str = "\x02";

pub const BLUE: &str = "\x0302";
pub const GREEN: &str = "\x0303";
pub const RED: &str = "\x034";
pub const BROWN: &str = "\x035";
pub const ORANGE: &str = "\x0307";
pub const TEAL: &str = "\x0310";
pub const GREY: &str = "\x0314";

/// Makes free text safe for a single IRC line: decodes HTML character
/// references, then turns newlines into spaces and deletes carriage
/// returns. Decode first, strip second.
pub fn cleanup(text: &str) -> String {
    let decoded = html_escape::decode_html_entities(text);
    let mut out = String::with_capacity(decoded.len());
    for c in decoded.chars() {
        match c {
            '\n' => out.push(' '),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Cuts `line` down to at most `max` bytes without splitting a
/// multi-byte character. May still cut inside a colour escape.
pub fn truncate_line(line: &mut String, max: usize) {
    if line.len() <= max {
        return;
    }
    let mut end = max;
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    line.truncate(end);
}
