//! Legacy `&` color code handling for rank suffixes.

/// CSS derived from a legacy color-coded string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorStyle {
    /// Inline CSS declarations, e.g. `color: #FF5555;font-weight: bold;`.
    pub style: String,
    /// First color code found, as `#RRGGBB`.
    pub hex_color: Option<String>,
}

/// Rank color shown for players whose suffix carries no color code.
pub const DEFAULT_RANK_COLOR: &str = "#00AAAA";

impl ColorStyle {
    /// The first color code, or [`DEFAULT_RANK_COLOR`].
    pub fn rank_color(&self) -> String {
        self.hex_color
            .clone()
            .unwrap_or_else(|| DEFAULT_RANK_COLOR.to_string())
    }
}

fn color_hex(code: char) -> Option<&'static str> {
    let hex = match code {
        '0' => "#000000",
        '1' => "#0000AA",
        '2' => "#00AA00",
        '3' => "#00AAAA",
        '4' => "#AA0000",
        '5' => "#AA00AA",
        '6' => "#FFAA00",
        '7' => "#AAAAAA",
        '8' => "#555555",
        '9' => "#5555FF",
        'a' => "#55FF55",
        'b' => "#55FFFF",
        'c' => "#FF5555",
        'd' => "#FF55FF",
        'e' => "#FFFF55",
        'f' => "#FFFFFF",
        _ => return None,
    };
    Some(hex)
}

fn format_css(code: char) -> Option<&'static str> {
    match code {
        'l' => Some("font-weight: bold;"),
        'o' => Some("font-style: italic;"),
        'n' => Some("text-decoration: underline;"),
        'm' => Some("text-decoration: line-through;"),
        _ => None,
    }
}

/// Converts `&`-prefixed color and format codes into inline CSS.
///
/// Only lowercase codes are recognised, so `&C` is plain text. Declarations are
/// concatenated without separators. `&k` (obfuscated) and `&r` (reset) are consumed but
/// produce no CSS; any other character after `&` is left alone.
///
/// ```rust,ignore
/// let colors = parse_minecraft_colors("suffix.100.&c&l[Admin]");
/// assert_eq!(colors.style, "color: #FF5555;font-weight: bold;");
/// ```
pub fn parse_minecraft_colors(permission: &str) -> ColorStyle {
    let mut style = String::new();
    let mut hex_color = None;
    let mut chars = permission.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            continue;
        }
        let Some(&code) = chars.peek() else {
            break;
        };

        if let Some(hex) = color_hex(code) {
            style.push_str("color: ");
            style.push_str(hex);
            style.push(';');
            hex_color.get_or_insert_with(|| hex.to_string());
        } else if let Some(css) = format_css(code) {
            style.push_str(css);
        } else if !matches!(code, 'k' | 'r') {
            continue;
        }
        chars.next();
    }

    ColorStyle { style, hex_color }
}
