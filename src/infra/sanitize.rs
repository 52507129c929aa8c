//! Filesystem-safe names for exported notes and notebooks.

/// Replacement used by [`sanitize_filename`].
pub const DEFAULT_REPLACEMENT: &str = "-";

/// Name returned when nothing usable is left of the input.
pub const FALLBACK_NAME: &str = "untitled";

/// Longest name most filesystems accept, in bytes.
const MAX_BYTES: usize = 255;

/// Converts a title to a filesystem-safe entry name using `-` as replacement.
///
/// # Examples
///
/// ```
/// use mdexport::infra::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Weekly/Report?"), "Weekly-Report-");
/// assert_eq!(sanitize_filename("API Design"), "API Design");
/// assert_eq!(sanitize_filename(""), "untitled");
/// ```
pub fn sanitize_filename(input: &str) -> String {
    sanitize(input, DEFAULT_REPLACEMENT)
}

/// Converts an arbitrary string to a filesystem-safe entry name.
///
/// - Replaces path separators, reserved characters (`< > : " / \ | ? *`)
///   and control characters with `replacement`
/// - Replaces `.`/`..` style names and Windows device names (`CON`,
///   `NUL`, `COM1`, ...) with `replacement`
/// - Replaces trailing dots and spaces with `replacement`
/// - Truncates to 255 bytes on a char boundary
/// - Returns `untitled` when no character of `input` survives
///
/// The replacement is itself sanitized first; an unsafe replacement
/// degrades to removing the offending characters.
pub fn sanitize(input: &str, replacement: &str) -> String {
    let replacement = clean(replacement, "").into_name();
    let cleaned = clean(input, &replacement);

    if !cleaned.kept_input() {
        return FALLBACK_NAME.to_string();
    }
    cleaned.into_name()
}

/// A cleaned name, char by char, remembering which chars came from the input.
struct Cleaned {
    chars: Vec<(char, bool)>,
}

impl Cleaned {
    fn kept_input(&self) -> bool {
        self.chars.iter().any(|&(_, from_input)| from_input)
    }

    fn as_string(&self) -> String {
        self.chars.iter().map(|&(c, _)| c).collect()
    }

    fn into_name(self) -> String {
        self.chars.into_iter().map(|(c, _)| c).collect()
    }

    fn push_replacement(&mut self, replacement: &str) {
        self.chars.extend(replacement.chars().map(|c| (c, false)));
    }
}

fn clean(input: &str, replacement: &str) -> Cleaned {
    let mut out = Cleaned {
        chars: Vec::with_capacity(input.len()),
    };
    for c in input.chars() {
        if is_illegal(c) {
            out.push_replacement(replacement);
        } else {
            out.chars.push((c, true));
        }
    }

    truncate_to_bytes(&mut out, MAX_BYTES.saturating_sub(replacement.len()));

    let name = out.as_string();
    if is_relative_name(&name) || is_windows_reserved(&name) {
        out.chars.clear();
        out.push_replacement(replacement);
    }

    let len = out.chars.len();
    while matches!(out.chars.last(), Some(&('.' | ' ', _))) {
        out.chars.pop();
    }
    if out.chars.len() < len {
        out.push_replacement(replacement);
    }

    out
}

fn is_illegal(c: char) -> bool {
    matches!(c, '/' | '\\' | '?' | '<' | '>' | ':' | '*' | '|' | '"')
        || c.is_control()
}

fn is_relative_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c == '.')
}

fn is_windows_reserved(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name).to_ascii_lowercase();
    match stem.as_str() {
        "con" | "prn" | "aux" | "nul" => true,
        s if s.len() == 4 && (s.starts_with("com") || s.starts_with("lpt")) => {
            s.as_bytes()[3].is_ascii_digit()
        }
        _ => false,
    }
}

fn truncate_to_bytes(cleaned: &mut Cleaned, max: usize) {
    let mut bytes = 0;
    let keep = cleaned
        .chars
        .iter()
        .take_while(|&&(c, _)| {
            bytes += c.len_utf8();
            bytes <= max
        })
        .count();
    cleaned.chars.truncate(keep);
}
