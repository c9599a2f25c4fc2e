//! Built-in social icon table.

/// Inline SVG for a known icon key (case-insensitive).
pub fn icon_for(key: &str) -> Option<&'static str> {
    match key.to_lowercase().as_str() {
        "instagram" => Some(INSTAGRAM),
        "tiktok" => Some(TIKTOK),
        "twitter" => Some(TWITTER),
        "x" => Some(X),
        "telegram" => Some(TELEGRAM),
        _ => None,
    }
}

/// Fallback glyph: first character of the icon key, or `?`.
pub fn fallback_glyph(key: Option<&str>) -> char {
    key.and_then(|k| k.chars().next()).unwrap_or('?')
}

const INSTAGRAM: &str = r#"<svg viewBox="0 0 24 24" role="img" aria-hidden="true"><path d="M7 2C4.24 2 2 4.24 2 7v10c0 2.76 2.24 5 5 5h10c2.76 0 5-2.24 5-5V7c0-2.76-2.24-5-5-5H7zm0 2h10c1.66 0 3 1.34 3 3v10c0 1.66-1.34 3-3 3H7c-1.66 0-3-1.34-3-3V7c0-1.66 1.34-3 3-3zm12 1a1 1 0 100 2 1 1 0 000-2zM12 7a5 5 0 100 10 5 5 0 000-10zm0 2a3 3 0 110 6 3 3 0 010-6z"/></svg>"#;

const TIKTOK: &str = r#"<svg viewBox="0 0 24 24" role="img" aria-hidden="true"><path d="M17 3c.08 1.27.67 2.43 1.55 3.29A5.4 5.4 0 0021 7v3.07c-1.3-.04-2.6-.42-3.76-1.1v6.38c0 3.41-2.6 6.45-6.21 6.65A6.5 6.5 0 014.2 15.2a6.43 6.43 0 015.68-6.59c.38-.04.77-.05 1.15-.03v3.36a3.3 3.3 0 00-.9-.03 3.15 3.15 0 00-.66 6.22 3.22 3.22 0 003.76-3.17V2h3.77z"/></svg>"#;

const TWITTER: &str = r#"<svg viewBox="0 0 24 24" role="img" aria-hidden="true"><path d="M22 5.8a7 7 0 01-2 .55 3.48 3.48 0 001.53-1.92 6.9 6.9 0 01-2.2.84A3.44 3.44 0 0015.3 4a3.48 3.48 0 00-3.45 4.27A9.79 9.79 0 013 5.16a3.48 3.48 0 001.07 4.65 3.4 3.4 0 01-1.56-.43v.04A3.48 3.48 0 005.46 13a3.42 3.42 0 01-1.55.06A3.48 3.48 0 006.8 14.7 6.9 6.9 0 012 16.57 9.76 9.76 0 007.29 18c6.95 0 10.76-5.77 10.76-10.77 0-.16 0-.33-.01-.49A7.7 7.7 0 0022 5.8z"/></svg>"#;

const X: &str = r#"<svg viewBox="0 0 24 24" role="img" aria-hidden="true"><path d="M4 3h4.3l3.4 4.99L15.9 3H20l-6.4 7.2L20.5 21h-4.3l-3.8-5.3-4.3 5.3H4l6.6-7.6z"/></svg>"#;

const TELEGRAM: &str = r#"<svg viewBox="0 0 24 24" role="img" aria-hidden="true"><path d="M9.5 16.9l-.4 5.1c.6 0 .9-.3 1.2-.7l2.9-3.6 6-4.6c.7-.5.3-.8-.4-.6l-7.3 2.9-3.1-1c-.7-.2-.7-.7.1-1.1l12.1-4.7c.5-.2 1 .1.8 1.1l-2.1 10.6c-.1.6-.5.8-1 .5l-4.2-3.1-2.6 2.5c-.3.3-.6.5-1.2.5z"/></svg>"#;
