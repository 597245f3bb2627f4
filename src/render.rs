//! Render one standalone HTML page per sign or marking.
//!
//! The page carries Open Graph tags so a link to it previews the first
//! illustration.

use std::fmt::Write;

use crate::associate::SignEntry;
use crate::dom::Attribute;

/// Make an image path absolute.
///
/// Values already starting with `http` are kept; anything else is appended
/// to `base_url`, without doubling the `/` between them.
///
/// # Examples
///
/// ```
/// use roadsigns::render::expand_url;
///
/// assert_eq!(expand_url("/a.png", "https://likumi.lv"), "https://likumi.lv/a.png");
/// assert_eq!(expand_url("https://cdn/x.png", "https://likumi.lv"), "https://cdn/x.png");
/// ```
pub fn expand_url(value: &str, base_url: &str) -> String {
    if value.starts_with("http") {
        value.to_string()
    } else if value.starts_with('/') {
        format!("{}{value}", base_url.trim_end_matches('/'))
    } else {
        format!("{base_url}{value}")
    }
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Image attributes with `src` made absolute, order kept.
pub fn expanded_attributes(attrs: &[Attribute], base_url: &str) -> Vec<Attribute> {
    attrs
        .iter()
        .map(|a| {
            if a.name == "src" {
                Attribute::new(a.name.clone(), expand_url(&a.value, base_url))
            } else {
                a.clone()
            }
        })
        .collect()
}

/// Render the complete page for `entry`.
pub fn render_page(entry: &SignEntry, base_url: &str) -> String {
    let title = escape_html(&entry.title());
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"lv\">\n");
    html.push_str("  <head>\n");
    html.push_str("    <meta charset=\"UTF-8\" />\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
    );
    let _ = writeln!(html, "    <title>{title}</title>");
    let _ = writeln!(html, "    <meta property=\"og:title\" content=\"{title}\" />");

    if let Some(first) = entry.images.first() {
        let attr = |name: &str| first.iter().find(|a| a.name == name).map(|a| &a.value);
        if let Some(src) = attr("src") {
            let _ = writeln!(
                html,
                "    <meta property=\"og:image\" content=\"{}\" />",
                escape_html(&expand_url(src, base_url))
            );
        }
        for property in ["width", "height"] {
            if let Some(value) = attr(property) {
                let _ = writeln!(
                    html,
                    "    <meta property=\"og:image:{property}\" content=\"{}\" />",
                    escape_html(value)
                );
            }
        }
    }

    html.push_str("  </head>\n");
    html.push_str("  <body>\n");
    html.push_str("    <figure>\n");

    for image in &entry.images {
        html.push_str("      <img");
        for a in expanded_attributes(image, base_url) {
            let _ = write!(html, " {}=\"{}\"", a.name, escape_html(&a.value));
        }
        html.push_str("/>\n");
    }

    let _ = writeln!(html, "      <figcaption>{title}</figcaption>");
    html.push_str("    </figure>\n");
    html.push_str("  </body>\n");
    html.push_str("</html>\n");
    html
}
