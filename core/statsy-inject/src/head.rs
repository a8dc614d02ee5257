//! Head tags for server-rendered pages.

use statsy_types::InjectionConfig;

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the `<head>` markup that loads the tracking script.
///
/// Emits a preconnect and a dns-prefetch hint for the tracking origin, then
/// the deferred script tag, one per line.
pub fn render_head_tags(config: &InjectionConfig) -> String {
    let origin = escape_attr(&config.origin());
    let src = escape_attr(&config.script_url());

    format!(
        "<link rel=\"preconnect\" href=\"{origin}\">\n\
         <link rel=\"dns-prefetch\" href=\"{origin}\">\n\
         <script src=\"{src}\" defer></script>"
    )
}
