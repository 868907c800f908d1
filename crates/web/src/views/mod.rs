//! Server-rendered HTML pages.
//!
//! Pages are built as strings; every dynamic value goes through
//! [`escape_html`], and ids placed in URLs through [`encode_path_segment`]
//! first.

pub mod home;
pub mod records;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};

/// Wrap `body` in the shared page chrome (navigation, heading, footer).
pub fn layout(title: &str, body: &str) -> String {
    let title = escape_html(title);
    let year = Utc::now().year();
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/css/styles.css">
</head>
<body>
<nav>
<a href="/">Home</a>
<a href="/companies">Companies</a>
<a href="/houses">Houses</a>
<a href="/employees">Employees</a>
</nav>
<main>
<h1>{title}</h1>
{body}</main>
<footer>&copy; {year} Limpeza</footer>
</body>
</html>
"#
    )
}

/// Page shown for any request that ends in an [`AppError`](crate::error::AppError).
pub fn error_page(status: StatusCode, message: &str) -> String {
    let title = match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    };
    let body = format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Back to the dashboard</a></p>\n",
        escape_html(message)
    );
    layout(&title, &body)
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Percent-encode text for use as one URL path segment.
///
/// Everything except the unreserved characters `A-Z a-z 0-9 - . _ ~` is
/// encoded as UTF-8 bytes, so `/`, `?` and `#` inside an id cannot change
/// which route a link points at.
pub fn encode_path_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
