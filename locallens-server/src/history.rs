//! Upload history page
//!
//! Renders every logged upload, newest first, as a standalone HTML document.
//! Images are referenced by stored name and resolved by the static file
//! service. Nothing is cached; each request re-reads the record log.

use std::fmt::Write;

use locallens_core::UploadRecord;

use crate::file_store::public_path;
use crate::record_log::{RecordLog, RecordLogError};

const TITLE: &str = "LocalLens — Upload History";

const STYLE: &str = "\
body { font-family: sans-serif; padding: 20px; background: #fff; }
h2 { margin-bottom: 20px; }
.entry { margin-bottom: 30px; border-bottom: 1px solid #ccc; padding-bottom: 15px; }
.entry img { max-width: 300px; margin-top: 10px; }
.label { font-weight: bold; }
.empty { color: #666; }";

/// Read the whole log and render it.
pub async fn render_history(log: &dyn RecordLog) -> Result<String, RecordLogError> {
    let records = log.list_all_descending().await?;
    Ok(render_page(&records))
}

/// Render `records` in the order given.
pub fn render_page(records: &[UploadRecord]) -> String {
    let mut html = String::with_capacity(1024 + records.len() * 256);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", TITLE);
    let _ = writeln!(html, "<style>\n{}\n</style>", STYLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h2>{}</h2>", TITLE);

    if records.is_empty() {
        html.push_str("<p class=\"empty\">No uploads yet.</p>\n");
    }

    for record in records {
        render_entry(&mut html, record);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_entry(html: &mut String, record: &UploadRecord) {
    let name = escape_html(&record.stored_name);
    let _ = write!(
        html,
        "<div class=\"entry\">\n\
         <div><span class=\"label\">Filename:</span> {name}</div>\n\
         <div><span class=\"label\">Insight:</span> {insight}</div>\n\
         <div><span class=\"label\">Uploaded:</span> {uploaded}</div>\n\
         <img src=\"{src}\" alt=\"Uploaded Image\">\n\
         </div>\n",
        name = name,
        insight = escape_html(&record.insight),
        uploaded = record.timestamp.to_rfc3339(),
        src = escape_html(&public_path(&record.stored_name)),
    );
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
