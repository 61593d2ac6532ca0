//! HTML rendering for the browser pages.
//!
//! Pages are assembled from small string builders. Every piece of user
//! text goes through [`escape`], and every name placed in a URL goes
//! through [`path_segment`].

use std::fmt::Write as _;

use crate::domain::{SearchOutcome, WarehouseSummary};

/// Escapes `&`, `<`, `>`, `"` and `'` for use in HTML text and attributes.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encodes `raw` as a single URL path segment.
///
/// Only RFC 3986 unreserved characters are left as-is.
#[must_use]
pub fn path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

/// URL of the detail page for `name`.
#[must_use]
pub fn warehouse_url(name: &str) -> String {
    format!("/warehouse/{}", path_segment(name))
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/create\">Create</a>\n\
         <form action=\"/search\" method=\"get\" style=\"display:inline\">\
         <input type=\"text\" name=\"q\" placeholder=\"Search by name\">\
         <button type=\"submit\">Search</button></form></nav>\n\
         <main>\n{body}</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

fn error_block(error: Option<&str>) -> String {
    error
        .map(|msg| format!("<p class=\"error\">{}</p>\n", escape(msg)))
        .unwrap_or_default()
}

fn stats(summary: &WarehouseSummary) -> String {
    format!(
        "<dl>\
         <dt>Balance</dt><dd>{}</dd>\
         <dt>Capacity</dt><dd>{}</dd>\
         <dt>Available Space</dt><dd>{}</dd>\
         </dl>\n",
        summary.balance, summary.capacity, summary.available_space,
    )
}

fn card(summary: &WarehouseSummary) -> String {
    let name = summary.name.as_str();
    format!(
        "<article class=\"warehouse\">\n<h2>{}</h2>\n{}<a href=\"{}\">View Details</a>\n</article>\n",
        escape(name),
        stats(summary),
        warehouse_url(name),
    )
}

fn cards(listing: &[WarehouseSummary]) -> String {
    listing.iter().map(card).collect()
}

/// Front page listing every warehouse.
#[must_use]
pub fn index_page(listing: &[WarehouseSummary]) -> String {
    let mut body = String::from("<h1>Warehouse Management</h1>\n");
    if listing.is_empty() {
        body.push_str("<p>No warehouses have been created yet.</p>\n");
    } else {
        body.push_str(&cards(listing));
    }
    layout("Warehouse Management", &body)
}

/// Creation form. `name` refills the name field after a failed submit.
#[must_use]
pub fn create_page(error: Option<&str>, name: &str) -> String {
    let body = format!(
        "<h1>Create New Warehouse</h1>\n{}\
         <form method=\"post\" action=\"/create\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{}\" required></label>\n\
         <label>Capacity <input type=\"text\" name=\"capacity\" value=\"0\"></label>\n\
         <label>Initial Balance <input type=\"text\" name=\"initial_balance\" value=\"0\"></label>\n\
         <button type=\"submit\">Create</button>\n\
         </form>\n",
        error_block(error),
        escape(name),
    );
    layout("Create New Warehouse", &body)
}

/// Detail page for one warehouse.
#[must_use]
pub fn view_page(summary: &WarehouseSummary) -> String {
    let name = summary.name.as_str();
    let base = warehouse_url(name);
    let body = format!(
        "<h1>{}</h1>\n{}<p class=\"summary\">{}</p>\n\
         <ul>\
         <li><a href=\"{base}/modify\">Modify</a></li>\
         <li><a href=\"{base}/add\">Add Items</a></li>\
         <li><a href=\"{base}/take\">Take Items</a></li>\
         </ul>\n",
        escape(name),
        stats(summary),
        escape(&summary.summary),
    );
    layout(name, &body)
}

/// Capacity change form.
#[must_use]
pub fn modify_page(summary: &WarehouseSummary, error: Option<&str>) -> String {
    let name = summary.name.as_str();
    let title = format!("Modify {name}");
    let body = format!(
        "<h1>{}</h1>\n{}{}\
         <form method=\"post\" action=\"{}/modify\">\n\
         <label>New Capacity <input type=\"text\" name=\"capacity\" value=\"{}\"></label>\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        escape(&title),
        error_block(error),
        stats(summary),
        warehouse_url(name),
        summary.capacity,
    );
    layout(&title, &body)
}

/// Deposit form.
#[must_use]
pub fn add_page(summary: &WarehouseSummary, error: Option<&str>) -> String {
    let name = summary.name.as_str();
    let title = format!("Add Items to {name}");
    amount_form(&title, summary, error, None, &format!("{}/add", warehouse_url(name)), "Add")
}

/// Withdrawal form, optionally with the outcome of the last withdrawal.
#[must_use]
pub fn take_page(summary: &WarehouseSummary, error: Option<&str>, message: Option<&str>) -> String {
    let name = summary.name.as_str();
    let title = format!("Take Items from {name}");
    amount_form(
        &title,
        summary,
        error,
        message,
        &format!("{}/take", warehouse_url(name)),
        "Take",
    )
}

fn amount_form(
    title: &str,
    summary: &WarehouseSummary,
    error: Option<&str>,
    message: Option<&str>,
    action: &str,
    button: &str,
) -> String {
    let message = message
        .map(|msg| format!("<p class=\"message\">{}</p>\n", escape(msg)))
        .unwrap_or_default();
    let body = format!(
        "<h1>{}</h1>\n{}{}{}\
         <form method=\"post\" action=\"{action}\">\n\
         <label>Amount <input type=\"text\" name=\"amount\" value=\"0\"></label>\n\
         <button type=\"submit\">{button}</button>\n\
         </form>\n\
         <a href=\"{}\">Back to warehouse</a>\n",
        escape(title),
        error_block(error),
        message,
        stats(summary),
        warehouse_url(summary.name.as_str()),
    );
    layout(title, &body)
}

/// Search results page.
#[must_use]
pub fn search_page(outcome: &SearchOutcome) -> String {
    let mut body = String::from("<h1>Search Results</h1>\n");
    match outcome {
        SearchOutcome::NoQuery => body.push_str("<p>Please enter a search term.</p>\n"),
        SearchOutcome::Results { query, matches } if matches.is_empty() => {
            let _ = writeln!(
                body,
                "<p>No warehouses found matching &quot;{}&quot;.</p>",
                escape(query)
            );
        }
        SearchOutcome::Results { query, matches } => {
            let _ = writeln!(
                body,
                "<p>{} result(s) for &quot;{}&quot;</p>",
                matches.len(),
                escape(query)
            );
            body.push_str(&cards(matches));
        }
    }
    layout("Search Results", &body)
}
