use std::fmt::Write;

use anyhow::Result;
use chrono::{TimeZone, Utc};

use crate::domain::constants::PAGE_WINDOW_RADIUS;
use super::browser::PageView;

const NAME_WIDTH: usize = 32;

/// Whole gil with thousands separators; 0 means no listing and renders as `-`
pub fn format_price(price: f64) -> String {
    if price == 0.0 || !price.is_finite() {
        return "-".to_string();
    }

    let digits = (price.round() as i64).unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if price < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Price with its world in parentheses when the scope spans several worlds
fn format_point(price: f64, world: &str, show_world: bool) -> String {
    let price = format_price(price);
    if price == "-" || world.is_empty() || !show_world {
        return price;
    }
    format!("{} ({})", price, world)
}

/// Upload time in UTC, `-` when unknown. Timestamps are milliseconds.
pub fn format_upload_time(millis: Option<i64>) -> String {
    millis
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        return name.to_string();
    }
    let mut short: String = name.chars().take(NAME_WIDTH - 1).collect();
    short.push('…');
    short
}

/// `« 1 2 [3] 4 5 »`, with arrows only when more pages lie beyond the window
pub fn render_page_controls(view: &PageView) -> String {
    let paginator = view.paginator();
    let window = paginator.window(view.page, PAGE_WINDOW_RADIUS);
    let mut parts = Vec::new();

    if *window.start() > 1 {
        parts.push("«".to_string());
    }
    for page in window.clone() {
        if page == view.page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if *window.end() < paginator.total_pages() {
        parts.push("»".to_string());
    }

    parts.join(" ")
}

/// Plain-text price table for a terminal
pub fn render_table(view: &PageView) -> String {
    let mut out = String::new();

    let title = match &view.query {
        Some(query) => format!("Search \"{}\" in {}", query, view.scope),
        None => format!("All tradeable items in {}", view.scope),
    };
    let _ = writeln!(
        out,
        "{} | page {}/{} | {} items",
        title, view.page, view.total_pages, view.total_items
    );

    if view.rows.is_empty() {
        let _ = writeln!(out, "No items to show.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>7}  {:<w$}  {:>24}  {:>24}  {:>24}  {:>8}  {:>16}",
        "ID", "Name", "NQ", "HQ", "Cheapest", "Listings", "Updated (UTC)",
        w = NAME_WIDTH
    );

    // a single-world scope has nothing to attribute
    let spans = view.scope.spans_worlds();

    for row in &view.rows {
        let p = &row.prices;
        let _ = writeln!(
            out,
            "{:>7}  {:<w$}  {:>24}  {:>24}  {:>24}  {:>8}  {:>16}",
            row.item.id,
            truncate_name(&row.item.name),
            format_point(p.nq_price, &p.nq_world, spans),
            format_point(p.hq_price, &p.hq_world, spans),
            format_point(p.min_price, &p.min_world, spans),
            p.listing_count,
            format_upload_time(p.last_upload_time),
            w = NAME_WIDTH
        );
    }

    let _ = writeln!(out, "{}", render_page_controls(view));
    out
}

pub fn render_json(view: &PageView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
