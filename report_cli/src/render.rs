//! Report encodings: text table, HTML document, JSON.
//!
//! Every encoding shows the same fields in the same order: symbol, company name,
//! current price, 52-week high, 52-week low, market cap, industry, sector, change from
//! the 52-week high, then the session change and the upcoming earnings dates. Text and
//! HTML add emphasis to the 52-week change cell from the row's tier.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use report_common::format::Formatter;
use report_common::pipeline::PresentedRow;
use report_common::tier::TierStyle;
use report_common::{Report, Result};

use crate::args::OutputFormat;

/// Column titles in display order.
pub const HEADERS: [&str; 11] = [
    "Ticker",
    "Company Name",
    "Current Price",
    "52 Week High",
    "52 Week Low",
    "Market Cap",
    "Industry",
    "Sector",
    "% Change from 52 Week High",
    "Change",
    "Earnings Date",
];

/// Position of the tier-styled column in [`HEADERS`].
const CHANGE_COLUMN: usize = 8;

/// Date format used in titles, e.g. `10/19/26`.
const DATE_FORMAT: &str = "%m/%d/%y";

/// Render `report` in the requested encoding.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Html => Ok(render_html(report)),
        OutputFormat::Json => render_json(report),
    }
}

fn title(report: &Report) -> String {
    format!(
        "Stock report: {} ({} symbols) as of {}",
        report.label(),
        report.len(),
        report.as_of_date().format(DATE_FORMAT)
    )
}

/// Text cells of one row, in [`HEADERS`] order.
fn cells(p: &PresentedRow<'_>) -> [String; 11] {
    [
        p.row.symbol().to_string(),
        Formatter::text(p.row.company_name()).to_string(),
        p.formatted.current_price.clone(),
        p.formatted.fifty_two_week_high.clone(),
        p.formatted.fifty_two_week_low.clone(),
        p.formatted.market_cap.clone(),
        Formatter::text(p.row.industry()).to_string(),
        Formatter::text(p.row.sector()).to_string(),
        p.formatted.change_percent.clone(),
        p.formatted.day_change_percent.clone(),
        p.formatted.earnings_dates.clone(),
    ]
}

/// `#RRGGBB` to a terminal colour.
fn terminal_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

fn styled_cell(text: String, style: Option<TierStyle>) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(style) = style {
        if let Some(bg) = terminal_color(style.background) {
            cell = cell.bg(bg);
        }
        if let Some(fg) = terminal_color(style.text) {
            cell = cell.fg(fg);
        }
    }
    cell
}

/// Plain-text table with a trailing tier column.
pub fn render_text(report: &Report) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header: Vec<&str> = HEADERS.to_vec();
    header.push("Tier");
    table.set_header(header);

    for presented in report.presented() {
        let style = presented.tier.style();
        let mut row: Vec<Cell> = cells(&presented)
            .into_iter()
            .enumerate()
            .map(|(i, text)| match i {
                CHANGE_COLUMN => styled_cell(text, style),
                _ => Cell::new(text),
            })
            .collect();
        row.push(Cell::new(presented.tier));
        table.add_row(row);
    }

    format!("{}\n{}\n", title(report), table)
}

/// Escape text for HTML element content and attribute values.
fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
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

fn render_change_cell(p: &PresentedRow<'_>, change: &str) -> String {
    match p.tier.style() {
        Some(style) => format!(
            r#"<td class="{class}" style="background-color: {bg}; color: {fg};">{change}</td>"#,
            class = p.tier.css_class(),
            bg = style.background,
            fg = style.text,
            change = html_escape(change),
        ),
        None => format!(
            r#"<td class="{class}">{change}</td>"#,
            class = p.tier.css_class(),
            change = html_escape(change),
        ),
    }
}

fn render_html_row(p: &PresentedRow<'_>) -> String {
    let mut html = String::from("<tr>");
    for (i, value) in cells(p).iter().enumerate() {
        if i == CHANGE_COLUMN {
            html.push_str(&render_change_cell(p, value));
        } else {
            html.push_str(&format!("<td>{}</td>", html_escape(value)));
        }
    }
    html.push_str("</tr>");
    html
}

/// Standalone HTML document; the change cell carries the tier's colours.
pub fn render_html(report: &Report) -> String {
    let header: String = HEADERS
        .iter()
        .map(|h| format!("<th>{}</th>", html_escape(h)))
        .collect();
    let rows: Vec<String> = report.presented().map(|p| render_html_row(&p)).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>table {{ border-collapse: collapse; }} th, td {{ border: 1px solid #999; padding: 10px; }}</style>
</head>
<body>
    <h1 class="header">{title}</h1>
    <table>
        <thead><tr>{header}</tr></thead>
        <tbody>
        {rows}
        </tbody>
    </table>
</body>
</html>
"#,
        title = html_escape(&title(report)),
        header = header,
        rows = rows.join("\n        "),
    )
}

/// JSON array of rows with raw values, display strings and tier.
pub fn render_json(report: &Report) -> Result<String> {
    let rows: Vec<PresentedRow<'_>> = report.presented().collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
