//! # Rendering
//!
//! Layout (column widths, truncation, padding) is computed here with
//! Unicode-aware widths; styles come from `styles.rs` and degrade to plain
//! text when stdout is not a terminal.

use super::styles::{HEADER, INDEX, MUTED};
use colored::Colorize;
use shelf::api::{CmdMessage, ListedRecord, MessageLevel};
use shelf::error::Result;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a single text column may grow before it is truncated.
pub const MAX_COLUMN_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 4] = ["#", "Title", "Author", "Publisher"];

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Messages on stderr, for when stdout carries machine-readable output.
pub fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        eprintln!("{}", message.content);
    }
}

pub fn render_json(records: &[ListedRecord]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(records)?;
    out.push('\n');
    Ok(out)
}

pub fn render_table(records: &[ListedRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", MUTED.apply_to("No books found."));
    }

    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|lr| {
            [
                lr.index.to_string(),
                truncate_to_width(&lr.record.title, MAX_COLUMN_WIDTH),
                truncate_to_width(&lr.record.author, MAX_COLUMN_WIDTH),
                truncate_to_width(&lr.record.publisher, MAX_COLUMN_WIDTH),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w))
        .collect();
    out.push_str(&format!("{}\n", HEADER.apply_to(header.join(COLUMN_GAP).trim_end())));

    for row in rows {
        let index = INDEX.apply_to(pad_left(&row[0], widths[0]));
        let rest: Vec<String> = row[1..]
            .iter()
            .zip(&widths[1..])
            .map(|(cell, w)| pad(cell, *w))
            .collect();
        out.push_str(&format!(
            "{}{}{}\n",
            index,
            COLUMN_GAP,
            rest.join(COLUMN_GAP).trim_end()
        ));
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf::model::Record;

    fn listed(index: usize, title: &str, author: &str, publisher: &str) -> ListedRecord {
        ListedRecord::new(index, Record::new(title, author, publisher))
    }

    #[test]
    fn empty_table_says_so() {
        assert!(render_table(&[]).contains("No books found."));
    }

    #[test]
    fn table_has_header_and_one_line_per_book() {
        console::set_colors_enabled(false);
        let out = render_table(&[
            listed(0, "Dune", "Herbert", "Ace"),
            listed(1, "Foundation", "Asimov", "Gnome"),
        ]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#  Title"));
        assert_eq!(lines[1], "0  Dune        Herbert  Ace");
        assert_eq!(lines[2], "1  Foundation  Asimov   Gnome");
    }

    #[test]
    fn long_values_are_truncated() {
        let long = "x".repeat(60);
        let cut = truncate_to_width(&long, MAX_COLUMN_WIDTH);
        assert_eq!(cut.width(), MAX_COLUMN_WIDTH);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(pad("本", 4), "本  ");
    }

    #[test]
    fn json_keeps_field_names() {
        let out = render_json(&[listed(0, "Dune", "Herbert", "Ace")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["title"], "Dune");
        assert_eq!(value[0]["publisher"], "Ace");
        assert_eq!(value[0]["index"], 0);
    }
}
