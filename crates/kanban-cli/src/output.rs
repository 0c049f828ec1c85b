//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use kanban_core::{Board, Card, Column, Palette};
use unicode_width::UnicodeWidthStr;

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

/// Parse a `#RRGGBB` token.
fn hex_rgb(token: &str) -> Option<(u8, u8, u8)> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Paint text with a palette color, falling back to plain text.
fn paint(text: &str, color: &str) -> ColoredString {
    match hex_rgb(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Plain column header text, for width calculation.
fn column_header_plain(column: &Column, max_width: usize) -> String {
    let full = format!("{} {}", column.title.to_uppercase(), column.len());
    truncate_visual(&full, max_width)
}

/// Tag label for a card, colored with the matching text color.
fn tag_label(card: &Card, palette: &Palette) -> Option<ColoredString> {
    if card.tag.is_empty() {
        return None;
    }
    let label = format!("[{}]", card.tag);
    Some(match palette.tag_style(&card.tag_color) {
        Some(style) => paint(&label, &style.text),
        None => label.dimmed(),
    })
}

/// Print the board.
pub fn print_board(board: &Board, palette: &Palette) {
    if board.columns.is_empty() {
        println!("{}", "No columns yet. Add one with an addColumn command.".dimmed());
        return;
    }

    let width = term_width();
    if width < 60 {
        print_board_compact(board, palette);
    } else {
        print_board_wide(board, width);
    }
}

/// Columns side by side.
fn print_board_wide(board: &Board, term_w: usize) {
    let num_cols = board.columns.len();
    let available = if term_w > num_cols + 1 { term_w - num_cols - 1 } else { num_cols * 10 };
    let col_width = (available / num_cols).clamp(12, 35);

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = (0..num_cols).map(|_| "─".repeat(col_width)).collect();
        println!("{}", format!("{}{}{}", left, segments.join(mid), right).dimmed());
    };

    rule("┌", "┬", "┐");

    print!("{}", "│".dimmed());
    for (i, col) in board.columns.iter().enumerate() {
        let header = column_header_plain(col, col_width);
        let padding = col_width.saturating_sub(UnicodeWidthStr::width(header.as_str()));
        let left_pad = padding / 2;
        print!(
            "{}{}{}",
            " ".repeat(left_pad),
            paint(&header, &col.color).bold(),
            " ".repeat(padding - left_pad)
        );
        if i < num_cols - 1 {
            print!("{}", "│".dimmed());
        }
    }
    println!("{}", "│".dimmed());

    rule("├", "┼", "┤");

    let max_cards = board.columns.iter().map(Column::len).max().unwrap_or(0);
    for row in 0..max_cards {
        print!("{}", "│".dimmed());
        for (ci, col) in board.columns.iter().enumerate() {
            match col.cards.get(row) {
                Some(card) => {
                    let title = truncate_visual(&card.title, col_width - 1);
                    print!(" {}", pad_right(&title, col_width - 1));
                }
                None => print!("{}", " ".repeat(col_width)),
            }
            if ci < num_cols - 1 {
                print!("{}", "│".dimmed());
            }
        }
        println!("{}", "│".dimmed());
    }

    rule("└", "┴", "┘");

    println!(
        " {} {} columns {} {} cards",
        "■".cyan(),
        num_cols.to_string().bold(),
        "·".dimmed(),
        board.card_count().to_string().bold()
    );
}

/// One column after another, with card details.
fn print_board_compact(board: &Board, palette: &Palette) {
    for col in &board.columns {
        let header = column_header_plain(col, 40);
        println!(" {} {}", "▸".dimmed(), paint(&header, &col.color).bold());

        for card in &col.cards {
            let id_short = if card.id.len() >= 8 { &card.id[..8] } else { &card.id };
            match tag_label(card, palette) {
                Some(tag) => println!("   {} {} {}", card.title, tag, id_short.dimmed()),
                None => println!("   {} {}", card.title, id_short.dimmed()),
            }
            if !card.desc.is_empty() {
                println!("     {}", card.desc.dimmed());
            }
        }
        println!();
    }
}
