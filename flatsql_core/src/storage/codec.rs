//! Delimited-text codec for table images.
//!
//! A cell is quoted on encode only when it contains the separator or a
//! quote, with embedded quotes doubled. Line breaks inside cells are not
//! supported; for any row set without them, `decode(encode(rows)) == rows`.

use crate::types::Row;

const SEPARATOR: char = ',';
const QUOTE: char = '"';

/// Decodes a whole table file into rows, one row per line.
pub fn decode(input: &str) -> Vec<Row> {
    input.lines().map(decode_line).collect()
}

fn decode_line(line: &str) -> Row {
    let chars: Vec<char> = line.chars().collect();
    let mut row: Row = Vec::new();
    let mut i = 0usize;
    while i < chars.len() {
        if chars[i] == QUOTE {
            // Quoted field: runs to the matching close quote, "" is one ".
            let mut cell = String::new();
            i += 1;
            while i < chars.len() {
                if chars[i] == QUOTE {
                    if i + 1 < chars.len() && chars[i + 1] == QUOTE {
                        cell.push(QUOTE);
                        i += 2;
                    } else {
                        i += 1;
                        break;
                    }
                } else {
                    cell.push(chars[i]);
                    i += 1;
                }
            }
            row.push(cell);
            if i < chars.len() && chars[i] == SEPARATOR {
                i += 1;
            }
        } else {
            let mut j = i;
            while j < chars.len() && chars[j] != SEPARATOR {
                j += 1;
            }
            row.push(chars[i..j].iter().collect());
            i = if j < chars.len() { j + 1 } else { j };
        }
    }
    if line.ends_with(SEPARATOR) {
        row.push(String::new());
    }
    row
}

/// Encodes rows as separator-joined, newline-terminated lines.
pub fn encode(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(SEPARATOR);
            }
            encode_cell(&mut out, cell);
        }
        out.push('\n');
    }
    out
}

fn encode_cell(out: &mut String, cell: &str) {
    if cell.contains(SEPARATOR) || cell.contains(QUOTE) {
        out.push(QUOTE);
        for c in cell.chars() {
            if c == QUOTE {
                out.push(QUOTE);
            }
            out.push(c);
        }
        out.push(QUOTE);
    } else {
        out.push_str(cell);
    }
}
