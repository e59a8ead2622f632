//! ASCII-art glyph table and the row-wise renderer.
//!
//! A glyph table is a JSON object mapping single characters to multi-line
//! strings. Every digit, `.`, `-` and space must be present, and every glyph
//! must have the same number of rows:
//!
//! ```json
//! { "1": "  #  \n ##  \n  #  \n  #  \n ### ", " ": "  \n  \n  \n  \n  " }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::Path;

use crate::error::{GlyphError, Result};

/// Table compiled into the binary, used when no glyph file is configured.
const BUNDLED_GLYPHS: &str = include_str!("../assets/glyph.json");

/// Characters every table must define.
pub const REQUIRED_CHARS: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '-', ' ',
];

/// Immutable character to glyph-rows mapping.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    glyphs: HashMap<char, Vec<String>>,
    height: usize,
}

impl GlyphTable {
    /// Parse and validate a JSON glyph table.
    pub fn from_json(json: &str) -> std::result::Result<Self, GlyphError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;

        let mut glyphs = HashMap::with_capacity(raw.len());
        for (key, art) in raw {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(GlyphError::InvalidKey { key }),
            };
            let rows: Vec<String> = art.split('\n').map(str::to_string).collect();
            glyphs.insert(ch, rows);
        }

        for ch in REQUIRED_CHARS {
            if !glyphs.contains_key(ch) {
                return Err(GlyphError::MissingGlyph(*ch));
            }
        }

        let height = glyphs[&' '].len();
        let mut sorted: Vec<_> = glyphs.iter().collect();
        sorted.sort_by_key(|(ch, _)| **ch);
        for (ch, rows) in sorted {
            if rows.len() != height {
                return Err(GlyphError::HeightMismatch {
                    ch: *ch,
                    expected: height,
                    found: rows.len(),
                });
            }
        }

        crate::debug_event!("glyph", "loaded", "{} glyphs, {height} rows", glyphs.len());
        Ok(Self { glyphs, height })
    }

    /// Read a glyph table from disk.
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, GlyphError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GlyphError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The table shipped with the binary.
    pub fn bundled() -> std::result::Result<Self, GlyphError> {
        Self::from_json(BUNDLED_GLYPHS)
    }

    /// Rows per glyph.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph(&self, ch: char) -> std::result::Result<&[String], GlyphError> {
        self.glyphs
            .get(&ch)
            .map(Vec::as_slice)
            .ok_or(GlyphError::MissingGlyph(ch))
    }

    /// Render `text` as glyph rows, with a space glyph between characters.
    ///
    /// Returns one line per glyph row; empty text renders no lines.
    pub fn render(&self, text: &str) -> std::result::Result<Vec<String>, GlyphError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let spacer = self.glyph(' ')?;
        let mut columns = Vec::with_capacity(text.len() * 2);
        for (idx, ch) in text.chars().enumerate() {
            if idx > 0 {
                columns.push((' ', spacer));
            }
            columns.push((ch, self.glyph(ch)?));
        }

        let mut lines = vec![String::new(); self.height];
        for (ch, rows) in columns {
            if rows.len() != self.height {
                return Err(GlyphError::HeightMismatch {
                    ch,
                    expected: self.height,
                    found: rows.len(),
                });
            }
            for (line, row) in lines.iter_mut().zip(rows) {
                line.push_str(row);
            }
        }
        Ok(lines)
    }
}

/// Write `text` to `out` as large glyphs.
pub fn print_result<W: Write>(table: &GlyphTable, text: &str, out: &mut W) -> Result<()> {
    for line in table.render(text)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
