// src/swatch/mod.rs
use once_cell::sync::Lazy;
use regex::Regex;

/// Anchored `#RRGGBB` shape check; case-insensitive hex digits.
static HEX_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex code pattern"));

#[derive(Debug, thiserror::Error)]
pub enum SwatchError {
    #[error("row {row}: expected 2 fields (name, hex code), found {found}")]
    MalformedRow { row: u64, found: usize },

    #[error("row {row} ({name}): invalid hex color code {code:?}")]
    InvalidHexCode { row: u64, name: String, code: String },
}

/// One named color, with components already normalized to [0.0, 1.0].
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub name: String,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Swatch {
    /// Validate one CSV record (`row` is 1-based, for diagnostics) into a
    /// normalized swatch. Fields are whitespace-trimmed; the name is used
    /// verbatim beyond that.
    pub fn from_fields(row: u64, fields: &[&str]) -> Result<Self, SwatchError> {
        if fields.len() != 2 {
            return Err(SwatchError::MalformedRow {
                row,
                found: fields.len(),
            });
        }
        let name = fields[0].trim();
        let code = fields[1].trim();

        let (r, g, b) = match decode_hex_code(code) {
            Some(bytes) => bytes,
            None => {
                return Err(SwatchError::InvalidHexCode {
                    row,
                    name: name.to_string(),
                    code: code.to_string(),
                })
            }
        };

        Ok(Self {
            name: name.to_string(),
            r: normalize(r),
            g: normalize(g),
            b: normalize(b),
        })
    }
}

/// Decode `#RRGGBB` into its three byte values, or None if the code
/// doesn't match the pattern.
fn decode_hex_code(code: &str) -> Option<(u8, u8, u8)> {
    if !HEX_CODE_RE.is_match(code) {
        return None;
    }
    let r = u8::from_str_radix(&code[1..3], 16).ok()?;
    let g = u8::from_str_radix(&code[3..5], 16).ok()?;
    let b = u8::from_str_radix(&code[5..7], 16).ok()?;
    Some((r, g, b))
}

fn normalize(byte: u8) -> f64 {
    f64::from(byte) / 255.0
}
