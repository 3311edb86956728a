//! Hex string encoding of sRGB colors, e.g. `#fabada` or `#FBD`.

use std::{fmt, str::FromStr};

use crate::models::Srgb;

/// The reason a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHexError {
    /// The string does not have 3 or 6 digits after the optional `#`.
    InvalidLength(usize),
    /// The string contains a character that is not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for ParseHexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseHexError::InvalidLength(len) => {
                write!(f, "invalid hex color length {len}, expected 3 or 6 digits")
            }
            ParseHexError::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ParseHexError {}

fn nibble(c: u8) -> Result<u8, ParseHexError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseHexError::InvalidDigit(c as char)),
    }
}

/// Parse `#rrggbb` or `#rgb` (the `#` is optional, case is ignored) into
/// 8-bit channels. In the short form each digit is repeated.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], ParseHexError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // Reject multi-byte characters before slicing by byte.
    if let Some(c) = digits.chars().find(|c| !c.is_ascii()) {
        return Err(ParseHexError::InvalidDigit(c));
    }

    let bytes = digits.as_bytes();
    match bytes.len() {
        3 => {
            let mut channels = [0; 3];
            for (channel, &digit) in channels.iter_mut().zip(bytes) {
                *channel = nibble(digit)? * 17;
            }
            Ok(channels)
        }
        6 => {
            let mut channels = [0; 3];
            for (channel, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
                *channel = nibble(pair[0])? << 4 | nibble(pair[1])?;
            }
            Ok(channels)
        }
        len => Err(ParseHexError::InvalidLength(len)),
    }
}

/// Format 8-bit channels as lower case `#rrggbb`.
pub fn format_hex([red, green, blue]: [u8; 3]) -> String {
    format!("#{red:02x}{green:02x}{blue:02x}")
}

impl Srgb {
    /// Return this color as lower case `#rrggbb`, each channel rounded to the
    /// nearest 8-bit value.
    pub fn to_hex(&self) -> String {
        format_hex(self.to_rgb8())
    }
}

impl FromStr for Srgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = parse_hex(s).map_err(|err| {
            log::debug!("rejected hex color {s:?}: {err}");
            err
        })?;
        Ok(Srgb::from(channels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_long_and_short_forms() {
        assert_eq!(parse_hex("#fabada"), Ok([250, 186, 218]));
        assert_eq!(parse_hex("fabada"), Ok([250, 186, 218]));
        assert_eq!(parse_hex("#FABADA"), Ok([250, 186, 218]));
        assert_eq!(parse_hex("#FaBaDa"), Ok([250, 186, 218]));
        assert_eq!(parse_hex("#fbd"), Ok([0xff, 0xbb, 0xdd]));
        assert_eq!(parse_hex("0A9"), Ok([0x00, 0xaa, 0x99]));
    }

    #[test]
    fn reject_malformed_strings() {
        assert_eq!(parse_hex(""), Err(ParseHexError::InvalidLength(0)));
        assert_eq!(parse_hex("#"), Err(ParseHexError::InvalidLength(0)));
        assert_eq!(parse_hex("#fabad"), Err(ParseHexError::InvalidLength(5)));
        assert_eq!(parse_hex("##fabada"), Err(ParseHexError::InvalidLength(7)));
        assert_eq!(parse_hex("#fabadz"), Err(ParseHexError::InvalidDigit('z')));
        assert_eq!(parse_hex("#fa bad"), Err(ParseHexError::InvalidDigit(' ')));
        assert_eq!(parse_hex("#fäbad"), Err(ParseHexError::InvalidDigit('ä')));
        assert!("#xyz".parse::<Srgb>().is_err());
    }

    #[test]
    fn format_is_lower_case_and_zero_padded() {
        assert_eq!(format_hex([250, 186, 218]), "#fabada");
        assert_eq!(format_hex([0, 10, 255]), "#000aff");
    }

    #[test]
    fn hex_round_trip() {
        for (input, expected) in [
            ("#fabada", "#fabada"),
            ("#FABADA", "#fabada"),
            ("fAbAdA", "#fabada"),
            ("#fbd", "#ffbbdd"),
            ("#000", "#000000"),
            ("#ffffff", "#ffffff"),
        ] {
            let srgb: Srgb = input.parse().unwrap();
            assert_eq!(srgb.to_hex(), expected);
        }
    }

    #[test]
    fn to_hex_rounds_and_clamps() {
        let fabada = Srgb::new(0.98039215686274, 0.72941176470589, 0.85490196078433);
        assert_eq!(fabada.to_hex(), "#fabada");
        assert_eq!(Srgb::new(1.0000001, -0.0000001, 0.5).to_hex(), "#ff0080");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseHexError::InvalidLength(4).to_string(),
            "invalid hex color length 4, expected 3 or 6 digits"
        );
        assert_eq!(
            ParseHexError::InvalidDigit('g').to_string(),
            "invalid hex digit 'g'"
        );
    }
}
