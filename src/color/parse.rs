use std::str::FromStr;

use crate::foundation::core::Rgb8;

/// Why a color string was rejected.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty or whitespace.
    #[error("color error: empty color string")]
    Empty,

    /// Hex body was not exactly six digits.
    #[error("color error: hex color must have 6 digits, got {len}")]
    BadHexLength {
        /// Digits found after stripping `#`.
        len: usize,
    },

    /// Hex body contained a non-hex character.
    #[error("color error: invalid hex digits in \"{0}\"")]
    BadHexDigit(String),

    /// `rgb(...)` text was not three comma-separated numbers.
    #[error("color error: malformed rgb() notation \"{0}\"")]
    BadFunctional(String),

    /// A functional component fell outside `0..=255`.
    #[error("color error: rgb() component {0} is out of range 0..=255")]
    ComponentOutOfRange(String),
}

/// Surface syntax of a color string, sniffed before parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSyntax<'a> {
    /// `#rrggbb` or bare `rrggbb`; holds the digits only.
    Hex(&'a str),
    /// `rgb(r, g, b)`; holds the text between the parentheses.
    Functional(&'a str),
}

impl<'a> ColorSyntax<'a> {
    /// Classify trimmed input.
    pub fn sniff(input: &'a str) -> Result<Self, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let is_functional = s
            .get(..4)
            .is_some_and(|head| head.eq_ignore_ascii_case("rgb("));
        if is_functional {
            let body = s[4..]
                .strip_suffix(')')
                .ok_or_else(|| ColorParseError::BadFunctional(s.to_owned()))?;
            return Ok(Self::Functional(body));
        }

        Ok(Self::Hex(s.strip_prefix('#').unwrap_or(s).trim()))
    }

    /// Parse the sniffed body into a color.
    pub fn parse(self) -> Result<Rgb8, ColorParseError> {
        match self {
            Self::Hex(digits) => parse_hex_digits(digits),
            Self::Functional(body) => parse_functional_body(body),
        }
    }
}

/// Parse `#rrggbb` (case-insensitive, `#` optional) or `rgb(r, g, b)`.
pub fn parse_color(input: &str) -> Result<Rgb8, ColorParseError> {
    ColorSyntax::sniff(input)?.parse()
}

impl Rgb8 {
    /// Parse a color, degrading to black on malformed input.
    pub fn parse_or_black(input: &str) -> Self {
        parse_color(input).unwrap_or_else(|err| {
            tracing::debug!(%err, input, "unparseable color, using black");
            Rgb8::BLACK
        })
    }
}

impl FromStr for Rgb8 {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex_digits(digits: &str) -> Result<Rgb8, ColorParseError> {
    if !digits.is_ascii() {
        return Err(ColorParseError::BadHexDigit(digits.to_owned()));
    }
    if digits.len() != 6 {
        return Err(ColorParseError::BadHexLength { len: digits.len() });
    }

    let byte = |pair: &str| {
        u8::from_str_radix(pair, 16).map_err(|_| ColorParseError::BadHexDigit(digits.to_owned()))
    };
    // from_str_radix tolerates a leading '+'.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadHexDigit(digits.to_owned()));
    }

    Ok(Rgb8::new(
        byte(&digits[0..2])?,
        byte(&digits[2..4])?,
        byte(&digits[4..6])?,
    ))
}

fn parse_functional_body(body: &str) -> Result<Rgb8, ColorParseError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ColorParseError::BadFunctional(format!("rgb({body})")));
    };

    let channel = |text: &str| -> Result<u8, ColorParseError> {
        let v: f64 = text
            .parse()
            .map_err(|_| ColorParseError::BadFunctional(format!("rgb({body})")))?;
        if !v.is_finite() || !(0.0..=255.0).contains(&v) {
            return Err(ColorParseError::ComponentOutOfRange(text.to_owned()));
        }
        Ok(v.round() as u8)
    };

    Ok(Rgb8::new(channel(r)?, channel(g)?, channel(b)?))
}

#[cfg(test)]
#[path = "../../tests/unit/color/parse.rs"]
mod tests;
