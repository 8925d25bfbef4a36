//! The `Depth` request header.

use std::str::FromStr;

/// How far below the target a PROPFIND reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Zero,
    One,
    Infinity,
}

impl FromStr for Depth {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value == "0" {
            Ok(Self::Zero)
        } else if value == "1" {
            Ok(Self::One)
        } else if value.eq_ignore_ascii_case("infinity") {
            Ok(Self::Infinity)
        } else {
            Err(())
        }
    }
}

impl Depth {
    /// Reads the header value; absent or unparseable values count as `1`.
    #[must_use]
    pub fn from_optional_header(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::One)
    }

    /// Whether the children of a collection are listed.
    ///
    /// The gateway's collections are one level deep, so `infinity` behaves like `1`.
    #[must_use]
    pub const fn includes_children(self) -> bool {
        !matches!(self, Self::Zero)
    }
}
