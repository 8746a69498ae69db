use serde::{ser::Error as _, Serialize, Serializer};

use crate::prelude::*;

/// A fill or stroke colour. Channels may be expressions; they are resolved
/// when the colour is serialized.
#[derive(Debug, Clone)]
pub enum Color {
    Hsla {
        hue: Value,
        sat: Value,
        lum: Value,
        alpha: Value,
    },
    Rgba {
        red: Value,
        green: Value,
        blue: Value,
        alpha: Value,
    },
    /// Any CSS colour string, passed through untouched.
    Css(String),
}

impl Color {
    pub fn hsla(
        hue: impl Into<Value>,
        sat: impl Into<Value>,
        lum: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> Self {
        Color::Hsla {
            hue: hue.into(),
            sat: sat.into(),
            lum: lum.into(),
            alpha: alpha.into(),
        }
    }

    pub fn rgba(
        red: impl Into<Value>,
        green: impl Into<Value>,
        blue: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> Self {
        Color::Rgba {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
            alpha: alpha.into(),
        }
    }

    pub fn css(text: impl Into<String>) -> Self {
        Color::Css(text.into())
    }

    pub fn channels(&self) -> Vec<&Value> {
        match self {
            Color::Hsla {
                hue,
                sat,
                lum,
                alpha,
            } => vec![hue, sat, lum, alpha],
            Color::Rgba {
                red,
                green,
                blue,
                alpha,
            } => vec![red, green, blue, alpha],
            Color::Css(_) => Vec::new(),
        }
    }

    /// CSS text for the renderer.
    pub fn to_css(&self) -> Result<String> {
        match self {
            Color::Hsla {
                hue,
                sat,
                lum,
                alpha,
            } => Ok(format!(
                "hsla({}, {}%, {}%, {})",
                resolve_or_passthrough(hue)?,
                resolve_or_passthrough(sat)?,
                resolve_or_passthrough(lum)?,
                resolve_or_passthrough(alpha)?
            )),
            Color::Rgba {
                red,
                green,
                blue,
                alpha,
            } => Ok(format!(
                "rgba({}, {}, {}, {})",
                resolve_or_passthrough(red)?,
                resolve_or_passthrough(green)?,
                resolve_or_passthrough(blue)?,
                resolve_or_passthrough(alpha)?
            )),
            Color::Css(text) => Ok(text.clone()),
        }
    }

    pub fn docs() -> Vec<TypeDoc> {
        let channels = |names: [&'static str; 4]| -> Vec<FieldDoc> {
            names
                .into_iter()
                .map(|n| FieldDoc::required(n, FieldKind::Float))
                .collect()
        };
        vec![
            TypeDoc {
                name: "Color::hsla",
                summary: "Hue, saturation and luminance (percent) with alpha",
                fields: channels(["hue", "sat", "lum", "alpha"]),
            },
            TypeDoc {
                name: "Color::rgba",
                summary: "Red, green and blue channels with alpha",
                fields: channels(["red", "green", "blue", "alpha"]),
            },
        ]
    }
}

impl From<&str> for Color {
    fn from(text: &str) -> Self {
        Color::css(text)
    }
}

impl From<String> for Color {
    fn from(text: String) -> Self {
        Color::Css(text)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.to_css().map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}
