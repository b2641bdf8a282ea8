use std::collections::BTreeMap;

use crate::foundation::core::Rgba;

/// Custom style properties visible to an illustration container, keyed by name
/// (for example `--ids__accent-RGB` or `color`).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StyleVars(BTreeMap<String, String>);

impl StyleVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Trimmed property value; `None` when unset or blank.
    pub fn get_property(&self, name: &str) -> Option<&str> {
        let v = self.0.get(name)?.trim();
        (!v.is_empty()).then_some(v)
    }

    /// Resolve a `"r, g, b"` (or `#RRGGBB`) property and pair it with `alpha`.
    pub fn resolve_color(&self, name: &str, alpha: f64) -> Option<Rgba> {
        let raw = self.get_property(name)?;
        let color = parse_channels(raw).or_else(|| parse_hex(raw))?;
        Some(color.with_alpha(alpha))
    }

    /// Resolved `color` property, accepting `rgb(...)`/`rgba(...)` as well.
    pub fn text_color(&self) -> Option<Rgba> {
        parse_css_color(self.get_property("color")?)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parses any of `r, g, b`, `#RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn parse_css_color(raw: &str) -> Option<Rgba> {
    let raw = raw.trim();
    if let Some(body) = raw
        .strip_prefix("rgba(")
        .or_else(|| raw.strip_prefix("rgb("))
    {
        let body = body.strip_suffix(')')?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        return match parts.as_slice() {
            [r, g, b] => Some(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let a: f64 = a.parse().ok()?;
                Some(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?).with_alpha(a))
            }
            _ => None,
        };
    }
    parse_channels(raw).or_else(|| parse_hex(raw))
}

fn parse_channels(raw: &str) -> Option<Rgba> {
    let parts: Vec<&str> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    let [r, g, b] = parts.as_slice() else {
        return None;
    };
    Some(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?))
}

fn channel(s: &str) -> Option<u8> {
    let v: f64 = s.trim().parse().ok()?;
    v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
}

fn parse_hex(s: &str) -> Option<Rgba> {
    let s = s.strip_prefix('#')?;
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&s[range], 16).ok();
    Some(Rgba::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/style.rs"]
mod tests;
