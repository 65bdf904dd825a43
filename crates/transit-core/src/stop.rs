//! A transit stop — a named point of interest to project onto routes.

use crate::{GeoPoint, StopId};

/// A stop with a stable identity, a display name, and a geographic position.
///
/// Stops are plain values: two stops loaded from different data sources that
/// carry the same id compare equal, so route membership never depends on
/// instance identity.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub position: GeoPoint,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>, position: GeoPoint) -> Self {
        Self { id, name: name.into(), position }
    }

    /// Derive a URL-safe slug from a display name: lowercased, common
    /// diacritics folded, runs of non-alphanumerics collapsed to `-`.
    ///
    /// Empty or all-punctuation names fall back to `"stop"`.
    pub fn slug(name: &str) -> String {
        let mut out = String::with_capacity(name.len());
        let mut last_dash = true; // suppress a leading dash
        for c in name.trim().chars() {
            let folded = match c.to_ascii_lowercase() {
                c if c.is_ascii_alphanumeric() => Some(c),
                _ => match c {
                    'č' | 'Č' | 'ć' | 'Ć' => Some('c'),
                    'š' | 'Š' => Some('s'),
                    'ž' | 'Ž' => Some('z'),
                    _ => None,
                },
            };
            match folded {
                Some(c) => {
                    out.push(c);
                    last_dash = false;
                }
                None if !last_dash => {
                    out.push('-');
                    last_dash = true;
                }
                None => {}
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        if out.is_empty() { "stop".to_string() } else { out }
    }
}

impl PartialEq for Stop {
    /// Equality by id only — name and position are display data.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Stop {}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.id, self.name, self.position)
    }
}
