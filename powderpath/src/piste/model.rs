//! Piste model and difficulty classification.

use std::collections::BTreeMap;
use std::fmt;

use crate::coord::SamplePoint;

/// OSM tag holding the difficulty grade.
pub const DIFFICULTY_TAG: &str = "piste:difficulty";

/// OSM tag holding the piste kind (downhill, nordic, ...).
pub const TYPE_TAG: &str = "piste:type";

/// Text shown when a tag is missing.
const UNKNOWN: &str = "unknown";

/// A ski piste: an OSM way with its resolved node positions and tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Piste {
    /// OSM way id
    pub id: u64,
    /// Node positions in way order; unresolved nodes are left out
    pub coordinates: Vec<SamplePoint>,
    pub tags: BTreeMap<String, String>,
}

impl Piste {
    /// Difficulty for display, e.g. `Easy` or `Unknown`.
    pub fn difficulty(&self) -> String {
        capitalize(self.tag_or_unknown(DIFFICULTY_TAG))
    }

    /// Piste type for display, e.g. `Downhill` or `Unknown`.
    pub fn piste_type(&self) -> String {
        capitalize(self.tag_or_unknown(TYPE_TAG))
    }

    /// Line color derived from the difficulty.
    pub fn color(&self) -> PisteColor {
        PisteColor::for_difficulty(&self.difficulty())
    }

    /// Popup text shown when the line is clicked.
    pub fn popup(&self) -> String {
        format!(
            "Piste Type: {}\nDifficulty: {}",
            self.piste_type(),
            self.difficulty()
        )
    }

    fn tag_or_unknown(&self, key: &str) -> &str {
        self.tags.get(key).map(String::as_str).unwrap_or(UNKNOWN)
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Line colors used on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PisteColor {
    Green,
    Blue,
    Red,
    Black,
}

impl PisteColor {
    /// Maps a capitalized difficulty to its color.
    ///
    /// `Novice` is green, `Easy` blue, `Intermediate` red; anything else,
    /// including `Advanced`, `Expert` and `Unknown`, is black.
    pub fn for_difficulty(difficulty: &str) -> Self {
        match difficulty {
            "Novice" => PisteColor::Green,
            "Easy" => PisteColor::Blue,
            "Intermediate" => PisteColor::Red,
            _ => PisteColor::Black,
        }
    }

    /// CSS color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PisteColor::Green => "green",
            PisteColor::Blue => "blue",
            PisteColor::Red => "red",
            PisteColor::Black => "black",
        }
    }
}

impl fmt::Display for PisteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piste(tags: &[(&str, &str)]) -> Piste {
        Piste {
            id: 1,
            coordinates: vec![SamplePoint::new(6.58, 45.29)],
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("easy"), "Easy");
        assert_eq!(capitalize("INTERMEDIATE"), "Intermediate");
        assert_eq!(capitalize("downhill"), "Downhill");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_difficulty_colors() {
        let cases = [
            ("novice", PisteColor::Green),
            ("easy", PisteColor::Blue),
            ("intermediate", PisteColor::Red),
            ("advanced", PisteColor::Black),
            ("expert", PisteColor::Black),
            ("freeride", PisteColor::Black),
        ];
        for (difficulty, color) in cases {
            let p = piste(&[(DIFFICULTY_TAG, difficulty)]);
            assert_eq!(p.color(), color, "difficulty {}", difficulty);
        }
    }

    #[test]
    fn test_tag_case_is_normalized() {
        assert_eq!(piste(&[(DIFFICULTY_TAG, "EASY")]).color(), PisteColor::Blue);
    }

    #[test]
    fn test_missing_tags() {
        let p = piste(&[]);
        assert_eq!(p.difficulty(), "Unknown");
        assert_eq!(p.piste_type(), "Unknown");
        assert_eq!(p.color(), PisteColor::Black);
    }

    #[test]
    fn test_popup() {
        let p = piste(&[(TYPE_TAG, "downhill"), (DIFFICULTY_TAG, "easy")]);
        assert_eq!(p.popup(), "Piste Type: Downhill\nDifficulty: Easy");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(PisteColor::Red.to_string(), "red");
    }
}
