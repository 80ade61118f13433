//! Squares reported as visually changed by the pixel-difference collaborator.

use serde::Deserialize;

use crate::errors::TrackerError;
use crate::game_state::chess_types::Square;
use crate::utils::algebraic::algebraic_to_square;

/// Which side of the board faces the camera. Square names arrive in camera
/// coordinates; with the dark side nearest the camera both file and rank are
/// mirrored before they reach the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    LightNear,
    DarkNear,
}

impl Orientation {
    #[inline]
    pub const fn to_logical(self, camera_square: Square) -> Square {
        match self {
            Orientation::LightNear => camera_square,
            Orientation::DarkNear => 63 - camera_square,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchedSquare {
    pub square: Square,
    /// Higher means stronger evidence of a real change rather than a shadow.
    pub score: Option<f64>,
}

impl TouchedSquare {
    #[inline]
    pub const fn new(square: Square) -> Self {
        Self { square, score: None }
    }

    #[inline]
    pub const fn with_score(square: Square, score: f64) -> Self {
        Self {
            square,
            score: Some(score),
        }
    }

    /// Missing scores rank below every reported one.
    #[inline]
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// Parse `e4` or `e4:17.5` (case-insensitive) in camera coordinates.
pub fn parse_touched_square(text: &str, orientation: Orientation) -> Result<TouchedSquare, TrackerError> {
    let (name, score) = match text.trim().split_once(':') {
        Some((name, score)) => {
            let value = score
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TrackerError::InvalidScore(text.to_owned()))?;
            (name, Some(value))
        }
        None => (text, None),
    };

    let square = orientation.to_logical(algebraic_to_square(name)?);
    Ok(TouchedSquare { square, score })
}

pub fn parse_touched_squares<S: AsRef<str>>(
    names: &[S],
    orientation: Orientation,
) -> Result<Vec<TouchedSquare>, TrackerError> {
    names
        .iter()
        .map(|name| parse_touched_square(name.as_ref(), orientation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_scored_names() {
        let plain = parse_touched_square("E2", Orientation::LightNear).expect("E2 should parse");
        assert_eq!(plain, TouchedSquare::new(12));

        let scored = parse_touched_square("e4:31.5", Orientation::LightNear).expect("scored square should parse");
        assert_eq!(scored, TouchedSquare::with_score(28, 31.5));
    }

    #[test]
    fn dark_near_mirrors_the_board() {
        let t = parse_touched_square("a1", Orientation::DarkNear).expect("a1 should parse");
        assert_eq!(t.square, 63);
        let t = parse_touched_square("e2", Orientation::DarkNear).expect("e2 should parse");
        assert_eq!(t.square, 51); // d7
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_touched_square("z9", Orientation::LightNear).is_err());
        assert!(parse_touched_square("e4:bright", Orientation::LightNear).is_err());
        assert!(parse_touched_square("e4:NaN", Orientation::LightNear).is_err());
    }
}
