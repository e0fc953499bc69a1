//! Bearing parsing.
//!
//! A bearing is entered either as a single decimal azimuth ("135.25") or as
//! three whitespace-separated degrees/minutes/seconds tokens ("135 15 30").
//! The optional 180 flip is applied to the combined azimuth, never to an
//! individual D/M/S component, and the result is normalized to [0, 360).

use thiserror::Error;

/// Errors produced while parsing a single bearing string.
///
/// These are per-record failures: the traversal records them against the
/// offending row and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BearingError {
    /// The string did not split into one or three tokens.
    #[error("expected a decimal azimuth or three D M S parts, got {parts} part(s)")]
    WrongTokenCount {
        /// How many whitespace-separated tokens were found.
        parts: usize,
    },

    /// A token was not a number.
    #[error("bearing part '{token}' is not a number")]
    NonNumericToken {
        /// The offending token.
        token: String,
    },
}

/// Normalize an azimuth into [0, 360) degrees.
pub fn normalize_azimuth(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Parse a bearing string into a normalized azimuth.
///
/// With `flip180` set, 180 degrees are added after the decimal or D/M/S
/// combination, then the result is reduced modulo 360.
pub fn parse_azimuth(raw: &str, flip180: bool) -> Result<f64, BearingError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let degrees = match tokens.as_slice() {
        [single] => parse_token(single)?,
        [deg, min, sec] => {
            parse_token(deg)? + parse_token(min)? / 60.0 + parse_token(sec)? / 3600.0
        }
        other => {
            return Err(BearingError::WrongTokenCount {
                parts: other.len(),
            })
        }
    };
    let azimuth = if flip180 { degrees + 180.0 } else { degrees };
    Ok(normalize_azimuth(azimuth))
}

fn parse_token(token: &str) -> Result<f64, BearingError> {
    token.parse::<f64>().map_err(|_| BearingError::NonNumericToken {
        token: token.to_string(),
    })
}
