//! Parsing of raw `color, gridref` input entries.

use crate::reference::GridReference;
use gridmap_common::{Color, GridMapError};

/// Parse one raw input line into its color and grid reference.
///
/// The text before the first comma must be a single run of word characters
/// naming a palette color; everything after it is the reference token. A
/// line with the wrong shape and a line with an unknown color are
/// deliberately indistinguishable in the reported error.
pub fn parse_entry(line: &str) -> Result<(Color, GridReference), GridMapError> {
    let (color_token, ref_token) = line
        .split_once(',')
        .ok_or_else(|| GridMapError::MalformedLine(line.to_string()))?;

    let is_word = !color_token.is_empty()
        && color_token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !is_word {
        return Err(GridMapError::MalformedLine(line.to_string()));
    }

    let color = Color::from_name(color_token)
        .ok_or_else(|| GridMapError::MalformedLine(line.to_string()))?;

    let reference = GridReference::parse(ref_token)
        .map_err(|_| GridMapError::InvalidGridReference(ref_token.trim().to_string()))?;

    Ok((color, reference))
}
