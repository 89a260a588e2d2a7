use crate::error::{StripError, StripResult};

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Axis along which input images are concatenated.
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Parse a user-supplied padding field into a validated pixel count.
///
/// This is the boundary where free text becomes a number. Anything that is
/// not a non-negative integer (including `-1`) rejects the whole request
/// before any image is decoded or composited.
pub fn parse_padding(text: &str) -> StripResult<u32> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| StripError::invalid_padding(trimmed))
}
