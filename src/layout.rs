use crate::{
    error::{StripError, StripResult},
    model::Orientation,
};

/// Top-left paste offset of one image on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

/// Canvas extent plus one placement per input, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripLayout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement>,
}

/// Plan the strip for the given image sizes.
///
/// Along the main axis the canvas is the sum of the image extents plus
/// `padding` between each adjacent pair (not before the first or after the
/// last). The cross axis is the maximum extent over all inputs; smaller
/// images are anchored at offset 0 (top/left), never centered.
pub fn plan_strip(
    sizes: &[(u32, u32)],
    orientation: Orientation,
    padding: u32,
) -> StripResult<StripLayout> {
    if sizes.is_empty() {
        return Err(StripError::EmptyInput);
    }
    for (idx, &(w, h)) in sizes.iter().enumerate() {
        if w == 0 || h == 0 {
            return Err(StripError::validation(format!(
                "image {idx} has zero extent ({w}x{h})"
            )));
        }
    }

    // Totals in u64 so an oversized request fails validation instead of
    // wrapping.
    let gap_total = u64::from(padding) * (sizes.len() as u64 - 1);
    let (width_total, height_total) = match orientation {
        Orientation::Horizontal => (
            sizes.iter().map(|&(w, _)| u64::from(w)).sum::<u64>() + gap_total,
            sizes.iter().map(|&(_, h)| u64::from(h)).max().unwrap_or(0),
        ),
        Orientation::Vertical => (
            sizes.iter().map(|&(w, _)| u64::from(w)).max().unwrap_or(0),
            sizes.iter().map(|&(_, h)| u64::from(h)).sum::<u64>() + gap_total,
        ),
    };
    let width = u32::try_from(width_total)
        .map_err(|_| StripError::validation("canvas width exceeds u32"))?;
    let height = u32::try_from(height_total)
        .map_err(|_| StripError::validation("canvas height exceeds u32"))?;

    let mut placements = Vec::with_capacity(sizes.len());
    let mut cursor = 0u32;
    for &(w, h) in sizes {
        match orientation {
            Orientation::Horizontal => {
                placements.push(Placement { x: cursor, y: 0 });
                cursor = cursor.saturating_add(w).saturating_add(padding);
            }
            Orientation::Vertical => {
                placements.push(Placement { x: 0, y: cursor });
                cursor = cursor.saturating_add(h).saturating_add(padding);
            }
        }
    }

    Ok(StripLayout {
        width,
        height,
        placements,
    })
}
