//! Filmstrip arranges an ordered set of decoded raster images into a single
//! composite image, side by side or stacked, with a uniform pixel gap between
//! adjacent images on an opaque white canvas.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: input files -> `RgbImage` (alpha is discarded)
//! 2. **Plan**: image dimensions + `Orientation` + padding -> [`StripLayout`]
//! 3. **Compose**: paste each image at its placement on a white canvas
//! 4. **Encode** (optional): write the composite as PNG or JPEG
//!
//! Planning and composing are pure: no IO, no shared state, and identical
//! inputs produce byte-identical output. All IO is front-loaded in [`codec`].
#![forbid(unsafe_code)]

pub mod codec;
pub mod compose;
pub mod error;
pub mod layout;
pub mod model;

pub use codec::{load_images, preview, save_composite};
pub use compose::compose;
pub use error::{StripError, StripResult};
pub use layout::{Placement, StripLayout, plan_strip};
pub use model::{Orientation, parse_padding};
