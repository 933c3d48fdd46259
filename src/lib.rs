//! Conversion of texels between GPU storage formats and canonical RGBA.
//!
//! Every operation is selected at runtime by a [`FormatId`]. Color data is
//! unpacked to and packed from `[f32; 4]`, `[u8; 4]`, or (for pure-integer
//! formats) `[u32; 4]` in RGBA order. Depth and stencil have their own
//! functions that never touch the other channel of a combined texel.
//!
//! ```
//! use texel_codec::{pack_float_rgba, unpack_ubyte_rgba, FormatId};
//!
//! let mut texel = [0; 2];
//! pack_float_rgba(FormatId::R5G6B5_UNORM, &[1.0, 0.0, 1.0, 1.0], &mut texel).unwrap();
//! assert_eq!(u16::from_le_bytes(texel), 0xF81F);
//! assert_eq!(unpack_ubyte_rgba(FormatId::R5G6B5_UNORM, &texel).unwrap(), [255, 0, 255, 255]);
//! ```

#![forbid(unsafe_code)]

mod blend;
mod cast;
mod color;
mod depth_stencil;
mod descriptor;
mod error;
mod format;
mod pack;
mod rect;
mod unpack;
mod util;

pub use blend::*;
pub use depth_stencil::*;
pub use descriptor::*;
pub use error::*;
pub use format::*;
pub use pack::{
    pack_color_mask, pack_float_rgba, pack_float_rgba_row, pack_ubyte_rgba, pack_ubyte_rgba_row,
    pack_uint_rgba, pack_uint_rgba_row,
};
pub use rect::*;
pub use unpack::{
    unpack_float_rgba, unpack_float_rgba_row, unpack_ubyte_rgba, unpack_ubyte_rgba_row,
    unpack_uint_rgba, unpack_uint_rgba_row,
};
