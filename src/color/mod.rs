mod channel;
mod formats;
mod srgb;

pub(crate) use channel::*;
pub(crate) use formats::*;
pub(crate) use srgb::*;
