use crate::FormatId;

/// The error returned by every pack and unpack operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecError {
    /// The format has no codec for the requested operation.
    ///
    /// This is the case for block-compressed and YCbCr formats, for color
    /// packing into depth/stencil and integer formats, and for depth/stencil
    /// operations on formats without the requested channel.
    UnsupportedFormat(FormatId),
    /// A raw format id outside the known range of [`FormatId`] values.
    InvalidFormatId(u32),
    /// A single-texel or row buffer is too small.
    UnexpectedBufferSize { expected: usize },
    /// The distance between two texels is smaller than a texel.
    StrideTooSmall { required_minimum: usize },
    /// When processing a rectangle, the rectangle is out of bounds of the
    /// canonical or native buffer description.
    RectOutOfBounds,
    /// When processing a rectangle, the row pitch is too small.
    ///
    /// A row pitch must be at least `byte_size * rect.width` bytes (or
    /// `rect.width` texels on the canonical side).
    RowPitchTooSmall { required_minimum: usize },
    /// When processing a rectangle, the buffer is too small.
    RectBufferTooSmall { required_minimum: usize },
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::UnsupportedFormat(format) => {
                write!(f, "Format {:?} is not supported for this operation", format)
            }
            CodecError::InvalidFormatId(id) => {
                write!(f, "Invalid format id {}", id)
            }
            CodecError::UnexpectedBufferSize { expected } => {
                write!(f, "Unexpected buffer size: expected {} bytes", expected)
            }
            CodecError::StrideTooSmall { required_minimum } => {
                write!(
                    f,
                    "Texel stride too small: Must be at least {} bytes",
                    required_minimum
                )
            }
            CodecError::RectOutOfBounds => {
                write!(f, "Rectangle is out of bounds of the buffer")
            }
            CodecError::RowPitchTooSmall { required_minimum } => {
                write!(
                    f,
                    "Row pitch too small: Must be at least {}",
                    required_minimum
                )
            }
            CodecError::RectBufferTooSmall { required_minimum } => {
                write!(
                    f,
                    "Buffer too small for rectangle: required at least {}",
                    required_minimum
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}
