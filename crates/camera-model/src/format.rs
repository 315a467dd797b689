//! Pixel format descriptors.
//!
//! A [`PixelFormat`] is the wire format a device advertises at discovery
//! time; the core only ever compares it for compatibility. A
//! [`BufferFormat`] is the decoded in-memory layout of the frames a running
//! source hands back, and the unit composite buffers are sized in.

use serde::{Deserialize, Serialize};

/// Capture wire format advertised by a device.
///
/// The core never converts between wire formats; decoding is the capture
/// backend's job. Two sources can only tile into the same grid if these
/// match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// Format not reported or not recognized.
    Unknown,
    /// 8-bit single-channel grayscale.
    Gray8,
    /// 16-bit single-channel grayscale.
    Gray16,
    /// Packed 24-bit RGB.
    Rgb24,
    /// Packed YUV 4:2:2.
    Yuyv,
    /// Motion JPEG.
    Mjpeg,
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PixelFormat::Unknown => "unknown",
            PixelFormat::Gray8 => "gray8",
            PixelFormat::Gray16 => "gray16",
            PixelFormat::Rgb24 => "rgb24",
            PixelFormat::Yuyv => "yuyv",
            PixelFormat::Mjpeg => "mjpeg",
        };
        write!(f, "{}", name)
    }
}

/// Decoded layout of the frames a running source produces.
///
/// Derived from a source's color flag when it is handed to an engine:
/// color sources decode to [`BufferFormat::Rgb`], monochrome sources to
/// [`BufferFormat::Gray`]. The byte width per pixel is the multiplier in
/// every stitching offset computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferFormat {
    /// One byte per pixel.
    Gray,
    /// Three bytes per pixel, packed RGB.
    #[default]
    Rgb,
}

impl BufferFormat {
    /// Buffer format implied by a source's color flag.
    pub fn for_color(color: bool) -> Self {
        if color {
            BufferFormat::Rgb
        } else {
            BufferFormat::Gray
        }
    }

    /// Bytes per pixel in a decoded frame.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            BufferFormat::Gray => 1,
            BufferFormat::Rgb => 3,
        }
    }
}

impl std::fmt::Display for BufferFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BufferFormat::Gray => "gray",
            BufferFormat::Rgb => "rgb",
        };
        write!(f, "{}", name)
    }
}
