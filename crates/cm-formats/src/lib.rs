//! WAV import/export for channelmix.
//!
//! Decodes interleaved PCM WAV data into planar f32 buffers and encodes
//! planar buffers back to 16-bit PCM WAV.

mod wav_format;

pub use wav_format::{buffer_to_wav, load_wav, write_wav};

/// Error type for format parsing.
#[derive(Debug)]
pub enum FormatError {
    /// Invalid file header or magic bytes
    InvalidHeader,
    /// Unexpected end of file
    UnexpectedEof,
    /// Unsupported sample format or channel count
    Unsupported,
}
