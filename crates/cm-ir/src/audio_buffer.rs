//! Multichannel f32 audio buffer with planar layout.

use alloc::vec;
use alloc::vec::Vec;
use arrayvec::ArrayVec;

use crate::layout::MAX_CHANNELS;

/// Default block size for audio processing.
pub const BLOCK_SIZE: usize = 256;

/// A multichannel f32 audio buffer in planar layout.
///
/// Data is stored as `channels` contiguous planes of `frames` samples each.
/// `data[ch * frames + frame]` gives the sample for channel `ch` at `frame`.
#[derive(Clone, Debug)]
pub struct AudioBuffer {
    data: Vec<f32>,
    channels: usize,
    frames: usize,
}

impl AudioBuffer {
    /// Create a new silent buffer with the given dimensions.
    ///
    /// Panics if `channels` exceeds [`MAX_CHANNELS`].
    pub fn new(channels: usize, frames: usize) -> Self {
        assert!(channels <= MAX_CHANNELS);
        Self {
            data: vec![0.0; channels * frames],
            channels,
            frames,
        }
    }

    /// Fill all samples with zero.
    pub fn silence(&mut self) {
        self.data.fill(0.0);
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Read-only access to one channel's sample data.
    pub fn channel(&self, ch: usize) -> &[f32] {
        let start = ch * self.frames;
        &self.data[start..start + self.frames]
    }

    /// Mutable access to one channel's sample data.
    pub fn channel_mut(&mut self, ch: usize) -> &mut [f32] {
        let start = ch * self.frames;
        &mut self.data[start..start + self.frames]
    }

    /// Borrow every plane at once, for the source side of a mix call.
    pub fn planes(&self) -> ArrayVec<&[f32], MAX_CHANNELS> {
        let mut planes = ArrayVec::new();
        for ch in 0..self.channels {
            planes.push(self.channel(ch));
        }
        planes
    }

    /// Borrow every plane mutably at once, for the destination side of a
    /// mix call.
    pub fn planes_mut(&mut self) -> ArrayVec<&mut [f32], MAX_CHANNELS> {
        let mut planes = ArrayVec::new();
        let mut rest = self.data.as_mut_slice();
        for _ in 0..self.channels {
            let (plane, tail) = rest.split_at_mut(self.frames);
            planes.push(plane);
            rest = tail;
        }
        planes
    }

    /// Largest absolute sample value across all channels.
    pub fn peak(&self) -> f32 {
        let mut peak = 0.0;
        for &s in &self.data {
            let a = libm::fabsf(s);
            if a > peak {
                peak = a;
            }
        }
        peak
    }
}
