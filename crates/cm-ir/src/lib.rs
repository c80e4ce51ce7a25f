//! Core types for the channelmix engine.
//!
//! This crate defines the data model shared by the mixing kernels and
//! their hosts: planar audio buffers, channel layouts, mixing matrices
//! and the volume fast-path contract.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod audio_buffer;
mod layout;
mod matrix;
mod volume;

pub use audio_buffer::{AudioBuffer, BLOCK_SIZE};
pub use layout::{ChannelLayout, ChannelRole, MAX_CHANNELS};
pub use matrix::MixMatrix;
pub use volume::{VolumePath, VOLUME_MIN, VOLUME_NORM};
