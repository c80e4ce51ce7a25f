//! Mixing kernels for the channelmix engine.
//!
//! Converts blocks of planar f32 samples between speaker layouts by
//! applying a mixing matrix and a global volume scalar. The route is
//! resolved once by the negotiation layer; [`process`] dispatches to the
//! matching kernel per block.

#![cfg_attr(not(feature = "std"), no_std)]

mod config;
mod frame;
mod kernels;
mod route;

pub use config::MixConfig;
pub use frame::Frame;
pub use kernels::process;
pub use route::Route;
