//! Per-route mixing configuration.

use cm_ir::{MixMatrix, VOLUME_NORM};

use crate::route::Route;

/// Immutable-per-call mixing parameters: route, matrix and volume.
///
/// Built by the negotiation layer whenever the layout pair or volume
/// changes; the kernels only read it. Sharing one config across threads
/// requires the caller to serialize mutation against concurrent
/// [`process`](crate::process) calls, or swap in a fresh config instead.
#[derive(Clone, Debug)]
pub struct MixConfig {
    /// Kernel tag resolved for this layout pair.
    pub route: Route,
    /// Mixing weights, shape `n_dst × n_src`.
    pub matrix: MixMatrix,
    /// Global output volume, non-negative.
    pub volume: f32,
}

impl MixConfig {
    /// Create a config at unity volume.
    pub fn new(route: Route, matrix: MixMatrix) -> Self {
        Self {
            route,
            matrix,
            volume: VOLUME_NORM,
        }
    }

    /// Same config with a different volume.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Source channel count.
    pub fn n_src(&self) -> usize {
        self.matrix.n_src()
    }

    /// Destination channel count.
    pub fn n_dst(&self) -> usize {
        self.matrix.n_dst()
    }
}
