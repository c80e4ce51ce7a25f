//! Host-side glue for the channelmix CLI.
//!
//! Plays the "negotiation collaborator" role the engine expects: it
//! resolves routes, generates the mixing matrices the kernels read
//! their coefficients from, runs the engine block by block over whole
//! buffers, and drives realtime playback.

mod negotiate;
mod playback;
mod remix;

pub use negotiate::matrix_for;
pub use playback::play;
pub use remix::remix;
