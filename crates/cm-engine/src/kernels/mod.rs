//! The mixing kernel families and the route dispatch.
//!
//! Every kernel shares one contract: the first `n_samples` of each
//! destination plane are overwritten with the route's formula, source
//! planes are read-only, and the three-way volume fast path
//! (mute / unity / scaled) is decided once per call before any sample is
//! touched. The specialized kernels are numerically interchangeable with
//! the generic kernel given the matrix that encodes the same route.

mod downmix;
mod generic;
mod upmix;

use crate::config::MixConfig;
use crate::route::Route;

/// Mix one block of planar samples according to `cfg`.
///
/// # Contract
///
/// The caller must guarantee, via validated configuration construction:
///
/// - `dst.len() == cfg.n_dst()` and `src.len() == cfg.n_src()`;
/// - every plane in `dst` and `src` holds at least `n_samples` samples;
/// - `cfg.route` matches the actual channel ordering of the planes;
/// - `cfg.matrix` has shape `cfg.n_dst() × cfg.n_src()`.
///
/// None of this is checked here — this is the realtime hot path, and a
/// violation is a caller bug (safe-Rust indexing panics rather than
/// corrupting memory). NaN and infinity samples propagate arithmetically;
/// nothing is sanitized or clamped.
pub fn process(cfg: &MixConfig, dst: &mut [&mut [f32]], src: &[&[f32]], n_samples: usize) {
    match cfg.route {
        Route::Generic => generic::matrix_n_m(cfg, dst, src, n_samples),
        Route::Copy => generic::copy(cfg, dst, src, n_samples),
        Route::MonoToStereo => upmix::mono_to_stereo(cfg, dst, src, n_samples),
        Route::StereoToQuad => upmix::stereo_to_quad(cfg, dst, src, n_samples),
        Route::StereoToSurround31 => upmix::stereo_to_surround31(cfg, dst, src, n_samples),
        Route::StereoToSurround51 => upmix::stereo_to_surround51(cfg, dst, src, n_samples),
        Route::StereoToMono => downmix::stereo_to_mono(cfg, dst, src, n_samples),
        Route::QuadToMono => downmix::quad_to_mono(cfg, dst, src, n_samples),
        Route::Surround31ToMono => downmix::surround31_to_mono(cfg, dst, src, n_samples),
        Route::Surround51ToStereo => downmix::surround51_to_stereo(cfg, dst, src, n_samples),
        Route::Surround51ToSurround31 => {
            downmix::surround51_to_surround31(cfg, dst, src, n_samples)
        }
        Route::Surround51ToQuad => downmix::surround51_to_quad(cfg, dst, src, n_samples),
        Route::Surround71ToStereo => downmix::surround71_to_stereo(cfg, dst, src, n_samples),
        Route::Surround71ToSurround31 => {
            downmix::surround71_to_surround31(cfg, dst, src, n_samples)
        }
        Route::Surround71ToQuad => downmix::surround71_to_quad(cfg, dst, src, n_samples),
    }
}

/// Zero-fill the first `n_samples` of every destination plane.
pub(crate) fn silence(dst: &mut [&mut [f32]], n_samples: usize) {
    for plane in dst.iter_mut() {
        plane[..n_samples].fill(0.0);
    }
}
