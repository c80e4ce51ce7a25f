//! Default mixing matrices for the supported routes.
//!
//! The engine trusts whatever coefficients the matrix carries: the
//! surround downmix kernels read `clev`/`llev`/`slev` from row 0,
//! columns 2..5 and never recompute them. This module is the single
//! place those coefficients are decided.

use cm_engine::Route;
use cm_ir::{ChannelLayout, ChannelRole, MixMatrix};
use std::f32::consts::FRAC_1_SQRT_2;

/// Default centre/LFE/surround fold-down level (-3 dB).
const LEVEL_3DB: f32 = FRAC_1_SQRT_2;

/// Build the mixing matrix encoding `route` for the given layouts.
///
/// `volume` is only consulted for [`Route::Copy`], whose kernel expects
/// the volume folded into the matrix diagonal; every other route keeps
/// the volume separate in the [`MixConfig`](cm_engine::MixConfig).
pub fn matrix_for(
    route: Route,
    src: &ChannelLayout,
    dst: &ChannelLayout,
    volume: f32,
) -> MixMatrix {
    let c = LEVEL_3DB;
    match route {
        Route::Generic => role_matrix(src, dst),
        Route::Copy => {
            let mut m = MixMatrix::identity(dst.channels());
            m.scale(volume);
            m
        }
        Route::MonoToStereo => MixMatrix::from_rows(&[&[1.0], &[1.0]]),
        Route::StereoToMono => MixMatrix::from_rows(&[&[0.5, 0.5]]),
        Route::QuadToMono => MixMatrix::from_rows(&[&[0.25, 0.25, 0.25, 0.25]]),
        Route::Surround31ToMono => MixMatrix::from_rows(&[&[0.5, 0.5, 0.5, 0.0]]),
        Route::StereoToQuad => {
            MixMatrix::from_rows(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 0.0], &[0.0, 1.0]])
        }
        Route::StereoToSurround31 => {
            MixMatrix::from_rows(&[&[1.0, 0.0], &[0.0, 1.0], &[0.5, 0.5], &[0.0, 0.0]])
        }
        Route::StereoToSurround51 => MixMatrix::from_rows(&[
            &[1.0, 0.0],
            &[0.0, 1.0],
            &[0.5, 0.5],
            &[0.0, 0.0],
            &[1.0, 0.0],
            &[0.0, 1.0],
        ]),
        Route::Surround51ToStereo => MixMatrix::from_rows(&[
            &[1.0, 0.0, c, c, c, 0.0],
            &[0.0, 1.0, c, c, 0.0, c],
        ]),
        Route::Surround51ToSurround31 => MixMatrix::from_rows(&[
            &[0.5, 0.0, 0.0, 0.0, 0.5, 0.0],
            &[0.0, 0.5, 0.0, 0.0, 0.0, 0.5],
            &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        ]),
        Route::Surround51ToQuad => MixMatrix::from_rows(&[
            &[1.0, 0.0, c, c, 0.0, 0.0],
            &[0.0, 1.0, c, c, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        ]),
        Route::Surround71ToStereo => MixMatrix::from_rows(&[
            &[1.0, 0.0, c, c, c, 0.0, c, 0.0],
            &[0.0, 1.0, c, c, 0.0, c, 0.0, c],
        ]),
        Route::Surround71ToSurround31 => MixMatrix::from_rows(&[
            &[1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.5, 0.0],
            &[0.0, 1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.5],
            &[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
        ]),
        Route::Surround71ToQuad => MixMatrix::from_rows(&[
            &[1.0, 0.0, c, c, c, 0.0, 0.0, 0.0],
            &[0.0, 1.0, c, c, 0.0, c, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, c, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0, c, 0.0, 1.0],
        ]),
    }
}

/// Fallback matrix for pairs without a specialized kernel: unit gain on
/// matching roles, equal-weight fold to mono, full fan-out from mono.
fn role_matrix(src: &ChannelLayout, dst: &ChannelLayout) -> MixMatrix {
    let mut m = MixMatrix::zero(dst.channels(), src.channels());

    if matches!(src.roles(), [ChannelRole::Mono]) {
        for d in 0..dst.channels() {
            m.set(d, 0, 1.0);
        }
        return m;
    }
    if matches!(dst.roles(), [ChannelRole::Mono]) {
        let f = 1.0 / src.channels() as f32;
        for s in 0..src.channels() {
            m.set(0, s, f);
        }
        return m;
    }

    for (d, &role) in dst.roles().iter().enumerate() {
        if let Some(s) = src.index_of(role) {
            m.set(d, s, 1.0);
        }
    }
    m
}
