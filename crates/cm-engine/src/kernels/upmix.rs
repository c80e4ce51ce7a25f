//! Kernels that raise the channel count.
//!
//! Upmixes fan the existing channels out to the added speakers and
//! derive the centre channel as the half-sum of the front pair; the
//! LFE plane is always written as silence.

use cm_ir::VolumePath;

use super::silence;
use crate::config::MixConfig;

/// MONO -> FL+FR.
pub(crate) fn mono_to_stereo(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let s = src[0][n];
                dst[0][n] = s;
                dst[1][n] = s;
            }
        }
        VolumePath::Scale => {
            for n in 0..n_samples {
                let s = src[0][n] * v;
                dst[0][n] = s;
                dst[1][n] = s;
            }
        }
    }
}

/// FL+FR -> FL+FR+RL+RR.
pub(crate) fn stereo_to_quad(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let l = src[0][n];
                let r = src[1][n];
                dst[0][n] = l;
                dst[2][n] = l;
                dst[1][n] = r;
                dst[3][n] = r;
            }
        }
        VolumePath::Scale => {
            for n in 0..n_samples {
                let l = src[0][n] * v;
                let r = src[1][n] * v;
                dst[0][n] = l;
                dst[2][n] = l;
                dst[1][n] = r;
                dst[3][n] = r;
            }
        }
    }
}

/// FL+FR -> FL+FR+FC+LFE.
pub(crate) fn stereo_to_surround31(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let l = src[0][n];
                let r = src[1][n];
                dst[0][n] = l;
                dst[1][n] = r;
                dst[2][n] = (l + r) * 0.5;
                dst[3][n] = 0.0;
            }
        }
        VolumePath::Scale => {
            let f = 0.5 * v;
            for n in 0..n_samples {
                let l = src[0][n];
                let r = src[1][n];
                dst[0][n] = l * v;
                dst[1][n] = r * v;
                dst[2][n] = (l + r) * f;
                dst[3][n] = 0.0;
            }
        }
    }
}

/// FL+FR -> FL+FR+FC+LFE+SL+SR.
pub(crate) fn stereo_to_surround51(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let l = src[0][n];
                let r = src[1][n];
                dst[0][n] = l;
                dst[4][n] = l;
                dst[1][n] = r;
                dst[5][n] = r;
                dst[2][n] = (l + r) * 0.5;
                dst[3][n] = 0.0;
            }
        }
        VolumePath::Scale => {
            let f = 0.5 * v;
            for n in 0..n_samples {
                let l = src[0][n];
                let r = src[1][n];
                let lv = l * v;
                let rv = r * v;
                dst[0][n] = lv;
                dst[4][n] = lv;
                dst[1][n] = rv;
                dst[5][n] = rv;
                dst[2][n] = (l + r) * f;
                dst[3][n] = 0.0;
            }
        }
    }
}
