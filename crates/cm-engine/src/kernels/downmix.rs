//! Kernels that reduce the channel count.
//!
//! The mono folds use fixed equal weights; the surround folds read their
//! centre, LFE and surround levels (`clev`, `llev`, `slev`) from fixed
//! positions in the mixing matrix and never recompute them.

use cm_ir::VolumePath;

use super::silence;
use crate::config::MixConfig;

/// FL+FR -> MONO.
pub(crate) fn stereo_to_mono(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity | VolumePath::Scale => {
            let f = v * 0.5;
            for n in 0..n_samples {
                dst[0][n] = (src[0][n] + src[1][n]) * f;
            }
        }
    }
}

/// FL+FR+RL+RR -> MONO.
pub(crate) fn quad_to_mono(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity | VolumePath::Scale => {
            let f = v * 0.25;
            for n in 0..n_samples {
                dst[0][n] = (src[0][n] + src[1][n] + src[2][n] + src[3][n]) * f;
            }
        }
    }
}

/// FL+FR+FC+LFE -> MONO. The LFE plane does not contribute.
pub(crate) fn surround31_to_mono(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity | VolumePath::Scale => {
            let f = v * 0.5;
            for n in 0..n_samples {
                dst[0][n] = (src[0][n] + src[1][n] + src[2][n]) * f;
            }
        }
    }
}

/// FL+FR+FC+LFE+SL+SR -> FL+FR.
pub(crate) fn surround51_to_stereo(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let clev = cfg.matrix.get(0, 2);
    let llev = cfg.matrix.get(0, 3);
    let slev = cfg.matrix.get(0, 4);
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let ctr = clev * src[2][n] + llev * src[3][n];
                dst[0][n] = src[0][n] + ctr + slev * src[4][n];
                dst[1][n] = src[1][n] + ctr + slev * src[5][n];
            }
        }
        VolumePath::Scale => {
            for n in 0..n_samples {
                let ctr = clev * src[2][n] + llev * src[3][n];
                dst[0][n] = (src[0][n] + ctr + slev * src[4][n]) * v;
                dst[1][n] = (src[1][n] + ctr + slev * src[5][n]) * v;
            }
        }
    }
}

/// FL+FR+FC+LFE+SL+SR -> FL+FR+FC+LFE.
pub(crate) fn surround51_to_surround31(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity | VolumePath::Scale => {
            let f1 = 0.5 * v;
            for n in 0..n_samples {
                dst[0][n] = (src[0][n] + src[4][n]) * f1;
                dst[1][n] = (src[1][n] + src[5][n]) * f1;
                dst[2][n] = src[2][n] * v;
                dst[3][n] = src[3][n] * v;
            }
        }
    }
}

/// FL+FR+FC+LFE+SL+SR -> FL+FR+RL+RR.
pub(crate) fn surround51_to_quad(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let clev = cfg.matrix.get(0, 2);
    let llev = cfg.matrix.get(0, 3);
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let ctr = src[2][n] * clev + src[3][n] * llev;
                dst[0][n] = src[0][n] + ctr;
                dst[1][n] = src[1][n] + ctr;
                dst[2][n] = src[4][n];
                dst[3][n] = src[5][n];
            }
        }
        VolumePath::Scale => {
            for n in 0..n_samples {
                let ctr = src[2][n] * clev + src[3][n] * llev;
                dst[0][n] = (src[0][n] + ctr) * v;
                dst[1][n] = (src[1][n] + ctr) * v;
                dst[2][n] = src[4][n] * v;
                dst[3][n] = src[5][n] * v;
            }
        }
    }
}

/// FL+FR+FC+LFE+SL+SR+RL+RR -> FL+FR. The surround level is applied to
/// the side and rear pairs alike.
pub(crate) fn surround71_to_stereo(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let clev = cfg.matrix.get(0, 2);
    let llev = cfg.matrix.get(0, 3);
    let slev = cfg.matrix.get(0, 4);
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let ctr = clev * src[2][n] + llev * src[3][n];
                dst[0][n] = src[0][n] + ctr + slev * (src[4][n] + src[6][n]);
                dst[1][n] = src[1][n] + ctr + slev * (src[5][n] + src[7][n]);
            }
        }
        VolumePath::Scale => {
            for n in 0..n_samples {
                let ctr = clev * src[2][n] + llev * src[3][n];
                dst[0][n] = (src[0][n] + ctr + slev * (src[4][n] + src[6][n])) * v;
                dst[1][n] = (src[1][n] + ctr + slev * (src[5][n] + src[6][n])) * v;
            }
        }
    }
}

/// FL+FR+FC+LFE+SL+SR+RL+RR -> FL+FR+FC+LFE.
pub(crate) fn surround71_to_surround31(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity | VolumePath::Scale => {
            let f1 = 0.5 * v;
            for n in 0..n_samples {
                dst[0][n] = src[0][n] + (src[4][n] + src[6][n]) * f1;
                dst[1][n] = src[1][n] + (src[5][n] + src[7][n]) * f1;
                dst[2][n] = src[2][n] * v;
                dst[3][n] = src[3][n] * v;
            }
        }
    }
}

/// FL+FR+FC+LFE+SL+SR+RL+RR -> FL+FR+RL+RR. The sides are shared
/// between the front and rear pairs at the surround level.
pub(crate) fn surround71_to_quad(
    cfg: &MixConfig,
    dst: &mut [&mut [f32]],
    src: &[&[f32]],
    n_samples: usize,
) {
    let clev = cfg.matrix.get(0, 2);
    let llev = cfg.matrix.get(0, 3);
    let slev = cfg.matrix.get(0, 4);
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                let ctr = src[2][n] * clev + src[3][n] * llev;
                let sl = src[4][n] * slev;
                let sr = src[5][n] * slev;
                dst[0][n] = src[0][n] + ctr + sl;
                dst[1][n] = src[1][n] + ctr + sr;
                dst[2][n] = src[6][n] + sl;
                dst[3][n] = src[7][n] + sr;
            }
        }
        VolumePath::Scale => {
            for n in 0..n_samples {
                let ctr = src[2][n] * clev + src[3][n] * llev;
                let sl = src[4][n] * slev;
                let sr = src[5][n] * slev;
                dst[0][n] = (src[0][n] + ctr + sl) * v;
                dst[1][n] = (src[1][n] + ctr + sr) * v;
                dst[2][n] = (src[6][n] + sl) * v;
                dst[3][n] = (src[7][n] + sr) * v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{process, MixConfig, Route};
    use cm_ir::{AudioBuffer, MixMatrix};

    fn buffer_from(planes: &[&[f32]]) -> AudioBuffer {
        let mut buf = AudioBuffer::new(planes.len(), planes[0].len());
        for (ch, plane) in planes.iter().enumerate() {
            buf.channel_mut(ch).copy_from_slice(plane);
        }
        buf
    }

    #[test]
    fn stereo_to_mono_averages() {
        let src = buffer_from(&[&[1.0], &[0.0]]);
        let mut dst = AudioBuffer::new(1, 1);

        let cfg = MixConfig::new(Route::StereoToMono, MixMatrix::zero(1, 2));
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(0), &[0.5]);
    }

    #[test]
    fn quad_to_mono_averages_four() {
        let src = buffer_from(&[&[1.0], &[1.0], &[1.0], &[1.0]]);
        let mut dst = AudioBuffer::new(1, 1);

        let cfg = MixConfig::new(Route::QuadToMono, MixMatrix::zero(1, 4)).with_volume(2.0);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(0), &[2.0]);
    }

    #[test]
    fn surround31_to_mono_skips_lfe() {
        let src = buffer_from(&[&[1.0], &[1.0], &[1.0], &[100.0]]);
        let mut dst = AudioBuffer::new(1, 1);

        let cfg = MixConfig::new(Route::Surround31ToMono, MixMatrix::zero(1, 4));
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(0), &[1.5]);
    }

    #[test]
    fn surround51_to_stereo_reads_levels_from_matrix() {
        let src = buffer_from(&[&[1.0], &[1.0], &[1.0], &[1.0], &[1.0], &[1.0]]);
        let mut dst = AudioBuffer::new(2, 1);

        let matrix = MixMatrix::from_rows(&[
            &[1.0, 0.0, 0.707, 0.707, 0.707, 0.0],
            &[0.0, 1.0, 0.707, 0.707, 0.0, 0.707],
        ]);
        let cfg = MixConfig::new(Route::Surround51ToStereo, matrix);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert!((dst.channel(0)[0] - 3.121).abs() < 1e-5);
        assert!((dst.channel(1)[0] - 3.121).abs() < 1e-5);
    }

    #[test]
    fn surround51_to_surround31_folds_sides() {
        let src = buffer_from(&[&[1.0], &[0.5], &[0.25], &[0.125], &[1.0], &[0.5]]);
        let mut dst = AudioBuffer::new(4, 1);

        let cfg = MixConfig::new(Route::Surround51ToSurround31, MixMatrix::zero(4, 6));
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(0), &[1.0]);
        assert_eq!(dst.channel(1), &[0.5]);
        assert_eq!(dst.channel(2), &[0.25]);
        assert_eq!(dst.channel(3), &[0.125]);
    }

    #[test]
    fn surround51_to_quad_passes_sides_to_rear() {
        let src = buffer_from(&[&[1.0], &[1.0], &[0.0], &[0.0], &[0.25], &[-0.25]]);
        let mut dst = AudioBuffer::new(4, 1);

        let matrix = MixMatrix::from_rows(&[
            &[1.0, 0.0, 0.707, 0.707, 0.0, 0.0],
            &[0.0, 1.0, 0.707, 0.707, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        ]);
        let cfg = MixConfig::new(Route::Surround51ToQuad, matrix);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(2), &[0.25]);
        assert_eq!(dst.channel(3), &[-0.25]);
    }

    #[test]
    fn surround71_to_quad_shares_sides() {
        let src = buffer_from(&[
            &[0.0],
            &[0.0],
            &[0.0],
            &[0.0],
            &[1.0],
            &[-1.0],
            &[0.5],
            &[-0.5],
        ]);
        let mut dst = AudioBuffer::new(4, 1);

        let matrix = MixMatrix::from_rows(&[
            &[1.0, 0.0, 0.5, 0.5, 0.5, 0.0, 0.0, 0.0],
            &[0.0, 1.0, 0.5, 0.5, 0.0, 0.5, 0.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0, 0.0],
            &[0.0, 0.0, 0.0, 0.0, 0.0, 0.5, 0.0, 1.0],
        ]);
        let cfg = MixConfig::new(Route::Surround71ToQuad, matrix);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(0), &[0.5]);
        assert_eq!(dst.channel(1), &[-0.5]);
        assert_eq!(dst.channel(2), &[1.0]);
        assert_eq!(dst.channel(3), &[-1.0]);
    }
}
