//! The reference N×M matrix kernel and the same-layout copy kernel.

use cm_ir::VolumePath;

use super::silence;
use crate::config::MixConfig;

/// Full matrix multiply: every output sample is a weighted sum over all
/// input channels. Works for any layout pair.
pub(crate) fn matrix_n_m(cfg: &MixConfig, dst: &mut [&mut [f32]], src: &[&[f32]], n_samples: usize) {
    let m = &cfg.matrix;
    let v = cfg.volume;

    match VolumePath::classify(v) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for n in 0..n_samples {
                for (i, plane) in dst.iter_mut().enumerate() {
                    let mut sum = 0.0;
                    for (j, s) in src.iter().enumerate() {
                        sum += s[n] * m.get(i, j);
                    }
                    plane[n] = sum;
                }
            }
        }
        VolumePath::Scale => {
            for n in 0..n_samples {
                for (i, plane) in dst.iter_mut().enumerate() {
                    let mut sum = 0.0;
                    for (j, s) in src.iter().enumerate() {
                        sum += s[n] * m.get(i, j);
                    }
                    plane[n] = sum * v;
                }
            }
        }
    }
}

/// Same-layout passthrough. Unity copies the planes verbatim; scaled
/// multiplies each plane by its diagonal coefficient, into which the
/// negotiation layer folds the volume for this route.
pub(crate) fn copy(cfg: &MixConfig, dst: &mut [&mut [f32]], src: &[&[f32]], n_samples: usize) {
    debug_assert!(cfg.matrix.is_diagonal());

    match VolumePath::classify(cfg.volume) {
        VolumePath::Mute => silence(dst, n_samples),
        VolumePath::Unity => {
            for (plane, s) in dst.iter_mut().zip(src) {
                plane[..n_samples].copy_from_slice(&s[..n_samples]);
            }
        }
        VolumePath::Scale => {
            for (i, plane) in dst.iter_mut().enumerate() {
                let vol = cfg.matrix.get(i, i);
                for n in 0..n_samples {
                    plane[n] = src[i][n] * vol;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{process, MixConfig, Route};
    use cm_ir::{AudioBuffer, MixMatrix};

    #[test]
    fn generic_weighted_sum() {
        let mut src = AudioBuffer::new(2, 2);
        src.channel_mut(0).copy_from_slice(&[1.0, -1.0]);
        src.channel_mut(1).copy_from_slice(&[0.5, 0.25]);
        let mut dst = AudioBuffer::new(1, 2);

        let matrix = MixMatrix::from_rows(&[&[2.0, 4.0]]);
        let cfg = MixConfig::new(Route::Generic, matrix);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 2);

        assert_eq!(dst.channel(0), &[4.0, -1.0]);
    }

    #[test]
    fn generic_scaled_post_multiplies() {
        let mut src = AudioBuffer::new(1, 1);
        src.channel_mut(0)[0] = 1.0;
        let mut dst = AudioBuffer::new(1, 1);

        let cfg = MixConfig::new(Route::Generic, MixMatrix::identity(1)).with_volume(0.5);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(0), &[0.5]);
    }

    #[test]
    fn generic_mute_ignores_sources() {
        let mut src = AudioBuffer::new(2, 2);
        src.channel_mut(0).fill(f32::NAN);
        src.channel_mut(1).fill(f32::INFINITY);
        let mut dst = AudioBuffer::new(2, 2);
        dst.channel_mut(0).fill(1.0);

        let cfg = MixConfig::new(Route::Generic, MixMatrix::identity(2)).with_volume(0.0);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 2);

        assert_eq!(dst.channel(0), &[0.0, 0.0]);
        assert_eq!(dst.channel(1), &[0.0, 0.0]);
    }

    #[test]
    fn copy_unity_is_bit_exact() {
        let mut src = AudioBuffer::new(2, 3);
        src.channel_mut(0).copy_from_slice(&[1.0, f32::MIN_POSITIVE, -0.0]);
        src.channel_mut(1).copy_from_slice(&[0.1, 0.2, 0.3]);
        let mut dst = AudioBuffer::new(2, 3);

        let cfg = MixConfig::new(Route::Copy, MixMatrix::identity(2));
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 3);

        for ch in 0..2 {
            for (a, b) in dst.channel(ch).iter().zip(src.channel(ch)) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn copy_scaled_uses_diagonal_only() {
        let mut src = AudioBuffer::new(2, 1);
        src.channel_mut(0)[0] = 1.0;
        src.channel_mut(1)[0] = 1.0;
        let mut dst = AudioBuffer::new(2, 1);

        let mut matrix = MixMatrix::identity(2);
        matrix.scale(0.5);
        let cfg = MixConfig::new(Route::Copy, matrix).with_volume(0.5);
        process(&cfg, &mut dst.planes_mut(), &src.planes(), 1);

        assert_eq!(dst.channel(0), &[0.5]);
        assert_eq!(dst.channel(1), &[0.5]);
    }
}
