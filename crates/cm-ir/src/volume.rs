//! Volume constants and the three-way fast-path classification.

/// Volume at or below which output is forced to silence.
pub const VOLUME_MIN: f32 = 0.0;

/// Unity volume: the weighted sum is used without a final multiply.
pub const VOLUME_NORM: f32 = 1.0;

/// The processing path implied by a volume scalar.
///
/// Every kernel decides this once per call, before touching any samples,
/// so the `Mute` path never reads the source planes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumePath {
    /// Write zeros, ignore the sources entirely.
    Mute,
    /// Weighted sum only, no multiply by volume.
    Unity,
    /// Weighted sum scaled by volume.
    Scale,
}

impl VolumePath {
    /// Classify a volume scalar.
    #[inline]
    pub fn classify(volume: f32) -> Self {
        if volume <= VOLUME_MIN {
            VolumePath::Mute
        } else if volume == VOLUME_NORM {
            VolumePath::Unity
        } else {
            VolumePath::Scale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_mute() {
        assert_eq!(VolumePath::classify(0.0), VolumePath::Mute);
        assert_eq!(VolumePath::classify(-1.0), VolumePath::Mute);
    }

    #[test]
    fn exact_one_is_unity() {
        assert_eq!(VolumePath::classify(1.0), VolumePath::Unity);
    }

    #[test]
    fn everything_else_scales() {
        assert_eq!(VolumePath::classify(0.5), VolumePath::Scale);
        assert_eq!(VolumePath::classify(1.0 + f32::EPSILON), VolumePath::Scale);
        assert_eq!(VolumePath::classify(2.0), VolumePath::Scale);
        assert_eq!(VolumePath::classify(f32::MIN_POSITIVE), VolumePath::Scale);
    }
}
