//! Route identifiers for supported layout pairs.

use cm_ir::{ChannelLayout, ChannelRole};

/// A (source layout, destination layout) pair with a dedicated kernel.
///
/// Resolved once when a layout pair is negotiated and stored in the
/// [`MixConfig`](crate::MixConfig); [`process`](crate::process)
/// dispatches on this tag. [`Route::Generic`] handles any pair and is
/// the correctness reference for every specialized route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Full N×M matrix multiply, any layout pair.
    Generic,
    /// Identical layouts, diagonal matrix.
    Copy,
    MonoToStereo,
    StereoToMono,
    QuadToMono,
    Surround31ToMono,
    StereoToQuad,
    StereoToSurround31,
    StereoToSurround51,
    Surround51ToStereo,
    Surround51ToSurround31,
    Surround51ToQuad,
    Surround71ToStereo,
    Surround71ToSurround31,
    Surround71ToQuad,
}

impl Route {
    /// Resolve the kernel for a layout pair.
    ///
    /// Identical layouts get [`Route::Copy`]; pairs without a dedicated
    /// kernel fall back to [`Route::Generic`].
    pub fn select(src: &ChannelLayout, dst: &ChannelLayout) -> Route {
        use ChannelRole::*;

        if src == dst {
            return Route::Copy;
        }
        match (src.roles(), dst.roles()) {
            ([Mono], [FrontLeft, FrontRight]) => Route::MonoToStereo,
            ([FrontLeft, FrontRight], [Mono]) => Route::StereoToMono,
            ([FrontLeft, FrontRight, RearLeft, RearRight], [Mono]) => Route::QuadToMono,
            ([FrontLeft, FrontRight, FrontCenter, Lfe], [Mono]) => Route::Surround31ToMono,
            ([FrontLeft, FrontRight], [FrontLeft, FrontRight, RearLeft, RearRight]) => {
                Route::StereoToQuad
            }
            ([FrontLeft, FrontRight], [FrontLeft, FrontRight, FrontCenter, Lfe]) => {
                Route::StereoToSurround31
            }
            (
                [FrontLeft, FrontRight],
                [FrontLeft, FrontRight, FrontCenter, Lfe, SideLeft, SideRight],
            ) => Route::StereoToSurround51,
            (
                [FrontLeft, FrontRight, FrontCenter, Lfe, SideLeft, SideRight],
                [FrontLeft, FrontRight],
            ) => Route::Surround51ToStereo,
            (
                [FrontLeft, FrontRight, FrontCenter, Lfe, SideLeft, SideRight],
                [FrontLeft, FrontRight, FrontCenter, Lfe],
            ) => Route::Surround51ToSurround31,
            (
                [FrontLeft, FrontRight, FrontCenter, Lfe, SideLeft, SideRight],
                [FrontLeft, FrontRight, RearLeft, RearRight],
            ) => Route::Surround51ToQuad,
            (
                [FrontLeft, FrontRight, FrontCenter, Lfe, SideLeft, SideRight, RearLeft, RearRight],
                [FrontLeft, FrontRight],
            ) => Route::Surround71ToStereo,
            (
                [FrontLeft, FrontRight, FrontCenter, Lfe, SideLeft, SideRight, RearLeft, RearRight],
                [FrontLeft, FrontRight, FrontCenter, Lfe],
            ) => Route::Surround71ToSurround31,
            (
                [FrontLeft, FrontRight, FrontCenter, Lfe, SideLeft, SideRight, RearLeft, RearRight],
                [FrontLeft, FrontRight, RearLeft, RearRight],
            ) => Route::Surround71ToQuad,
            _ => Route::Generic,
        }
    }

    /// True for routes with a hard-coded fast-path kernel.
    pub fn is_specialized(&self) -> bool {
        !matches!(self, Route::Generic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_layouts_select_copy() {
        let quad = ChannelLayout::quad();
        assert_eq!(Route::select(&quad, &quad), Route::Copy);
        let mono = ChannelLayout::mono();
        assert_eq!(Route::select(&mono, &mono), Route::Copy);
    }

    #[test]
    fn specialized_pairs_are_recognized() {
        let cases = [
            (ChannelLayout::mono(), ChannelLayout::stereo(), Route::MonoToStereo),
            (ChannelLayout::stereo(), ChannelLayout::mono(), Route::StereoToMono),
            (ChannelLayout::quad(), ChannelLayout::mono(), Route::QuadToMono),
            (
                ChannelLayout::surround_3_1(),
                ChannelLayout::mono(),
                Route::Surround31ToMono,
            ),
            (ChannelLayout::stereo(), ChannelLayout::quad(), Route::StereoToQuad),
            (
                ChannelLayout::stereo(),
                ChannelLayout::surround_3_1(),
                Route::StereoToSurround31,
            ),
            (
                ChannelLayout::stereo(),
                ChannelLayout::surround_5_1(),
                Route::StereoToSurround51,
            ),
            (
                ChannelLayout::surround_5_1(),
                ChannelLayout::stereo(),
                Route::Surround51ToStereo,
            ),
            (
                ChannelLayout::surround_5_1(),
                ChannelLayout::surround_3_1(),
                Route::Surround51ToSurround31,
            ),
            (
                ChannelLayout::surround_5_1(),
                ChannelLayout::quad(),
                Route::Surround51ToQuad,
            ),
            (
                ChannelLayout::surround_7_1(),
                ChannelLayout::stereo(),
                Route::Surround71ToStereo,
            ),
            (
                ChannelLayout::surround_7_1(),
                ChannelLayout::surround_3_1(),
                Route::Surround71ToSurround31,
            ),
            (
                ChannelLayout::surround_7_1(),
                ChannelLayout::quad(),
                Route::Surround71ToQuad,
            ),
        ];
        for (src, dst, route) in cases {
            assert_eq!(Route::select(&src, &dst), route);
            assert!(route.is_specialized());
        }
    }

    #[test]
    fn unsupported_pairs_fall_back_to_generic() {
        let quad = ChannelLayout::quad();
        let stereo = ChannelLayout::stereo();
        assert_eq!(Route::select(&quad, &stereo), Route::Generic);
        assert_eq!(
            Route::select(&ChannelLayout::surround_7_1(), &ChannelLayout::surround_5_1()),
            Route::Generic
        );
        assert!(!Route::Generic.is_specialized());
    }
}
