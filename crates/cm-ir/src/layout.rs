//! Channel roles and speaker layouts.

use arrayvec::ArrayVec;

/// Maximum number of audio channels per buffer, layout or matrix.
pub const MAX_CHANNELS: usize = 8;

/// A named logical speaker position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelRole {
    /// Single full-range channel
    Mono,
    FrontLeft,
    FrontRight,
    FrontCenter,
    /// Low-frequency effects
    Lfe,
    SideLeft,
    SideRight,
    RearLeft,
    RearRight,
}

/// An ordered assignment of roles to channel indices.
///
/// The specialized mixing kernels assume the orderings produced by the
/// constructors below; a layout with the same roles in a different order
/// is a different layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelLayout {
    roles: ArrayVec<ChannelRole, MAX_CHANNELS>,
}

impl ChannelLayout {
    /// Build a layout from an explicit role ordering.
    ///
    /// Panics if more than [`MAX_CHANNELS`] roles are given.
    pub fn new(roles: &[ChannelRole]) -> Self {
        Self {
            roles: roles.iter().copied().collect(),
        }
    }

    /// Single-channel layout.
    pub fn mono() -> Self {
        Self::new(&[ChannelRole::Mono])
    }

    /// FL, FR.
    pub fn stereo() -> Self {
        Self::new(&[ChannelRole::FrontLeft, ChannelRole::FrontRight])
    }

    /// FL, FR, RL, RR.
    pub fn quad() -> Self {
        Self::new(&[
            ChannelRole::FrontLeft,
            ChannelRole::FrontRight,
            ChannelRole::RearLeft,
            ChannelRole::RearRight,
        ])
    }

    /// FL, FR, FC, LFE.
    pub fn surround_3_1() -> Self {
        Self::new(&[
            ChannelRole::FrontLeft,
            ChannelRole::FrontRight,
            ChannelRole::FrontCenter,
            ChannelRole::Lfe,
        ])
    }

    /// FL, FR, FC, LFE, SL, SR.
    pub fn surround_5_1() -> Self {
        Self::new(&[
            ChannelRole::FrontLeft,
            ChannelRole::FrontRight,
            ChannelRole::FrontCenter,
            ChannelRole::Lfe,
            ChannelRole::SideLeft,
            ChannelRole::SideRight,
        ])
    }

    /// FL, FR, FC, LFE, SL, SR, RL, RR.
    pub fn surround_7_1() -> Self {
        Self::new(&[
            ChannelRole::FrontLeft,
            ChannelRole::FrontRight,
            ChannelRole::FrontCenter,
            ChannelRole::Lfe,
            ChannelRole::SideLeft,
            ChannelRole::SideRight,
            ChannelRole::RearLeft,
            ChannelRole::RearRight,
        ])
    }

    /// The conventional layout for a bare channel count, if there is one.
    ///
    /// A 4-channel stream reads as quad; 3.1 must be requested explicitly.
    pub fn default_for(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(Self::mono()),
            2 => Some(Self::stereo()),
            4 => Some(Self::quad()),
            6 => Some(Self::surround_5_1()),
            8 => Some(Self::surround_7_1()),
            _ => None,
        }
    }

    /// Look up a layout by its common name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mono" => Some(Self::mono()),
            "stereo" => Some(Self::stereo()),
            "quad" => Some(Self::quad()),
            "3.1" => Some(Self::surround_3_1()),
            "5.1" => Some(Self::surround_5_1()),
            "7.1" => Some(Self::surround_7_1()),
            _ => None,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.roles.len()
    }

    /// The role ordering.
    pub fn roles(&self) -> &[ChannelRole] {
        &self.roles
    }

    /// Channel index carrying `role`, if present.
    pub fn index_of(&self, role: ChannelRole) -> Option<usize> {
        self.roles.iter().position(|&r| r == role)
    }
}
