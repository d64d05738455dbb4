/// Drive state of one H-bridge channel.
///
/// Mirrors the three reachable steady states of the bridge: de-energised,
/// forward with an 8-bit duty magnitude, or reverse with an 8-bit duty
/// magnitude.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drive {
    /// Both direction lines low, duty 0. The rotor free-runs.
    Coast,
    /// Forward line asserted, duty set to the contained magnitude.
    Forward(u8),
    /// Reverse line asserted, duty set to the contained magnitude.
    Reverse(u8),
}

impl Drive {
    /// Builds the drive state selected by a signed speed.
    ///
    /// Zero maps to [`Drive::Coast`], positive to [`Drive::Forward`] and
    /// negative to [`Drive::Reverse`]. Magnitudes above
    /// [`MAX_SPEED`](crate::MAX_SPEED) are clamped to the 8-bit duty range,
    /// so `i16::MIN` is safe to pass.
    #[must_use]
    pub fn from_speed(speed: i16) -> Self {
        let magnitude = speed.unsigned_abs().min(u16::from(u8::MAX)) as u8;
        match speed {
            0 => Self::Coast,
            s if s > 0 => Self::Forward(magnitude),
            _ => Self::Reverse(magnitude),
        }
    }

    /// Duty magnitude of this state; 0 for [`Drive::Coast`].
    #[must_use]
    pub const fn magnitude(self) -> u8 {
        match self {
            Self::Coast => 0,
            Self::Forward(magnitude) | Self::Reverse(magnitude) => magnitude,
        }
    }
}
