/// Failure of an underlying line write.
///
/// The driver itself performs no validation; out-of-range speeds clamp. The
/// only failures are the ones the HAL reports for the owned lines, and those
/// are propagated as-is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<DIRE, PWME> {
    /// A direction-select line write failed.
    Direction(DIRE),
    /// A duty-cycle write on the PWM line failed.
    Duty(PWME),
}
