//! Conversion of raw channel counts into illuminance.

use crate::config::{Gain, IntegrationTime};

// Lux per count at the finest native resolution point of the part,
// gain ×1/8 with an 800 ms integration window.  Every other setting
// scales this baseline.
const BASE_RESOLUTION: f64 = 0.0036;
const BASE_GAIN: f64 = 0.125;
const BASE_INTEGRATION_MS: f64 = 800.0;

/// Lux represented by a single raw count under the given settings.
///
/// Total over all 24 gain/integration-time combinations and pure: the
/// same pair always yields the same multiplier.
#[must_use]
pub fn resolution(gain: Gain, integration_time: IntegrationTime) -> f64 {
    BASE_RESOLUTION
        * (BASE_GAIN / gain.ratio())
        * (BASE_INTEGRATION_MS / f64::from(integration_time.as_millis()))
}

/// Converts a raw channel count captured under the given settings into
/// lux.  Strictly linear; the part's non-linearity at high counts is
/// not compensated here.
#[must_use]
pub fn to_lux(raw: u16, gain: Gain, integration_time: IntegrationTime) -> f64 {
    f64::from(raw) * resolution(gain, integration_time)
}
