// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Margin kept between a leg angle and the 0°/180° ends, and the shortest inner
/// leg still accepted. Fixed on first use.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// The active tolerance: the value given to [`set_tolerance`] if that ran first,
/// else `CANDLE_BRIDGE_TOLERANCE` as it was when the crate was compiled, else
/// `1e-6` (`1e-4` under `f32`).
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        if let Some(environment_variable) = option_env!("CANDLE_BRIDGE_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Fixes the tolerance, clamped to at least `Real::EPSILON`. Returns `false`
/// when it was already fixed, by an earlier call or by [`tolerance`].
pub fn set_tolerance(value: Real) -> bool {
    TOLERANCE_CELL.set(value.max(Real::EPSILON)).is_ok()
}
