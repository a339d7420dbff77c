//! Exact probability primitives.
//!
//! A day-long run performs tens of thousands of Bernoulli trials.  All
//! probabilities are therefore exact `u64` fractions: a trial draws an integer
//! in `[0, den)` and compares it against `num`, so no floating-point rounding
//! ever enters the decision.

use std::cmp::Ordering;
use std::fmt;

use crate::{CoreError, CoreResult};

// ── Rational ──────────────────────────────────────────────────────────────────

/// A non-negative exact fraction `num / den`, always stored reduced.
///
/// Values above one are representable; [`RandomSource::event_occurred`]
/// treats them as certain.
///
/// [`RandomSource::event_occurred`]: crate::RandomSource::event_occurred
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: u64,
    den: u64,
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Build `num / den` in lowest terms.
    pub fn new(num: u64, den: u64) -> CoreResult<Self> {
        if den == 0 {
            return Err(CoreError::ZeroDenominator);
        }
        if num == 0 {
            return Ok(Self::ZERO);
        }
        let g = gcd(num, den);
        Ok(Self {
            num: num / g,
            den: den / g,
        })
    }

    #[inline]
    pub fn numerator(self) -> u64 {
        self.num
    }

    #[inline]
    pub fn denominator(self) -> u64 {
        self.den
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` when the fraction is ≥ 1, i.e. the event always happens.
    #[inline]
    pub fn is_certain(self) -> bool {
        self.num >= self.den
    }

    /// Lossy conversion for logging and reports.  Never used for decisions.
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = u128::from(self.num) * u128::from(other.den);
        let rhs = u128::from(other.num) * u128::from(self.den);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ── TriangularDistribution ────────────────────────────────────────────────────

/// Triangular probability density over the integer domain `[lower, upper]`,
/// zero at both ends and peaking at `mode`.
///
/// Used as the per-tick departure probability of a parked car as a function
/// of how long it has been parked: unlikely to leave right away or to stay
/// the full maximum, most likely around the midpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TriangularDistribution {
    lower: u64,
    mode:  u64,
    upper: u64,
    /// `(upper - lower) * (mode - lower)`, denominator of the rising edge.
    rising_den:  u64,
    /// `(upper - lower) * (upper - mode)`, denominator of the falling edge.
    falling_den: u64,
}

impl TriangularDistribution {
    /// Requires `lower <= mode <= upper` and `upper - lower >= 2`, which keeps
    /// the peak density `2 / (upper - lower)` within `[0, 1]`.
    pub fn new(lower: u64, mode: u64, upper: u64) -> CoreResult<Self> {
        if !(lower <= mode && mode <= upper) {
            return Err(CoreError::InvalidDistribution(format!(
                "expected lower <= mode <= upper, got {lower}, {mode}, {upper}"
            )));
        }
        let width = upper - lower;
        if width < 2 {
            return Err(CoreError::InvalidDistribution(format!(
                "domain [{lower}, {upper}] too narrow: peak density would exceed 1"
            )));
        }
        let overflow = || {
            CoreError::InvalidDistribution(format!("domain [{lower}, {upper}] too wide"))
        };
        let rising_den = width.checked_mul(mode - lower).ok_or_else(overflow)?;
        let falling_den = width.checked_mul(upper - mode).ok_or_else(overflow)?;
        Ok(Self {
            lower,
            mode,
            upper,
            rising_den,
            falling_den,
        })
    }

    /// The departure density used by the engine: `[0, max]` peaking at `max / 2`.
    pub fn symmetric(max: u64) -> CoreResult<Self> {
        Self::new(0, max / 2, max)
    }

    pub fn lower(&self) -> u64 {
        self.lower
    }

    pub fn mode(&self) -> u64 {
        self.mode
    }

    pub fn upper(&self) -> u64 {
        self.upper
    }

    /// Density at `x`.  Always in `[0, 1]`.
    pub fn pdf(&self, x: u64) -> Rational {
        // Denominators are non-zero on every branch reached, so the `new`
        // calls below cannot fail; fall back to zero rather than panic.
        let density = if x < self.lower || x > self.upper {
            return Rational::ZERO;
        } else if x < self.mode {
            Rational::new(2 * (x - self.lower), self.rising_den)
        } else if x == self.mode {
            Rational::new(2, self.upper - self.lower)
        } else {
            Rational::new(2 * (self.upper - x), self.falling_den)
        };
        density.unwrap_or(Rational::ZERO)
    }
}
