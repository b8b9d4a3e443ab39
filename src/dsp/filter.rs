//! One-pole low/high-pass filters in fixed point.

/*
One-Pole Filters
================

| type          | recurrence                                  | registers         |
| ------------- | ------------------------------------------- | ----------------- |
| Exponential   | hp = x - lp;  lp += c·hp                    | lp (16 bit)       |
| ExponentialLf | same, lp held as 16.16                      | lp (32 bit)       |
| Trapezoid     | hp = x - s;  v = c·hp;  lp = v + s;  s = lp + v | s (16 bit)    |
| TrapezoidLf   | same, s held as 16.16                       | s (32 bit)        |

All four take one unipolar UQ16 sample per call, return the low-pass output,
and keep the high-pass term around as a side value.

Vocabulary
----------

  coefficient   Normalized cutoff, UQ16 in [0, 1). Near zero the low-pass
                barely moves (low cutoff); near 0xFFFF it tracks the input
                almost instantly. For the trapezoidal forms it is the
                pre-warped G = g / (1 + g). Not range-checked.

  highpass      Signed, HALF scale. `x - lp` needs 17 bits, so it is shifted
                right by one to fit an i16. The Q-multiply that consumes it
                shifts by 15 instead of 16 to put the bit back.

  Lf            "Low frequency". With a tiny coefficient the 16-bit product
                c·hp rounds to zero while the output is still some distance
                from the input, so the narrow filters settle short of DC:

                    stall when |c · hp| < 2^14     →     |x - lp| ≲ 2^15 / c

                The Lf variants carry 16 extra fractional bits in their
                accumulator and settle to the exact input.


Exponential vs Trapezoidal
--------------------------

The exponential form is forward-Euler: cheap, but its response warps as the
cutoff approaches Nyquist. The trapezoidal (topology-preserving transform)
form integrates with the trapezoid rule, which keeps the analog prototype's
shape all the way up. It costs one extra add.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `c · hp` with hp at half scale, result at full scale, rounded.
#[inline]
fn scale16(coefficient: u16, highpass: i16) -> i32 {
    (i32::from(coefficient) * i32::from(highpass) + 0x4000) >> 15
}

/// 32-bit counterpart of [`scale16`].
#[inline]
fn scale32(coefficient: u16, highpass: i32) -> i64 {
    (i64::from(coefficient) * i64::from(highpass) + 0x4000) >> 15
}

#[inline]
fn clamp_u16(value: i32) -> u16 {
    value.clamp(0, i32::from(u16::MAX)) as u16
}

#[inline]
fn clamp_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Round a 16.16 accumulator back to a 16-bit sample.
#[inline]
fn round_wide(value: u32) -> u16 {
    ((u64::from(value) + 0x8000) >> 16).min(u64::from(u16::MAX)) as u16
}

/// Half-scale difference between a 16.16 target and a 16.16 accumulator.
#[inline]
fn half_difference_wide(input: u16, acc: u32) -> i32 {
    (((i64::from(input) << 16) - i64::from(acc)) >> 1) as i32
}

#[derive(Debug, Clone, Default)]
pub struct OnePole16 {
    lowpass: u16,
    highpass: i16,
    pub coefficient: u16,
}

impl OnePole16 {
    pub fn new(coefficient: u16) -> Self {
        Self {
            coefficient,
            ..Self::default()
        }
    }

    #[inline]
    pub fn process(&mut self, input: u16) -> u16 {
        self.highpass = ((i32::from(input) - i32::from(self.lowpass)) >> 1) as i16;
        self.lowpass = clamp_u16(i32::from(self.lowpass) + scale16(self.coefficient, self.highpass));
        self.lowpass
    }

    pub fn lowpass(&self) -> u16 {
        self.lowpass
    }

    pub fn highpass(&self) -> i16 {
        self.highpass
    }

    pub fn reset(&mut self) {
        self.lowpass = 0;
        self.highpass = 0;
    }
}

#[derive(Debug, Clone, Default)]
pub struct OnePole16Lf {
    lowpass: u32,
    highpass: i32,
    pub coefficient: u16,
}

impl OnePole16Lf {
    pub fn new(coefficient: u16) -> Self {
        Self {
            coefficient,
            ..Self::default()
        }
    }

    #[inline]
    pub fn process(&mut self, input: u16) -> u16 {
        self.highpass = half_difference_wide(input, self.lowpass);
        self.lowpass = clamp_u32(i64::from(self.lowpass) + scale32(self.coefficient, self.highpass));
        round_wide(self.lowpass)
    }

    pub fn lowpass(&self) -> u16 {
        round_wide(self.lowpass)
    }

    pub fn highpass(&self) -> i16 {
        (self.highpass >> 16) as i16
    }

    pub fn reset(&mut self) {
        self.lowpass = 0;
        self.highpass = 0;
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tpt16 {
    state: u16,
    lowpass: u16,
    highpass: i16,
    pub coefficient: u16,
}

impl Tpt16 {
    pub fn new(coefficient: u16) -> Self {
        Self {
            coefficient,
            ..Self::default()
        }
    }

    #[inline]
    pub fn process(&mut self, input: u16) -> u16 {
        self.highpass = ((i32::from(input) - i32::from(self.state)) >> 1) as i16;
        let scaled = scale16(self.coefficient, self.highpass);
        let lowpass = i32::from(self.state) + scaled;
        self.state = clamp_u16(lowpass + scaled);
        self.lowpass = clamp_u16(lowpass);
        self.lowpass
    }

    pub fn lowpass(&self) -> u16 {
        self.lowpass
    }

    pub fn highpass(&self) -> i16 {
        self.highpass
    }

    pub fn reset(&mut self) {
        self.state = 0;
        self.lowpass = 0;
        self.highpass = 0;
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tpt16Lf {
    state: u32,
    lowpass: u32,
    highpass: i32,
    pub coefficient: u16,
}

impl Tpt16Lf {
    pub fn new(coefficient: u16) -> Self {
        Self {
            coefficient,
            ..Self::default()
        }
    }

    #[inline]
    pub fn process(&mut self, input: u16) -> u16 {
        self.highpass = half_difference_wide(input, self.state);
        let scaled = scale32(self.coefficient, self.highpass);
        let lowpass = i64::from(self.state) + scaled;
        self.state = clamp_u32(lowpass + scaled);
        self.lowpass = clamp_u32(lowpass);
        round_wide(self.lowpass)
    }

    pub fn lowpass(&self) -> u16 {
        round_wide(self.lowpass)
    }

    pub fn highpass(&self) -> i16 {
        (self.highpass >> 16) as i16
    }

    pub fn reset(&mut self) {
        self.state = 0;
        self.lowpass = 0;
        self.highpass = 0;
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    Exponential,
    ExponentialLf,
    Trapezoid,
    TrapezoidLf,
}

/// Per-voice choice of one-pole filter.
#[derive(Debug, Clone)]
pub enum OnePole {
    Exponential(OnePole16),
    ExponentialLf(OnePole16Lf),
    Trapezoid(Tpt16),
    TrapezoidLf(Tpt16Lf),
}

impl OnePole {
    pub fn new(kind: FilterKind, coefficient: u16) -> Self {
        match kind {
            FilterKind::Exponential => OnePole::Exponential(OnePole16::new(coefficient)),
            FilterKind::ExponentialLf => OnePole::ExponentialLf(OnePole16Lf::new(coefficient)),
            FilterKind::Trapezoid => OnePole::Trapezoid(Tpt16::new(coefficient)),
            FilterKind::TrapezoidLf => OnePole::TrapezoidLf(Tpt16Lf::new(coefficient)),
        }
    }

    /// Filter one sample, returning the low-pass output.
    #[inline]
    pub fn process(&mut self, input: u16) -> u16 {
        match self {
            OnePole::Exponential(f) => f.process(input),
            OnePole::ExponentialLf(f) => f.process(input),
            OnePole::Trapezoid(f) => f.process(input),
            OnePole::TrapezoidLf(f) => f.process(input),
        }
    }

    pub fn lowpass(&self) -> u16 {
        match self {
            OnePole::Exponential(f) => f.lowpass(),
            OnePole::ExponentialLf(f) => f.lowpass(),
            OnePole::Trapezoid(f) => f.lowpass(),
            OnePole::TrapezoidLf(f) => f.lowpass(),
        }
    }

    /// Half-scale high-pass term from the most recent `process()`.
    pub fn highpass(&self) -> i16 {
        match self {
            OnePole::Exponential(f) => f.highpass(),
            OnePole::ExponentialLf(f) => f.highpass(),
            OnePole::Trapezoid(f) => f.highpass(),
            OnePole::TrapezoidLf(f) => f.highpass(),
        }
    }

    pub fn coefficient(&self) -> u16 {
        match self {
            OnePole::Exponential(f) => f.coefficient,
            OnePole::ExponentialLf(f) => f.coefficient,
            OnePole::Trapezoid(f) => f.coefficient,
            OnePole::TrapezoidLf(f) => f.coefficient,
        }
    }

    pub fn set_coefficient(&mut self, coefficient: u16) {
        match self {
            OnePole::Exponential(f) => f.coefficient = coefficient,
            OnePole::ExponentialLf(f) => f.coefficient = coefficient,
            OnePole::Trapezoid(f) => f.coefficient = coefficient,
            OnePole::TrapezoidLf(f) => f.coefficient = coefficient,
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            OnePole::Exponential(_) => FilterKind::Exponential,
            OnePole::ExponentialLf(_) => FilterKind::ExponentialLf,
            OnePole::Trapezoid(_) => FilterKind::Trapezoid,
            OnePole::TrapezoidLf(_) => FilterKind::TrapezoidLf,
        }
    }

    /// Switch integration method, keeping the coefficient. State starts over.
    pub fn set_kind(&mut self, kind: FilterKind) {
        if kind != self.kind() {
            *self = OnePole::new(kind, self.coefficient());
        }
    }

    pub fn reset(&mut self) {
        match self {
            OnePole::Exponential(f) => f.reset(),
            OnePole::ExponentialLf(f) => f.reset(),
            OnePole::Trapezoid(f) => f.reset(),
            OnePole::TrapezoidLf(f) => f.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [FilterKind; 4] = [
        FilterKind::Exponential,
        FilterKind::ExponentialLf,
        FilterKind::Trapezoid,
        FilterKind::TrapezoidLf,
    ];

    fn settle(filter: &mut OnePole, input: u16, samples: usize) -> u16 {
        let mut out = 0;
        for _ in 0..samples {
            out = filter.process(input);
        }
        out
    }

    #[test]
    fn dc_converges_for_every_kind() {
        for kind in KINDS {
            for input in [0u16, 1, 0x1234, 0x8000, 0xFFFF] {
                let mut filter = OnePole::new(kind, 0x4000);
                let out = settle(&mut filter, input, 2_000);
                assert!(
                    (i32::from(out) - i32::from(input)).abs() <= 2,
                    "{kind:?}: {out:#x} vs {input:#x}"
                );
                assert!(filter.highpass().abs() <= 1, "{kind:?}: {}", filter.highpass());
            }
        }
    }

    #[test]
    fn dc_converges_downward() {
        for kind in KINDS {
            let mut filter = OnePole::new(kind, 0x4000);
            settle(&mut filter, 0xFFFF, 2_000);
            let out = settle(&mut filter, 0x0100, 2_000);
            assert!((i32::from(out) - 0x0100).abs() <= 2, "{kind:?}: {out:#x}");
        }
    }

    #[test]
    fn low_frequency_variants_remove_small_coefficient_bias() {
        let target = 40_000u16;
        let coefficient = 0x0100;

        let mut narrow = OnePole::new(FilterKind::Exponential, coefficient);
        let mut wide = OnePole::new(FilterKind::ExponentialLf, coefficient);
        let narrow_err = (i32::from(settle(&mut narrow, target, 20_000)) - i32::from(target)).abs();
        let wide_err = (i32::from(settle(&mut wide, target, 20_000)) - i32::from(target)).abs();
        assert!(narrow_err > 64, "narrow settled at error {narrow_err}");
        assert!(wide_err <= 1, "wide settled at error {wide_err}");

        let mut narrow = OnePole::new(FilterKind::Trapezoid, coefficient);
        let mut wide = OnePole::new(FilterKind::TrapezoidLf, coefficient);
        let narrow_err = (i32::from(settle(&mut narrow, target, 20_000)) - i32::from(target)).abs();
        let wide_err = (i32::from(settle(&mut wide, target, 20_000)) - i32::from(target)).abs();
        assert!(narrow_err > 64, "narrow settled at error {narrow_err}");
        assert!(wide_err <= 1, "wide settled at error {wide_err}");
    }

    #[test]
    fn exponential_highpass_reconstructs_input() {
        let mut filter = OnePole16::new(0x2000);
        for input in [0x0000u16, 0xFFFF, 0x1234, 0x8000, 0x0001, 0xFFFF] {
            let before = i32::from(filter.lowpass());
            filter.process(input);
            let rebuilt = before + 2 * i32::from(filter.highpass());
            assert!((rebuilt - i32::from(input)).abs() <= 1);
        }
    }

    #[test]
    fn zero_coefficient_holds() {
        for kind in KINDS {
            let mut filter = OnePole::new(kind, 0);
            assert_eq!(settle(&mut filter, 0xFFFF, 100), 0, "{kind:?}");
        }
    }

    #[test]
    fn lowpass_attenuates_fast_alternation() {
        for kind in KINDS {
            let mut filter = OnePole::new(kind, 0x0800);
            settle(&mut filter, 0x8000, 2_000);

            let mut lo = u16::MAX;
            let mut hi = 0;
            for n in 0..512 {
                let input = if n % 2 == 0 { 0xC000 } else { 0x4000 };
                let out = filter.process(input);
                lo = lo.min(out);
                hi = hi.max(out);
            }
            assert!(hi - lo < 0x0800, "{kind:?}: swing {:#x}", hi - lo);
        }
    }

    #[test]
    fn set_kind_keeps_coefficient() {
        let mut filter = OnePole::new(FilterKind::Exponential, 0x1234);
        filter.set_kind(FilterKind::TrapezoidLf);
        assert_eq!(filter.kind(), FilterKind::TrapezoidLf);
        assert_eq!(filter.coefficient(), 0x1234);
        filter.set_coefficient(0x4321);
        assert_eq!(filter.coefficient(), 0x4321);
    }
}
