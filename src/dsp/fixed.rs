//! Saturating arithmetic and rounding Q-multiplication for 8/16/32-bit values.

/*
Fixed-Point Arithmetic
======================

Everything in this crate runs on integers. A sample, a coefficient, or an
envelope level is an integer with an implied binary point somewhere inside it.

Vocabulary
----------

  QN          A fixed-point format with N fractional bits. A Q15 `i16` spans
              [-1.0, 1.0) in steps of 2^-15.

  UQN         The unsigned flavour. A UQ16 `u16` spans [0.0, 1.0) in steps
              of 2^-16; 0xFFFF is "just under one".

  saturate    Clamp to the representable range instead of wrapping. An
              overflowing sum of two loud samples becomes the loudest sample,
              not a sudden full-scale jump to the opposite rail.

  Q-multiply  Multiply two fixed-point values at double width and keep the
              high half. The product of two UQ16 values is a UQ32 value;
              shifting right by 16 brings it back to UQ16.


Rounding
--------

Truncating the shifted product always rounds toward negative infinity, which
biases every multiply downward. We add half an output unit before shifting:

    round(x) = floor(x + 0.5)   →   (a * b + (1 << (K - 1))) >> K


Signed Ceiling
--------------

Two signed QN values multiply to a value with one extra integer bit. The only
product that actually needs it is MIN * MIN = +1.0, which is not representable.
After adding the rounding bias the intermediate is clamped to "just under 1.0"
BEFORE the final shift, so the truncated return value can never wrap.

     i16:   (-0x8000 * -0x8000 + 0x4000)  =  0x4000_4000
            clamp → 0x3FFF_FFFF  >> 15    =  0x7FFF


What Wraps
----------

Nothing in this module. Phase accumulators are the single place where wrapping
is wanted (see `oscillator`), and they use `wrapping_add` explicitly.
*/

pub const MAX_U8: u8 = u8::MAX;
pub const MAX_S8: i8 = i8::MAX;
pub const MIN_S8: i8 = i8::MIN;
pub const MAX_U16: u16 = u16::MAX;
pub const MAX_S16: i16 = i16::MAX;
pub const MIN_S16: i16 = i16::MIN;
pub const MAX_U32: u32 = u32::MAX;
pub const MAX_S32: i32 = i32::MAX;
pub const MIN_S32: i32 = i32::MIN;

// Unsigned saturating addition: a wrapped sum smaller than an operand means
// the carry fell off the top.

#[inline]
pub fn add_sat_u8(a: u8, b: u8) -> u8 {
    let c = a.wrapping_add(b);
    if c < a {
        MAX_U8
    } else {
        c
    }
}

#[inline]
pub fn add_sat_u16(a: u16, b: u16) -> u16 {
    let c = a.wrapping_add(b);
    if c < a {
        MAX_U16
    } else {
        c
    }
}

#[inline]
pub fn add_sat_u32(a: u32, b: u32) -> u32 {
    let c = a.wrapping_add(b);
    if c < a {
        MAX_U32
    } else {
        c
    }
}

// Unsigned saturating subtraction: a wrapped difference larger than the
// minuend means we borrowed past zero.

#[inline]
pub fn sub_sat_u8(a: u8, b: u8) -> u8 {
    let c = a.wrapping_sub(b);
    if c > a {
        0
    } else {
        c
    }
}

#[inline]
pub fn sub_sat_u16(a: u16, b: u16) -> u16 {
    let c = a.wrapping_sub(b);
    if c > a {
        0
    } else {
        c
    }
}

#[inline]
pub fn sub_sat_u32(a: u32, b: u32) -> u32 {
    let c = a.wrapping_sub(b);
    if c > a {
        0
    } else {
        c
    }
}

// Mixed saturating addition: unsigned offset plus signed value, signed result.
// The unsigned operand is never negative, so only the top rail can be hit.

#[inline]
pub fn add_sat_us8(a: u8, b: i8) -> i8 {
    let c = i16::from(a) + i16::from(b);
    if c > i16::from(MAX_S8) {
        MAX_S8
    } else {
        c as i8
    }
}

#[inline]
pub fn add_sat_us16(a: u16, b: i16) -> i16 {
    let c = i32::from(a) + i32::from(b);
    if c > i32::from(MAX_S16) {
        MAX_S16
    } else {
        c as i16
    }
}

#[inline]
pub fn add_sat_us32(a: u32, b: i32) -> i32 {
    let c = i64::from(a) + i64::from(b);
    if c > i64::from(MAX_S32) {
        MAX_S32
    } else {
        c as i32
    }
}

// Signed saturating addition. Overflow is only possible when both operands
// share a sign, and has happened only if the result's sign differs from theirs.

#[inline]
pub fn add_sat_i8(a: i8, b: i8) -> i8 {
    let c = a.wrapping_add(b);
    if (a ^ b) >= 0 && (c ^ a) < 0 {
        if a < 0 {
            MIN_S8
        } else {
            MAX_S8
        }
    } else {
        c
    }
}

#[inline]
pub fn add_sat_i16(a: i16, b: i16) -> i16 {
    let c = a.wrapping_add(b);
    if (a ^ b) >= 0 && (c ^ a) < 0 {
        if a < 0 {
            MIN_S16
        } else {
            MAX_S16
        }
    } else {
        c
    }
}

#[inline]
pub fn add_sat_i32(a: i32, b: i32) -> i32 {
    let c = a.wrapping_add(b);
    if (a ^ b) >= 0 && (c ^ a) < 0 {
        if a < 0 {
            MIN_S32
        } else {
            MAX_S32
        }
    } else {
        c
    }
}

// Signed saturating subtraction. Overflow is only possible when the operands
// differ in sign, and has happened only if the result's sign differs from `a`.

#[inline]
pub fn sub_sat_i8(a: i8, b: i8) -> i8 {
    let c = a.wrapping_sub(b);
    if (a ^ b) < 0 && (c ^ a) < 0 {
        if a < 0 {
            MIN_S8
        } else {
            MAX_S8
        }
    } else {
        c
    }
}

#[inline]
pub fn sub_sat_i16(a: i16, b: i16) -> i16 {
    let c = a.wrapping_sub(b);
    if (a ^ b) < 0 && (c ^ a) < 0 {
        if a < 0 {
            MIN_S16
        } else {
            MAX_S16
        }
    } else {
        c
    }
}

#[inline]
pub fn sub_sat_i32(a: i32, b: i32) -> i32 {
    let c = a.wrapping_sub(b);
    if (a ^ b) < 0 && (c ^ a) < 0 {
        if a < 0 {
            MIN_S32
        } else {
            MAX_S32
        }
    } else {
        c
    }
}

/// UQ8 × UQ8 → UQ8, rounded.
#[inline]
pub fn qmul_u8(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b) + 0x80) >> 8) as u8
}

/// UQ16 × UQ16 → UQ16, rounded.
#[inline]
pub fn qmul_u16(a: u16, b: u16) -> u16 {
    ((u32::from(a) * u32::from(b) + 0x8000) >> 16) as u16
}

/// UQ32 × UQ32 → UQ32, rounded.
#[inline]
pub fn qmul_u32(a: u32, b: u32) -> u32 {
    ((u64::from(a) * u64::from(b) + 0x8000_0000) >> 32) as u32
}

/// Scales a signed value by an unsigned UQ8 gain.
#[inline]
pub fn qmul_us8(a: u8, b: i8) -> i8 {
    ((i16::from(b) * i16::from(a) + 0x80) >> 8) as i8
}

/// Scales a signed value by an unsigned UQ16 gain.
#[inline]
pub fn qmul_us16(a: u16, b: i16) -> i16 {
    ((i32::from(b) * i32::from(a) + 0x8000) >> 16) as i16
}

/// Scales a signed value by an unsigned UQ32 gain.
#[inline]
pub fn qmul_us32(a: u32, b: i32) -> i32 {
    ((i64::from(b) * i64::from(a) + 0x8000_0000) >> 32) as i32
}

/// Q7 × Q7 → Q7, rounded, with the intermediate clamped below +1.0.
#[inline]
pub fn qmul_i8(a: i8, b: i8) -> i8 {
    let temp = (i16::from(a) * i16::from(b) + 0x40).min(0x3FFF);
    (temp >> 7) as i8
}

/// Q15 × Q15 → Q15, rounded, with the intermediate clamped below +1.0.
#[inline]
pub fn qmul_i16(a: i16, b: i16) -> i16 {
    let temp = (i32::from(a) * i32::from(b) + 0x4000).min(0x3FFF_FFFF);
    (temp >> 15) as i16
}

/// Q31 × Q31 → Q31, rounded, with the intermediate clamped below +1.0.
#[inline]
pub fn qmul_i32(a: i32, b: i32) -> i32 {
    let temp = (i64::from(a) * i64::from(b) + 0x4000_0000).min(0x3FFF_FFFF_FFFF_FFFF);
    (temp >> 31) as i32
}
