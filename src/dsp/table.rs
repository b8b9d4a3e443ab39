//! Scaled read access into immutable sample tables.
//!
//! Tables live in `'static` storage (flash on the target) and are never
//! written. Lookups do no range checking beyond what slice indexing gives us:
//! callers derive indices from a phase accumulator shifted down to the table's
//! length, so an out-of-range index is a wiring bug and panics.

use crate::{dsp::fixed::qmul_u16, error::ConfigError};

#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    table: &'static [u16],
    scale: u16,
}

impl LookupTable {
    /// Wrap a table at (just under) unity scale.
    pub const fn new(table: &'static [u16]) -> Self {
        Self {
            table,
            scale: u16::MAX,
        }
    }

    pub const fn with_scale(table: &'static [u16], scale: u16) -> Self {
        Self { table, scale }
    }

    /// Wrap a table, rejecting lengths a shifted phase cannot address evenly.
    pub fn checked(table: &'static [u16], scale: u16) -> Result<Self, ConfigError> {
        if !table.len().is_power_of_two() {
            return Err(ConfigError::TableLength(table.len()));
        }
        Ok(Self::with_scale(table, scale))
    }

    /// Raw entry at `idx`.
    ///
    /// # Panics
    ///
    /// If `idx` is past the end of the table.
    #[inline]
    pub fn lookup(&self, idx: usize) -> u16 {
        self.table[idx]
    }

    /// Entry at `idx` scaled by the table's UQ16 factor.
    #[inline]
    pub fn lookup_scaled(&self, idx: usize) -> u16 {
        qmul_u16(self.table[idx], self.scale)
    }

    pub fn set_scale(&mut self, scale: u16) {
        self.scale = scale;
    }

    pub fn scale(&self) -> u16 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Right shift that maps a 16-bit phase onto this table's index range.
    ///
    /// Only meaningful for power-of-two tables no longer than 2^16 entries.
    pub fn phase_shift(&self) -> u8 {
        (16 - self.table.len().trailing_zeros()) as u8
    }
}
