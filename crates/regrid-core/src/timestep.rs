//! The [`Timestep`] identifier.

use std::fmt;

/// Index of a checkpoint in a solver output sequence.
///
/// Checkpoint file names embed the timestep zero-padded to five digits
/// (`TemperatureField.00042.ckp`); the padding is applied by the store's
/// naming functions, not by [`fmt::Display`].
///
/// Resampling a checkpoint always produces a new checkpoint at
/// [`next()`](Timestep::next) — the source timestep is never overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestep(pub u32);

impl Timestep {
    /// The timestep following this one.
    pub fn next(self) -> Timestep {
        Timestep(self.0 + 1)
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Timestep {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
