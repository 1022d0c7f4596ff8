//! Pad identifiers.

use std::fmt;
use std::num::TryFromIntError;

/// Index of a pickup node within one map's `NavGraph`.
///
/// Only meaningful together with the graph it was issued by; a map change
/// invalidates every `PadId` held by the caller.  The inner integer is `pub`
/// so tests and tables can spell ids directly; use [`index`](Self::index)
/// for `Vec` access.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PadId(pub u32);

impl PadId {
    /// No pad.  Returned by lookups on an empty graph.
    pub const INVALID: PadId = PadId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for PadId {
    /// `INVALID`, so an unset id never aliases pad 0.
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PadId({})", self.0)
    }
}

impl TryFrom<usize> for PadId {
    type Error = TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        u32::try_from(n).map(PadId)
    }
}
