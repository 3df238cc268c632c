//! Trip congruence classes.

/// Plausibility of an OD trip given its route geometry and the checkpoint's
/// capacity.  `Impossible` gates the vehicle computation: such rows produce
/// all-zero vehicle counts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Congruence {
    ExtremelyPossible,
    Possible,
    Unlikely,
    #[default]
    Impossible,
}

impl Congruence {
    /// Numeric class id as reported in diagnostics (1–4).
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Congruence::ExtremelyPossible => 1,
            Congruence::Possible          => 2,
            Congruence::Unlikely          => 3,
            Congruence::Impossible        => 4,
        }
    }
}

impl std::fmt::Display for Congruence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
