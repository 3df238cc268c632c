//! Direction codes at a checkpoint.
//!
//! A *sense code* identifies the direction a trip crosses the checkpoint:
//! either the aggregate sentinel `"0"` (the checkpoint's capacity table does
//! not distinguish directions) or a pair `"a-b"` of cardinal codes for the
//! inbound and outbound bearings of the constrained path at the checkpoint
//! node.  A code that cannot be derived, or that the operator's catalogue
//! does not permit, is `Invalid` — the two cases are deliberately not told
//! apart.

use std::fmt;

// ── Cardinal ──────────────────────────────────────────────────────────────────

/// One of the four cardinal quadrants, numbered as in the capacity table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Cardinal {
    North,
    East,
    West,
    South,
}

impl Cardinal {
    /// Numeric code used in `"a-b"` sense strings.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Cardinal::North => 1,
            Cardinal::East  => 2,
            Cardinal::West  => 3,
            Cardinal::South => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Cardinal> {
        match code {
            1 => Some(Cardinal::North),
            2 => Some(Cardinal::East),
            3 => Some(Cardinal::West),
            4 => Some(Cardinal::South),
            _ => None,
        }
    }

    /// Map a planar bearing (degrees in `(-180, 180]`, as produced by
    /// [`PlanePoint::bearing_deg`](crate::plane::PlanePoint::bearing_deg))
    /// to its cardinal quadrant.
    ///
    /// The fixed partition is:
    ///
    /// | Range (deg)                 | Cardinal | Code |
    /// |-----------------------------|----------|------|
    /// | `[-45, 45)`                 | East     | 2    |
    /// | `[45, 135)`                 | North    | 1    |
    /// | `[135, 180] ∪ (-180, -135)` | West     | 3    |
    /// | `[-135, -45)`               | South    | 4    |
    pub fn from_bearing_deg(deg: f64) -> Cardinal {
        if (-45.0..45.0).contains(&deg) {
            Cardinal::East
        } else if (45.0..135.0).contains(&deg) {
            Cardinal::North
        } else if (-135.0..-45.0).contains(&deg) {
            Cardinal::South
        } else {
            Cardinal::West
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ── SenseCode ─────────────────────────────────────────────────────────────────

/// Direction of a trip at the checkpoint.
///
/// `Invalid` covers both "no sense could be derived" (missing path, boundary
/// checkpoint node) and "derived but not in the operator's catalogue".
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum SenseCode {
    /// The checkpoint's capacity rows are not split by direction; the single
    /// combined row is keyed `"0"`.
    Aggregate,
    /// Inbound and outbound cardinal at the checkpoint node.
    Directional(Cardinal, Cardinal),
    #[default]
    Invalid,
}

impl SenseCode {
    /// Parse a capacity-table sense string: `"0"` or `"a-b"` with
    /// `a, b ∈ {1, 2, 3, 4}`.
    pub fn parse(s: &str) -> Option<SenseCode> {
        let s = s.trim();
        if s == "0" {
            return Some(SenseCode::Aggregate);
        }
        let (a, b) = s.split_once('-')?;
        let inbound  = Cardinal::from_code(a.trim().parse().ok()?)?;
        let outbound = Cardinal::from_code(b.trim().parse().ok()?)?;
        Some(SenseCode::Directional(inbound, outbound))
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        matches!(self, SenseCode::Invalid)
    }

    #[inline]
    pub fn is_directional(self) -> bool {
        matches!(self, SenseCode::Directional(..))
    }
}

impl fmt::Display for SenseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenseCode::Aggregate => f.write_str("0"),
            SenseCode::Directional(a, b) => write!(f, "{a}-{b}"),
            SenseCode::Invalid => f.write_str("invalid"),
        }
    }
}
