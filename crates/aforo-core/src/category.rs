//! The six counted vehicle classes.
//!
//! Variant names mirror the capacity table's column codes (`M`, `A`, `B`,
//! `CU`, `CAI`, `CAII`): motorcycles, cars, buses, rigid trucks, and the two
//! articulated truck classes.

/// A vehicle class of the capacity table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum VehicleClass {
    M,
    A,
    B,
    Cu,
    CaI,
    CaII,
}

impl VehicleClass {
    pub const COUNT: usize = 6;

    /// All classes in capacity-table column order.
    pub const ALL: [VehicleClass; Self::COUNT] = [
        VehicleClass::M,
        VehicleClass::A,
        VehicleClass::B,
        VehicleClass::Cu,
        VehicleClass::CaI,
        VehicleClass::CaII,
    ];

    /// Position in per-class arrays (column order).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            VehicleClass::M    => 0,
            VehicleClass::A    => 1,
            VehicleClass::B    => 2,
            VehicleClass::Cu   => 3,
            VehicleClass::CaI  => 4,
            VehicleClass::CaII => 5,
        }
    }

    /// Capacity-table column code.
    pub const fn label(self) -> &'static str {
        match self {
            VehicleClass::M    => "M",
            VehicleClass::A    => "A",
            VehicleClass::B    => "B",
            VehicleClass::Cu   => "CU",
            VehicleClass::CaI  => "CAI",
            VehicleClass::CaII => "CAII",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
