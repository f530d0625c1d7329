//! Note duration denominations

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Duration denominations, longest first.
///
/// Crosses the JS boundary as its numeric discriminant.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_repr, Deserialize_repr)]
pub enum DurationType {
    Long = 0,
    Breve = 1,
    Whole = 2,
    Half = 3,
    Quarter = 4,
    Eighth = 5,
    D16th = 6,
    D32nd = 7,
    D64th = 8,
    D128th = 9,
    D256th = 10,
    D512th = 11,
    D1024th = 12,
    /// Whole-measure rest
    Measure = 13,
    /// No duration selected
    Invalid = 14,
}

impl DurationType {
    /// Every real denomination, longest first
    pub const ALL: [DurationType; 13] = [
        DurationType::Long,
        DurationType::Breve,
        DurationType::Whole,
        DurationType::Half,
        DurationType::Quarter,
        DurationType::Eighth,
        DurationType::D16th,
        DurationType::D32nd,
        DurationType::D64th,
        DurationType::D128th,
        DurationType::D256th,
        DurationType::D512th,
        DurationType::D1024th,
    ];

    /// Highest dot count the note-input pad offers for this denomination.
    ///
    /// Four dots down to the 64th; from the 128th on every halving of the
    /// value removes one more dot, so a 1024th takes none.
    pub fn max_dots(&self) -> u8 {
        match self {
            DurationType::D128th => 3,
            DurationType::D256th => 2,
            DurationType::D512th => 1,
            DurationType::D1024th => 0,
            _ => 4,
        }
    }
}

impl Default for DurationType {
    fn default() -> Self {
        DurationType::Quarter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_dots_never_grows_as_value_shrinks() {
        let mut previous = u8::MAX;
        for d in DurationType::ALL {
            let dots = d.max_dots();
            assert!(dots <= previous, "{:?} allows more dots than a longer value", d);
            previous = dots;
        }
        assert_eq!(DurationType::D64th.max_dots(), 4);
        assert_eq!(DurationType::D1024th.max_dots(), 0);
    }
}
