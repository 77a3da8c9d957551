//! Built-in coefficient tables.
//!
//! The literal values below are a fixed contract: they must stay bit-for-bit
//! identical so that filtered output can be compared against the offline
//! designs they were generated from. They are written out at the precision
//! they were exported with.
#![allow(clippy::excessive_precision)]

use crate::config::FilterKind;

/// A named, versioned pair of coefficient sequences.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Table {
    pub kind: FilterKind,
    pub version: u32,
    pub b: &'static [f64],
    pub a: &'static [f64],
}

/// 2-36 Hz bandpass, 6 taps.
pub const BANDPASS: Table = Table {
    kind: FilterKind::Bandpass,
    version: 1,
    b: &[
        0.0098570847698665753355840024596545845270156860351562500000000000,
        0.0492854238493328766779200122982729226350784301757812500000000000,
        0.0985708476986657533558400245965458452701568603515625000000000000,
        0.0985708476986657533558400245965458452701568603515625000000000000,
        0.0492854238493328766779200122982729226350784301757812500000000000,
        0.0098570847698665753355840024596545845270156860351562500000000000,
    ],
    a: &[
        1.0000000000000000000000000000000000000000000000000000000000000000,
        -1.7049690366758873949493136024102568626403808593750000000000000000,
        1.6581363186364945772055534689570777118206024169921875000000000000,
        -0.8538305269449562029393518969300203025341033935546875000000000000,
        0.2454451058426845577731256753395427949726581573486328125000000000,
        -0.0293551482226050569623865271751128602772951126098632812500000000,
    ],
};

/// 2-36 Hz Butterworth bandpass designed for fs = 220 Hz, 11 taps.
pub const BUTTERWORTH_220HZ: Table = Table {
    kind: FilterKind::Butterworth,
    version: 1,
    b: &[
        0.0078257670268340635832959861772906151600182056427001953125000000,
        0.0000000000000000000000000000000000000000000000000000000000000000,
        -0.0391288351341703144470329789328388869762420654296875000000000000,
        0.0000000000000000000000000000000000000000000000000000000000000000,
        0.0782576702683406288940659578656777739524841308593750000000000000,
        0.0000000000000000000000000000000000000000000000000000000000000000,
        -0.0782576702683406288940659578656777739524841308593750000000000000,
        0.0000000000000000000000000000000000000000000000000000000000000000,
        0.0391288351341703144470329789328388869762420654296875000000000000,
        0.0000000000000000000000000000000000000000000000000000000000000000,
        -0.0078257670268340635832959861772906151600182056427001953125000000,
    ],
    a: &[
        1.0000000000000000000000000000000000000000000000000000000000000000,
        -6.6668777100381477751511738460976630449295043945312500000000000000,
        20.102068981754037224618514301255345344543457031250000000000000000,
        -36.3714748273075940687704132869839668273925781250000000000000000000,
        44.0208829591519616997175035066902637481689453125000000000000000000,
        -37.3825112968389277057212893851101398468017578125000000000000000000,
        22.5663716670588918589146487647667527198791503906250000000000000000,
        -9.5478386288525811664840148296207189559936523437500000000000000000,
        2.7081430610461021402102232968900352716445922851562500000000000000,
        -0.4653152296484516781127638296311488375067710876464843750000000000,
        0.0365512213384927495130050090210716007277369499206542968750000000,
    ],
};

/// Every table, in identifier resolution order.
pub const ALL: &[Table] = &[BANDPASS, BUTTERWORTH_220HZ];

pub fn lookup(kind: FilterKind) -> Option<&'static Table> {
    ALL.iter().find(|t| t.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_well_formed() {
        for t in ALL {
            assert!(!t.b.is_empty());
            assert!(!t.a.is_empty());
            assert_eq!(t.a[0], 1.0);
            assert!(t.b.iter().chain(t.a).all(|c| c.is_finite()));
        }
    }

    #[test]
    fn bandpass_literals() {
        assert_eq!(BANDPASS.b.len(), 6);
        assert_eq!(BANDPASS.a.len(), 6);

        // Shortest round-trip forms of the exported values.
        assert_eq!(BANDPASS.b[0], 0.009857084769866575);
        assert_eq!(BANDPASS.b[2], 0.09857084769866575);
        assert_eq!(BANDPASS.a[1], -1.7049690366758874);
        assert_eq!(BANDPASS.a[5], -0.029355148222605057);

        // The numerator is symmetric.
        assert!(BANDPASS.b.iter().eq(BANDPASS.b.iter().rev()));
    }

    #[test]
    fn lookup_by_kind() {
        assert_eq!(lookup(FilterKind::Bandpass), Some(&BANDPASS));
        assert_eq!(lookup(FilterKind::Butterworth).map(|t| t.b.len()), Some(11));
        assert_eq!(lookup(FilterKind::Alpha), None);
    }
}
