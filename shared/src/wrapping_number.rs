use crate::{time::network_time::TimeBits, types::NetworkTimestamp};

/// Reduces `value` into the signed range of a `bits`-wide two's complement
/// integer, i.e. keeps the low `bits` bits and sign-extends them.
///
/// # Examples
/// ```
/// # use distobj_shared::{sign_extend, TimeBits};
/// assert_eq!(sign_extend(3, TimeBits::Narrow), 3);
/// assert_eq!(sign_extend(32768, TimeBits::Narrow), -32768);
/// assert_eq!(sign_extend(65535, TimeBits::Narrow), -1);
/// assert_eq!(sign_extend(-32769, TimeBits::Narrow), 32767);
/// ```
pub fn sign_extend(value: i64, bits: TimeBits) -> NetworkTimestamp {
    let modulus: i64 = 1 << bits.width();
    let half = modulus >> 1;

    // the modulus divides 2^64, so a wrapped sum still has the right residue
    let result = value.wrapping_add(half).rem_euclid(modulus) - half;

    debug_assert!(
        (-half..half).contains(&result),
        "sign_extend({value}, {bits:?}) produced {result}, out of range"
    );

    result as NetworkTimestamp
}

/// Retrieves the signed difference `b - a` between two timestamps of the
/// given width, taking wrap-around into account.
///
/// # Examples
/// ```
/// # use distobj_shared::{wrapping_diff, TimeBits};
/// assert_eq!(wrapping_diff(1, 2, TimeBits::Narrow), 1);
/// assert_eq!(wrapping_diff(2, 1, TimeBits::Narrow), -1);
/// assert_eq!(wrapping_diff(32767, -32768, TimeBits::Narrow), 1);
/// assert_eq!(wrapping_diff(-32768, 32767, TimeBits::Narrow), -1);
/// ```
pub fn wrapping_diff(a: NetworkTimestamp, b: NetworkTimestamp, bits: TimeBits) -> NetworkTimestamp {
    sign_extend(i64::from(b) - i64::from(a), bits)
}
