use super::defs::*;

/// `i32::MIN + (m-1)/2 < t && t < i32::MAX - (m-1)/2`.
fn mods_i32(t: i32, m: i32) -> (i32, i32) {
    let r = (((t % m) + m + (m - 1) / 2) % m) - (m - 1) / 2;
    let q = (t - r) / m;
    (r, q)
}

/// Remainder `r` and quotient `q` of `t` `mods 3^1` where
/// `t == q * 3^1 + r` and `-1 <= r <= 1`.
pub fn mods1(t: i32) -> (Trit, i32) {
    let (r, q) = mods_i32(t, 3);
    (Trit(r as i8), q)
}

/// Remainder `r` and quotient `q` of `t` `mods 3^3` where
/// `t == q * 3^3 + r` and `-13 <= r <= 13`.
pub fn mods3(t: i32) -> (Tryte, i32) {
    let (r, q) = mods_i32(t, 27);
    (Tryte(r as i8), q)
}
