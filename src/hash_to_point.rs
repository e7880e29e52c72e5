//! Hash-to-point (`Hp`), the curve-point counterpart of [`crate::curve::hash_to_scalar`]
//! (`Hs`), used only for key image computation (§3 `KeyImage`, §4.7 step 6).
//!
//! `Hp(x) = 8 * elligator2(keccak256(x))`: the 32-byte digest is mapped to a
//! Montgomery-curve point via the Elligator 2 map and then cofactor-cleared
//! by tripling the doubling. This is *not* a constant-time operation and not
//! a standard RFC 9380 hash-to-curve map — it is Monero's own legacy
//! `ge_fromfe_frombytes_vartime`, reproduced field-element-by-field-element
//! since no public crate implements this exact non-standard map.
//!
//! Field arithmetic is plain `u64` limbs mod `p = 2^255 - 19`, not
//! `curve25519-dalek`'s internal (private) field type — this is the one
//! place in the crate that cannot stay a thin wrapper over the dependency.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};

use crate::hash::keccak256;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Fe([u64; 4]); // little-endian limbs, mod p = 2^255 - 19

impl Fe {
    const ZERO: Self = Fe([0, 0, 0, 0]);
    const ONE: Self = Fe([1, 0, 0, 0]);
    const TWO: Self = Fe([2, 0, 0, 0]);

    const P: Self = Fe([
        0xFFFFFFFFFFFFFFED,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF,
        0x7FFFFFFFFFFFFFFF,
    ]);

    fn from_bytes_le(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let o = i * 8;
            *limb = u64::from_le_bytes([
                bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3],
                bytes[o + 4], bytes[o + 5], bytes[o + 6], bytes[o + 7],
            ]);
        }
        Fe(limbs).reduce()
    }

    fn to_bytes_le(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for i in 0..4 {
            out[i * 8..i * 8 + 8].copy_from_slice(&self.0[i].to_le_bytes());
        }
        out
    }

    fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0, 0]
    }

    fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    fn ge(&self, other: &Self) -> bool {
        for i in (0..4).rev() {
            if self.0[i] > other.0[i] {
                return true;
            }
            if self.0[i] < other.0[i] {
                return false;
            }
        }
        true
    }

    fn add_raw(&self, other: &Self) -> (Self, bool) {
        let mut result = [0u64; 4];
        let mut carry = 0u64;
        for i in 0..4 {
            let sum = (self.0[i] as u128) + (other.0[i] as u128) + (carry as u128);
            result[i] = sum as u64;
            carry = (sum >> 64) as u64;
        }
        (Fe(result), carry != 0)
    }

    fn sub_raw(&self, other: &Self) -> (Self, bool) {
        let mut result = [0u64; 4];
        let mut borrow = 0i128;
        for i in 0..4 {
            let diff = (self.0[i] as i128) - (other.0[i] as i128) + borrow;
            if diff < 0 {
                result[i] = (diff + (1i128 << 64)) as u64;
                borrow = -1;
            } else {
                result[i] = diff as u64;
                borrow = 0;
            }
        }
        (Fe(result), borrow != 0)
    }

    fn reduce(&self) -> Self {
        let mut r = *self;
        while r.ge(&Self::P) {
            let (sub, _) = r.sub_raw(&Self::P);
            r = sub;
        }
        r
    }
}

fn fe_add(a: &Fe, b: &Fe) -> Fe {
    let (sum, _) = a.add_raw(b);
    sum.reduce()
}

fn fe_sub(a: &Fe, b: &Fe) -> Fe {
    if a.ge(b) {
        a.sub_raw(b).0
    } else {
        let (sum, _) = a.add_raw(&Fe::P);
        sum.sub_raw(b).0.reduce()
    }
}

fn fe_mul_small(a: &Fe, b: u64) -> Fe {
    let mut result = [0u64; 4];
    let mut carry = 0u128;
    for i in 0..4 {
        let v = (a.0[i] as u128) * (b as u128) + carry;
        result[i] = v as u64;
        carry = v >> 64;
    }
    let mut r = Fe(result);
    if carry > 0 {
        let extra = Fe([carry as u64 * 38, 0, 0, 0]);
        r = r.add_raw(&extra).0;
    }
    r.reduce()
}

/// Reduce a 512-bit product mod `p`, using `2^256 ≡ 38 (mod p)`.
fn reduce_512(prod: &[u128; 8]) -> Fe {
    let lo = Fe([prod[0] as u64, prod[1] as u64, prod[2] as u64, prod[3] as u64]);
    let hi = Fe([prod[4] as u64, prod[5] as u64, prod[6] as u64, prod[7] as u64]);

    let hi_times_38 = fe_mul_small(&hi, 38);
    let (sum, carry) = lo.add_raw(&hi_times_38);
    let mut result = sum;
    if carry {
        result = result.add_raw(&Fe([38, 0, 0, 0])).0;
    }
    result.reduce()
}

fn fe_mul(a: &Fe, b: &Fe) -> Fe {
    let mut prod = [0u128; 8];
    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let v = (a.0[i] as u128) * (b.0[j] as u128) + prod[i + j] + carry;
            prod[i + j] = v & 0xFFFF_FFFF_FFFF_FFFF;
            carry = v >> 64;
        }
        prod[i + 4] += carry;
    }
    reduce_512(&prod)
}

fn fe_sq(a: &Fe) -> Fe {
    fe_mul(a, a)
}

fn fe_neg(a: &Fe) -> Fe {
    if a.is_zero() {
        Fe::ZERO
    } else {
        Fe::P.sub_raw(a).0
    }
}

fn fe_pow(base: &Fe, exp: &Fe) -> Fe {
    let mut result = Fe::ONE;
    let mut b = *base;
    for limb in 0..4 {
        let mut bits = exp.0[limb];
        for _ in 0..64 {
            if bits & 1 == 1 {
                result = fe_mul(&result, &b);
            }
            b = fe_sq(&b);
            bits >>= 1;
        }
    }
    result
}

fn fe_inv(a: &Fe) -> Fe {
    // p - 2
    let exp = Fe([0xFFFFFFFFFFFFFFEB, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x7FFFFFFFFFFFFFFF]);
    fe_pow(a, &exp)
}

/// `x^((p-5)/8) = x^(2^252 - 3)`.
fn fe_pow_pm5d8(x: &Fe) -> Fe {
    let exp = Fe([0xFFFFFFFFFFFFFFFD, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x0FFFFFFFFFFFFFFF]);
    fe_pow(x, &exp)
}

/// `(u/v)^((p+3)/8) = u·v^3·(u·v^7)^((p-5)/8)`.
fn fe_divpowm1(u: &Fe, v: &Fe) -> Fe {
    let v2 = fe_sq(v);
    let v3 = fe_mul(&v2, v);
    let v4 = fe_sq(&v2);
    let v7 = fe_mul(&v4, &v3);
    let uv7 = fe_mul(u, &v7);
    let uv7_pow = fe_pow_pm5d8(&uv7);
    fe_mul(&fe_mul(u, &v3), &uv7_pow)
}

fn sqrt_m1() -> Fe {
    Fe::from_bytes_le(&[
        0xb0, 0xa0, 0x0e, 0x4a, 0x27, 0x1b, 0xee, 0xc4, 0x78, 0xe4, 0x2f, 0xad, 0x06, 0x18, 0x43, 0x2f, 0xa7, 0xd7,
        0xfb, 0x3d, 0x99, 0x00, 0x4d, 0x2b, 0x0b, 0xdf, 0xc1, 0x4f, 0x80, 0x24, 0x83, 0x2b,
    ])
}

fn fe_sqrt(a: &Fe) -> Option<Fe> {
    if a.is_zero() {
        return Some(Fe::ZERO);
    }
    // (p+3)/8 = 2^252 - 2
    let exp = Fe([0xFFFFFFFFFFFFFFFE, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x0FFFFFFFFFFFFFFF]);
    let candidate = fe_pow(a, &exp);
    if fe_sq(&candidate) == *a {
        return Some(candidate);
    }
    let adjusted = fe_mul(&candidate, &sqrt_m1());
    if fe_sq(&adjusted) == *a {
        return Some(adjusted);
    }
    None
}

const A_MONT: u64 = 486662;

/// Elligator 2 map: a 32-byte field element to an Ed25519 point, not
/// cofactor-cleared. Monero's `ge_fromfe_frombytes_vartime`.
fn elligator2(hash: &[u8; 32]) -> EdwardsPoint {
    let u = Fe::from_bytes_le(hash);
    let a_val = Fe([A_MONT, 0, 0, 0]).reduce();
    let neg_a = fe_neg(&a_val);
    let neg_a_sq = fe_neg(&fe_sq(&a_val));

    let u2 = fe_sq(&u);
    let v = fe_add(&u2, &u2); // 2u^2
    let w = fe_add(&v, &Fe::ONE); // 2u^2 + 1

    let w2 = fe_sq(&w);
    let term = fe_mul(&fe_add(&neg_a_sq, &neg_a_sq), &u2);
    let mut x = fe_add(&w2, &term);

    let mut r_x = fe_divpowm1(&w, &x);
    let mut y = fe_mul(&fe_sq(&r_x), &x);

    let sqm1 = sqrt_m1();
    let mut z = neg_a;
    let sign;

    let a_plus_2 = fe_add(&a_val, &Fe::TWO);
    let two_a_ap2 = fe_mul(&fe_add(&a_val, &a_val), &a_plus_2);

    if fe_sub(&w, &y).is_zero() {
        if let Some(fffb2) = fe_sqrt(&two_a_ap2) {
            r_x = fe_mul(&r_x, &fffb2);
        }
        r_x = fe_mul(&r_x, &u);
        z = fe_mul(&z, &v);
        sign = false;
    } else if fe_add(&w, &y).is_zero() {
        if let Some(fffb1) = fe_sqrt(&fe_neg(&two_a_ap2)) {
            r_x = fe_mul(&r_x, &fffb1);
        }
        r_x = fe_mul(&r_x, &u);
        z = fe_mul(&z, &v);
        sign = false;
    } else {
        x = fe_mul(&x, &sqm1);
        y = fe_mul(&fe_sq(&r_x), &x);

        let sqm1_a_ap2 = fe_mul(&sqm1, &fe_mul(&a_val, &a_plus_2));
        if fe_sub(&w, &y).is_zero() {
            if let Some(fffb4) = fe_sqrt(&sqm1_a_ap2) {
                r_x = fe_mul(&r_x, &fffb4);
            }
        } else if let Some(fffb3) = fe_sqrt(&fe_neg(&sqm1_a_ap2)) {
            r_x = fe_mul(&r_x, &fffb3);
        }
        sign = true;
    }

    if r_x.is_odd() != sign {
        r_x = fe_neg(&r_x);
    }

    let z_coord = fe_add(&z, &w);
    let y_coord = fe_sub(&z, &w);
    let x_coord = fe_mul(&r_x, &z_coord);

    let z_inv = fe_inv(&z_coord);
    let affine_x = fe_mul(&x_coord, &z_inv);
    let affine_y = fe_mul(&y_coord, &z_inv);

    let mut compressed = affine_y.to_bytes_le();
    if affine_x.is_odd() {
        compressed[31] |= 0x80;
    }

    CompressedEdwardsY(compressed)
        .decompress()
        .expect("elligator2 image is always a valid curve point")
}

/// `Hp(data) = 8 * elligator2(keccak256(data))`, Monero's hash-to-point,
/// cofactor-cleared by tripling the doubling.
pub fn hash_to_point(data: &[u8]) -> EdwardsPoint {
    let digest = keccak256(data);
    let p = elligator2(&digest);
    let p2 = p + p;
    let p4 = p2 + p2;
    p4 + p4
}
