//! Probabilistic primality testing and prime generation.

use core::cmp::Ordering;

use rand_core::{CryptoRng, OsRng, TryRngCore};

use super::BigInt;
use crate::limb::Limb;
use crate::modular::{MontyParams, mont_mul, pow_mont, to_montgomery};
use crate::uint::Uint;

/// Every prime below 1024, used for trial-division prescreening.
const SMALL_PRIMES: &[u64] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293,
    307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419,
    421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
    547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653,
    659, 661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787,
    797, 809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919,
    929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997, 1009, 1013, 1019, 1021,
];

impl BigInt {
    /// Probabilistic primality test with cryptographically negligible error.
    ///
    /// Trial division by every prime below 1024, then Miller-Rabin with a
    /// base-2 round followed by uniformly random witnesses, the round count
    /// scaled to the bit length. Negative values are never prime.
    pub fn is_prime(&self) -> bool {
        self.is_prime_from_rng(&mut OsRng.unwrap_err())
    }

    /// [`BigInt::is_prime`] with an injected witness RNG.
    pub fn is_prime_from_rng<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> bool {
        !self.is_negative() && is_prime_uint(self.magnitude(), rng)
    }

    /// Generate a probable prime with exactly `bits` bits, from the
    /// operating system RNG.
    ///
    /// With `safe`, the result `p` additionally satisfies the safe-prime
    /// property: `(p-1)/2` is also prime. Candidates are then drawn with
    /// `p = 3 (mod 4)` so that `(p-1)/2` is odd.
    ///
    /// Panics when `bits < 2` (or `< 3` for a safe prime); no prime of
    /// that length exists.
    pub fn generate_prime(bits: u32, safe: bool) -> BigInt {
        Self::generate_prime_from_rng(&mut OsRng.unwrap_err(), bits, safe)
    }

    /// [`BigInt::generate_prime`] with an injected candidate/witness RNG.
    pub fn generate_prime_from_rng<R: CryptoRng + ?Sized>(
        rng: &mut R,
        bits: u32,
        safe: bool,
    ) -> BigInt {
        assert!(bits >= 2, "no prime has fewer than two bits");
        assert!(!safe || bits >= 3, "no safe prime has fewer than three bits");

        loop {
            let mut p = Uint::random_bits(rng, bits - 1);
            p.set_bit(bits - 1);
            p.set_bit(0);
            if safe {
                p.set_bit(1);
            }

            if !passes_prescreen(&p, safe) {
                continue;
            }
            if !is_prime_uint(&p, rng) {
                continue;
            }
            if safe {
                let mut half = p.clone();
                half.shr1_assign();
                if !is_prime_uint(&half, rng) {
                    continue;
                }
            }

            return BigInt::from_uint(p);
        }
    }
}

/// Cheap divisibility screen for odd candidates before the full test.
///
/// For a safe-prime candidate, a residue of 1 modulo an odd small prime
/// `q` means `q` divides `(candidate-1)/2`, so the cofactor is rejected
/// here as well.
fn passes_prescreen(candidate: &Uint, safe: bool) -> bool {
    if candidate.bit_len() <= 11 {
        // Small enough that the trial division in the full test decides.
        // The safe-prime residue check below would also misfire here: an
        // 11-bit safe prime has its cofactor inside the table itself.
        return true;
    }

    for &p in SMALL_PRIMES.iter().skip(1) {
        let (_, r) = candidate.div_rem_limb(Limb(p));
        if r.0 == 0 || (safe && r.0 == 1) {
            return false;
        }
    }

    true
}

/// Number of random Miller-Rabin witnesses for a candidate of the given
/// size; scaled following common practice for random candidates, with a
/// generous floor for small inputs.
fn mr_rounds(bits: u32) -> u32 {
    if bits >= 1536 {
        4
    } else if bits >= 1024 {
        5
    } else if bits >= 512 {
        8
    } else if bits >= 256 {
        16
    } else {
        40
    }
}

fn is_prime_uint<R: CryptoRng + ?Sized>(value: &Uint, rng: &mut R) -> bool {
    let mut n = value.clone();
    n.trim();

    let bits = n.bit_len();
    if bits < 2 {
        return false;
    }
    if bits == 2 {
        // 2 and 3
        return true;
    }
    if !bool::from(n.is_odd()) {
        return false;
    }

    for &p in SMALL_PRIMES {
        match n.cmp_vartime(&Uint::from_word(p)) {
            Ordering::Equal => return true,
            // Odd, below the current prime, and not divisible by any
            // smaller one: must itself be prime.
            Ordering::Less => return true,
            Ordering::Greater => {
                let (_, r) = n.div_rem_limb(Limb(p));
                if r.0 == 0 {
                    return false;
                }
            }
        }
    }

    miller_rabin(&n, rng)
}

/// Miller-Rabin on an odd `n` larger than every small prime.
fn miller_rabin<R: CryptoRng + ?Sized>(n: &Uint, rng: &mut R) -> bool {
    let params = MontyParams::new(n).expect("candidate is odd and > 1");
    let width = params.nlimbs();

    // n - 1 = 2^s * q with q odd
    let n_minus_1 = n.sub(&Uint::one());
    let s = n_minus_1.trailing_zeros();
    let mut q = n_minus_1.clone();
    q.shr_assign(s);

    let one_mont = params.one().clone();
    let mut minus_one_mont = params.modulus().clone();
    let borrow = minus_one_mont.sbb_assign(&one_mont, Limb::ZERO);
    debug_assert_eq!(borrow, Limb::ZERO);

    let two = Uint::from_word(2);
    let witness_range = n.sub(&Uint::from_word(4));

    'witness: for round in 0..mr_rounds(n.bit_len()) {
        let base = if round == 0 {
            two.clone()
        } else {
            Uint::random_mod(rng, &witness_range).add(&two)
        };

        let base_mont = to_montgomery(&base.to_width(width), &params);
        let mut x = pow_mont(&base_mont, &q, &params);
        if x == one_mont || x == minus_one_mont {
            continue 'witness;
        }

        for _ in 1..s {
            x = mont_mul(&x, &x, &params);
            if x == minus_one_mont {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use rand_core::SeedableRng;

    use super::BigInt;

    fn rng() -> rand_chacha::ChaCha8Rng {
        rand_chacha::ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn small_knowns() {
        let mut rng = rng();
        for p in [2u64, 3, 5, 7, 31, 97, 1021, 1031] {
            assert!(BigInt::from(p).is_prime_from_rng(&mut rng), "{p}");
        }
        for c in [0u64, 1, 4, 9, 15, 1023, 1025] {
            assert!(!BigInt::from(c).is_prime_from_rng(&mut rng), "{c}");
        }
        assert!(!BigInt::from(-7i64).is_prime_from_rng(&mut rng));
    }

    #[test]
    fn carmichael_numbers_are_composite() {
        let mut rng = rng();
        for c in [561u64, 1105, 1729, 41041, 825265] {
            assert!(!BigInt::from(c).is_prime_from_rng(&mut rng), "{c}");
        }
    }

    #[test]
    fn large_knowns() {
        let mut rng = rng();
        // Mersenne primes 2^61 - 1 and 2^127 - 1.
        let m61 = BigInt::from(2).pow(61) - BigInt::one();
        let m127 = BigInt::from(2).pow(127) - BigInt::one();
        assert!(m61.is_prime_from_rng(&mut rng));
        assert!(m127.is_prime_from_rng(&mut rng));

        // 2^128 - 1 factors as 3 * 5 * 17 * ...
        let f = BigInt::from(2).pow(128) - BigInt::one();
        assert!(!f.is_prime_from_rng(&mut rng));

        // 2^67 - 1 is a composite Mersenne number without small factors
        // (Cole: 193707721 * 761838257287).
        let m67 = BigInt::from(2).pow(67) - BigInt::one();
        assert!(!m67.is_prime_from_rng(&mut rng));
    }

    #[test]
    fn generated_primes_have_requested_length() {
        let mut rng = rng();
        for bits in [32u32, 64, 128] {
            let p = BigInt::generate_prime_from_rng(&mut rng, bits, false);
            assert_eq!(p.bit_len(), bits);
            assert!(p.is_odd());
            assert!(p.is_prime_from_rng(&mut rng));
        }
    }

    #[test]
    fn generated_safe_prime() {
        let mut rng = rng();
        let p = BigInt::generate_prime_from_rng(&mut rng, 48, true);
        assert_eq!(p.bit_len(), 48);
        assert!(p.is_prime_from_rng(&mut rng));

        let half = {
            let mut magnitude = p.magnitude().clone();
            magnitude.shr1_assign();
            BigInt::from_uint(magnitude)
        };
        assert!(half.is_prime_from_rng(&mut rng));
    }
}
