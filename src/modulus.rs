//! Modulus-bound arithmetic with a per-call timing-mode contract.

use subtle::Choice;

use crate::bigint::BigInt;
use crate::guard::{Violation, violation};
use crate::limb::Limb;
use crate::modular::{
    MontyParams, from_montgomery, invert_mod_ct, invert_mod_vartime, mont_mul, pow_mont,
    to_montgomery,
};
use crate::uint::Uint;
use crate::vartime::is_vartime;

/// Modular-inversion algorithm selector, consumed per [`Modulus::inv`] call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InvAlgo {
    /// General inversion: extended Euclidean in variable-time scopes;
    /// in constant-time mode, Fermat exponentiation when the modulus is
    /// hinted prime, the constant-time divstep otherwise.
    #[default]
    Default,
    /// Side-channel-resistant inversion: a fixed-iteration, branch-free
    /// divstep that stays correct for composite odd moduli. Safe on secret
    /// operands without entering a variable-time scope.
    Scr,
}

/// An odd modulus `> 1` together with its Montgomery reduction context.
///
/// Constructed once, immutable and freely shared afterwards; arithmetic
/// against a shared `Modulus` needs no locking. Every operation consults
/// the calling thread's [`TimingMode`][crate::TimingMode] at call time:
///
/// - In constant-time mode, operands must already be reduced to `[0, m)`.
///   A violation is fatal (see [`Violation::OperandOutOfRange`]): it
///   signals an un-reduced or variable-time-contaminated value reaching a
///   constant-time path, which must not be silently repaired.
/// - In a variable-time scope, operands of any sign and magnitude are
///   reduced first.
#[derive(Clone, Debug)]
pub struct Modulus {
    value: BigInt,
    params: MontyParams,
    prime_hint: bool,
}

impl Modulus {
    /// Bind a modulus. Fatal ([`Violation::InvalidModulus`]) when the value
    /// is even or not greater than one.
    pub fn new(value: &BigInt) -> Self {
        Self::with_hint(value, false)
    }

    /// Bind a modulus known by the caller to be prime.
    ///
    /// The hint steers algorithm selection (notably Fermat inversion on the
    /// constant-time default path); a lying hint produces wrong inverses
    /// but never relaxes the checks of any other operation, and the
    /// side-channel-resistant algorithm ignores it entirely.
    pub fn new_prime(value: &BigInt) -> Self {
        Self::with_hint(value, true)
    }

    fn with_hint(value: &BigInt, prime_hint: bool) -> Self {
        if value.is_negative() {
            violation(Violation::InvalidModulus);
        }
        let Some(params) = MontyParams::new(value.magnitude()) else {
            violation(Violation::InvalidModulus);
        };

        let value = BigInt::from_uint(params.modulus().clone());
        Self {
            value,
            params,
            prime_hint,
        }
    }

    /// The modulus value.
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// Bit length of the modulus, the bound used by the constant-time
    /// range checks.
    pub fn bit_len(&self) -> u32 {
        self.params.bit_len()
    }

    /// Was this modulus declared prime at construction?
    pub fn prime_hint(&self) -> bool {
        self.prime_hint
    }

    /// Canonical representative of `a` in `[0, m)`. Always permitted,
    /// independent of the timing mode.
    pub fn reduce(&self, a: &BigInt) -> BigInt {
        a.rem_euclid(&self.value)
    }

    /// Is `a` coprime to the modulus? Always permitted.
    pub fn is_coprime(&self, a: &BigInt) -> bool {
        a.is_coprime(&self.value)
    }

    /// `(a + b) mod m` under the active timing mode.
    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        if is_vartime() {
            let sum = self.reduce(a) + self.reduce(b);
            if sum >= self.value { sum - &self.value } else { sum }
        } else {
            let xa = self.require_reduced(a);
            let xb = self.require_reduced(b);
            BigInt::from_uint(add_mod(&xa, &xb, self.params.modulus()))
        }
    }

    /// `(a - b) mod m` under the active timing mode.
    pub fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        if is_vartime() {
            let diff = self.reduce(a) - self.reduce(b);
            if diff.is_negative() { diff + &self.value } else { diff }
        } else {
            let xa = self.require_reduced(a);
            let xb = self.require_reduced(b);
            let mut diff = xa;
            let borrow = diff.sbb_assign(&xb, Limb::ZERO);
            diff.conditional_adc_assign(self.params.modulus(), borrow.lsb_to_choice());
            BigInt::from_uint(diff)
        }
    }

    /// `(a * b) mod m` under the active timing mode. The constant-time path
    /// is two Montgomery reductions: `ab * R^-1` brought back by `R^2`.
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        if is_vartime() {
            let product = self
                .reduce(a)
                .magnitude()
                .mul(self.reduce(b).magnitude())
                .rem(self.params.modulus());
            BigInt::from_uint(product)
        } else {
            let xa = self.require_reduced(a);
            let xb = self.require_reduced(b);
            let t = mont_mul(&xa, &xb, &self.params);
            BigInt::from_uint(mont_mul(&t, self.params.r2(), &self.params))
        }
    }

    /// Modular inverse: `r` with `a * r == 1 (mod m)`.
    ///
    /// The operand must be coprime to the modulus; anything else is a
    /// fatal contract violation ([`Violation::NotInvertible`]).
    pub fn inv(&self, a: &BigInt, algo: InvAlgo) -> BigInt {
        match algo {
            InvAlgo::Scr => {
                let xa = if is_vartime() {
                    self.reduce(a)
                        .into_magnitude()
                        .to_width(self.params.nlimbs())
                } else {
                    self.require_reduced(a)
                };
                self.checked_ct_inverse(&xa)
            }
            InvAlgo::Default => {
                if is_vartime() {
                    let xa = self.reduce(a).into_magnitude();
                    match invert_mod_vartime(&xa, self.params.modulus()) {
                        Some(inv) => BigInt::from_uint(inv),
                        None => violation(Violation::NotInvertible),
                    }
                } else {
                    let xa = self.require_reduced(a);
                    if self.prime_hint {
                        self.fermat_inverse(&xa)
                    } else {
                        self.checked_ct_inverse(&xa)
                    }
                }
            }
        }
    }

    /// Run `f` against an arithmetic context pre-bound to this modulus.
    ///
    /// Every operation on the scope still consults the timing mode active
    /// at its own call site.
    pub fn with<R>(&self, f: impl FnOnce(&ModuloScope<'_>) -> R) -> R {
        f(&ModuloScope { modulus: self })
    }

    /// `N^-1 mod phi(N)` for an odd `N` coprime to `phi(N)`.
    ///
    /// `phi(N)` is even for any RSA/Paillier modulus, so no Montgomery
    /// context can be built for it; instead this inverts in the other
    /// direction, using `x = phi(N)^-1 mod N` and the identity
    /// `N^-1 = phi(N) - (phi(N) * x - 1) / N` (the division is exact).
    /// One inversion plus one exact division keeps key setup fast at the
    /// ~2048-bit sizes this is used for. Variable-time: key-setup values
    /// are not secret operands in the sense of the timing contract.
    pub fn n_inv_mod_phi_n(n: &BigInt, phi_n: &BigInt) -> BigInt {
        if n.is_negative() || !n.is_odd() || n.bit_len() < 2 {
            violation(Violation::InvalidModulus);
        }
        if phi_n.is_negative() || phi_n.bit_len() < 2 {
            violation(Violation::InvalidModulus);
        }

        let mut n_mag = n.magnitude().clone();
        n_mag.trim();
        let mut phi = phi_n.magnitude().clone();
        phi.trim();

        let Some(x) = invert_mod_vartime(&phi, &n_mag) else {
            violation(Violation::NotInvertible);
        };

        let (t, rem) = phi.mul(&x).sub(&Uint::one()).div_rem(&n_mag);
        debug_assert!(rem.is_zero_vartime(), "division must be exact");
        debug_assert!(!t.is_zero_vartime());

        BigInt::from_uint(phi.sub(&t))
    }

    /// Reject (fatally) any operand outside `[0, m)`, returning it at the
    /// Montgomery width. The magnitude comparison is constant-time; only
    /// the pass/fail outcome is observable, and failure diverges.
    fn require_reduced(&self, operand: &BigInt) -> Uint {
        let in_range = !operand.is_negative()
            && bool::from(operand.magnitude().ct_lt_value(self.params.modulus()));
        if !in_range {
            violation(Violation::OperandOutOfRange);
        }
        operand.magnitude().to_width(self.params.nlimbs())
    }

    fn checked_ct_inverse(&self, xa: &Uint) -> BigInt {
        let (inv, ok) = invert_mod_ct(xa, &self.params);
        if !bool::from(ok) {
            violation(Violation::NotInvertible);
        }
        BigInt::from_uint(inv)
    }

    /// `a^(m-2) mod m`, valid when the modulus is prime. Constant-time in
    /// the operand; the exponent depends only on the public modulus.
    fn fermat_inverse(&self, xa: &Uint) -> BigInt {
        if xa.is_zero_vartime() {
            violation(Violation::NotInvertible);
        }

        let mut exp = self.params.modulus().clone();
        let borrow = exp.sbb_assign(&Uint::from_word(2), Limb::ZERO);
        debug_assert_eq!(borrow, Limb::ZERO);

        let z = pow_mont(&to_montgomery(xa, &self.params), &exp, &self.params);
        BigInt::from_uint(from_montgomery(&z, &self.params))
    }
}

/// `a + b mod m` with all values reduced, at the modulus width.
fn add_mod(a: &Uint, b: &Uint, m: &Uint) -> Uint {
    let mut sum = a.clone();
    let carry = sum.adc_assign(b, Limb::ZERO);
    let mut diff = sum.clone();
    let borrow = diff.sbb_assign(m, Limb::ZERO);

    // Keep the raw sum only when no carry was produced and the trial
    // subtraction borrowed.
    let revert: Choice = borrow.lsb_to_choice() & !carry.lsb_to_choice();
    Uint::select(&diff, &sum, revert)
}

/// Arithmetic context bound to a fixed modulus for the extent of a
/// [`Modulus::with`] block. Pure convenience over the `Modulus` methods.
#[derive(Clone, Copy, Debug)]
pub struct ModuloScope<'a> {
    modulus: &'a Modulus,
}

impl ModuloScope<'_> {
    /// The bound modulus.
    pub fn modulus(&self) -> &Modulus {
        self.modulus
    }

    /// `(a + b) mod m`.
    pub fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.modulus.add(a, b)
    }

    /// `(a - b) mod m`.
    pub fn sub(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.modulus.sub(a, b)
    }

    /// `(a * b) mod m`.
    pub fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.modulus.mul(a, b)
    }

    /// Modular inverse of `a`.
    pub fn inv(&self, a: &BigInt, algo: InvAlgo) -> BigInt {
        self.modulus.inv(a, algo)
    }

    /// Canonical representative of `a`.
    pub fn reduce(&self, a: &BigInt) -> BigInt {
        self.modulus.reduce(a)
    }
}
