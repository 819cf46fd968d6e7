// ============================================================================
// Chunked Decimal
// Arbitrary-precision signed decimals as fixed-width base-10^18 limbs
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Decimal digits held by one limb.
pub const DIGITS_PER_LIMB: u32 = 18;

/// The limb radix, 10^18.
pub const LIMB_BASE: i64 = 1_000_000_000_000_000_000;

/// An arbitrary-precision signed decimal number in chunked form.
///
/// The coefficient is an ordered sequence of base-10^18 limbs, least
/// significant first, with every nonzero limb carrying the overall sign.
/// The value is `Σ limb[i] · 10^(exponent + 18·i)`; an exact zero has no
/// limbs at all.
///
/// Arbitrary-precision arithmetic appears only at the [`DecimalValue::decode`]
/// / [`DecimalValue::encode`] boundary; the steady-state representation is
/// plain fixed-width integers.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use temporal_values::decimal::DecimalValue;
///
/// let value = DecimalValue::decode(&BigInt::from(-1_234_567i64), -2);
/// assert_eq!(value.to_string(), "-12345.67");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    limbs: SmallVec<[i64; 4]>,
    exponent: i32,
}

impl DecimalValue {
    /// Chunk an arbitrary-precision coefficient into limbs.
    ///
    /// The magnitude is divided by 10^18 repeatedly, each remainder emitted
    /// least significant first with the coefficient's sign reattached. A
    /// zero coefficient yields an empty limb sequence.
    pub fn decode(coefficient: &BigInt, exponent: i32) -> Self {
        let negative = coefficient.is_negative();
        let base = BigUint::from(LIMB_BASE as u64);
        let mut magnitude = coefficient.magnitude().clone();
        let mut limbs = SmallVec::new();
        while !magnitude.is_zero() {
            let remainder = (&magnitude % &base)
                .to_i64()
                .expect("remainder below 10^18 fits in i64");
            limbs.push(if negative { -remainder } else { remainder });
            magnitude /= &base;
        }
        Self { limbs, exponent }
    }

    /// Reassemble the exact decimal value.
    ///
    /// Each limb contributes `limb[i] · 10^(exponent + 18·i)`, accumulated
    /// with arbitrary-precision decimal arithmetic. Floats never enter the
    /// computation.
    pub fn encode(&self) -> BigDecimal {
        let mut total = BigDecimal::zero();
        for (index, &limb) in self.limbs.iter().enumerate() {
            let power = self.exponent as i64 + DIGITS_PER_LIMB as i64 * index as i64;
            total = total + BigDecimal::new(BigInt::from(limb), -power);
        }
        total
    }

    /// The limb sequence, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[i64] {
        &self.limbs
    }

    /// The power of ten applied to limb 0.
    #[inline]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Whether the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// The sign of the value: -1, 0 or 1.
    ///
    /// All nonzero limbs share a sign, so the most significant limb decides.
    pub fn signum(&self) -> i32 {
        match self.limbs.last() {
            None => 0,
            Some(&limb) => {
                if limb < 0 {
                    -1
                } else {
                    1
                }
            },
        }
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for DecimalValue {
    type Err = DecimalError;

    /// Parse from standard decimal text, returning a new value.
    ///
    /// # Examples
    /// - `"123.456"` -> limbs `[123456]`, exponent `-3`
    /// - `"-1e20"` -> limbs `[-1]`, exponent `20`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = BigDecimal::from_str(s).map_err(|_| DecimalError::ParseFailure {
            text: s.to_string(),
        })?;
        let (coefficient, scale) = parsed.into_bigint_and_exponent();
        let exponent =
            i32::try_from(-scale).map_err(|_| DecimalError::ExponentOutOfRange {
                exponent: -scale,
            })?;
        Ok(Self::decode(&coefficient, exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_zero_is_empty() {
        let zero = DecimalValue::decode(&BigInt::from(0), 5);
        assert!(zero.is_zero());
        assert!(zero.limbs().is_empty());
        assert_eq!(zero.exponent(), 5);
        assert_eq!(zero.signum(), 0);
        assert!(zero.encode().is_zero());
    }

    #[test]
    fn test_decode_single_limb() {
        let value = DecimalValue::decode(&BigInt::from(42), -1);
        assert_eq!(value.limbs(), &[42]);
        assert_eq!(value.exponent(), -1);
        assert_eq!(value.signum(), 1);
    }

    #[test]
    fn test_decode_limb_boundary() {
        // Exactly 10^18 spills into a second limb
        let value = DecimalValue::decode(&BigInt::from(LIMB_BASE), 0);
        assert_eq!(value.limbs(), &[0, 1]);

        let below = DecimalValue::decode(&BigInt::from(LIMB_BASE - 1), 0);
        assert_eq!(below.limbs(), &[LIMB_BASE - 1]);
    }

    #[test]
    fn test_decode_negative_sign_on_every_limb() {
        let coefficient = BigInt::from(-3) * BigInt::from(LIMB_BASE) - BigInt::from(7);
        let value = DecimalValue::decode(&coefficient, 2);
        assert_eq!(value.limbs(), &[-7, -3]);
        assert_eq!(value.signum(), -1);
    }

    #[test]
    fn test_encode_multi_limb() {
        let coefficient = BigInt::from_str("123456789012345678901234567890123456789").unwrap();
        let value = DecimalValue::decode(&coefficient, -9);
        assert_eq!(value.limbs().len(), 3);
        assert_eq!(
            value.encode(),
            BigDecimal::new(coefficient, 9)
        );
    }

    #[test]
    fn test_text_round_trip() {
        for text in ["123.456", "-0.001", "0", "42", "-98765432109876543210987654321"] {
            let value: DecimalValue = text.parse().unwrap();
            let reparsed: DecimalValue = value.to_string().parse().unwrap();
            assert_eq!(value.encode(), reparsed.encode(), "round trip of {text}");
        }
    }

    #[test]
    fn test_from_str_layout() {
        let value: DecimalValue = "123.456".parse().unwrap();
        assert_eq!(value.limbs(), &[123_456]);
        assert_eq!(value.exponent(), -3);

        let negative: DecimalValue = "-0.001".parse().unwrap();
        assert_eq!(negative.limbs(), &[-1]);
        assert_eq!(negative.exponent(), -3);
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "not_a_number".parse::<DecimalValue>(),
            Err(DecimalError::ParseFailure {
                text: "not_a_number".to_string()
            })
        );
        assert!("".parse::<DecimalValue>().is_err());
    }

    proptest! {
        #[test]
        fn prop_decode_encode_round_trip(
            coefficient in any::<i128>(),
            exponent in -1_000i32..1_000,
        ) {
            let coefficient = BigInt::from(coefficient);
            let value = DecimalValue::decode(&coefficient, exponent);
            let expected = BigDecimal::new(coefficient, -(exponent as i64));
            prop_assert_eq!(value.encode(), expected);
        }

        #[test]
        fn prop_limbs_share_the_sign(coefficient in any::<i128>()) {
            let value = DecimalValue::decode(&BigInt::from(coefficient), 0);
            for &limb in value.limbs() {
                prop_assert!(limb.signum() == 0 || limb.signum() as i128 == coefficient.signum());
            }
        }
    }
}
