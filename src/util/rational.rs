/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::util::error::RationalError;
use crate::util::integer::{gcd, gcd_unsigned, lcm};
use log::debug;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{
	Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};
use std::str::FromStr;
use std::sync::OnceLock;

/// An exact rational number backed by a fraction of i128s, used to scale
/// quantities without the drift that repeated floating-point multiplication
/// accumulates.
///
/// Values are always in lowest terms with a positive denominator; the sign
/// lives in the numerator and zero is always `0/1`. Because of that, derived
/// equality and hashing compare values, not representations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
	numerator: i128,
	denominator: i128,
}

/// Anything the strict constructor and the arithmetic methods accept as a
/// source or right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
	Integer(i128),
	Decimal(f64),
	Rational(Rational),
}

macro_rules! integer_operand {
	($($t:ty),*) => {
		$(
			impl From<$t> for Operand {
				fn from(value: $t) -> Self {
					Operand::Integer(value as i128)
				}
			}
		)*
	};
}

integer_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f64> for Operand {
	fn from(value: f64) -> Self {
		Operand::Decimal(value)
	}
}

/// Goes through the f32's own shortest text so `0.1f32` stays one tenth
/// instead of picking up the binary error of widening to f64.
impl From<f32> for Operand {
	fn from(value: f32) -> Self {
		Operand::Decimal(value.to_string().parse::<f64>().unwrap_or(f64::NAN))
	}
}

impl From<Rational> for Operand {
	fn from(value: Rational) -> Self {
		Operand::Rational(value)
	}
}

impl From<&Rational> for Operand {
	fn from(value: &Rational) -> Self {
		Operand::Rational(*value)
	}
}

impl Rational {
	pub const ZERO: Rational = Rational {
		numerator: 0,
		denominator: 1,
	};

	pub const ONE: Rational = Rational {
		numerator: 1,
		denominator: 1,
	};

	/// Strict constructor. Integers are wrapped over a denominator of one,
	/// decimals are converted exactly through their shortest base-10 text,
	/// and existing values are copied.
	pub fn new(source: impl Into<Operand>) -> Result<Self, RationalError> {
		match source.into() {
			Operand::Integer(value) => Self::normalize(value, 1),
			Operand::Decimal(value) => Self::from_decimal(value),
			Operand::Rational(value) => Ok(value),
		}
	}

	/// Wraps an integer.
	///
	/// # Panics
	/// If `value` is `i128::MIN`, whose magnitude cannot be negated.
	pub fn from_i128(value: i128) -> Self {
		if value == i128::MIN {
			panic!("{}", RationalError::Overflow);
		}

		Self {
			numerator: value,
			denominator: 1,
		}
	}

	/// Builds `numerator / denominator` in lowest terms. The sign of the
	/// denominator is moved onto the numerator.
	pub fn from_frac(
		numerator: i128,
		denominator: i128,
	) -> Result<Self, RationalError> {
		Self::normalize(numerator, denominator)
	}

	/// Converts a decimal by rendering it to its shortest round-trip text,
	/// counting the digits after the point and dropping the point. Exact for
	/// any literal with up to 16 fractional digits.
	fn from_decimal(value: f64) -> Result<Self, RationalError> {
		if !value.is_finite() {
			debug!("refusing to convert non-finite decimal {}", value);
			return Err(RationalError::Construction);
		}

		// Display for f64 never uses exponent notation
		let text = value.to_string();
		let (digits, exp) = match text.split_once('.') {
			Some((whole, fractional)) => {
				(format!("{}{}", whole, fractional), fractional.len() as u32)
			},
			None => (text.clone(), 0),
		};

		let numerator = digits.parse::<i128>().map_err(|_| {
			debug!("decimal {} has too many digits for a rational", text);
			RationalError::Construction
		})?;
		let denominator = 10i128.checked_pow(exp).ok_or_else(|| {
			debug!("decimal {} has too many fractional digits", text);
			RationalError::Construction
		})?;

		Self::normalize(numerator, denominator)
	}

	/// The single normalization path every constructor goes through: rejects
	/// a zero denominator, moves the sign to the numerator and reduces to
	/// lowest terms. Works on magnitudes so `i128::MIN` inputs reduce before
	/// they are checked against the representable range.
	fn normalize(
		numerator: i128,
		denominator: i128,
	) -> Result<Self, RationalError> {
		if denominator == 0 {
			return Err(RationalError::DivisionByZero);
		}
		if numerator == 0 {
			return Ok(Self::ZERO);
		}

		let is_negative = (numerator < 0) ^ (denominator < 0);
		let mut numerator_abs = numerator.unsigned_abs();
		let mut denominator_abs = denominator.unsigned_abs();

		let divisor = gcd_unsigned(numerator_abs, denominator_abs);
		numerator_abs /= divisor;
		denominator_abs /= divisor;

		let numerator = i128::try_from(numerator_abs)
			.map_err(|_| RationalError::Overflow)?;
		let denominator = i128::try_from(denominator_abs)
			.map_err(|_| RationalError::Overflow)?;

		Ok(Self {
			numerator: if is_negative { -numerator } else { numerator },
			denominator,
		})
	}

	pub fn numerator(&self) -> i128 {
		self.numerator
	}

	pub fn denominator(&self) -> i128 {
		self.denominator
	}

	pub fn is_zero(&self) -> bool {
		self.numerator == 0
	}

	pub fn is_integer(&self) -> bool {
		self.denominator == 1
	}

	pub fn is_negative(&self) -> bool {
		self.numerator < 0
	}

	pub fn abs(&self) -> Self {
		Self {
			numerator: self.numerator.abs(),
			..*self
		}
	}

	/// Flips the fraction. Fails for zero.
	pub fn recip(&self) -> Result<Self, RationalError> {
		Self::normalize(self.denominator, self.numerator)
	}

	// ----------------
	// -- ARITHMETIC --
	// ----------------

	/// Returns `self + other`. The receiver is never modified.
	#[allow(clippy::should_implement_trait)]
	pub fn add(self, other: impl Into<Operand>) -> Result<Self, RationalError> {
		self.checked_add(Self::new(other)?)
	}

	/// Returns `self - other`.
	pub fn subtract(
		self,
		other: impl Into<Operand>,
	) -> Result<Self, RationalError> {
		self.checked_sub(Self::new(other)?)
	}

	/// Returns `self * other`.
	pub fn multiply(
		self,
		other: impl Into<Operand>,
	) -> Result<Self, RationalError> {
		self.checked_mul(Self::new(other)?)
	}

	/// Returns `self / other`, failing when `other` is zero.
	pub fn divide(
		self,
		other: impl Into<Operand>,
	) -> Result<Self, RationalError> {
		self.checked_div(Self::new(other)?)
	}

	/// Exact remainder of truncating division: the result has the sign of
	/// `self` and a magnitude below that of `other`.
	///
	/// The truncated quotient is formed on the way, so this fails with
	/// `Overflow` whenever `self / other` does, even if the remainder itself
	/// would fit (e.g. `i128::MAX` by `1/3`).
	pub fn remainder(
		self,
		other: impl Into<Operand>,
	) -> Result<Self, RationalError> {
		self.checked_rem(Self::new(other)?)
	}

	/// Same as [`Rational::remainder`], returned as a plain number.
	pub fn modulo(
		self,
		other: impl Into<Operand>,
	) -> Result<f64, RationalError> {
		Ok(self.remainder(other)?.to_number())
	}

	pub fn checked_add(self, rhs: Self) -> Result<Self, RationalError> {
		self.combine(rhs, i128::checked_add)
	}

	pub fn checked_sub(self, rhs: Self) -> Result<Self, RationalError> {
		self.combine(rhs, i128::checked_sub)
	}

	pub fn checked_mul(self, rhs: Self) -> Result<Self, RationalError> {
		// reduce overflow risk by cancelling across before multiplying
		let gcd_self = Self::common_factor(self.numerator, rhs.denominator);
		let gcd_rhs = Self::common_factor(rhs.numerator, self.denominator);

		let numerator = (self.numerator / gcd_self)
			.checked_mul(rhs.numerator / gcd_rhs)
			.ok_or(RationalError::Overflow)?;
		let denominator = (self.denominator / gcd_rhs)
			.checked_mul(rhs.denominator / gcd_self)
			.ok_or(RationalError::Overflow)?;

		Self::normalize(numerator, denominator)
	}

	pub fn checked_div(self, rhs: Self) -> Result<Self, RationalError> {
		if rhs.is_zero() {
			return Err(RationalError::DivisionByZero);
		}

		self.checked_mul(rhs.recip()?)
	}

	pub fn checked_rem(self, rhs: Self) -> Result<Self, RationalError> {
		let quotient = self.checked_div(rhs)?;
		// integer division truncates toward zero
		let whole = Self::from_i128(quotient.numerator / quotient.denominator);

		self.checked_sub(rhs.checked_mul(whole)?)
	}

	/// Scales both numerators onto the least common denominator and joins
	/// them with `op`.
	fn combine(
		self,
		rhs: Self,
		op: fn(i128, i128) -> Option<i128>,
	) -> Result<Self, RationalError> {
		let multiple = lcm(self.denominator, rhs.denominator)?;
		let multiple =
			i128::try_from(multiple).map_err(|_| RationalError::Overflow)?;

		let term_a = self
			.numerator
			.checked_mul(multiple / self.denominator)
			.ok_or(RationalError::Overflow)?;
		let term_b = rhs
			.numerator
			.checked_mul(multiple / rhs.denominator)
			.ok_or(RationalError::Overflow)?;

		let numerator = op(term_a, term_b).ok_or(RationalError::Overflow)?;
		Self::normalize(numerator, multiple)
	}

	/// GCD of any numerator and a denominator. Bounded by the denominator,
	/// which is positive, so it always fits back into an i128.
	fn common_factor(numerator: i128, denominator: i128) -> i128 {
		gcd(numerator, denominator) as i128
	}

	// ----------------
	// -- COMPARISON --
	// ----------------

	/// True if `self` is strictly less than `other`.
	pub fn lt(self, other: impl Into<Operand>) -> Result<bool, RationalError> {
		Ok(self.cmp(&Self::new(other)?) == Ordering::Less)
	}

	/// True if `self` is strictly greater than `other`.
	pub fn gt(self, other: impl Into<Operand>) -> Result<bool, RationalError> {
		Ok(self.cmp(&Self::new(other)?) == Ordering::Greater)
	}

	/// Exact comparison of two fractions without cross-multiplying. Compares
	/// integer parts; on a tie, compares the fractional parts by comparing
	/// their reciprocals in reverse, which is Euclid's algorithm on both at
	/// once and cannot overflow.
	fn compare_fractions(
		mut a_num: i128,
		mut a_den: i128,
		mut b_num: i128,
		mut b_den: i128,
	) -> Ordering {
		loop {
			let a_whole = a_num.div_euclid(a_den);
			let a_rem = a_num.rem_euclid(a_den);
			let b_whole = b_num.div_euclid(b_den);
			let b_rem = b_num.rem_euclid(b_den);

			if a_whole != b_whole {
				return a_whole.cmp(&b_whole);
			}

			match (a_rem == 0, b_rem == 0) {
				(true, true) => return Ordering::Equal,
				(true, false) => return Ordering::Less,
				(false, true) => return Ordering::Greater,
				(false, false) => {
					// a_rem/a_den < b_rem/b_den iff b_den/b_rem < a_den/a_rem
					(a_num, a_den, b_num, b_den) = (b_den, b_rem, a_den, a_rem);
				},
			}
		}
	}

	// ------------------
	// -- PRESENTATION --
	// ------------------

	/// The value as a float. Exact whenever the quotient is representable.
	pub fn to_number(&self) -> f64 {
		self.numerator as f64 / self.denominator as f64
	}

	/// Renders as a whole part and a proper fraction, e.g. `3 1/2`. The whole
	/// part is floored and the remainder is never negative, so `-7/2` becomes
	/// `-4 1/2`. Values between zero and one render as a plain fraction.
	pub fn to_mixed_number(&self) -> String {
		let whole = self.numerator.div_euclid(self.denominator);
		let remainder = self.numerator.rem_euclid(self.denominator);

		if whole == 0 {
			self.to_string()
		} else if remainder == 0 {
			whole.to_string()
		} else {
			format!("{} {}/{}", whole, remainder, self.denominator)
		}
	}
}

impl fmt::Display for Rational {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.denominator == 1 {
			write!(f, "{}", self.numerator)
		} else {
			write!(f, "{}/{}", self.numerator, self.denominator)
		}
	}
}

fn fraction_regex() -> &'static Regex {
	static FRACTION: OnceLock<Regex> = OnceLock::new();
	FRACTION.get_or_init(|| {
		Regex::new(
			r"^(?P<sign>[+-])?(?:(?P<whole>\d+)\s+)?(?P<num>\d+)\s*/\s*(?P<den>\d+)$",
		)
		.unwrap()
	})
}

/// Strict text parser. Understands anything Rust's float parser does, plus
/// fractions (`3/4`) and mixed numbers (`1 1/2`).
impl FromStr for Rational {
	type Err = RationalError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		let trimmed = input.trim();
		let invalid = || RationalError::Parse(input.to_string());

		let Some(caps) = fraction_regex().captures(trimmed) else {
			let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
			if !value.is_finite() {
				return Err(invalid());
			}
			return Self::from_decimal(value);
		};

		let parse = |name: &str| -> Result<i128, RationalError> {
			caps.name(name)
				.map_or(Ok(0), |m| m.as_str().parse::<i128>())
				.map_err(|_| invalid())
		};

		let whole = parse("whole")?;
		let numerator = parse("num")?;
		let denominator = parse("den")?;

		let fraction = Self::from_frac(numerator, denominator)?;
		let value = Self::from_i128(whole).checked_add(fraction)?;

		match caps.name("sign").map(|m| m.as_str()) {
			Some("-") => Ok(-value),
			_ => Ok(value),
		}
	}
}

// -----------------
// -- BOILERPLATE --
// -----------------

/// Operator forms panic where the checked methods would return an error, the
/// same way primitive integer arithmetic does.
fn expect_value(result: Result<Rational, RationalError>) -> Rational {
	match result {
		Ok(value) => value,
		Err(e) => panic!("{}", e),
	}
}

impl Add for Rational {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		expect_value(self.checked_add(rhs))
	}
}

impl AddAssign for Rational {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl Sum for Rational {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Rational::ZERO, |acc, value| acc + value)
	}
}

impl Sub for Rational {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		expect_value(self.checked_sub(rhs))
	}
}

impl SubAssign for Rational {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl Mul for Rational {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		expect_value(self.checked_mul(rhs))
	}
}

impl MulAssign for Rational {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl Product for Rational {
	fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Rational::ONE, |acc, value| acc * value)
	}
}

impl Mul<i128> for Rational {
	type Output = Self;

	fn mul(self, rhs: i128) -> Self::Output {
		self * Rational::from_i128(rhs)
	}
}

impl Mul<Rational> for i128 {
	type Output = Rational;

	fn mul(self, rhs: Rational) -> Self::Output {
		Rational::from_i128(self) * rhs
	}
}

impl Div for Rational {
	type Output = Self;

	fn div(self, rhs: Self) -> Self::Output {
		expect_value(self.checked_div(rhs))
	}
}

impl DivAssign for Rational {
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

impl Div<i128> for Rational {
	type Output = Self;

	fn div(self, rhs: i128) -> Self::Output {
		self / Rational::from_i128(rhs)
	}
}

impl Div<Rational> for i128 {
	type Output = Rational;

	fn div(self, rhs: Rational) -> Self::Output {
		Rational::from_i128(self) / rhs
	}
}

impl Rem for Rational {
	type Output = Self;

	fn rem(self, rhs: Self) -> Self::Output {
		expect_value(self.checked_rem(rhs))
	}
}

impl Neg for Rational {
	type Output = Self;

	fn neg(self) -> Self::Output {
		// the numerator is never i128::MIN
		Self {
			numerator: -self.numerator,
			..self
		}
	}
}

impl PartialEq<i128> for Rational {
	fn eq(&self, other: &i128) -> bool {
		self.denominator == 1 && self.numerator == *other
	}
}

impl PartialEq<Rational> for i128 {
	fn eq(&self, other: &Rational) -> bool {
		other == self
	}
}

impl PartialOrd for Rational {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Rational {
	fn cmp(&self, other: &Self) -> Ordering {
		Self::compare_fractions(
			self.numerator,
			self.denominator,
			other.numerator,
			other.denominator,
		)
	}
}
