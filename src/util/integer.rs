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

/// Greatest common divisor by Euclid's algorithm. Works on magnitudes, so the
/// result is never negative: `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`.
///
/// Returned as `u128` because `gcd(i128::MIN, 0)` is not representable as an
/// `i128`.
pub fn gcd(a: i128, b: i128) -> u128 {
	gcd_unsigned(a.unsigned_abs(), b.unsigned_abs())
}

pub(crate) fn gcd_unsigned(mut a: u128, mut b: u128) -> u128 {
	while b != 0 {
		let temp = b;
		b = a % b;
		a = temp;
	}
	a
}

/// Least common multiple, `|a * b| / gcd(a, b)`. Divides before multiplying
/// so the only overflow possible is a result that is itself too large.
pub fn lcm(a: i128, b: i128) -> Result<u128, RationalError> {
	let divisor = gcd(a, b);
	if divisor == 0 {
		return Err(RationalError::Undefined);
	}

	(a.unsigned_abs() / divisor)
		.checked_mul(b.unsigned_abs())
		.ok_or(RationalError::Overflow)
}
