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
use thiserror::Error;

/// Failures raised by the strict rational API. The lenient factory never
/// produces these; it reports "no value" instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RationalError {
	/// The source could not be converted to an exact fraction, e.g. a
	/// non-finite decimal or one whose digits do not fit in 128 bits.
	#[error("invalid conversion to rational")]
	Construction,

	#[error("attempt to divide by zero")]
	DivisionByZero,

	/// An intermediate numerator or denominator left the 128-bit range.
	#[error("rational arithmetic overflowed")]
	Overflow,

	/// Least common multiple requested for two zero operands.
	#[error("least common multiple of zero and zero is undefined")]
	Undefined,

	#[error("invalid rational literal: {0}")]
	Parse(String),
}
