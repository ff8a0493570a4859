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
//! Exact fractions for quantities entered as decimals.
//!
//! Decimal inputs are converted to reduced fractions through their shortest
//! base-10 text, so any chain of arithmetic over them stays exact. The
//! [`create_fraction`] factory is the lenient entry point for untrusted input;
//! [`Rational::new`] is the strict one.
//!
//! ```
//! use fractional::Rational;
//!
//! let ratio = Rational::new(6).unwrap().divide(4).unwrap();
//! let scaled = Rational::new(2.5).unwrap().multiply(ratio).unwrap();
//! assert_eq!(scaled.to_mixed_number(), "3 3/4");
//! ```
pub mod config;
pub mod kitchen;
pub mod parsing;
pub mod reports;
pub mod util;

pub use util::error::RationalError;
pub use util::factory::{create_fraction, RawQuantity};
pub use util::integer::{gcd, lcm};
pub use util::rational::{Operand, Rational};
