use super::num::Float;
use super::{AlmostEq, Complex, DualComplex};

impl<T: Float> DualComplex<T> {
	/// Returns true if this is the additive identity within `tolerance`.
	pub fn is_zero(&self, tolerance: T) -> bool {
		self.almost_zero(tolerance)
	}

	/// Returns true if this is the multiplicative identity within `tolerance`.
	pub fn is_identity(&self, tolerance: T) -> bool {
		self.real.almost_equal(&Complex::ONE, tolerance)
			&& self.dual.almost_zero(tolerance)
	}

	/// Returns true if the real part has unit length, i.e. this is a rigid transform.
	pub fn is_unit(&self, tolerance: T) -> bool {
		self.squared_norm().almost_equal(&T::ONE, tolerance)
	}

	/// Returns true if both numbers represent the same transform.
	/// Every transform is represented by two values, `p` and `-p`.
	///
	/// # Panics
	///
	/// If either operand is not a unit dual complex number while contract checks are enabled
	/// (debug builds or the `contracts` feature). The result is unspecified otherwise.
	pub fn is_same_transform(&self, rhs: &Self, tolerance: T) -> bool {
		contract!(
			self.is_unit(tolerance) && rhs.is_unit(tolerance),
			"is_same_transform: operands must be unit dual complex numbers, got {:?} and {:?}", self, rhs
		);

		self.almost_equal(rhs, tolerance) || self.almost_equal(&-*rhs, tolerance)
	}
}
