use super::num::Float;
use super::{Complex, DualComplex};

/// Returns true if `|lhs - rhs| <= max(abs_tolerance, rel_tolerance * max(|lhs|, |rhs|))`.
pub fn almost_equal_rel_abs<T: Float>(lhs: T, rhs: T, rel_tolerance: T, abs_tolerance: T) -> bool {
	(lhs - rhs).abs() <= abs_tolerance.max(rel_tolerance * lhs.abs().max(rhs.abs()))
}

/// Returns true if `|lhs - rhs| <= tolerance * max(1, |lhs|, |rhs|)`.
///
/// Small values are compared absolutely, large values relatively.
pub fn almost_equal<T: Float>(lhs: T, rhs: T, tolerance: T) -> bool {
	(lhs - rhs).abs() <= tolerance * T::ONE.max(lhs.abs().max(rhs.abs()))
}

pub fn almost_zero<T: Float>(x: T, tolerance: T) -> bool {
	x.abs() <= tolerance
}

/// Tolerance-based comparison, applied component-wise.
pub trait AlmostEq<T> {
	/// Single-tolerance comparison, see [`almost_equal`].
	fn almost_equal(&self, rhs: &Self, tolerance: T) -> bool;

	/// Combined relative and absolute comparison, see [`almost_equal_rel_abs`].
	fn almost_equal_rel_abs(&self, rhs: &Self, rel_tolerance: T, abs_tolerance: T) -> bool;

	fn almost_zero(&self, tolerance: T) -> bool;
}

macro_rules! scalar_almost_eq_impl {
	($t:ident) => {
		impl AlmostEq<$t> for $t {
			fn almost_equal(&self, rhs: &Self, tolerance: $t) -> bool {
				almost_equal(*self, *rhs, tolerance)
			}

			fn almost_equal_rel_abs(&self, rhs: &Self, rel_tolerance: $t, abs_tolerance: $t) -> bool {
				almost_equal_rel_abs(*self, *rhs, rel_tolerance, abs_tolerance)
			}

			fn almost_zero(&self, tolerance: $t) -> bool {
				almost_zero(*self, tolerance)
			}
		}
	}
}

scalar_almost_eq_impl!(f32);
scalar_almost_eq_impl!(f64);

impl<T: Float> AlmostEq<T> for Complex<T> {
	fn almost_equal(&self, rhs: &Self, tolerance: T) -> bool {
		almost_equal(self.re, rhs.re, tolerance)
			&& almost_equal(self.im, rhs.im, tolerance)
	}

	fn almost_equal_rel_abs(&self, rhs: &Self, rel_tolerance: T, abs_tolerance: T) -> bool {
		almost_equal_rel_abs(self.re, rhs.re, rel_tolerance, abs_tolerance)
			&& almost_equal_rel_abs(self.im, rhs.im, rel_tolerance, abs_tolerance)
	}

	fn almost_zero(&self, tolerance: T) -> bool {
		almost_zero(self.re, tolerance) && almost_zero(self.im, tolerance)
	}
}

impl<T: Float> AlmostEq<T> for DualComplex<T> {
	fn almost_equal(&self, rhs: &Self, tolerance: T) -> bool {
		self.real.almost_equal(&rhs.real, tolerance)
			&& self.dual.almost_equal(&rhs.dual, tolerance)
	}

	fn almost_equal_rel_abs(&self, rhs: &Self, rel_tolerance: T, abs_tolerance: T) -> bool {
		self.real.almost_equal_rel_abs(&rhs.real, rel_tolerance, abs_tolerance)
			&& self.dual.almost_equal_rel_abs(&rhs.dual, rel_tolerance, abs_tolerance)
	}

	fn almost_zero(&self, tolerance: T) -> bool {
		self.real.almost_zero(tolerance) && self.dual.almost_zero(tolerance)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scalar_single_tolerance() {
		// Anchored at scale one near zero.
		assert!(almost_equal(0.0f64, 1e-9, 1e-8));
		assert!(!almost_equal(0.0f64, 1e-7, 1e-8));
		// Relative for large values.
		assert!(almost_equal(1e6f64, 1e6 + 1e-3, 1e-8));
		assert!(!almost_equal(1e6f64, 1e6 + 1e-1, 1e-8));
	}

	#[test]
	fn scalar_rel_abs() {
		assert!(almost_equal_rel_abs(1.0f32, 1.000001, 1e-5, 0.0));
		assert!(!almost_equal_rel_abs(1.0f32, 1.001, 1e-5, 0.0));
		assert!(almost_equal_rel_abs(0.0f32, 1e-5, 0.0, 1e-4));
		assert!(!almost_equal_rel_abs(100.0f64, 101.0, 1e-5, 1e-8));
		assert!(almost_equal_rel_abs(100.0f64, 100.0001, 1e-5, 1e-8));
	}

	#[test]
	fn scalar_zero() {
		assert!(almost_zero(-1e-5f32, 1e-4));
		assert!(!almost_zero(1e-3f32, 1e-4));
		assert!(1e-9f64.almost_zero(1e-8));
	}

	#[test]
	fn nan_never_compares() {
		assert!(!almost_equal(f64::NAN, f64::NAN, 1.0));
		assert!(!f32::NAN.almost_zero(1.0));
	}

	#[test]
	fn complex_requires_both_components() {
		let z = Complex::new(1.0f64, 2.0);

		assert!(z.almost_equal(&Complex::new(1.0, 2.0 + 1e-10), 1e-8));
		assert!(!z.almost_equal(&Complex::new(1.0, 2.1), 1e-8));
		assert!(!z.almost_equal(&Complex::new(1.1, 2.0), 1e-8));
		assert!(z.almost_equal_rel_abs(&Complex::new(1.000001, 2.000001), 1e-5, 1e-8));
		assert!(Complex::new(1e-9f64, -1e-9).almost_zero(1e-8));
	}

	#[test]
	fn dual_complex_requires_both_parts() {
		let dc = DualComplex::from_components(1.0f32, 2.0, 3.0, 4.0);

		assert!(dc.almost_equal(&dc, 0.0));
		assert!(!dc.almost_equal(&DualComplex::from_components(1.0, 2.0, 3.0, 4.1), 1e-4));
		assert!(!dc.almost_equal(&DualComplex::from_components(1.1, 2.0, 3.0, 4.0), 1e-4));
		assert!(dc.almost_equal_rel_abs(&DualComplex::from_components(1.0, 2.0, 3.0, 4.00001), 1e-5, 1e-4));
		assert!(!dc.almost_zero(1e-4));
		assert!(DualComplex::<f32>::ZERO.almost_zero(0.0));
	}
}
