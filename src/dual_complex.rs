use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use super::Complex;
use super::num::{Float, Number};

/// A dual complex number `real + ε·dual` with `ε² = 0`.
///
/// When the real part has unit length the number represents a 2D rigid transform:
/// the real part holds the half-angle rotation `(cos(θ/2), sin(θ/2))` and the dual part
/// encodes the translation. `p` and `-p` represent the same transform.
///
/// The default value is zero, not the identity. Use [`DualComplex::IDENTITY`] for the latter.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DualComplex<T> {
	pub real: Complex<T>,
	pub dual: Complex<T>,
}

impl<T> DualComplex<T> {
	/// Constructs a dual complex number from its real and dual parts.
	pub const fn new(real: Complex<T>, dual: Complex<T>) -> Self {
		Self { real, dual }
	}

	/// Constructs a dual complex number from four scalars `(a + ib) + ε(c + id)`.
	pub const fn from_components(a: T, b: T, c: T, d: T) -> Self {
		Self::new(Complex::new(a, b), Complex::new(c, d))
	}
}

impl<T: Number> DualComplex<T> {
	pub const ZERO: Self = Self::new(Complex::ZERO, Complex::ZERO);

	/// The multiplicative identity, also the identity transform.
	pub const IDENTITY: Self = Self::new(Complex::ONE, Complex::ZERO);

	/// Constructs `1 + ε·v`.
	pub const fn from_dual(v: Complex<T>) -> Self {
		Self::new(Complex::ONE, v)
	}
}

impl<T: Float> DualComplex<T> {
	/// Squared length of the real part.
	pub fn squared_norm(&self) -> T {
		self.real.length_sq()
	}

	/// Length of the real part. The dual part does not contribute.
	pub fn norm(&self) -> T {
		self.real.length()
	}

	/// Returns the inverse of this dual complex number.
	///
	/// A zero real part yields NaN/infinite components.
	pub fn inverse(&self) -> Self {
		let sn = self.squared_norm();
		Self::new(self.real.conj() / sn, -self.dual / sn)
	}

	/// Returns the inverse, or `None` if the real part is zero.
	pub fn checked_inverse(&self) -> Option<Self> {
		(self.squared_norm() > T::ZERO).then(|| self.inverse())
	}

	pub fn complex_conjugate(&self) -> Self {
		Self::new(self.real.conj(), self.dual)
	}

	pub fn dual_conjugate(&self) -> Self {
		Self::new(self.real, -self.dual)
	}

	pub fn total_conjugate(&self) -> Self {
		Self::new(self.real.conj(), -self.dual)
	}

	/// Scales this number so that its real part has unit length.
	///
	/// A zero real part yields NaN/infinite components.
	pub fn normalize(&self) -> Self {
		*self / self.norm()
	}

	/// Normalizes this number, or returns `None` if the real part is zero.
	pub fn checked_normalize(&self) -> Option<Self> {
		(self.squared_norm() > T::ZERO).then(|| self.normalize())
	}
}

impl<T: Add<Output = T>> Add for DualComplex<T> {
	type Output = DualComplex<T>;

	fn add(self, rhs: Self) -> Self::Output {
		Self {
			real: self.real + rhs.real,
			dual: self.dual + rhs.dual,
		}
	}
}

impl<T: Sub<Output = T>> Sub for DualComplex<T> {
	type Output = DualComplex<T>;

	fn sub(self, rhs: Self) -> Self::Output {
		Self {
			real: self.real - rhs.real,
			dual: self.dual - rhs.dual,
		}
	}
}

impl<T: Neg<Output = T>> Neg for DualComplex<T> {
	type Output = DualComplex<T>;

	fn neg(self) -> Self::Output {
		Self {
			real: -self.real,
			dual: -self.dual,
		}
	}
}

impl<T: Float> Mul for DualComplex<T> {
	type Output = DualComplex<T>;

	/// Composes two transforms; `rhs` is applied first.
	fn mul(self, rhs: Self) -> Self::Output {
		Self {
			real: self.real * rhs.real,
			dual: self.dual * rhs.real.conj() + self.real * rhs.dual,
		}
	}
}

impl<T: Float> Div for DualComplex<T> {
	type Output = DualComplex<T>;

	fn div(self, rhs: Self) -> Self::Output {
		let sn = rhs.real.length_sq();

		Self {
			real: (self.real * rhs.real.conj()) / sn,
			dual: (self.dual * rhs.real - self.real * rhs.dual) / sn,
		}
	}
}

impl<T: Copy + Mul<Output = T>> Mul<T> for DualComplex<T> {
	type Output = DualComplex<T>;

	fn mul(self, rhs: T) -> Self::Output {
		Self {
			real: self.real * rhs,
			dual: self.dual * rhs,
		}
	}
}

impl<T: Copy + Div<Output = T>> Div<T> for DualComplex<T> {
	type Output = DualComplex<T>;

	fn div(self, rhs: T) -> Self::Output {
		Self {
			real: self.real / rhs,
			dual: self.dual / rhs,
		}
	}
}

impl<T: Float> AddAssign for DualComplex<T> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl<T: Float> SubAssign for DualComplex<T> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl<T: Float> MulAssign for DualComplex<T> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl<T: Float> MulAssign<T> for DualComplex<T> {
	fn mul_assign(&mut self, rhs: T) {
		*self = *self * rhs;
	}
}

impl<T: Float> DivAssign for DualComplex<T> {
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

impl<T: Float> DivAssign<T> for DualComplex<T> {
	fn div_assign(&mut self, rhs: T) {
		*self = *self / rhs;
	}
}

macro_rules! scalar_lhs_impl {
	($t:ident) => {
		impl Mul<DualComplex<$t>> for $t {
			type Output = DualComplex<$t>;

			fn mul(self, rhs: DualComplex<$t>) -> Self::Output {
				rhs * self
			}
		}
	}
}

scalar_lhs_impl!(f32);
scalar_lhs_impl!(f64);
