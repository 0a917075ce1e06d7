use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use super::num::{Float, Number};

/// A complex number `re + i·im`, used both as a 2D point and as the parts of a [`DualComplex`](crate::DualComplex).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
	pub re: T,
	pub im: T,
}

impl<T> Complex<T> {
	pub const fn new(re: T, im: T) -> Self {
		Self { re, im }
	}
}

impl<T: Number> Complex<T> {
	pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);
	pub const ONE: Self = Self::new(T::ONE, T::ZERO);
}

impl<T: Float> Complex<T> {
	/// Constructs a complex number from its magnitude and phase angle.
	pub fn from_polar(length: T, angle: T) -> Self {
		let (sin, cos) = angle.sin_cos();
		Self::new(length * cos, length * sin)
	}

	/// Returns the complex conjugate.
	pub fn conj(&self) -> Self {
		Self::new(self.re, -self.im)
	}

	/// Returns the squared magnitude (field norm) of this complex number.
	pub fn length_sq(&self) -> T {
		self.re * self.re + self.im * self.im
	}

	/// Returns the magnitude of this complex number.
	pub fn length(&self) -> T {
		self.length_sq().sqrt()
	}

	/// Returns the phase angle in `[-pi, pi]`.
	pub fn arg(&self) -> T {
		self.im.atan2(self.re)
	}

	/// Real-valued dot product, treating both numbers as 2D vectors.
	pub fn dot(&self, rhs: Self) -> T {
		self.re * rhs.re + self.im * rhs.im
	}

	pub fn exp(&self) -> Self {
		Self::from_polar(self.re.exp(), self.im)
	}

	/// Principal natural logarithm.
	pub fn ln(&self) -> Self {
		Self::new(self.length().ln(), self.arg())
	}

	/// Principal value of `self` raised to a real power.
	pub fn powf(&self, exponent: T) -> Self {
		Self::from_polar(self.length().powf(exponent), self.arg() * exponent)
	}
}

impl<T: Add<Output = T>> Add for Complex<T> {
	type Output = Complex<T>;

	fn add(self, rhs: Self) -> Self::Output {
		Self {
			re: self.re + rhs.re,
			im: self.im + rhs.im,
		}
	}
}

impl<T: Sub<Output = T>> Sub for Complex<T> {
	type Output = Complex<T>;

	fn sub(self, rhs: Self) -> Self::Output {
		Self {
			re: self.re - rhs.re,
			im: self.im - rhs.im,
		}
	}
}

impl<T: Neg<Output = T>> Neg for Complex<T> {
	type Output = Complex<T>;

	fn neg(self) -> Self::Output {
		Self {
			re: -self.re,
			im: -self.im,
		}
	}
}

impl<T: Float> Mul for Complex<T> {
	type Output = Complex<T>;

	fn mul(self, rhs: Self) -> Self::Output {
		Self {
			re: self.re * rhs.re - self.im * rhs.im,
			im: self.re * rhs.im + self.im * rhs.re,
		}
	}
}

impl<T: Float> Div for Complex<T> {
	type Output = Complex<T>;

	fn div(self, rhs: Self) -> Self::Output {
		(self * rhs.conj()) / rhs.length_sq()
	}
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Complex<T> {
	type Output = Complex<T>;

	fn mul(self, rhs: T) -> Self::Output {
		Self {
			re: self.re * rhs,
			im: self.im * rhs,
		}
	}
}

impl<T: Copy + Div<Output = T>> Div<T> for Complex<T> {
	type Output = Complex<T>;

	fn div(self, rhs: T) -> Self::Output {
		Self {
			re: self.re / rhs,
			im: self.im / rhs,
		}
	}
}

impl<T: Float> AddAssign for Complex<T> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl<T: Float> SubAssign for Complex<T> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

impl<T: Float> MulAssign for Complex<T> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl<T: Float> MulAssign<T> for Complex<T> {
	fn mul_assign(&mut self, rhs: T) {
		*self = *self * rhs;
	}
}

impl<T: Float> DivAssign for Complex<T> {
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

impl<T: Float> DivAssign<T> for Complex<T> {
	fn div_assign(&mut self, rhs: T) {
		*self = *self / rhs;
	}
}

macro_rules! scalar_lhs_impl {
	($t:ident) => {
		impl Mul<Complex<$t>> for $t {
			type Output = Complex<$t>;

			fn mul(self, rhs: Complex<$t>) -> Self::Output {
				rhs * self
			}
		}
	}
}

scalar_lhs_impl!(f32);
scalar_lhs_impl!(f64);
