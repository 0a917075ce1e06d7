use super::matrix::Matrix3;
use super::num::Float;
use super::{Complex, DualComplex};

impl<T: Float> DualComplex<T> {
	/// Creates a rotation about the origin by `angle` radians.
	///
	/// The real part stores the half angle, `(cos(angle/2), sin(angle/2))`.
	pub fn rotation(angle: T) -> Self {
		let (sin, cos) = (angle / T::TWO).sin_cos();
		Self::new(Complex::new(cos, sin), Complex::ZERO)
	}

	/// Creates a translation by the displacement `d`.
	pub fn translation(d: Complex<T>) -> Self {
		Self::from_dual(d / T::TWO)
	}

	/// Creates a transform that first rotates by `angle`, then translates by `d`.
	pub fn from_rotation_translation(angle: T, d: Complex<T>) -> Self {
		Self::translation(d) * Self::rotation(angle)
	}

	/// Splits a unit transform into its rotation angle and translation.
	///
	/// The angle lies in `[-2pi, 2pi]`; `-p` yields an angle that differs by `2pi`.
	pub fn to_rotation_translation(&self) -> (T, Complex<T>) {
		(T::TWO * self.real.arg(), self.transform_point(Complex::ZERO))
	}

	/// Transforms a point.
	///
	/// Equivalent to the dual part of `p · (1 + εv) · p̄` where `p̄` is the total conjugate.
	pub fn transform_point(&self, v: Complex<T>) -> Complex<T> {
		self.real * self.real * v + self.real * self.dual * T::TWO
	}

	/// The transform that takes `self`'s frame to `rhs`'s frame: `self̄ · rhs`.
	pub fn transformation_difference(&self, rhs: Self) -> Self {
		self.total_conjugate() * rhs
	}

	/// Converts a unit transform to a 3x3 homogeneous matrix.
	pub fn to_matrix3(&self) -> Matrix3<T> {
		let r_squared = self.real * self.real;
		let twice_rd = self.real * self.dual * T::TWO;

		Matrix3::from_array([
			r_squared.re, -r_squared.im, twice_rd.re,
			r_squared.im, r_squared.re, twice_rd.im,
			T::ZERO, T::ZERO, T::ONE,
		])
	}
}

impl<T: Float> From<DualComplex<T>> for Matrix3<T> {
	fn from(dc: DualComplex<T>) -> Self {
		dc.to_matrix3()
	}
}
