use super::num::Number;
use super::Complex;
use std::ops::{Index, IndexMut, Mul};

/// A row-major `R x C` matrix.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
	pub data: [[T; C]; R],
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
	pub const ZERO: Self = Self::splat(T::ZERO);

	pub const fn splat(value: T) -> Self {
		Self { data: [[value; C]; R] }
	}
}

pub type Vector<T, const R: usize> = Matrix<T, R, 1>;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

pub type Matrix3<T> = Matrix<T, 3, 3>;

impl<T: Copy> Vector2<T> {
	pub const fn new(x: T, y: T) -> Self {
		Self { data: [[x], [y]] }
	}

	pub fn x(&self) -> T {
		self.data[0][0]
	}

	pub fn y(&self) -> T {
		self.data[1][0]
	}

	/// Lifts this point to homogeneous coordinates.
	pub fn extend(&self, z: T) -> Vector3<T> {
		Vector3::new(self.x(), self.y(), z)
	}
}

impl<T: Copy> Vector3<T> {
	pub const fn new(x: T, y: T, z: T) -> Self {
		Self { data: [[x], [y], [z]] }
	}

	pub fn x(&self) -> T {
		self.data[0][0]
	}

	pub fn y(&self) -> T {
		self.data[1][0]
	}

	pub fn z(&self) -> T {
		self.data[2][0]
	}

	pub fn truncate(&self) -> Vector2<T> {
		Vector2::new(self.x(), self.y())
	}
}

impl<T: Number> Matrix3<T> {
	pub const IDENTITY: Self = Self::from_array([
		T::ONE, T::ZERO, T::ZERO,
		T::ZERO, T::ONE, T::ZERO,
		T::ZERO, T::ZERO, T::ONE,
	]);

	/// Creates a matrix from an array of 9 elements stored in row-major order.
	/// This allows the code to be formatted as if it were a 3x3 matrix.
	pub const fn from_array(array: [T; 9]) -> Self {
		Self { data: [
			[array[0], array[1], array[2]],
			[array[3], array[4], array[5]],
			[array[6], array[7], array[8]],
		]}
	}

	/// Applies this homogeneous transform to a 2D point.
	pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
		(*self * point.extend(T::ONE)).truncate()
	}
}

impl<T: Number, const R: usize, const C: usize, const CR: usize> Mul<Matrix<T, CR, C>> for Matrix<T, R, CR> {
	type Output = Matrix<T, R, C>;

	fn mul(self, rhs: Matrix<T, CR, C>) -> Self::Output {
		let mut result = Matrix::ZERO;
		for row in 0..R {
			for col in 0..C {
				for i in 0..CR {
					result[(row, col)] += self[(row, i)] * rhs[(i, col)];
				}
			}
		}
		result
	}
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
	type Output = T;

	fn index(&self, index: (usize, usize)) -> &Self::Output {
		&self.data[index.0][index.1]
	}
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
	fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
		&mut self.data[index.0][index.1]
	}
}

impl<T: Copy> From<Complex<T>> for Vector2<T> {
	fn from(z: Complex<T>) -> Self {
		Vector2::new(z.re, z.im)
	}
}

impl<T: Copy> From<Vector2<T>> for Complex<T> {
	fn from(v: Vector2<T>) -> Self {
		Complex::new(v.x(), v.y())
	}
}
