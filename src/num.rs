use core::ops::{Mul, Add, Sub, Div, Neg};
use core::ops::{MulAssign, AddAssign, SubAssign, DivAssign};
use core::cmp::{PartialEq, PartialOrd};
use core::fmt::Debug;
use super::relational::AlmostEq;

/// Forward a method to an inherent method or a base trait method.
macro_rules! forward {
	($( Self :: $method:ident ( self $( , $arg:ident : $ty:ty )* ) -> $ret:ty ; )*) => {$(
		#[inline]
		fn $method(self $( , $arg : $ty )* ) -> $ret {
			Self::$method(self $( , $arg )* )
		}
	)*};
}

pub trait Cast where Self: Sized {
	fn from_f64(v: f64) -> Self;
	fn as_f64(&self) -> f64;
}

/// Converts between scalar types by way of `f64`.
pub fn cast<T: Cast, U: Cast>(v: T) -> U {
	U::from_f64(v.as_f64())
}

pub trait NumOps<Rhs = Self, Output = Self>:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output>
{}

impl<T, Rhs, Output> NumOps<Rhs, Output> for T where T:
	Add<Rhs, Output = Output> +
	Sub<Rhs, Output = Output> +
	Mul<Rhs, Output = Output> +
	Div<Rhs, Output = Output>
{}

pub trait NumAssignOps<Rhs = Self>:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs>
{}

impl<T, Rhs> NumAssignOps<Rhs> for T where T:
	AddAssign<Rhs> +
	SubAssign<Rhs> +
	MulAssign<Rhs> +
	DivAssign<Rhs>
{}

pub trait Number: Copy + NumOps + NumAssignOps + Cast + Default + Debug + PartialEq + PartialOrd {
	const ZERO: Self;
	const ONE: Self;
	const TWO: Self;
}

macro_rules! number_impl {
	($t:ident) => {
		impl Number for $t {
			const ZERO: Self = 0 as Self;
			const ONE: Self = 1 as Self;
			const TWO: Self = 2 as Self;
		}

		impl Cast for $t {
			fn from_f64(v: f64) -> Self {
				v as Self
			}

			fn as_f64(&self) -> f64 {
				*self as f64
			}
		}
	}
}

number_impl!(f32);
number_impl!(f64);

/// An IEEE-754 scalar. The algebra is generic over this bound and is instantiated for `f32` and `f64`.
pub trait Float: Number + Neg<Output = Self> + FloatOps + AlmostEq<Self> {
	const PI: Self;

	/// Default comparison tolerance for this precision.
	const TOLERANCE: Self;
}

pub trait FloatOps where Self: Sized {
	fn abs(self) -> Self;
	fn atan2(self, x: Self) -> Self;
	fn exp(self) -> Self;
	fn ln(self) -> Self;
	fn max(self, other: Self) -> Self;
	fn powf(self, exp: Self) -> Self;
	fn sin_cos(self) -> (Self, Self);
	fn sqrt(self) -> Self;
}

macro_rules! float_impl {
	($t:ident, $tolerance:literal) => {
		impl Float for $t {
			const PI: Self = core::$t::consts::PI;
			const TOLERANCE: Self = $tolerance;
		}

		impl FloatOps for $t {
			forward! {
				Self::abs(self) -> Self;
				Self::atan2(self, x: Self) -> Self;
				Self::exp(self) -> Self;
				Self::ln(self) -> Self;
				Self::max(self, other: Self) -> Self;
				Self::powf(self, exp: Self) -> Self;
				Self::sin_cos(self) -> (Self, Self);
				Self::sqrt(self) -> Self;
			}
		}
	}
}

float_impl!(f32, 1e-4);
float_impl!(f64, 1e-8);
