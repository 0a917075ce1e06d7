//! Dual complex numbers: the 2D analogue of dual quaternions, used to represent,
//! compose and interpolate planar rigid transforms.
//!
//! ```
//! use dualcomplex::{Complex, DualComplex};
//!
//! let p = DualComplex::translation(Complex::new(1.0, 2.0)) * DualComplex::rotation(std::f64::consts::FRAC_PI_2);
//! let v = p.transform_point(Complex::new(3.0, 4.0));
//!
//! assert!((v.re + 3.0).abs() < 1e-12 && (v.im - 5.0).abs() < 1e-12);
//! ```

/// Checks a caller contract. Active with debug assertions or the `contracts` feature, compiled out otherwise.
macro_rules! contract {
	($cond:expr, $($arg:tt)+) => {
		if cfg!(any(debug_assertions, feature = "contracts")) && !$cond {
			log::error!(target: "dualcomplex", $($arg)+);
			panic!($($arg)+);
		}
	};
}

pub mod matrix;
pub mod num;
pub mod relational;
pub mod sample;

mod complex;
mod dual_complex;
mod exponential;
mod interpolation;
mod query;
mod transform;

pub use complex::Complex;
pub use dual_complex::DualComplex;
pub use interpolation::blend;
pub use matrix::{Matrix3, Vector2, Vector3};
pub use num::{cast, Float, Number};
pub use relational::AlmostEq;

pub type DualComplex32 = DualComplex<f32>;
pub type DualComplex64 = DualComplex<f64>;
