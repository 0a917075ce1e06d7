use super::DualComplex;
use super::num::Float;

impl<T: Float> DualComplex<T> {
	/// Component-wise linear interpolation. The result is generally not a unit transform.
	pub fn lerp(&self, rhs: Self, t: T) -> Self {
		*self * (T::ONE - t) + rhs * t
	}

	/// Linear interpolation followed by normalization.
	pub fn nlerp(&self, rhs: Self, t: T) -> Self {
		self.lerp(rhs, t).normalize()
	}

	/// Screw-linear interpolation along the exponential map: `self · (self̄ · rhs)^t`.
	///
	/// Follows whichever of the two double-cover paths `rhs`'s sign selects.
	/// See [`slerp_shortest_path`](Self::slerp_shortest_path).
	pub fn slerp(&self, rhs: Self, t: T) -> Self {
		*self * self.transformation_difference(rhs).powf(t)
	}

	/// Like [`slerp`](Self::slerp), but flips the sign of `rhs` if needed so the rotation takes the shorter way around.
	pub fn slerp_shortest_path(&self, rhs: Self, t: T) -> Self {
		let cos_half_angle = self.real.dot(rhs.real);
		let rhs = if cos_half_angle < T::ZERO { -rhs } else { rhs };
		self.slerp(rhs, t)
	}
}

/// Dual-complex linear blending: the normalized weighted sum of `transforms`.
///
/// With two transforms and weights `(1 - t, t)` this equals [`DualComplex::nlerp`].
///
/// # Panics
///
/// If the slices differ in length while contract checks are enabled (debug builds or the
/// `contracts` feature). Otherwise the extra elements of the longer slice are ignored.
pub fn blend<T: Float>(transforms: &[DualComplex<T>], weights: &[T]) -> DualComplex<T> {
	contract!(
		transforms.len() == weights.len(),
		"blend: {} transforms but {} weights", transforms.len(), weights.len()
	);

	transforms
		.iter()
		.zip(weights)
		.fold(DualComplex::ZERO, |sum, (&dc, &w)| sum + dc * w)
		.normalize()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{AlmostEq, Complex};

	fn c<T: Float>(re: f64, im: f64) -> Complex<T> {
		Complex::new(crate::cast(re), crate::cast(im))
	}

	fn p<T: Float>() -> DualComplex<T> {
		DualComplex::translation(c::<T>(1.0, 2.0)) * DualComplex::rotation(T::PI / (T::TWO + T::TWO))
	}

	fn q<T: Float>() -> DualComplex<T> {
		DualComplex::translation(c::<T>(3.0, 4.0)) * DualComplex::rotation(T::PI / T::TWO)
	}

	#[test]
	fn lerp() {
		fn check<T: Float>() {
			let (p, q) = (p::<T>(), q::<T>());
			let half = T::ONE / T::TWO;

			assert!(p.lerp(q, T::ZERO).almost_equal(&p, T::TOLERANCE), "lerp at 0 is not p");
			assert!(p.lerp(q, T::ONE).almost_equal(&q, T::TOLERANCE), "lerp at 1 is not q");

			let res = p.lerp(q, half);
			assert!(res.almost_equal(&(p * half + q * half), T::TOLERANCE), "Incorrect midpoint");
			assert!(!res.norm().almost_equal(&T::ONE, T::TOLERANCE), "Midpoint should not be unit");
		}

		check::<f32>();
		check::<f64>();
	}

	#[test]
	fn nlerp() {
		fn check<T: Float>() {
			let (p, q) = (p::<T>(), q::<T>());
			let half = T::ONE / T::TWO;

			let expected = p * half + q * half;
			let expected = expected / expected.norm();
			let res = p.nlerp(q, half);

			assert!(res.almost_equal(&expected, T::TOLERANCE), "Incorrect midpoint");
			assert!(res.is_unit(T::TOLERANCE), "Midpoint is not unit");
		}

		check::<f32>();
		check::<f64>();
	}

	#[test]
	fn slerp() {
		fn check<T: Float>() {
			let (p, q) = (p::<T>(), q::<T>());
			let t: T = crate::cast(0.75);

			assert!(p.slerp(q, T::ZERO).almost_equal(&p, T::TOLERANCE), "slerp at 0 is not p");
			assert!(p.slerp(q, T::ONE).almost_equal(&q, T::TOLERANCE), "slerp at 1 is not q");

			let expected = p * (p.transformation_difference(q).ln() * t).exp();
			assert!(p.slerp(q, t).almost_equal(&expected, T::TOLERANCE), "slerp disagrees with exp/ln");
		}

		check::<f32>();
		check::<f64>();
	}

	#[test]
	fn slerp_shortest_path() {
		fn check<T: Float>() {
			let p = p::<T>();
			let q = DualComplex::translation(c::<T>(3.0, 4.0)) * DualComplex::rotation(T::PI * crate::cast::<f64, T>(1.5));
			let t: T = crate::cast(0.75);

			assert!(p.real.dot(q.real) < T::ZERO, "Test pair should be on opposite covers");
			assert!(p.slerp_shortest_path(q, T::ZERO).almost_equal(&p, T::TOLERANCE), "Incorrect start");
			assert!(p.slerp_shortest_path(q, T::ONE).almost_equal(&-q, T::TOLERANCE), "Incorrect end");

			let expected = p * (p.transformation_difference(-q).ln() * t).exp();
			assert!(p.slerp_shortest_path(q, t).almost_equal(&expected, T::TOLERANCE), "Incorrect intermediate");
		}

		check::<f32>();
		check::<f64>();
	}

	#[test]
	fn slerp_stays_rigid() {
		fn check<T: Float>() {
			let (p, q) = (p::<T>(), q::<T>());

			for i in 0..=10 {
				let t = crate::cast::<f64, T>(i as f64 / 10.0);
				assert!(p.slerp_shortest_path(q, t).is_unit(T::TOLERANCE), "slerp left the unit manifold at t = {t:?}");
			}
		}

		check::<f32>();
		check::<f64>();
	}

	#[test]
	fn blend() {
		fn check<T: Float>() {
			let transforms = [p::<T>(), q::<T>()];
			let half = T::ONE / T::TWO;

			assert!(super::blend(&transforms, &[T::ONE, T::ZERO]).almost_equal(&transforms[0], T::TOLERANCE));
			assert!(super::blend(&transforms, &[T::ZERO, T::ONE]).almost_equal(&transforms[1], T::TOLERANCE));

			let expected = transforms[0].nlerp(transforms[1], half);
			assert!(super::blend(&transforms, &[half, half]).almost_equal(&expected, T::TOLERANCE));
		}

		check::<f32>();
		check::<f64>();
	}

	#[test]
	fn blend_many() {
		let transforms = [
			DualComplex::translation(Complex::new(1.0f64, 0.0)),
			DualComplex::translation(Complex::new(0.0, 1.0)),
			DualComplex::translation(Complex::new(-1.0, 0.0)),
		];
		let third = 1.0 / 3.0;

		let res = super::blend(&transforms, &[third; 3]);
		assert!(!res.is_identity(f64::TOLERANCE));
		assert!(res.transform_point(Complex::ZERO).almost_equal(&Complex::new(0.0, third), f64::TOLERANCE));
	}

	#[test]
	#[cfg(any(debug_assertions, feature = "contracts"))]
	#[should_panic(expected = "2 transforms but 1 weights")]
	fn blend_length_mismatch() {
		super::blend(&[p::<f64>(), q::<f64>()], &[1.0]);
	}
}
