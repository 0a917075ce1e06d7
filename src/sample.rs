use super::num::{cast, Float};
use super::{Complex, DualComplex};
use std::f64::consts::PI;
use rand::Rng;

/// Uniformly sample a rotation about the origin.
pub fn sample_rotation<T: Float, R: Rng + ?Sized>(rng: &mut R) -> DualComplex<T> {
	DualComplex::rotation(cast(rng.random_range(-PI..PI)))
}

/// Uniformly sample a translation with both components in `[-|max_translation|, |max_translation|]`.
pub fn sample_translation<T: Float, R: Rng + ?Sized>(rng: &mut R, max_translation: T) -> DualComplex<T> {
	let max = max_translation.abs().as_f64();
	let x = rng.random_range(-max..=max);
	let y = rng.random_range(-max..=max);
	DualComplex::translation(Complex::new(cast(x), cast(y)))
}

/// Uniformly sample a rigid transform: a random rotation followed by a random translation.
pub fn sample_rigid_transform<T: Float, R: Rng + ?Sized>(rng: &mut R, max_translation: T) -> DualComplex<T> {
	let rotation: DualComplex<T> = sample_rotation(rng);
	sample_translation(rng, max_translation) * rotation
}
