use super::DualComplex;
use super::num::Float;

impl<T: Float> DualComplex<T> {
	/// Exponential map: `exp(r + εd) = exp(r) + ε·exp(r)·d`.
	pub fn exp(&self) -> Self {
		let real = self.real.exp();
		Self::new(real, real * self.dual)
	}

	/// Principal logarithm: `ln(r + εd) = ln(r) + ε·d/r`.
	///
	/// A zero real part yields NaN/infinite components.
	pub fn ln(&self) -> Self {
		Self::new(self.real.ln(), self.dual / self.real)
	}

	/// Raises this number to a real power.
	///
	/// Evaluated directly as `r^t + ε·t·r^(t-1)·d` rather than through `exp(t·ln(self))`,
	/// which loses precision around the branch cut.
	pub fn powf(&self, exponent: T) -> Self {
		Self::new(
			self.real.powf(exponent),
			self.real.powf(exponent - T::ONE) * exponent * self.dual,
		)
	}
}
