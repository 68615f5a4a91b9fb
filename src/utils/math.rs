use crate::utils::errors::SpecError;

/// Positive root of `a·x² + b·x + c = 0`, `(-b + √(b² - 4ac)) / 2a`.
///
/// A negative discriminant is reported as [`SpecError::NoRealSolution`] and a
/// zero (or non-finite) leading coefficient as
/// [`SpecError::DegenerateEquilibrium`]; neither is allowed to leak out as NaN.
pub fn positive_quadratic_root(a: f64, b: f64, c: f64) -> Result<f64, SpecError> {
    if a == 0.0 || !a.is_finite() {
        return Err(SpecError::DegenerateEquilibrium(a));
    }

    let discriminant = b.powi(2) - 4.0 * a * c;
    if discriminant.is_nan() || discriminant < 0.0 {
        return Err(SpecError::NoRealSolution { discriminant });
    }

    Ok((-b + discriminant.sqrt()) / (2.0 * a))
}
