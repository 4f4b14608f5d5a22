use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// `0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// A complex number in rectangular form.
///
/// Equality, ordering and hashing compare both parts through
/// [`OrderedFloat`], so complex values can sit inside map keys alongside
/// every other value kind.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part.
    pub real:      f64,
    /// The imaginary part.
    pub imaginary: f64,
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary == 0.0 {
            return if self.real == 0.0 { f.write_str("0") } else { write!(f, "{}", self.real) };
        }
        if self.real == 0.0 {
            return write!(f, "{}i", self.imaginary);
        }
        let sign = if self.imaginary.is_sign_negative() { '-' } else { '+' };
        write!(f, "{} {sign} {}i", self.real, self.imaginary.abs())
    }
}

impl ComplexNumber {
    /// Builds `real + imaginary·i`.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.to_string(), "5 - 1i");
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Builds `r·e^(iθ)`.
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Magnitude `|z|`.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::complex::ComplexNumber;
    /// assert_eq!(ComplexNumber::new(3.0, 4.0).abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Phase angle in radians, in `(-π, π]`.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.imaginary.atan2(self.real)
    }

    #[must_use]
    pub const fn conj(&self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// `|z|²`, without the square root.
    #[must_use]
    pub const fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// `1 / z`. Zero yields non-finite parts.
    #[must_use]
    pub const fn recip(&self) -> Self {
        let n = self.norm_sqr();
        Self::new(self.real / n, -self.imaginary / n)
    }

    /// Returns `self` unless either part is infinite or NaN, which is reported
    /// as an overflow at `position`.
    pub fn finite_or_overflow(self, position: usize) -> EvalResult<Self> {
        if self.real.is_finite() && self.imaginary.is_finite() {
            Ok(self)
        } else {
            Err(RuntimeError::Overflow { position })
        }
    }

    /// Raises `self` to an integer power by binary exponentiation.
    ///
    /// Every intermediate product must stay finite. A negative exponent
    /// inverts the result, and is a division by zero for a zero base.
    /// `i64::MIN` has no positive counterpart and is an overflow.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::complex::{ComplexNumber, ONE};
    /// let c = ComplexNumber::new(2.0, 0.0);
    /// assert_eq!(c.checked_powi(0, 0).unwrap(), ONE.into());
    /// assert_eq!(c.checked_powi(-2, 0).unwrap(), ComplexNumber::new(0.25, 0.0).into());
    /// ```
    pub fn checked_powi(self, exp: i64, position: usize) -> EvalResult<Value> {
        if exp < 0 && self.is_zero() {
            return Err(RuntimeError::DivisionByZero { position });
        }
        let mut n = exp.checked_abs().ok_or(RuntimeError::Overflow { position })?;

        let mut base = self;
        let mut acc = ONE;
        while n > 0 {
            if n & 1 == 1 {
                acc = (acc * base).finite_or_overflow(position)?;
            }
            n >>= 1;
            if n > 0 {
                base = (base * base).finite_or_overflow(position)?;
            }
        }

        if exp < 0 {
            acc = acc.recip().finite_or_overflow(position)?;
        }
        Ok(acc.into())
    }

    /// Principal value of `z^x` for a real exponent.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::complex::ComplexNumber;
    /// let root = ComplexNumber::new(-4.0, 0.0).powf(0.5);
    /// assert!(root.real.abs() < 1e-12);
    /// assert!((root.imaginary - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn powf(self, exp: f64) -> Self {
        if self.is_zero() && exp > 0.0 {
            return ZERO;
        }
        Self::from_polar(self.abs().powf(exp), self.arg() * exp)
    }

    /// Principal value of `z^w`, computed as `exp(w · ln z)`.
    ///
    /// `0^w` is `0` whenever `w` has a positive real part.
    #[must_use]
    pub fn powc(self, exp: Self) -> Self {
        if self.is_zero() && exp.real > 0.0 {
            return ZERO;
        }
        (exp * self.ln()).exp()
    }

    /// Principal square root, with the imaginary part taking the sign of
    /// `self.imaginary`.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::complex::ComplexNumber;
    /// assert_eq!(ComplexNumber::new(-9.0, 0.0).sqrt(), ComplexNumber::new(0.0, 3.0));
    /// assert_eq!(ComplexNumber::new(3.0, 4.0).sqrt(), ComplexNumber::new(2.0, 1.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        let r = self.abs();
        Self::new(f64::midpoint(r, self.real).sqrt(),
                  ((r - self.real) / 2.0).sqrt().copysign(self.imaginary))
    }

    #[must_use]
    pub fn exp(self) -> Self {
        Self::from_polar(self.real.exp(), self.imaginary)
    }

    /// Principal natural logarithm.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::complex::ComplexNumber;
    /// let ln = ComplexNumber::new(-1.0, 0.0).ln();
    /// assert_eq!(ln.real, 0.0);
    /// assert!((ln.imaginary - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    #[must_use]
    pub fn sinh(self) -> Self {
        let (sin, cos) = self.imaginary.sin_cos();
        Self::new(self.real.sinh() * cos, self.real.cosh() * sin)
    }

    #[must_use]
    pub fn cosh(self) -> Self {
        let (sin, cos) = self.imaginary.sin_cos();
        Self::new(self.real.cosh() * cos, self.real.sinh() * sin)
    }

    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// `sin z = -i · sinh(i·z)`.
    ///
    /// # Example
    /// ```
    /// use evalenv::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(std::f64::consts::FRAC_PI_2, 0.0).sin();
    /// assert!((z.real - 1.0).abs() < 1e-12 && z.imaginary.abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn sin(self) -> Self {
        self.rotate_ccw().sinh().rotate_cw()
    }

    /// `cos z = cosh(i·z)`.
    #[must_use]
    pub fn cos(self) -> Self {
        self.rotate_ccw().cosh()
    }

    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Multiplies by `i`.
    const fn rotate_ccw(self) -> Self {
        Self::new(-self.imaginary, self.real)
    }

    /// Multiplies by `-i`.
    const fn rotate_cw(self) -> Self {
        Self::new(self.imaginary, -self.real)
    }

    const fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.real), OrderedFloat(self.imaginary))
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.real.mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
                  self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real))
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let n = rhs.norm_sqr();
        let num = self * rhs.conj();
        Self::new(num.real / n, num.imaginary / n)
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self::new(value.into(), 0.0)
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for ComplexNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic on `(real, imaginary)`; used only for map keys.
impl Ord for ComplexNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

    fn close(a: ComplexNumber, b: ComplexNumber) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn most_negative_exponent_is_an_overflow() {
        assert_eq!(I.checked_powi(i64::MIN, 3), Err(RuntimeError::Overflow { position: 3 }));
    }

    #[test]
    fn unit_powers_stay_finite_for_huge_exponents() {
        assert_eq!(I.checked_powi(i64::MAX, 0).unwrap(), Value::Complex(-I));
        assert_eq!(I.checked_powi(-i64::MAX, 0).unwrap(), Value::Complex(I));
    }

    #[test]
    fn growing_powers_overflow() {
        let base = ComplexNumber::new(10.0, 10.0);
        assert_eq!(base.checked_powi(1000, 7), Err(RuntimeError::Overflow { position: 7 }));
    }

    #[test]
    fn zero_to_negative_power_divides_by_zero() {
        assert_eq!(ZERO.checked_powi(-1, 0), Err(RuntimeError::DivisionByZero { position: 0 }));
        assert_eq!(ZERO.checked_powi(0, 0).unwrap(), Value::Complex(ONE));
    }

    #[test]
    fn division_inverts_multiplication() {
        let a = ComplexNumber::new(2.0, 3.0);
        let b = ComplexNumber::new(-1.0, 0.5);
        assert!(close(a * b / b, a));
        assert!(close(a * a.recip(), ONE));
    }

    #[test]
    fn trig_and_hyperbolic_agree() {
        let z = ComplexNumber::new(0.7, -0.3);
        let one = z.sin() * z.sin() + z.cos() * z.cos();
        assert!(close(one, ONE));
        assert!(close(z.tan(), z.sin() / z.cos()));
        assert!(close(z.cosh() * z.cosh() - z.sinh() * z.sinh(), ONE));
    }

    #[test]
    fn complex_power_of_i() {
        // i^i = e^(-π/2)
        let r = I.powc(I);
        assert!(close(r, ComplexNumber::new((-std::f64::consts::FRAC_PI_2).exp(), 0.0)));
        assert_eq!(ZERO.powc(ONE), ZERO);
    }

    #[test]
    fn display_forms() {
        assert_eq!(ZERO.to_string(), "0");
        assert_eq!(ComplexNumber::new(-1.0, -0.0).to_string(), "-1");
        assert_eq!(I.to_string(), "1i");
        assert_eq!(ComplexNumber::new(2.0, 3.0).to_string(), "2 + 3i");
    }

    #[test]
    fn nan_parts_are_comparable_keys() {
        let a = ComplexNumber::new(f64::NAN, 1.0);
        assert_eq!(a, a);
        assert_eq!(a.cmp(&ComplexNumber::new(0.0, 1.0)), Ordering::Greater);
    }
}
