//! Shared implementation of the Vector2/3/4 family
//!
//! The three vector types differ only in their component list, plus a few
//! dimension-specific operations (cross products, matrix application) that
//! live next to each type.

macro_rules! impl_vector_common {
    ($name:ident, $len:expr, [$($idx:literal => $f:ident),+]) => {
        impl<T: Scalar> $name<T> {
            /// All components zero
            pub const ZERO: Self = Self { $($f: T::ZERO),+ };

            /// Create a new vector
            #[inline]
            pub const fn new($($f: T),+) -> Self {
                Self { $($f),+ }
            }

            /// Dot product, accumulated in `f64` so integer components
            /// cannot overflow
            #[inline]
            pub fn dot(&self, other: &Self) -> f64 {
                let mut acc = 0.0;
                $(acc += self.$f.mul_wide(other.$f);)+
                acc
            }

            /// Squared magnitude (cheaper than [`Self::magnitude`])
            #[inline]
            pub fn sqr_magnitude(&self) -> f64 {
                self.dot(self)
            }

            /// Magnitude (length)
            #[inline]
            pub fn magnitude(&self) -> f64 {
                self.sqr_magnitude().sqrt()
            }

            /// Unit-length copy. A zero vector normalizes to zero, never NaN.
            pub fn normalize(&self) -> $name<f64> {
                let mut n = self.to_double();
                n.normalize_self();
                n
            }

            /// Normalize in place. Integer components truncate, so an
            /// integer vector usually ends up zero or a unit axis:
            /// (5, 0, 0) becomes (1, 0, 0) and (1, 1, 0) becomes zero.
            pub fn normalize_self(&mut self) {
                let length = self.magnitude();
                if length == 0.0 {
                    *self = Self::ZERO;
                    return;
                }
                $(self.$f = T::from_f64(self.$f.to_f64() / length);)+
            }

            /// Componentwise product
            #[inline]
            pub fn vector_scale(&self, scalar: &Self) -> Self {
                Self { $($f: self.$f * scalar.$f),+ }
            }

            /// Lerp in place toward `other` by `t`. `t` is not clamped.
            pub fn lerp_self(&mut self, other: &Self, t: f64) {
                let it = 1.0 - t;
                $(self.$f = T::from_f64(it * self.$f.to_f64() + t * other.$f.to_f64());)+
            }

            /// `self * (1 - t) + other * t`, for any real `t`
            pub fn lerp(&self, other: &Self, t: f64) -> $name<f64> {
                let mut copy = self.to_double();
                copy.lerp_self(&other.to_double(), t);
                copy
            }

            /// Whether every component differs by at most `epsilon`
            pub fn similar(&self, other: &Self, epsilon: f64) -> bool {
                true $(&& math::similar(self.$f.to_f64(), other.$f.to_f64(), epsilon))+
            }

            /// [`Self::similar`] with [`math::DEFAULT_EPSILON`]
            #[inline]
            pub fn approx_eq(&self, other: &Self) -> bool {
                self.similar(other, math::DEFAULT_EPSILON)
            }

            /// Integer copy; components truncate toward zero
            #[inline]
            pub fn to_int(&self) -> $name<i32> {
                $name { $($f: i32::from_f64(self.$f.to_f64())),+ }
            }

            /// Real-valued copy
            #[inline]
            pub fn to_double(&self) -> $name<f64> {
                $name { $($f: self.$f.to_f64()),+ }
            }

            /// Checked component access
            pub fn component(&self, index: usize) -> Result<T> {
                match index {
                    $($idx => Ok(self.$f),)+
                    _ => Err(MathError::IndexOutOfRange { index, len: $len }),
                }
            }

            /// Checked mutable component access
            pub fn component_mut(&mut self, index: usize) -> Result<&mut T> {
                match index {
                    $($idx => Ok(&mut self.$f),)+
                    _ => Err(MathError::IndexOutOfRange { index, len: $len }),
                }
            }

            /// Components as a plain array
            #[inline]
            pub fn as_array(&self) -> [T; $len] {
                bytemuck::cast(*self)
            }

            /// Build from a plain array
            #[inline]
            pub fn from_array(values: [T; $len]) -> Self {
                bytemuck::cast(values)
            }
        }

        // SAFETY: repr(C) struct of identical Pod fields has no padding
        unsafe impl<T: Scalar> bytemuck::Zeroable for $name<T> {}
        // SAFETY: see above
        unsafe impl<T: Scalar> bytemuck::Pod for $name<T> {}

        impl<T: Scalar> std::ops::Index<usize> for $name<T> {
            type Output = T;

            /// Panics on out-of-range indices like slice indexing;
            /// use [`Self::component`] for a checked variant.
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$f,)+
                    _ => panic!("{}", MathError::IndexOutOfRange { index, len: $len }),
                }
            }
        }

        impl<T: Scalar> std::ops::IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$f,)+
                    _ => panic!("{}", MathError::IndexOutOfRange { index, len: $len }),
                }
            }
        }

        impl<T: Scalar> std::ops::Add for $name<T> {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                Self { $($f: self.$f + other.$f),+ }
            }
        }

        impl<T: Scalar> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                $(self.$f += other.$f;)+
            }
        }

        impl<T: Scalar> std::ops::Sub for $name<T> {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                Self { $($f: self.$f - other.$f),+ }
            }
        }

        impl<T: Scalar> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                $(self.$f -= other.$f;)+
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn mul(self, scale: T) -> Self {
                Self { $($f: self.$f * scale),+ }
            }
        }

        impl<T: Scalar> std::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, scale: T) {
                $(self.$f *= scale;)+
            }
        }

        impl<T: Scalar> std::ops::Div<T> for $name<T> {
            type Output = Self;
            #[inline]
            fn div(self, scale: T) -> Self {
                Self { $($f: self.$f / scale),+ }
            }
        }

        impl<T: Scalar> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, scale: T) {
                $(self.$f /= scale;)+
            }
        }

        impl<T: Scalar> std::ops::Neg for $name<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl<T: Scalar> std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts = [$(format!("{}: {}", stringify!($f), self.$f)),+];
                write!(f, "[{}]", parts.join("  "))
            }
        }
    };
}
