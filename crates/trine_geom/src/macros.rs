// Shared plumbing for primitives that are plain blocks of `LEN` scalars:
// Pod impls, flat views, shape-checked `from_slice`, and approx comparisons
// over every component.
//
// With a third argument, raw input from `from_slice` and from deserializing
// is passed through that method so it gets the same invariants as the
// regular constructors. Those types derive only `Serialize`.
macro_rules! impl_flat_primitive {
    (@common $ty:ident, $len:expr) => {
        // SAFETY: `repr(transparent)` over arrays of `Pod` vectors, no padding.
        unsafe impl<T: trine_math::Scalar> bytemuck::Zeroable for $ty<T> {}
        // SAFETY: see above.
        unsafe impl<T: trine_math::Scalar> bytemuck::Pod for $ty<T> {}

        impl<T: trine_math::Scalar> $ty<T> {
            /// Number of scalars in the flat layout.
            pub const LEN: usize = $len;

            /// All components, in storage order.
            pub fn as_flat(&self) -> &[T] {
                bytemuck::cast_slice(std::slice::from_ref(self))
            }
        }

        impl<T: trine_math::Scalar> approx::AbsDiffEq for $ty<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.as_flat()
                    .iter()
                    .zip(other.as_flat())
                    .all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
            }
        }

        impl<T: trine_math::Scalar> approx::RelativeEq for $ty<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.as_flat()
                    .iter()
                    .zip(other.as_flat())
                    .all(|(a, b)| T::relative_eq(a, b, epsilon, max_relative))
            }
        }

        impl<T: trine_math::Scalar> approx::UlpsEq for $ty<T> {
            fn default_max_ulps() -> u32 {
                T::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
                self.as_flat()
                    .iter()
                    .zip(other.as_flat())
                    .all(|(a, b)| T::ulps_eq(a, b, epsilon, max_ulps))
            }
        }
    };
    ($ty:ident, $len:expr, $check:ident) => {
        impl_flat_primitive!(@common $ty, $len);

        impl<T: trine_math::Scalar> $ty<T> {
            /// Build from exactly `LEN` scalars laid out as `as_flat` returns
            /// them, then apply the same invariants as the constructors.
            pub fn from_slice(values: &[T]) -> $crate::error::GeomResult<Self> {
                $crate::read_flat(values).map(Self::$check)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de, T> serde::Deserialize<'de> for $ty<T>
        where
            T: trine_math::Scalar + serde::Deserialize<'de>,
        {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = serde::Deserialize::deserialize(deserializer)?;
                Ok(Self::$check(Self(raw)))
            }
        }
    };
    ($ty:ident, $len:expr) => {
        impl_flat_primitive!(@common $ty, $len);

        impl<T: trine_math::Scalar> $ty<T> {
            /// Build from exactly `LEN` scalars laid out as `as_flat` returns them.
            pub fn from_slice(values: &[T]) -> $crate::error::GeomResult<Self> {
                $crate::read_flat(values)
            }
        }
    };
}
