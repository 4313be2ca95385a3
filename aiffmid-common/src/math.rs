#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} failed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
}

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    let err = || MathError:: [< $op Failed >] (self.try_into().ok(), rhs.try_into().ok());
                    self.[< checked_ $f >](rhs)
                        .ok_or_else(err)
                }
            }
        }
    };
}

impl_operator!(Add, add, u64);

pub trait ToU64: Sized + TryInto<u64> + TryInto<i128> + Copy {
    fn u64(self) -> Result<u64, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToU64 for usize {}

pub trait ToUsize: Sized + TryInto<usize> + TryInto<i128> + Copy {
    fn usize(self) -> Result<usize, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToUsize for u64 {}

pub trait ToI64: Sized + TryInto<i64> + TryInto<i128> + Copy {
    fn i64(self) -> Result<i64, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToI64 for u64 {}

/// Same as `checked_add` functions but returns an error
///
/// ```
/// # use aiffmid_common::math::*;
/// assert_eq!(8_u64.safe_add(u64::from(u32::MAX)), Ok(4_294_967_303));
/// assert!(u64::MAX.safe_add(1).is_err());
/// ```
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}
