//! Type-level selection between two types.
//!
//! [`Conditional<B, X, Y>`] is `X` when `B` is [`True`], `Y` when `B` is
//! [`False`], and [`Either<X, Y>`] when `B` is the statically unknown
//! [`Boolean`]. The unknown case keeps both branches so the caller can narrow
//! later, once the runtime flag has been looked at.
//!
//! ```
//! use shape_catalog::conditional::{Bool, Conditional, False, True};
//!
//! struct Toggle<B: Bool> {
//!     enabled: B,
//!     payload: Conditional<B, String, ()>,
//! }
//!
//! let on = Toggle { enabled: True, payload: String::from("data") };
//! let off = Toggle { enabled: False, payload: () };
//! assert_eq!(on.payload, "data");
//! assert!(!off.enabled.value());
//! ```
use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::True {}
    impl Sealed for super::False {}
    impl Sealed for super::Boolean {}
}

/// A boolean lifted to the type level. Sealed: only [`True`], [`False`] and
/// [`Boolean`] implement it, so a non-boolean discriminant does not compile.
pub trait Bool: sealed::Sealed {
    /// `Some` when the value is known statically.
    const VALUE: Option<bool>;

    /// The branch this discriminant resolves to.
    type Select<X, Y>;

    /// The runtime value of the flag.
    fn value(&self) -> bool;

    /// Build the selected branch, evaluating only the side that is needed.
    fn choose<X, Y>(
        &self,
        then: impl FnOnce() -> X,
        otherwise: impl FnOnce() -> Y,
    ) -> Self::Select<X, Y>;

    /// Forget the static knowledge and view a selected value as a union.
    fn widen<X, Y>(selected: Self::Select<X, Y>) -> Either<X, Y>;
}

pub type Conditional<B, X, Y> = <B as Bool>::Select<X, Y>;

/// The literal `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

/// The literal `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

/// A boolean whose value is only known at run time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boolean(pub bool);

/// Union of the two branches of a [`Conditional`] over [`Boolean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Either<X, Y> {
    Then(X),
    Else(Y),
}

impl Bool for True {
    const VALUE: Option<bool> = Some(true);
    type Select<X, Y> = X;

    fn value(&self) -> bool {
        true
    }
    fn choose<X, Y>(&self, then: impl FnOnce() -> X, _: impl FnOnce() -> Y) -> X {
        then()
    }
    fn widen<X, Y>(selected: X) -> Either<X, Y> {
        Either::Then(selected)
    }
}

impl Bool for False {
    const VALUE: Option<bool> = Some(false);
    type Select<X, Y> = Y;

    fn value(&self) -> bool {
        false
    }
    fn choose<X, Y>(&self, _: impl FnOnce() -> X, otherwise: impl FnOnce() -> Y) -> Y {
        otherwise()
    }
    fn widen<X, Y>(selected: Y) -> Either<X, Y> {
        Either::Else(selected)
    }
}

impl Bool for Boolean {
    const VALUE: Option<bool> = None;
    type Select<X, Y> = Either<X, Y>;

    fn value(&self) -> bool {
        self.0
    }
    fn choose<X, Y>(&self, then: impl FnOnce() -> X, otherwise: impl FnOnce() -> Y) -> Either<X, Y> {
        if self.0 { Either::Then(then()) } else { Either::Else(otherwise()) }
    }
    fn widen<X, Y>(selected: Either<X, Y>) -> Either<X, Y> {
        selected
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Boolean(value)
    }
}

impl From<True> for Boolean {
    fn from(_: True) -> Self {
        Boolean(true)
    }
}

impl From<False> for Boolean {
    fn from(_: False) -> Self {
        Boolean(false)
    }
}

impl<X, Y> Either<X, Y> {
    pub fn is_then(&self) -> bool {
        matches!(self, Either::Then(_))
    }

    /// Narrow to the `true` branch.
    pub fn then(self) -> Option<X> {
        match self {
            Either::Then(x) => Some(x),
            Either::Else(_) => None,
        }
    }

    /// Narrow to the `false` branch.
    pub fn otherwise(self) -> Option<Y> {
        match self {
            Either::Then(_) => None,
            Either::Else(y) => Some(y),
        }
    }

    pub fn into_result(self) -> Result<X, Y> {
        match self {
            Either::Then(x) => Ok(x),
            Either::Else(y) => Err(y),
        }
    }

    /// The flag this value was selected by.
    pub fn discriminant(&self) -> Boolean {
        Boolean(self.is_then())
    }

    pub fn as_ref(&self) -> Either<&X, &Y> {
        match self {
            Either::Then(x) => Either::Then(x),
            Either::Else(y) => Either::Else(y),
        }
    }
}

// `True` and `False` travel as the JSON literals they stand for.
macro_rules! literal_bool_serde {
    ($name:ident, $value:literal) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bool($value)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                if bool::deserialize(deserializer)? == $value {
                    Ok($name)
                } else {
                    Err(serde::de::Error::custom(concat!("expected `", stringify!($value), "`")))
                }
            }
        }
    };
}

literal_bool_serde!(True, true);
literal_bool_serde!(False, false);
