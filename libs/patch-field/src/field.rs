use std::fmt;

use crate::error::PatchFieldError;

/// A field of a partial-update request that remembers whether it was present.
///
/// `Provided(None)` is an explicit `null` ("clear this field"), which is distinct
/// from `NotProvided` ("leave this field alone"). Instances are immutable; every
/// combinator consumes `self` and returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchField<T> {
    /// The key was absent from the payload.
    NotProvided,
    /// The key was present; the value may be `null`.
    Provided(Option<T>),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        Self::NotProvided
    }
}

impl<T> PatchField<T> {
    /// A field that was absent from the payload.
    #[must_use]
    pub const fn not_provided() -> Self {
        Self::NotProvided
    }

    /// A field that was present in the payload, possibly as `null`.
    #[must_use]
    pub const fn of(value: Option<T>) -> Self {
        Self::Provided(value)
    }

    /// A field that was present with a non-null value.
    #[must_use]
    pub const fn value(value: T) -> Self {
        Self::Provided(Some(value))
    }

    /// A field that was present as an explicit `null`.
    #[must_use]
    pub const fn null() -> Self {
        Self::Provided(None)
    }

    /// `true` when the key was present, whether it carried a value or `null`.
    #[must_use]
    pub const fn is_provided(&self) -> bool {
        matches!(self, Self::Provided(_))
    }

    /// Negation of [`is_provided`](Self::is_provided), usable as a serde
    /// `skip_serializing_if` predicate.
    #[must_use]
    pub const fn is_not_provided(&self) -> bool {
        !self.is_provided()
    }

    /// `true` only for a provided explicit `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Provided(None))
    }

    /// Borrows the provided value.
    ///
    /// # Errors
    /// Returns [`PatchFieldError::NotProvided`] if the field was absent.
    pub fn get(&self) -> Result<Option<&T>, PatchFieldError> {
        match self {
            Self::Provided(value) => Ok(value.as_ref()),
            Self::NotProvided => Err(PatchFieldError::NotProvided),
        }
    }

    /// Takes the provided value.
    ///
    /// # Errors
    /// Returns [`PatchFieldError::NotProvided`] if the field was absent.
    pub fn into_value(self) -> Result<Option<T>, PatchFieldError> {
        match self {
            Self::Provided(value) => Ok(value),
            Self::NotProvided => Err(PatchFieldError::NotProvided),
        }
    }

    /// Borrows the contents, keeping the absent/null/value state.
    #[must_use]
    pub const fn as_ref(&self) -> PatchField<&T> {
        match self {
            Self::Provided(value) => PatchField::Provided(value.as_ref()),
            Self::NotProvided => PatchField::NotProvided,
        }
    }

    /// Runs `action` with the value if the field was provided, otherwise does nothing.
    pub fn if_provided<F>(self, action: F)
    where
        F: FnOnce(Option<T>),
    {
        if let Self::Provided(value) = self {
            action(value);
        }
    }

    /// Overwrites `target` with the value if the field was provided, `null` included.
    pub fn assign_to(self, target: &mut Option<T>) {
        self.if_provided(|value| *target = value);
    }

    /// Maps the provided value (`null` included) with `mapper`.
    ///
    /// `mapper` is not called for an absent field.
    pub fn map<U, F>(self, mapper: F) -> PatchField<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        match self {
            Self::Provided(value) => PatchField::Provided(mapper(value)),
            Self::NotProvided => PatchField::NotProvided,
        }
    }

    /// Maps a provided non-null value, keeping `null` and absence as they are.
    pub fn map_value<U, F>(self, mapper: F) -> PatchField<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(|value| value.map(mapper))
    }

    /// Checks a provided value against `predicate`.
    ///
    /// An absent field always passes and `predicate` is not called.
    ///
    /// # Errors
    /// Returns `failure` if the field was provided and `predicate` rejected it.
    pub fn if_provided_validate<P, E>(self, predicate: P, failure: E) -> Result<Self, E>
    where
        P: FnOnce(Option<&T>) -> bool,
    {
        self.if_provided_validate_with(predicate, || failure)
    }

    /// Like [`if_provided_validate`](Self::if_provided_validate), but builds the
    /// error only when validation fails.
    ///
    /// # Errors
    /// Returns `failure()` if the field was provided and `predicate` rejected it.
    pub fn if_provided_validate_with<P, E, F>(self, predicate: P, failure: F) -> Result<Self, E>
    where
        P: FnOnce(Option<&T>) -> bool,
        F: FnOnce() -> E,
    {
        if let Self::Provided(value) = &self
            && !predicate(value.as_ref())
        {
            return Err(failure());
        }
        Ok(self)
    }
}

impl<T: fmt::Display> fmt::Display for PatchField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotProvided => f.write_str("NotProvided"),
            Self::Provided(Some(value)) => write!(f, "Provided({value})"),
            Self::Provided(None) => f.write_str("Provided(null)"),
        }
    }
}

/// Interop with the `Option<Option<T>>` ("double option") convention:
/// outer `None` is absent, `Some(None)` is `null`.
impl<T> From<Option<Option<T>>> for PatchField<T> {
    fn from(value: Option<Option<T>>) -> Self {
        value.map_or(Self::NotProvided, Self::Provided)
    }
}

impl<T> From<PatchField<T>> for Option<Option<T>> {
    fn from(field: PatchField<T>) -> Self {
        match field {
            PatchField::Provided(value) => Some(value),
            PatchField::NotProvided => None,
        }
    }
}
