//! Serde binding for [`PatchField`].
//!
//! `Deserialize` is only reached when the key is present, so the present value is
//! read as `Option<T>` and always wrapped as `Provided`. Absence is handled by the
//! containing struct: every patch field must carry `#[serde(default)]`. Without it,
//! serde's missing-field path feeds `None` through `deserialize_option` and a
//! missing key would read as an explicit `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::field::PatchField;

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::Provided)
    }
}

/// Pair with `#[serde(skip_serializing_if = "PatchField::is_not_provided")]`;
/// an absent field that is not skipped is written as `null`.
impl<T> Serialize for PatchField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Provided(Some(value)) => serializer.serialize_some(value),
            Self::Provided(None) | Self::NotProvided => serializer.serialize_none(),
        }
    }
}
