use serde::{Deserialize, Deserializer};

/// One field of a partial update payload
///
/// A missing field and an explicit `null` both deserialize to `Keep`; any
/// other value becomes `Set`. Fields using this type need `#[serde(default)]`
/// so that a missing key is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Keep,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Keep => None,
            Patch::Set(value) => Some(value),
        }
    }

    /// Overwrite `slot` if this patch carries a value
    pub fn apply_to(self, slot: &mut T) {
        if let Patch::Set(value) = self {
            *slot = value;
        }
    }

    /// Like [`Patch::apply_to`] for optional slots: a set value becomes `Some`
    pub fn apply_to_option(self, slot: &mut Option<T>) {
        if let Patch::Set(value) = self {
            *slot = Some(value);
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Patch::Keep, Patch::Set)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
