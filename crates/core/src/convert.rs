//! Convertible contract
//!
//! A convertible type is a domain value that knows how to serialize itself
//! into the transport [`Value`] and rebuild itself from one, and that names
//! the single slot it lives under. Stores are generic over this contract and
//! never inspect the transport shape themselves.

use crate::value::Value;

/// Contract between a domain value type and the stores that hold it.
///
/// Each implementing type owns exactly one logical slot, addressed by
/// [`key`](Convertible::key). The two conversion functions must satisfy the
/// round-trip law: for every value `v` built from representable fields,
/// `Self::from_transport(&v.to_transport()) == Some(v)`.
///
/// `from_transport` fails soft: malformed input yields `None`, never a panic
/// or an error. Whether absent or mistyped fields fall back to defaults
/// instead of failing the whole conversion is a policy each implementor
/// chooses and documents on the type; the contract does not impose one.
///
/// ## Example
///
/// ```
/// use typedstore_core::{Convertible, Value};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Volume(i64);
///
/// impl Convertible for Volume {
///     fn key() -> String {
///         "com.example.player.Volume".to_string()
///     }
///
///     fn to_transport(&self) -> Value {
///         Value::Int(self.0)
///     }
///
///     fn from_transport(value: &Value) -> Option<Self> {
///         value.as_int().map(Volume)
///     }
/// }
///
/// let v = Volume(7);
/// assert_eq!(Volume::from_transport(&v.to_transport()), Some(v));
/// assert_eq!(Volume::from_transport(&Value::Bool(true)), None);
/// ```
pub trait Convertible: Sized {
    /// Slot identifier for this type.
    ///
    /// Stores capture the key at construction time, so this is called once
    /// per store instance. Use [`KeySpace`](crate::KeySpace) to derive
    /// application-prefixed keys.
    fn key() -> String;

    /// Serialize into the transport representation.
    fn to_transport(&self) -> Value;

    /// Rebuild from the transport representation.
    ///
    /// Must accept exactly the shape produced by
    /// [`to_transport`](Convertible::to_transport). Returns `None` on
    /// malformed input.
    fn from_transport(value: &Value) -> Option<Self>;
}
