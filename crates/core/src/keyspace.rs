//! Key namespacing
//!
//! Slot keys are flat strings, so collisions between applications sharing a
//! persistence facility are avoided by convention: a reverse-DNS prefix
//! joined to the preference name. [`KeySpace`] does that string building and
//! nothing else; it is not a registry and not a query surface.

/// Application prefix for deriving slot keys.
///
/// ## Example
///
/// ```
/// use typedstore_core::KeySpace;
///
/// let keys = KeySpace::new("com.example.camera");
/// assert_eq!(keys.key("CameraConfig"), "com.example.camera.CameraConfig");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    /// Create a key space with the given prefix.
    ///
    /// A trailing `.` on the prefix is dropped so callers can pass either
    /// form.
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix = prefix.into();
        while prefix.ends_with('.') {
            prefix.pop();
        }
        Self { prefix }
    }

    /// The prefix this key space was built with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Derive the slot key for `name` under this prefix.
    pub fn key(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.prefix, name)
        }
    }
}
