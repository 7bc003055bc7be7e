//! Shared fixtures for integration tests.

use typedstore::prelude::*;

/// Camera preferences, the canonical permissive-defaulting fixture.
///
/// Policy: absent or mistyped fields fall back to defaults
/// (`save_to_roll = true`, `size = Medium`); only a non-object transport
/// value fails the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConfig {
    pub save_to_roll: bool,
    pub size: Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Large,
    Medium,
    Small,
}

impl Size {
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Size::Large),
            1 => Some(Size::Medium),
            2 => Some(Size::Small),
            _ => None,
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            Size::Large => 0,
            Size::Medium => 1,
            Size::Small => 2,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            save_to_roll: true,
            size: Size::Medium,
        }
    }
}

impl Convertible for CameraConfig {
    fn key() -> String {
        KeySpace::new("com.example.camera").key("CameraConfig")
    }

    fn to_transport(&self) -> Value {
        [
            ("cameraRoll".to_string(), Value::Bool(self.save_to_roll)),
            ("size".to_string(), Value::Int(self.size.raw())),
        ]
        .into_iter()
        .collect()
    }

    fn from_transport(value: &Value) -> Option<Self> {
        value.as_object()?;
        let defaults = CameraConfig::default();
        Some(CameraConfig {
            save_to_roll: value
                .field("cameraRoll")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.save_to_roll),
            size: value
                .field("size")
                .and_then(Value::as_int)
                .and_then(Size::from_raw)
                .unwrap_or(defaults.size),
        })
    }
}
