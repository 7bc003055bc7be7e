//! Round-trip law
//!
//! For every fixture value built from representable fields,
//! `from_transport(&to_transport(v)) == Some(v)`, and a set/get cycle
//! through any backend returns an equal value.

mod common;

use common::{CameraConfig, Size};
use proptest::prelude::*;
use std::sync::Arc;
use typedstore::prelude::*;

fn arb_config() -> impl Strategy<Value = CameraConfig> {
    (any::<bool>(), prop_oneof![
        Just(Size::Large),
        Just(Size::Medium),
        Just(Size::Small),
    ])
        .prop_map(|(save_to_roll, size)| CameraConfig { save_to_roll, size })
}

proptest! {
    #[test]
    fn transport_round_trip_is_identity(config in arb_config()) {
        prop_assert_eq!(
            CameraConfig::from_transport(&config.to_transport()),
            Some(config)
        );
    }

    #[test]
    fn set_get_cycle_returns_an_equal_value(config in arb_config()) {
        let memory = MemoryStore::<CameraConfig>::new();
        memory.set(&config);
        prop_assert_eq!(memory.get(), Some(config));

        let dictionary =
            PersistentStore::<CameraConfig, _>::new(Arc::new(MemoryBackend::new()));
        dictionary.set(&config);
        prop_assert_eq!(dictionary.get(), Some(config));
    }
}
