//! Process-wide registration of the concrete GeoArrow extension types.

use std::sync::{Mutex, OnceLock};

use indexmap::IndexMap;

use crate::datatype::GeoArrowType;
use crate::error::{GeoArrowError, GeoArrowResult};
use crate::type_spec::{linestring, multilinestring, multipoint, multipolygon, point, polygon, wkb, wkt};

/// The registration state of an [`ExtensionTypeRegistry`].
///
/// `Pending` marks a registration or unregistration that started but did
/// not complete; a registry left in this state never short-circuits a
/// subsequent lazy call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationState {
    /// No extension types are registered.
    #[default]
    Unregistered,

    /// A registration or unregistration is in progress or failed partway.
    Pending,

    /// All extension types are registered.
    Registered,
}

/// The extension names registered by [`ExtensionTypeRegistry`], in
/// registration order.
const CANONICAL_EXTENSION_NAMES: [&str; 8] = [
    "geoarrow.wkt",
    "geoarrow.wkb",
    "geoarrow.point",
    "geoarrow.linestring",
    "geoarrow.polygon",
    "geoarrow.multipoint",
    "geoarrow.multilinestring",
    "geoarrow.multipolygon",
];

fn canonical_extension_types() -> GeoArrowResult<Vec<GeoArrowType>> {
    [
        wkt(),
        wkb(),
        point(),
        linestring(),
        polygon(),
        multipoint(),
        multilinestring(),
        multipolygon(),
    ]
    .into_iter()
    .map(GeoArrowType::try_new)
    .collect()
}

/// A registry of concrete GeoArrow extension types keyed by extension name.
///
/// The registry tracks its own tri-state registration flag so that callers
/// can make registration idempotent (`lazy = true`) and so that a failed
/// partial registration is never mistaken for a completed one. It is not
/// synchronized internally; multi-threaded hosts must serialize access, for
/// example through the [`global_registry`] handle.
#[derive(Debug, Default)]
pub struct ExtensionTypeRegistry {
    state: RegistrationState,
    entries: IndexMap<&'static str, GeoArrowType>,
}

impl ExtensionTypeRegistry {
    /// Construct a new, unregistered registry.
    pub fn new() -> Self {
        Default::default()
    }

    /// The current [`RegistrationState`].
    pub fn state(&self) -> RegistrationState {
        self.state
    }

    /// Whether the canonical extension types are currently registered.
    pub fn is_registered(&self) -> bool {
        self.state == RegistrationState::Registered
    }

    /// Look up a registered extension type by its extension name.
    pub fn lookup(&self, extension_name: &str) -> Option<&GeoArrowType> {
        self.entries.get(extension_name)
    }

    /// The extension names currently registered, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Register the canonical GeoArrow extension types (the serialized WKT
    /// and WKB types plus the six single-geometry native types).
    ///
    /// With `lazy` set, this is a no-op when the registry is already
    /// registered. Individual name collisions are tolerated per type, but
    /// the whole operation fails, leaving the registry in the
    /// [`Pending`][RegistrationState::Pending] state, when not every
    /// canonical type could be registered.
    pub fn register_extension_types(&mut self, lazy: bool) -> GeoArrowResult<()> {
        if lazy && self.state == RegistrationState::Registered {
            return Ok(());
        }
        self.state = RegistrationState::Pending;

        let types = canonical_extension_types()?;
        let expected = types.len();
        let mut registered = 0;
        for geo_type in types {
            let name = geo_type.extension_name();
            if !self.entries.contains_key(name) {
                self.entries.insert(name, geo_type);
                registered += 1;
            }
        }

        if registered != expected {
            return Err(GeoArrowError::Registry(
                "Failed to register one or more extension types".to_string(),
            ));
        }
        self.state = RegistrationState::Registered;
        Ok(())
    }

    /// Unregister the canonical GeoArrow extension types.
    ///
    /// With `lazy` set, this is a no-op when the registry is already
    /// unregistered. Individual missing names are tolerated per type, but
    /// the whole operation fails, leaving the registry in the
    /// [`Pending`][RegistrationState::Pending] state, when not every
    /// canonical type could be unregistered.
    pub fn unregister_extension_types(&mut self, lazy: bool) -> GeoArrowResult<()> {
        if lazy && self.state == RegistrationState::Unregistered {
            return Ok(());
        }
        self.state = RegistrationState::Pending;

        let expected = CANONICAL_EXTENSION_NAMES.len();
        let mut unregistered = 0;
        for name in CANONICAL_EXTENSION_NAMES {
            if self.entries.shift_remove(name).is_some() {
                unregistered += 1;
            }
        }

        if unregistered != expected {
            return Err(GeoArrowError::Registry(
                "Failed to unregister one or more extension types".to_string(),
            ));
        }
        self.state = RegistrationState::Unregistered;
        Ok(())
    }

    /// Run `f` with the extension types registered, restoring the previous
    /// state afterwards.
    ///
    /// When the registry is already registered this is a plain call to `f`.
    pub fn with_registered<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> T,
    ) -> GeoArrowResult<T> {
        if self.is_registered() {
            return Ok(f(self));
        }
        self.register_extension_types(true)?;
        let result = f(self);
        self.unregister_extension_types(true)?;
        Ok(result)
    }

    /// Run `f` with the extension types unregistered, restoring the
    /// previous state afterwards.
    ///
    /// When the registry is already unregistered this is a plain call to
    /// `f`.
    pub fn with_unregistered<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> T,
    ) -> GeoArrowResult<T> {
        if self.state == RegistrationState::Unregistered {
            return Ok(f(self));
        }
        self.unregister_extension_types(true)?;
        let result = f(self);
        self.register_extension_types(true)?;
        Ok(result)
    }
}

/// The process-wide registry handle.
///
/// Registration mutates shared state, so call sites take the handle
/// explicitly and lock it for the duration of a registration,
/// unregistration, or lookup.
pub fn global_registry() -> &'static Mutex<ExtensionTypeRegistry> {
    static GLOBAL_REGISTRY: OnceLock<Mutex<ExtensionTypeRegistry>> = OnceLock::new();
    GLOBAL_REGISTRY.get_or_init(|| Mutex::new(ExtensionTypeRegistry::new()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn register_and_unregister() {
        let mut registry = ExtensionTypeRegistry::new();
        assert_eq!(registry.state(), RegistrationState::Unregistered);
        assert!(registry.lookup("geoarrow.point").is_none());

        registry.register_extension_types(true).unwrap();
        assert!(registry.is_registered());
        assert_eq!(registry.names().count(), 8);

        let point_type = registry.lookup("geoarrow.point").unwrap();
        assert_eq!(point_type.extension_name(), "geoarrow.point");

        registry.unregister_extension_types(true).unwrap();
        assert_eq!(registry.state(), RegistrationState::Unregistered);
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn lazy_register_is_idempotent() {
        let mut registry = ExtensionTypeRegistry::new();
        registry.register_extension_types(true).unwrap();
        registry.register_extension_types(true).unwrap();
        assert!(registry.is_registered());
    }

    #[test]
    fn eager_reregistration_fails_and_leaves_pending() {
        let mut registry = ExtensionTypeRegistry::new();
        registry.register_extension_types(true).unwrap();

        let err = registry.register_extension_types(false).unwrap_err();
        assert!(matches!(err, GeoArrowError::Registry(_)));
        assert_eq!(registry.state(), RegistrationState::Pending);

        // A pending registry does not short-circuit a lazy call.
        registry.register_extension_types(true).unwrap_err();
    }

    #[test]
    fn unregister_empty_fails() {
        let mut registry = ExtensionTypeRegistry::new();
        let err = registry.unregister_extension_types(false).unwrap_err();
        assert!(matches!(err, GeoArrowError::Registry(_)));
        assert_eq!(registry.state(), RegistrationState::Pending);
    }

    #[test]
    fn scoped_registration() {
        let mut registry = ExtensionTypeRegistry::new();
        let count = registry
            .with_registered(|registry| registry.names().count())
            .unwrap();
        assert_eq!(count, 8);
        assert_eq!(registry.state(), RegistrationState::Unregistered);

        registry.register_extension_types(true).unwrap();
        let count = registry
            .with_unregistered(|registry| registry.names().count())
            .unwrap();
        assert_eq!(count, 0);
        assert!(registry.is_registered());
    }

    #[test]
    fn global_handle() {
        let registry = global_registry();
        let mut guard = registry.lock().unwrap();
        guard.register_extension_types(true).unwrap();
        assert!(guard.is_registered());
        guard.unregister_extension_types(true).unwrap();
    }
}
