//! Schema registry with version tracking
//!
//! Schemas are registered under a qualified name `<base>_v<N>`. The registry
//! remembers every version of a base name and which one is the latest, so
//! writers can always ask for "the current daily record schema" while
//! readers still find the exact version a file was written with.

use std::collections::HashMap;
use std::sync::RwLock;

use apache_avro::Schema;

use crate::SchemaError;

/// Registry metadata of one schema
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaMetadata {
    /// Base name (e.g. "daily_record")
    pub name: String,
    /// Version number parsed from the `_v<N>` suffix
    pub version: u32,
    /// Name the schema was registered under (e.g. "daily_record_v1")
    pub qualified_name: String,
    /// Whether writers should stop using this schema
    pub deprecated: bool,
    /// Replacement schema if deprecated
    pub replacement: Option<String>,
}

/// Thread-safe schema registry
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<String, (Schema, SchemaMetadata)>>,
    // base name -> qualified name of the highest version
    latest: RwLock<HashMap<String, (u32, String)>>,
}

/// Split `daily_record_v2` into `("daily_record", 2)`; no suffix means v1
fn split_version(name: &str) -> (&str, u32) {
    if let Some(pos) = name.rfind("_v") {
        if let Ok(version) = name[pos + 2..].parse::<u32>() {
            return (&name[..pos], version);
        }
    }
    (name, 1)
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Register a schema under a qualified name
    ///
    /// Registering the same name twice is an error; publish a new version
    /// instead.
    pub fn register(&self, name: &str, schema: Schema) -> Result<(), SchemaError> {
        let (base, version) = split_version(name);
        let metadata = SchemaMetadata {
            name: base.to_string(),
            version,
            qualified_name: name.to_string(),
            deprecated: false,
            replacement: None,
        };

        {
            let mut schemas = self.schemas.write().map_err(|_| SchemaError::LockPoisoned)?;
            if schemas.contains_key(name) {
                return Err(SchemaError::ParseError(format!("Schema {} already registered", name)));
            }
            schemas.insert(name.to_string(), (schema, metadata));
        }

        {
            let mut latest = self.latest.write().map_err(|_| SchemaError::LockPoisoned)?;
            let newer = latest.get(base).map_or(true, |(v, _)| version > *v);
            if newer {
                latest.insert(base.to_string(), (version, name.to_string()));
            }
        }

        log::debug!("Registered schema {} (v{})", name, version);
        Ok(())
    }

    /// Get a schema by qualified name
    pub fn get(&self, name: &str) -> Result<Schema, SchemaError> {
        let schemas = self.schemas.read().map_err(|_| SchemaError::LockPoisoned)?;
        schemas
            .get(name)
            .map(|(schema, _)| schema.clone())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Get the highest registered version of a base name
    pub fn get_latest(&self, base_name: &str) -> Result<Schema, SchemaError> {
        let qualified = {
            let latest = self.latest.read().map_err(|_| SchemaError::LockPoisoned)?;
            latest
                .get(base_name)
                .map(|(_, name)| name.clone())
                .ok_or_else(|| SchemaError::NotFound(format!("No versions of {}", base_name)))?
        };
        self.get(&qualified)
    }

    /// All registered versions of a base name, ascending
    pub fn get_versions(&self, base_name: &str) -> Result<Vec<u32>, SchemaError> {
        let schemas = self.schemas.read().map_err(|_| SchemaError::LockPoisoned)?;
        let mut versions: Vec<u32> = schemas
            .values()
            .filter(|(_, meta)| meta.name == base_name)
            .map(|(_, meta)| meta.version)
            .collect();
        versions.sort_unstable();
        Ok(versions)
    }

    /// Get schema metadata
    pub fn get_metadata(&self, name: &str) -> Result<SchemaMetadata, SchemaError> {
        let schemas = self.schemas.read().map_err(|_| SchemaError::LockPoisoned)?;
        schemas
            .get(name)
            .map(|(_, metadata)| metadata.clone())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Mark a schema as deprecated
    pub fn deprecate(&self, name: &str, replacement: Option<String>) -> Result<(), SchemaError> {
        let mut schemas = self.schemas.write().map_err(|_| SchemaError::LockPoisoned)?;
        let (_, metadata) = schemas
            .get_mut(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        log::warn!("Schema {} deprecated (replacement: {:?})", name, replacement);
        metadata.deprecated = true;
        metadata.replacement = replacement;
        Ok(())
    }

    /// Load the built-in SeaHeat schemas
    pub fn load_defaults(&self) -> Result<(), SchemaError> {
        use crate::schemas;

        self.register("daily_record_v1", schemas::daily_record_v1()?)?;
        self.register("trigger_event_v1", schemas::trigger_event_v1()?)?;

        Ok(())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global schema registry with the built-in schemas loaded
    pub static ref GLOBAL_REGISTRY: SchemaRegistry = {
        let registry = SchemaRegistry::new();
        if let Err(e) = registry.load_defaults() {
            log::error!("Failed to load built-in schemas: {}", e);
        }
        registry
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas;

    #[test]
    fn register_and_retrieve() {
        let registry = SchemaRegistry::new();
        let schema = schemas::daily_record_v1().unwrap();

        registry.register("test_schema_v1", schema.clone()).unwrap();

        let retrieved = registry.get("test_schema_v1").unwrap();
        assert_eq!(schema.name(), retrieved.name());
        assert!(matches!(registry.get("missing_v1"), Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let registry = SchemaRegistry::new();
        registry.register("daily_v1", schemas::daily_record_v1().unwrap()).unwrap();
        assert!(registry.register("daily_v1", schemas::daily_record_v1().unwrap()).is_err());
    }

    #[test]
    fn latest_version_wins_regardless_of_order() {
        let registry = SchemaRegistry::new();
        registry.register("events_v2", schemas::trigger_event_v1().unwrap()).unwrap();
        registry.register("events_v1", schemas::daily_record_v1().unwrap()).unwrap();

        assert_eq!(registry.get_versions("events").unwrap(), [1, 2]);
        let latest = registry.get_latest("events").unwrap();
        assert_eq!(latest.name().unwrap().name, "TriggerEvent");
    }

    #[test]
    fn unversioned_name_is_v1() {
        assert_eq!(split_version("daily_record_v12"), ("daily_record", 12));
        assert_eq!(split_version("daily_record"), ("daily_record", 1));
        assert_eq!(split_version("daily_vx"), ("daily_vx", 1));
    }

    #[test]
    fn deprecation() {
        let registry = SchemaRegistry::new();
        registry.load_defaults().unwrap();
        registry.deprecate("daily_record_v1", Some("daily_record_v2".to_string())).unwrap();

        let metadata = registry.get_metadata("daily_record_v1").unwrap();
        assert!(metadata.deprecated);
        assert_eq!(metadata.replacement.as_deref(), Some("daily_record_v2"));
    }

    #[test]
    fn global_registry_has_defaults() {
        assert!(GLOBAL_REGISTRY.get("daily_record_v1").is_ok());
        assert!(GLOBAL_REGISTRY.get_latest("trigger_event").is_ok());
    }
}
