//! Enum Type Registry
//!
//! Memoizes one registered enum type per field key, so every model that
//! references `status` shares a single `StatusEnum` handle. Handles live as
//! long as the registry; there is no eviction.

use std::collections::HashMap;

use crate::config::NamingConfig;
use crate::error::Result;
use crate::host::{EnumTypeRef, TypeHost};
use crate::model::ModelOptions;
use crate::naming::to_pascal_case;

use super::ResolvedTypeInfo;

/// Field key -> registered enum
#[derive(Debug, Default)]
pub struct EnumRegistry {
    entries: HashMap<String, EnumTypeRef>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the enum registered for `key`, registering it with the host on
    /// first encounter.
    ///
    /// A cached entry is reused only while its members (and any explicit name
    /// in `options`) still match. Otherwise registration is attempted again
    /// and a name collision surfaces as the host's
    /// [`DuplicateEnumRegistration`](crate::CompileError::DuplicateEnumRegistration).
    pub fn build_or_get<H: TypeHost + ?Sized>(
        &mut self,
        key: &str,
        info: &ResolvedTypeInfo,
        options: &ModelOptions,
        naming: &NamingConfig,
        host: &mut H,
    ) -> Result<EnumTypeRef> {
        let values = info.enum_values.as_deref().unwrap_or_default();
        let name = match options.enum_names.get(key) {
            Some(explicit) => explicit.clone(),
            None => format!("{}{}", to_pascal_case(key, &naming.acronyms), naming.enum_suffix),
        };

        if let Some(existing) = self.entries.get(key) {
            let same_members = existing.values().eq(values.iter().map(String::as_str));
            if same_members && existing.name == name {
                tracing::trace!(%key, name = %existing.name, "reusing enum type");
                return Ok(existing.clone());
            }
        }

        let members = values.iter().map(|v| (v.clone(), v.clone())).collect();
        let handle = host.register_enum(&name, members)?;
        self.entries.insert(key.to_string(), handle.clone());
        Ok(handle)
    }

    pub fn get(&self, key: &str) -> Option<&EnumTypeRef> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TypeCatalog;
    use crate::model::OutputType;
    use crate::CompileError;
    use std::sync::Arc;

    fn enum_info(values: &[&str]) -> ResolvedTypeInfo {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        ResolvedTypeInfo {
            ty: OutputType::PendingEnum(values.clone()),
            is_nullable: false,
            is_optional: false,
            is_enum: true,
            is_of_array: false,
            is_item_nullable: false,
            is_item_optional: false,
            enum_values: Some(values),
        }
    }

    #[test]
    fn test_same_key_returns_same_handle() {
        let mut registry = EnumRegistry::new();
        let mut host = TypeCatalog::new();
        let naming = NamingConfig::default();
        let opts = ModelOptions::default();
        let info = enum_info(&["A", "B"]);

        let first = registry.build_or_get("status", &info, &opts, &naming, &mut host).unwrap();
        let second = registry.build_or_get("status", &info, &opts, &naming, &mut host).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name, "StatusEnum");
        assert_eq!(host.enums().count(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_conflicting_members_fail() {
        let mut registry = EnumRegistry::new();
        let mut host = TypeCatalog::new();
        let naming = NamingConfig::default();
        let opts = ModelOptions::default();

        registry
            .build_or_get("status", &enum_info(&["A", "B"]), &opts, &naming, &mut host)
            .unwrap();
        let err = registry
            .build_or_get("status", &enum_info(&["X", "Y"]), &opts, &naming, &mut host)
            .unwrap_err();

        assert!(matches!(err, CompileError::DuplicateEnumRegistration { name } if name == "StatusEnum"));
        // the original registration is still the cached one
        assert_eq!(registry.get("status").unwrap().values().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_explicit_name_avoids_collision() {
        let mut registry = EnumRegistry::new();
        let mut host = TypeCatalog::new();
        let naming = NamingConfig::default();

        registry
            .build_or_get("status", &enum_info(&["A", "B"]), &ModelOptions::default(), &naming, &mut host)
            .unwrap();
        let opts = ModelOptions::default().with_enum_name("status", "ShipmentStatus");
        let handle = registry
            .build_or_get("status", &enum_info(&["X", "Y"]), &opts, &naming, &mut host)
            .unwrap();

        assert_eq!(handle.name, "ShipmentStatus");
        assert_eq!(host.enums().count(), 2);
    }

    #[test]
    fn test_generated_name_uses_naming_config() {
        let mut registry = EnumRegistry::new();
        let mut host = TypeCatalog::new();
        let naming = NamingConfig {
            enum_suffix: "Kind".to_string(),
            ..NamingConfig::default()
        };

        let handle = registry
            .build_or_get("payment_id_type", &enum_info(&["card"]), &ModelOptions::default(), &naming, &mut host)
            .unwrap();
        assert_eq!(handle.name, "PaymentIDTypeKind");
    }
}
