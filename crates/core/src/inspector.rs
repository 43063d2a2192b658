//! Container inspection.
//!
//! The service registry itself belongs to the host framework. This module only
//! describes what the console needs from it: a listing of registered services
//! and, for one service, the data a reflection facility would report
//! (class, interfaces, parent class, fields and methods).

use indexmap::{IndexMap, IndexSet};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::messages::{keys, Messages};

/// A service as registered in the site definition file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ServiceDefinition {
    pub id: String,
    pub class: String,
    #[serde(default)]
    pub interfaces: Vec<String>,
    pub parent: Option<String>,
    #[serde(default)]
    pub fields: IndexMap<String, Value>,
    #[serde(default)]
    pub methods: Vec<String>,
}

/// Reflection capability of a registered service.
pub trait Inspectable {
    fn class_name(&self) -> &str;
    fn implemented_interfaces(&self) -> IndexSet<String>;
    fn parent_type(&self) -> Option<&str>;
    fn fields(&self) -> IndexMap<String, Value>;
    fn methods(&self) -> Vec<String>;
}

impl Inspectable for ServiceDefinition {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn implemented_interfaces(&self) -> IndexSet<String> {
        self.interfaces.iter().cloned().collect()
    }

    fn parent_type(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    fn fields(&self) -> IndexMap<String, Value> {
        self.fields.clone()
    }

    fn methods(&self) -> Vec<String> {
        self.methods.clone()
    }
}

/// One line of the service listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub id: String,
    pub class_name: String,
}

impl ServiceSummary {
    #[must_use]
    pub fn as_row(&self) -> Vec<String> {
        vec![self.id.clone(), self.class_name.clone()]
    }
}

/// Everything known about a single service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDescriptor {
    pub id: String,
    pub class_name: String,
    pub implemented_interfaces: IndexSet<String>,
    pub parent_class: Option<String>,
    pub fields: IndexMap<String, Value>,
    pub methods: Vec<String>,
}

impl ServiceDescriptor {
    pub fn from_inspectable<T: Inspectable + ?Sized>(id: &str, service: &T) -> Self {
        Self {
            id: id.to_string(),
            class_name: service.class_name().to_string(),
            implemented_interfaces: service.implemented_interfaces(),
            parent_class: service.parent_type().map(ToString::to_string),
            fields: service.fields(),
            methods: service.methods(),
        }
    }

    /// Builds the label/value rows shown by `container:debug <service>`.
    ///
    /// Interfaces are always listed; parent class, variables and methods only
    /// when the service has them. Collections are rendered as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection cannot be serialized to YAML.
    pub fn detail_rows(&self, messages: &Messages) -> Result<Vec<Vec<String>>> {
        let mut rows = vec![
            vec![messages.trans(keys::DEBUG_SERVICE), self.id.clone()],
            vec![messages.trans(keys::DEBUG_CLASS), self.class_name.clone()],
            vec![
                messages.trans(keys::DEBUG_INTERFACE),
                dump_yaml(&self.implemented_interfaces)?,
            ],
        ];

        if let Some(parent) = &self.parent_class {
            rows.push(vec![messages.trans(keys::DEBUG_PARENT), parent.clone()]);
        }

        if !self.fields.is_empty() {
            rows.push(vec![
                messages.trans(keys::DEBUG_VARIABLES),
                dump_yaml(&self.fields)?,
            ]);
        }

        if !self.methods.is_empty() {
            rows.push(vec![
                messages.trans(keys::DEBUG_METHODS),
                dump_yaml(&self.methods)?,
            ]);
        }

        Ok(rows)
    }
}

fn dump_yaml<T: Serialize>(value: &T) -> Result<String> {
    let dumped = serde_yaml::to_string(value).map_err(Error::Dump)?;
    Ok(dumped.trim_end().to_string())
}

/// Read access to a service registry.
pub trait Inspector {
    /// Lists every registered service in registry order.
    fn list_services(&self) -> Vec<ServiceSummary>;

    /// Describes a single service.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no service is registered under `service_id`.
    fn describe(&self, service_id: &str) -> Result<ServiceDescriptor>;
}

/// Inspector over the services declared in the site definition.
#[derive(Debug, Clone, Default)]
pub struct RegistryInspector {
    services: IndexMap<String, ServiceDefinition>,
}

impl RegistryInspector {
    #[must_use]
    pub fn new(definitions: &[ServiceDefinition]) -> Self {
        let services = definitions
            .iter()
            .map(|definition| (definition.id.clone(), definition.clone()))
            .collect();

        Self { services }
    }
}

impl Inspector for RegistryInspector {
    fn list_services(&self) -> Vec<ServiceSummary> {
        self.services
            .values()
            .map(|service| ServiceSummary {
                id: service.id.clone(),
                class_name: service.class_name().to_string(),
            })
            .collect()
    }

    fn describe(&self, service_id: &str) -> Result<ServiceDescriptor> {
        debug!("Describing service `{service_id}`");

        self.services
            .get(service_id)
            .map(|service| ServiceDescriptor::from_inspectable(service_id, service))
            .ok_or_else(|| Error::NotFound(service_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger_factory() -> ServiceDefinition {
        let mut fields = IndexMap::new();
        fields.insert("channels".to_string(), Value::String("default".to_string()));

        ServiceDefinition {
            id: "logger.factory".to_string(),
            class: "Drupal\\Core\\Logger\\LoggerChannelFactory".to_string(),
            interfaces: vec![
                "Drupal\\Core\\Logger\\LoggerChannelFactoryInterface".to_string(),
                "Symfony\\Component\\DependencyInjection\\ContainerAwareInterface".to_string(),
            ],
            parent: None,
            fields,
            methods: vec!["get".to_string(), "addLogger".to_string()],
        }
    }

    fn bare_service() -> ServiceDefinition {
        ServiceDefinition {
            id: "cache.backend.null".to_string(),
            class: "Drupal\\Core\\Cache\\NullBackendFactory".to_string(),
            interfaces: vec![],
            parent: Some("Drupal\\Core\\Cache\\CacheFactory".to_string()),
            fields: IndexMap::new(),
            methods: vec![],
        }
    }

    #[test]
    fn test_list_services_keeps_registry_order() {
        let inspector = RegistryInspector::new(&[logger_factory(), bare_service()]);
        let services = inspector.list_services();

        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id, "logger.factory");
        assert_eq!(services[1].id, "cache.backend.null");
        assert_eq!(
            services[1].as_row(),
            vec![
                "cache.backend.null".to_string(),
                "Drupal\\Core\\Cache\\NullBackendFactory".to_string()
            ]
        );
    }

    #[test]
    fn test_describe_unknown_service() {
        let inspector = RegistryInspector::new(&[logger_factory()]);
        let result = inspector.describe("missing.service");
        assert!(matches!(result, Err(Error::NotFound(id)) if id == "missing.service"));
    }

    #[test]
    fn test_describe_known_service() {
        let inspector = RegistryInspector::new(&[logger_factory()]);
        let descriptor = inspector.describe("logger.factory").unwrap();

        assert_eq!(
            descriptor.class_name,
            "Drupal\\Core\\Logger\\LoggerChannelFactory"
        );
        assert_eq!(descriptor.implemented_interfaces.len(), 2);
        assert!(descriptor.parent_class.is_none());
        assert_eq!(descriptor.methods, vec!["get", "addLogger"]);
    }

    #[test]
    fn test_detail_rows_full_service() {
        let messages = Messages::default();
        let descriptor = ServiceDescriptor::from_inspectable("logger.factory", &logger_factory());
        let rows = descriptor.detail_rows(&messages).unwrap();

        // service, class, interfaces, variables, methods (no parent)
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0][1], "logger.factory");
        assert!(rows[2][1].contains("LoggerChannelFactoryInterface"));
        assert!(rows[3][1].contains("channels: default"));
        assert!(rows[4][1].contains("- get"));
        assert!(rows[4][1].contains("- addLogger"));
    }

    #[test]
    fn test_detail_rows_bare_service() {
        let messages = Messages::default();
        let descriptor =
            ServiceDescriptor::from_inspectable("cache.backend.null", &bare_service());
        let rows = descriptor.detail_rows(&messages).unwrap();

        // service, class, interfaces, parent
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2][1], "[]");
        assert_eq!(rows[3][1], "Drupal\\Core\\Cache\\CacheFactory");
    }
}
