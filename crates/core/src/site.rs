//! Site definition loading and validation.
//!
//! The site definition is a YAML file describing what the host framework
//! exposes to the console: the content-type catalog, the service registry,
//! the optional content store file and message overrides.

use std::collections::{HashMap, HashSet};
use std::fs::File;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::Error::{EmptyId, IdWithSpace, NonUniqueServiceId};
use crate::error::{Error, Result};
use crate::inspector::ServiceDefinition;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SiteDefinition {
    #[serde(default)]
    pub content_types: IndexMap<String, String>,
    pub content_store: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceDefinition>,
    pub messages: Option<HashMap<String, String>>,
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(EmptyId);
    }

    if id.contains(char::is_whitespace) {
        return Err(IdWithSpace(id.to_string()));
    }

    Ok(())
}

fn validate_site(site: &SiteDefinition) -> Result<()> {
    for id in site.content_types.keys() {
        validate_id(id)?;
    }

    let mut ids = HashSet::new();
    for service in &site.services {
        validate_id(&service.id)?;

        if !ids.insert(service.id.as_str()) {
            return Err(NonUniqueServiceId(service.id.clone()));
        }
    }

    Ok(())
}

/// Parses and validates a site definition from YAML text.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or an ID is invalid or duplicated.
pub fn parse_site_definition(yaml: &str, path: &str) -> Result<SiteDefinition> {
    let site: SiteDefinition = serde_yaml::from_str(yaml).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "site definition".to_string(),
            path.to_string(),
            e,
        )
    })?;

    validate_site(&site)?;

    Ok(site)
}

/// Loads and validates the site definition file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - A content-type or service ID is empty or contains whitespace
/// - Two services share an ID
///
/// # Examples
///
/// ```no_run
/// use cms_console_core::site::get_site_definition;
///
/// let site = get_site_definition("/etc/cms-console/site.yml")?;
/// println!("{} content types", site.content_types.len());
/// # Ok::<(), cms_console_core::error::Error>(())
/// ```
pub fn get_site_definition(site_path: &str) -> Result<SiteDefinition> {
    let reader = get_reader("site definition", site_path)?;

    let site: SiteDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "site definition".to_string(),
            site_path.to_string(),
            e,
        )
    })?;

    validate_site(&site)?;

    debug!(
        "Loaded site definition with {} content types and {} services",
        site.content_types.len(),
        site.services.len()
    );

    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_id_valid() {
        assert!(validate_id("article").is_ok());
        assert!(validate_id("logger.factory").is_ok());
        assert!(validate_id("basic_page").is_ok());
    }

    #[test]
    fn test_validate_id_empty() {
        assert!(matches!(validate_id(""), Err(EmptyId)));
    }

    #[test]
    fn test_validate_id_with_space() {
        assert!(matches!(validate_id("basic page"), Err(IdWithSpace(_))));
    }

    #[test]
    fn test_parse_site_definition_minimal() {
        let site = parse_site_definition("content_types:\n  article: Article\n", "inline").unwrap();
        assert_eq!(site.content_types.len(), 1);
        assert!(site.services.is_empty());
        assert!(site.content_store.is_none());
        assert!(site.messages.is_none());
    }

    #[test]
    fn test_parse_site_definition_duplicate_service() {
        let yaml = r#"
services:
  - id: "logger.factory"
    class: "LoggerChannelFactory"
  - id: "logger.factory"
    class: "OtherFactory"
"#;
        let result = parse_site_definition(yaml, "inline");
        assert!(matches!(result, Err(NonUniqueServiceId(id)) if id == "logger.factory"));
    }

    #[test]
    fn test_get_site_definition_valid_yaml() {
        let yaml_content = r#"
content_types:
  article: "Article"
  page: "Basic page"
content_store: "/tmp/nodes.yml"
services:
  - id: "logger.factory"
    class: "Drupal\\Core\\Logger\\LoggerChannelFactory"
    interfaces: ["LoggerChannelFactoryInterface"]
    methods: ["get"]
messages:
  commands.create.nodes.messages.title: "Titre"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{yaml_content}").unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let site = get_site_definition(temp_path).unwrap();
        assert_eq!(
            site.content_types.keys().collect::<Vec<_>>(),
            vec!["article", "page"]
        );
        assert_eq!(site.content_store, Some("/tmp/nodes.yml".to_string()));
        assert_eq!(site.services.len(), 1);
        assert_eq!(site.services[0].interfaces, vec!["LoggerChannelFactoryInterface"]);
        assert!(site.services[0].parent.is_none());
        assert!(site.messages.is_some());
    }

    #[test]
    fn test_get_site_definition_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "content_types: [").unwrap();
        let temp_path = temp_file.path().to_str().unwrap();

        let result = get_site_definition(temp_path);
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_site_definition_file_not_found() {
        let result = get_site_definition("/this/path/does/not/exist.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
