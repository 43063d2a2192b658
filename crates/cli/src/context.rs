//! Everything a command needs from the site definition.

use cms_console_core::catalog::ContentTypeCatalog;
use cms_console_core::config;
use cms_console_core::content_store::ContentStore;
use cms_console_core::error::Result;
use cms_console_core::inspector::RegistryInspector;
use cms_console_core::messages::Messages;
use cms_console_core::site::{self, SiteDefinition};
use log::debug;

pub struct SiteContext {
    pub site: SiteDefinition,
    pub messages: Messages,
}

impl SiteContext {
    /// Loads the site definition from `site_path`, or the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid YAML, or
    /// fails validation.
    pub fn load(site_path: Option<&str>) -> Result<Self> {
        let site_path = config::get_site_path(site_path);
        debug!("Site path: `{}`", site_path);

        let site = site::get_site_definition(&site_path)?;
        Ok(Self::from_site(site))
    }

    #[must_use]
    pub fn from_site(site: SiteDefinition) -> Self {
        let messages = Messages::with_overrides(site.messages.as_ref());
        Self { site, messages }
    }

    #[must_use]
    pub fn catalog(&self) -> ContentTypeCatalog {
        ContentTypeCatalog::new(self.site.content_types.clone())
    }

    #[must_use]
    pub fn inspector(&self) -> RegistryInspector {
        RegistryInspector::new(&self.site.services)
    }

    /// Opens the configured content store, or an in-memory one when the site
    /// names no store file.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file exists but cannot be read.
    pub fn content_store(&self) -> Result<ContentStore> {
        let content_types = self.site.content_types.keys().cloned();

        match config::expand_path(self.site.content_store.as_deref()) {
            Some(path) => {
                debug!("Content store: `{}`", path);
                ContentStore::open(content_types, &path)
            }
            None => Ok(ContentStore::in_memory(content_types)),
        }
    }
}
