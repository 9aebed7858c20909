use std::collections::HashSet;

use tracing::{debug, instrument};

use super::app_descriptor::AppDescriptor;
use super::error::{QueryError, QueryResult};

/// Source of truth for installed apps and their enabled state.
pub trait AppCatalog {
    /// Every installed app, in the catalog's native order.
    fn list_all(&self) -> Vec<AppDescriptor>;

    fn list_enabled_ids(&self) -> HashSet<String>;

    fn get(&self, app_id: &str) -> Option<AppDescriptor>;
}

/// A catalog that can switch apps on and off.
pub trait AppManager: AppCatalog {
    fn enable_app(&mut self, app_id: &str) -> QueryResult<()>;

    fn disable_app(&mut self, app_id: &str) -> QueryResult<()>;
}

impl<T: AppCatalog + ?Sized> AppCatalog for &T {
    fn list_all(&self) -> Vec<AppDescriptor> {
        (**self).list_all()
    }

    fn list_enabled_ids(&self) -> HashSet<String> {
        (**self).list_enabled_ids()
    }

    fn get(&self, app_id: &str) -> Option<AppDescriptor> {
        (**self).get(app_id)
    }
}

/// Catalog held in process memory. Keeps insertion order; an app added twice
/// replaces the earlier entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryAppCatalog {
    apps: Vec<AppDescriptor>,
}

impl InMemoryAppCatalog {
    pub fn new() -> InMemoryAppCatalog {
        InMemoryAppCatalog { apps: Vec::new() }
    }

    pub fn from_apps(apps: impl IntoIterator<Item = AppDescriptor>) -> InMemoryAppCatalog {
        let mut catalog = InMemoryAppCatalog::new();
        for app in apps {
            catalog.add_app(app);
        }
        catalog
    }

    pub fn add_app(&mut self, app: AppDescriptor) {
        match self.apps.iter_mut().find(|existing| existing.id == app.id) {
            Some(existing) => *existing = app,
            None => self.apps.push(app),
        }
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    fn set_enabled(&mut self, app_id: &str, enabled: bool) -> QueryResult<()> {
        let app = self
            .apps
            .iter_mut()
            .find(|app| app.id == app_id)
            .ok_or_else(|| QueryError::NotFound(app_id.to_string()))?;
        if app.enabled != enabled {
            debug!(app_id, enabled, "Changing enabled state");
            app.enabled = enabled;
        }
        Ok(())
    }
}

impl FromIterator<AppDescriptor> for InMemoryAppCatalog {
    fn from_iter<I: IntoIterator<Item = AppDescriptor>>(iter: I) -> Self {
        InMemoryAppCatalog::from_apps(iter)
    }
}

impl AppCatalog for InMemoryAppCatalog {
    fn list_all(&self) -> Vec<AppDescriptor> {
        self.apps.clone()
    }

    fn list_enabled_ids(&self) -> HashSet<String> {
        self.apps
            .iter()
            .filter(|app| app.enabled)
            .map(|app| app.id.clone())
            .collect()
    }

    fn get(&self, app_id: &str) -> Option<AppDescriptor> {
        self.apps.iter().find(|app| app.id == app_id).cloned()
    }
}

impl AppManager for InMemoryAppCatalog {
    #[instrument(skip(self))]
    fn enable_app(&mut self, app_id: &str) -> QueryResult<()> {
        self.set_enabled(app_id, true)
    }

    #[instrument(skip(self))]
    fn disable_app(&mut self, app_id: &str) -> QueryResult<()> {
        self.set_enabled(app_id, false)
    }
}
