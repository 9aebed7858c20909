use tracing::{debug, instrument};

use super::app_descriptor::{AppDescriptor, AppList};
use super::catalog::AppCatalog;
use super::error::{QueryError, QueryResult};
use super::filter::FilterSelector;

/// Read-only queries over an injected [`AppCatalog`].
///
/// Privilege checks are the caller's job; see
/// [`AppsController`](crate::controller::AppsController).
#[derive(Debug, Clone)]
pub struct AppRegistryQueryService<C> {
    catalog: C,
}

impl<C: AppCatalog> AppRegistryQueryService<C> {
    pub fn new(catalog: C) -> Self {
        AppRegistryQueryService { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    #[instrument(skip(self))]
    pub fn get_app_info(&self, app_id: &str) -> QueryResult<AppDescriptor> {
        self.catalog
            .get(app_id)
            .ok_or_else(|| QueryError::NotFound(app_id.to_string()))
    }

    /// List apps matching `filter`, in catalog order.
    ///
    /// The disabled set is computed as all apps minus the enabled ids.
    #[instrument(skip(self))]
    pub fn list_apps(&self, filter: Option<&str>) -> QueryResult<AppList> {
        let selector = FilterSelector::parse(filter)?;
        let all = self.catalog.list_all();

        let apps: Vec<AppDescriptor> = match selector {
            FilterSelector::All => all,
            FilterSelector::Enabled => {
                let enabled = self.catalog.list_enabled_ids();
                all.into_iter()
                    .filter(|app| enabled.contains(&app.id))
                    .collect()
            }
            FilterSelector::Disabled => {
                let enabled = self.catalog.list_enabled_ids();
                all.into_iter()
                    .filter(|app| !enabled.contains(&app.id))
                    .collect()
            }
        };

        debug!(filter = %selector, count = apps.len(), "Listed apps");
        Ok(AppList { apps })
    }
}
