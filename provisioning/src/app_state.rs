use provisioning_core::apps::InMemoryAppCatalog;
use provisioning_core::authorization::GroupMembershipAuthorization;
use provisioning_core::controller::AppsController;
use tracing::info;

use crate::settings::config::Settings;

pub type Controller = AppsController<InMemoryAppCatalog, GroupMembershipAuthorization>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub controller: Controller,
}

impl AppState {
    pub fn from_settings(settings: Settings) -> AppState {
        let catalog = settings.catalog();
        let authorization = settings.authorization();
        info!(
            "Loaded {} apps, admin group is {}",
            catalog.len(),
            authorization.admin_group()
        );

        AppState {
            controller: AppsController::new(catalog, authorization),
            settings,
        }
    }
}
