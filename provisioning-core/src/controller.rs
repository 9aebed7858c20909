use tracing::{info, instrument, warn};

use crate::apps::{
    AppCatalog, AppDescriptor, AppList, AppManager, AppRegistryQueryService, QueryError,
    QueryResult,
};
use crate::authorization::{AuthorizationContext, Principal};
use crate::ocs::{status, OcsResult};

const APP_NOT_FOUND_MESSAGE: &str = "The requested app was not found";

/// Admin-only entry points of the provisioning API for installed apps.
///
/// Checks the caller's capability, delegates to the
/// [`AppRegistryQueryService`] and wraps the outcome in an [`OcsResult`].
#[derive(Debug, Clone)]
pub struct AppsController<C, A> {
    service: AppRegistryQueryService<C>,
    authorization: A,
}

impl<C: AppCatalog, A: AuthorizationContext> AppsController<C, A> {
    pub fn new(catalog: C, authorization: A) -> Self {
        AppsController {
            service: AppRegistryQueryService::new(catalog),
            authorization,
        }
    }

    pub fn service(&self) -> &AppRegistryQueryService<C> {
        &self.service
    }

    pub fn authorization(&self) -> &A {
        &self.authorization
    }

    fn require_admin(&self, principal: Option<&Principal>) -> QueryResult<()> {
        match principal {
            Some(principal) if self.authorization.is_admin(principal) => Ok(()),
            Some(principal) => {
                warn!("User {} is not an administrator", principal);
                Err(QueryError::Unauthorized)
            }
            None => {
                warn!("Anonymous request rejected");
                Err(QueryError::Unauthorized)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn get_apps(
        &self,
        principal: Option<&Principal>,
        filter: Option<&str>,
    ) -> OcsResult<AppList> {
        self.require_admin(principal)
            .and_then(|_| self.service.list_apps(filter))
            .into()
    }

    #[instrument(skip(self))]
    pub fn get_app_info(
        &self,
        principal: Option<&Principal>,
        app_id: &str,
    ) -> OcsResult<AppDescriptor> {
        match self
            .require_admin(principal)
            .and_then(|_| self.service.get_app_info(app_id))
        {
            Ok(app) => OcsResult::success(app),
            Err(QueryError::NotFound(_)) => {
                OcsResult::failure_with_message(status::NOT_FOUND, APP_NOT_FOUND_MESSAGE)
            }
            Err(error) => OcsResult::failure(&error),
        }
    }
}

impl<C: AppManager, A: AuthorizationContext> AppsController<C, A> {
    #[instrument(skip(self))]
    pub fn enable_app(&mut self, principal: Option<&Principal>, app_id: &str) -> OcsResult<()> {
        let result = self
            .require_admin(principal)
            .and_then(|_| self.service.catalog_mut().enable_app(app_id));
        if result.is_ok() {
            info!("Enabled app {}", app_id);
        }
        result.into()
    }

    #[instrument(skip(self))]
    pub fn disable_app(&mut self, principal: Option<&Principal>, app_id: &str) -> OcsResult<()> {
        let result = self
            .require_admin(principal)
            .and_then(|_| self.service.catalog_mut().disable_app(app_id));
        if result.is_ok() {
            info!("Disabled app {}", app_id);
        }
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::InMemoryAppCatalog;
    use crate::authorization::GroupMembershipAuthorization;

    type Controller = AppsController<InMemoryAppCatalog, GroupMembershipAuthorization>;

    fn controller() -> Controller {
        let catalog = InMemoryAppCatalog::from_apps(vec![
            AppDescriptor::new("files", "Files", "1.5.2", true),
            AppDescriptor::new("calendar", "Calendar", "2.1.0", false),
            AppDescriptor::new("provisioning_api", "Provisioning API", "1.0.0", true),
        ]);
        let mut authorization = GroupMembershipAuthorization::default();
        authorization.add_user_to_group("admin", &Principal::new("admin-user"));
        AppsController::new(catalog, authorization)
    }

    fn admin() -> Principal {
        Principal::new("admin-user")
    }

    #[test]
    fn test_get_app_info() {
        let result = controller().get_app_info(Some(&admin()), "provisioning_api");
        assert!(result.succeeded());
        assert_eq!(result.data().unwrap().id, "provisioning_api");
    }

    #[test]
    fn test_get_app_info_on_bad_app_id() {
        let result = controller().get_app_info(Some(&admin()), "not_provisioning_api");
        assert!(!result.succeeded());
        assert_eq!(result.status_code(), status::NOT_FOUND);
        assert_eq!(result.message(), "The requested app was not found");
        assert_eq!(result.http_status(), 404);
    }

    #[test]
    fn test_get_apps_as_admin() {
        let controller = controller();
        let result = controller.get_apps(Some(&admin()), None);
        assert!(result.succeeded());
        assert_eq!(result.data().unwrap().len(), 3);
    }

    #[test]
    fn test_get_apps_matches_service_payload() {
        let controller = controller();
        for filter in [None, Some("enabled"), Some("disabled")] {
            let result = controller.get_apps(Some(&admin()), filter);
            let expected = controller.service().list_apps(filter).unwrap();
            assert_eq!(result.into_data(), Some(expected));
        }
    }

    #[test]
    fn test_get_apps_invalid_filter() {
        let result = controller().get_apps(Some(&admin()), Some("foo"));
        assert!(!result.succeeded());
        assert_eq!(result.status_code(), 101);
        assert!(result.data().is_none());
    }

    #[test]
    fn test_non_admin_is_rejected() {
        let controller = controller();
        let someone = Principal::new("someone");

        let result = controller.get_apps(Some(&someone), None);
        assert_eq!(result.status_code(), status::UNAUTHORISED);
        assert_eq!(result.http_status(), 401);

        let result = controller.get_app_info(Some(&someone), "files");
        assert_eq!(result.status_code(), status::UNAUTHORISED);
    }

    #[test]
    fn test_anonymous_is_rejected() {
        let result = controller().get_apps(None, Some("enabled"));
        assert!(!result.succeeded());
        assert_eq!(result.status_code(), status::UNAUTHORISED);
    }

    #[test]
    fn test_unauthorized_wins_over_invalid_filter() {
        let result = controller().get_apps(None, Some("foo"));
        assert_eq!(result.status_code(), status::UNAUTHORISED);
    }

    #[test]
    fn test_enable_and_disable_app() {
        let mut controller = controller();

        assert!(controller.enable_app(Some(&admin()), "calendar").succeeded());
        assert!(controller.disable_app(Some(&admin()), "files").succeeded());

        let enabled = controller.get_apps(Some(&admin()), Some("enabled"));
        assert_eq!(
            enabled.data().unwrap().ids(),
            vec!["calendar", "provisioning_api"]
        );
    }

    #[test]
    fn test_enable_unknown_app() {
        let result = controller().enable_app(Some(&admin()), "unknown");
        assert_eq!(result.status_code(), status::NOT_FOUND);
    }

    #[test]
    fn test_non_admin_cannot_disable() {
        let mut controller = controller();
        let result = controller.disable_app(Some(&Principal::new("someone")), "files");
        assert_eq!(result.status_code(), status::UNAUTHORISED);
        assert!(controller.service().get_app_info("files").unwrap().enabled);
    }
}
