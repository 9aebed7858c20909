use config::{Config, ConfigError, Environment, File};
use provisioning_core::apps::{AppDescriptor, InMemoryAppCatalog};
use provisioning_core::authorization::{GroupMembershipAuthorization, DEFAULT_ADMIN_GROUP};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashMap},
    env,
    path::Path,
};

use crate::utils::serde::deserialize_version;

/// One installed app as declared in the configuration. The app id is the map key.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[readonly::make]
pub struct AppEntry {
    pub name: String,
    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub licence: Option<String>,
    #[serde(default)]
    pub shipped: bool,
}

impl AppEntry {
    pub fn to_descriptor(&self, app_id: &str) -> AppDescriptor {
        AppDescriptor {
            id: app_id.to_string(),
            name: self.name.clone(),
            version: self.version.clone(),
            enabled: self.enabled,
            summary: self.summary.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            licence: self.licence.clone(),
            shipped: self.shipped,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[allow(unused)]
pub struct Settings {
    pub debug: bool,
    pub admin_group: String,
    #[serde(default)]
    pub apps: BTreeMap<String, AppEntry>,
    #[serde(default)]
    pub groups: HashMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            debug: false,
            admin_group: DEFAULT_ADMIN_GROUP.to_string(),
            apps: BTreeMap::new(),
            groups: HashMap::new(),
        }
    }
}

impl Settings {
    pub fn get_environment() -> Environment {
        Environment::default()
            .prefix("PROVISIONING")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("PROVISIONING_RUN_MODE").unwrap_or_else(|_| "development".into());
        let config_dir =
            env::var("PROVISIONING_CONFIG_DIR").unwrap_or_else(|_| "config".into());
        Self::load(Path::new(&config_dir), &run_mode)
    }

    /// Layer `default`, every file in `apps/`, `{run_mode}`, `local` and the
    /// environment, in that order.
    pub fn load(config_dir: &Path, run_mode: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("debug", false)?
            .set_default("admin_group", DEFAULT_ADMIN_GROUP)?
            .add_source(File::from(config_dir.join("default")));

        // Each file in config/apps seeds part of the catalog.
        if let Ok(entries) = std::fs::read_dir(config_dir.join("apps")) {
            let mut paths: Vec<_> = entries
                .into_iter()
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.extension()
                        .is_some_and(|ext| ext == "yaml" || ext == "yml")
                })
                .collect();
            paths.sort();
            for path in paths {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder
            .add_source(File::from(config_dir.join(run_mode)).required(false))
            .add_source(File::from(config_dir.join("local")).required(false))
            .add_source(Self::get_environment());

        let settings: Settings = builder.build()?.try_deserialize()?;
        if settings.admin_group.trim().is_empty() {
            return Err(ConfigError::Message("admin_group must not be empty".into()));
        }
        Ok(settings)
    }

    /// Catalog seeded from the configured apps, ordered by app id.
    pub fn catalog(&self) -> InMemoryAppCatalog {
        self.apps
            .iter()
            .map(|(app_id, entry)| entry.to_descriptor(app_id))
            .collect()
    }

    pub fn authorization(&self) -> GroupMembershipAuthorization {
        GroupMembershipAuthorization::with_groups(&self.admin_group, &self.groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provisioning_core::apps::AppCatalog;
    use provisioning_core::authorization::{AuthorizationContext, Principal};

    fn settings_from_yaml(yaml: &str) -> Settings {
        Config::builder()
            .set_default("debug", false)
            .unwrap()
            .set_default("admin_group", DEFAULT_ADMIN_GROUP)
            .unwrap()
            .add_source(File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_catalog_is_ordered_by_app_id() {
        let settings = settings_from_yaml(
            r#"
apps:
  files:
    name: Files
    version: 1.5.2
    enabled: true
  calendar:
    name: Calendar
    version: 2.1.0
"#,
        );

        let catalog = settings.catalog();
        let ids: Vec<String> = catalog.list_all().into_iter().map(|app| app.id).collect();
        assert_eq!(ids, vec!["calendar", "files"]);
        assert!(catalog.get("files").unwrap().enabled);
        assert!(!catalog.get("calendar").unwrap().enabled);
    }

    #[test]
    fn test_authorization_uses_admin_group() {
        let settings = settings_from_yaml(
            r#"
admin_group: operators
groups:
  operators: [alice]
  admin: [bob]
"#,
        );

        let authorization = settings.authorization();
        assert!(authorization.is_admin(&Principal::new("alice")));
        assert!(!authorization.is_admin(&Principal::new("bob")));
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from_yaml("{}");
        assert!(!settings.debug);
        assert_eq!(settings.admin_group, "admin");
        assert!(settings.apps.is_empty());
        assert!(settings.groups.is_empty());
    }

    #[test]
    fn test_app_entry_keeps_metadata() {
        let settings = settings_from_yaml(
            r#"
apps:
  provisioning_api:
    name: Provisioning API
    version: 1.0.0
    enabled: true
    shipped: true
    summary: User and app provisioning
    licence: AGPL
"#,
        );

        let app = settings.apps["provisioning_api"].to_descriptor("provisioning_api");
        assert_eq!(app.id, "provisioning_api");
        assert_eq!(app.summary.as_deref(), Some("User and app provisioning"));
        assert_eq!(app.licence.as_deref(), Some("AGPL"));
        assert!(app.shipped);
        assert_eq!(app.author, None);
    }
}
