use serde::{Deserialize, Serialize};

/// Metadata record for one installed app.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppDescriptor {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
    /// Bundled with the platform rather than installed separately.
    #[serde(default)]
    pub shipped: bool,
}

impl AppDescriptor {
    pub fn new(id: &str, name: &str, version: &str, enabled: bool) -> Self {
        AppDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            enabled,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppList {
    pub apps: Vec<AppDescriptor>,
}

impl AppList {
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.apps.iter().map(|app| app.id.as_str()).collect()
    }
}

impl From<Vec<AppDescriptor>> for AppList {
    fn from(apps: Vec<AppDescriptor>) -> Self {
        AppList { apps }
    }
}
