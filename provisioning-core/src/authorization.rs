use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

pub const DEFAULT_ADMIN_GROUP: &str = "admin";

/// The user on whose behalf a request is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    pub fn new(user_id: &str) -> Self {
        Principal(user_id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(user_id: &str) -> Self {
        Principal::new(user_id)
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves whether a principal holds administrative privilege.
pub trait AuthorizationContext {
    fn is_admin(&self, principal: &Principal) -> bool;
}

impl<T: AuthorizationContext + ?Sized> AuthorizationContext for &T {
    fn is_admin(&self, principal: &Principal) -> bool {
        (**self).is_admin(principal)
    }
}

/// Admin privilege derived from membership in a single configured group.
#[derive(Debug, Clone)]
pub struct GroupMembershipAuthorization {
    admin_group: String,
    groups: HashMap<String, HashSet<String>>,
}

impl Default for GroupMembershipAuthorization {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_GROUP)
    }
}

impl GroupMembershipAuthorization {
    pub fn new(admin_group: &str) -> Self {
        GroupMembershipAuthorization {
            admin_group: admin_group.to_string(),
            groups: HashMap::new(),
        }
    }

    pub fn with_groups(admin_group: &str, groups: &HashMap<String, Vec<String>>) -> Self {
        let mut authorization = Self::new(admin_group);
        for (group, members) in groups {
            for member in members {
                authorization.add_user_to_group(group, &Principal::new(member));
            }
        }
        authorization
    }

    pub fn admin_group(&self) -> &str {
        &self.admin_group
    }

    pub fn add_user_to_group(&mut self, group: &str, principal: &Principal) {
        self.groups
            .entry(group.to_string())
            .or_default()
            .insert(principal.as_str().to_string());
    }

    pub fn is_in_group(&self, group: &str, principal: &Principal) -> bool {
        self.groups
            .get(group)
            .is_some_and(|members| members.contains(principal.as_str()))
    }
}

impl AuthorizationContext for GroupMembershipAuthorization {
    fn is_admin(&self, principal: &Principal) -> bool {
        self.is_in_group(&self.admin_group, principal)
    }
}
