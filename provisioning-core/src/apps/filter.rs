use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::QueryError;

/// Selects which part of the catalog an app listing returns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelector {
    #[default]
    All,
    Enabled,
    Disabled,
}

impl FilterSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterSelector::All => "all",
            FilterSelector::Enabled => "enabled",
            FilterSelector::Disabled => "disabled",
        }
    }

    /// An omitted filter selects every app. Matching is case-sensitive.
    pub fn parse(filter: Option<&str>) -> Result<FilterSelector, QueryError> {
        match filter {
            None => Ok(FilterSelector::All),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for FilterSelector {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterSelector::All),
            "enabled" => Ok(FilterSelector::Enabled),
            "disabled" => Ok(FilterSelector::Disabled),
            invalid => Err(QueryError::InvalidFilter(invalid.to_string())),
        }
    }
}

impl std::fmt::Display for FilterSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
