//! Normalization and invariant checks that freeze a [`GeneratorConfig`]

use super::model::GeneratorConfig;
use crate::error::ConfigError;
use crate::naming;
use std::collections::HashSet;
use std::ops::Deref;

pub(crate) const MODULE_RULE: &str =
    "must start with a letter and contain only letters, numbers, underscores, and dashes";
pub(crate) const JS_IDENT_RULE: &str =
    "must be a valid JavaScript identifier (camelCase recommended)";
const RESERVED_KEY_RULE: &str = "is reserved for the generated row id";
const RESERVED_FILTER_RULE: &str = "is reserved by the generated Filters interface";

/// Fields the generated `Filters` interface always declares
const RESERVED_FILTER_KEYS: &[&str] = &["search", "page", "pageSize", "sortBy", "sortOrder"];

/// A configuration that passed validation
///
/// Immutable: the only way to obtain one is [`GeneratorConfig::validate`],
/// and it only hands out shared references to the inner value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidConfig(GeneratorConfig);

impl Deref for ValidConfig {
    type Target = GeneratorConfig;

    fn deref(&self) -> &GeneratorConfig {
        &self.0
    }
}

impl GeneratorConfig {
    /// Apply defaults, derive column sort flags, and check every invariant
    pub fn validate(mut self) -> Result<ValidConfig, ConfigError> {
        self.page_name = self.page_name.trim().to_string();
        if self.page_name.is_empty() {
            return Err(ConfigError::Empty { field: "page name" });
        }

        self.route_path = self.route_path.trim().trim_matches('/').to_string();
        validate_route_path(&self.route_path)?;

        if self.module_name.trim().is_empty() {
            self.module_name = self.route_path.replace('/', "-");
        }
        check_identifier("module name", &self.module_name, is_module_name, MODULE_RULE)?;

        if self.entity_name.trim().is_empty() {
            self.entity_name = naming::to_pascal_case(&self.page_name);
        }
        check_identifier("entity name", &self.entity_name, is_js_identifier, JS_IDENT_RULE)?;

        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }

        let mut keys = HashSet::new();
        for column in &self.columns {
            check_identifier("column key", &column.key, is_js_identifier, JS_IDENT_RULE)?;
            if column.key == "id" {
                return Err(ConfigError::Identifier {
                    field: "column key",
                    value: column.key.clone(),
                    rule: RESERVED_KEY_RULE,
                });
            }
            if column.label.trim().is_empty() {
                return Err(ConfigError::Empty {
                    field: "column label",
                });
            }
            if !keys.insert(column.key.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.key.clone()));
            }
        }

        for (i, filter) in self.filters.iter().enumerate() {
            let earlier = self.filters[..i].iter().map(|f| f.key.as_str());
            check_filter_key(&filter.key, earlier)?;
            if filter.label.trim().is_empty() {
                return Err(ConfigError::Empty {
                    field: "filter label",
                });
            }
        }

        if let Some(unknown) = self
            .sortable_columns
            .iter()
            .find(|key| !keys.contains(key.as_str()))
        {
            return Err(ConfigError::UnknownSortableColumn(unknown.clone()));
        }

        let sortable: HashSet<String> = self.sortable_columns.iter().cloned().collect();
        for column in &mut self.columns {
            column.sortable = sortable.contains(&column.key);
        }
        self.include_search = true;

        Ok(ValidConfig(self))
    }
}

pub(crate) fn validate_route_path(route: &str) -> Result<(), ConfigError> {
    if route.is_empty() {
        return Err(ConfigError::Empty { field: "route path" });
    }

    let allowed = route
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '/');
    if !allowed || route.split('/').any(str::is_empty) {
        return Err(ConfigError::RoutePath(route.to_string()));
    }

    Ok(())
}

pub(crate) fn check_identifier(
    field: &'static str,
    value: &str,
    is_valid: fn(&str) -> bool,
    rule: &'static str,
) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty { field });
    }
    if !is_valid(value) {
        return Err(ConfigError::Identifier {
            field,
            value: value.to_string(),
            rule,
        });
    }
    Ok(())
}

/// Check a filter key against the keys declared before it
///
/// Each filter becomes `<key>Filter` state with a `set<Key>Filter` setter
/// next to the fields of the generated `Filters` interface.
pub(crate) fn check_filter_key<'a>(
    key: &str,
    earlier: impl IntoIterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    check_identifier("filter key", key, is_js_identifier, JS_IDENT_RULE)?;
    if RESERVED_FILTER_KEYS.contains(&key) {
        return Err(ConfigError::Identifier {
            field: "filter key",
            value: key.to_string(),
            rule: RESERVED_FILTER_RULE,
        });
    }

    let setter = naming::to_pascal_case(key);
    for other in earlier {
        if other == key {
            return Err(ConfigError::DuplicateFilter(key.to_string()));
        }
        if naming::to_pascal_case(other) == setter {
            return Err(ConfigError::FilterNameClash {
                first: other.to_string(),
                second: key.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn is_module_name(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

pub(crate) fn is_js_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
