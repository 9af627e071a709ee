//! Configuration file utilities

use super::model::GeneratorConfig;
use crate::error::ConfigError;
use std::path::Path;

/// Supported config file formats, selected by extension
const JSON_EXTENSIONS: &[&str] = &["json"];

/// Load a generation request from a YAML or JSON file
///
/// The returned config is not yet validated.
pub async fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;

    parse_config(path, &content)
}

/// Parse config content, treating anything that is not JSON as YAML
pub fn parse_config(path: &Path, content: &str) -> Result<GeneratorConfig, ConfigError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JSON_EXTENSIONS.iter().any(|j| ext.eq_ignore_ascii_case(j)));

    let parsed = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| ConfigError::Parse {
        path: path.to_path_buf(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Architecture, DataFetching, FilterType};
    use std::path::PathBuf;

    const YAML: &str = r#"
page_name: Support Tickets
route_path: support/tickets
module_name: ticket
architecture: ddd
entity_name: Ticket
columns:
  - { label: Subject, key: subject, type: string }
  - { label: Opened, key: openedAt, type: date }
filters:
  - { type: date, label: Opened, key: openedAt }
data_fetching: tanstack
sortable_columns: [openedAt]
"#;

    #[test]
    fn test_parse_yaml() {
        let config = parse_config(&PathBuf::from("tickets.yaml"), YAML).unwrap();
        assert_eq!(config.module_name, "ticket");
        assert_eq!(config.architecture, Architecture::Ddd);
        assert_eq!(config.data_fetching, DataFetching::Tanstack);
        assert_eq!(config.filters[0].kind, FilterType::Date);
        assert_eq!(config.columns.len(), 2);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"page_name": "Users", "route_path": "admin/users", "architecture": "simplified"}"#;
        let config = parse_config(&PathBuf::from("users.JSON"), json).unwrap();
        assert_eq!(config.architecture, Architecture::Simplified);
        assert_eq!(config.route_path, "admin/users");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = parse_config(&PathBuf::from("broken.yml"), "architecture: layered").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path.ends_with("broken.yml")));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Load { .. }));
    }
}
