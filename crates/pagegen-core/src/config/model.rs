//! Generation request types

use serde::{Deserialize, Serialize};
use std::fmt;

/// File layout strategy for the generated module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// Full layers: domain, application, infrastructure, presentation
    Ddd,
    /// Just a component and a page
    Simplified,
}

impl Architecture {
    pub fn display_name(&self) -> &'static str {
        match self {
            Architecture::Ddd => "DDD",
            Architecture::Simplified => "Simplified",
        }
    }

    /// Whether generated presentation code consumes installable UI components
    pub fn installs_components(&self) -> bool {
        matches!(self, Architecture::Simplified)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Number,
    Boolean,
    Date,
}

/// A table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub key: String,
    #[serde(rename = "type", default = "default_column_type")]
    pub kind: ColumnType,
    /// Derived from `GeneratorConfig::sortable_columns` during validation
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    pub fn new(label: &str, key: &str, kind: ColumnType) -> Self {
        Self {
            label: label.to_string(),
            key: key.to_string(),
            kind,
            sortable: false,
        }
    }
}

fn default_column_type() -> ColumnType {
    ColumnType::String
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Select,
    Date,
    Input,
    Multiselect,
}

/// A filter control rendered above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "type")]
    pub kind: FilterType,
    pub label: String,
    pub key: String,

    /// Choices offered by select and multiselect filters
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFetching {
    /// Mock data behind the repository pattern
    Mock,
    /// TanStack Query with caching
    Tanstack,
    /// Plain fetch inside useEffect
    Fetch,
}

impl DataFetching {
    pub fn display_name(&self) -> &'static str {
        match self {
            DataFetching::Mock => "Mock Data",
            DataFetching::Tanstack => "TanStack Query",
            DataFetching::Fetch => "fetch/useEffect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Subtle,
    Moderate,
    Bold,
}

impl Intensity {
    /// Delay between staggered children, in seconds
    pub fn stagger(&self) -> &'static str {
        match self {
            Intensity::Subtle => "0.03",
            Intensity::Moderate => "0.05",
            Intensity::Bold => "0.1",
        }
    }

    /// Duration of a single item transition, in seconds
    pub fn duration(&self) -> &'static str {
        match self {
            Intensity::Subtle => "0.15",
            Intensity::Moderate => "0.2",
            Intensity::Bold => "0.3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "yes")]
    pub page_transitions: bool,
    #[serde(default = "yes")]
    pub list_animations: bool,
    #[serde(default)]
    pub card_animations: bool,
    #[serde(default = "default_intensity")]
    pub intensity: Intensity,
}

impl AnimationConfig {
    pub fn any(&self) -> bool {
        self.page_transitions || self.list_animations || self.card_animations
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            page_transitions: true,
            list_animations: true,
            card_animations: false,
            intensity: default_intensity(),
        }
    }
}

fn default_intensity() -> Intensity {
    Intensity::Moderate
}

fn yes() -> bool {
    true
}

/// One generation request, as collected from prompts or a config file
///
/// Fields left out of a config file take the same defaults the interactive
/// prompts offer. Call [`GeneratorConfig::validate`] to obtain the frozen
/// [`ValidConfig`](super::ValidConfig) the pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Human-readable page title, e.g. "User Management"
    pub page_name: String,

    /// Route below the dashboard group, e.g. "admin/users"
    pub route_path: String,

    /// Module directory name; defaults to the route with `/` replaced by `-`
    #[serde(default)]
    pub module_name: String,

    pub architecture: Architecture,

    /// Entity type name; defaults to the PascalCase page name
    #[serde(default)]
    pub entity_name: String,

    #[serde(default = "default_columns")]
    pub columns: Vec<Column>,

    #[serde(default)]
    pub filters: Vec<Filter>,

    #[serde(default = "yes")]
    pub include_stats: bool,

    #[serde(default)]
    pub include_row_selection: bool,

    /// Search is always generated
    #[serde(skip_deserializing, default = "yes")]
    pub include_search: bool,

    #[serde(default = "default_data_fetching")]
    pub data_fetching: DataFetching,

    #[serde(default)]
    pub sortable_columns: Vec<String>,

    #[serde(default)]
    pub animations: AnimationConfig,
}

fn default_data_fetching() -> DataFetching {
    DataFetching::Mock
}

/// Name, Status and Created At
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name", ColumnType::String),
        Column::new("Status", "status", ColumnType::String),
        Column::new("Created At", "createdAt", ColumnType::Date),
    ]
}

impl GeneratorConfig {
    /// Minimal request with prompt defaults for everything but the names
    pub fn new(page_name: &str, route_path: &str, architecture: Architecture) -> Self {
        Self {
            page_name: page_name.to_string(),
            route_path: route_path.to_string(),
            module_name: String::new(),
            architecture,
            entity_name: String::new(),
            columns: default_columns(),
            filters: Vec::new(),
            include_stats: true,
            include_row_selection: false,
            include_search: true,
            data_fetching: DataFetching::Mock,
            sortable_columns: Vec::new(),
            animations: AnimationConfig::default(),
        }
    }

    pub fn has_date_filter(&self) -> bool {
        self.filters.iter().any(|f| f.kind == FilterType::Date)
    }
}
