//! Data handed to each template renderer

use crate::config::{
    AnimationConfig, Architecture, Column, DataFetching, Filter, FilterType, Intensity,
    ValidConfig,
};
use crate::naming;
use serde::Serialize;

/// Render inputs for one planned file
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderContext {
    Domain(DomainContext),
    UseCase(UseCaseContext),
    Component(Box<ComponentContext>),
    Page(PageContext),
    Transition(TransitionContext),
}

/// Entity and repository layers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainContext {
    pub entity_name: String,
    pub entity_plural: String,
    pub module_name: String,
    pub columns: Vec<Column>,
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCaseContext {
    pub entity_name: String,
    pub entity_plural: String,
    pub module_name: String,
    pub use_case_name: String,
}

/// The list component, the bulk of the generated UI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentContext {
    pub architecture: Architecture,
    pub entity_name: String,
    pub entity_plural: String,
    pub module_name: String,
    pub component_name: String,
    pub use_case_name: String,
    pub page_name: String,
    pub route_path: String,
    pub columns: Vec<Column>,
    pub filters: Vec<Filter>,
    pub include_stats: bool,
    pub include_row_selection: bool,
    pub include_search: bool,
    pub data_fetching: DataFetching,
    pub sortable_columns: Vec<String>,
    pub animations: AnimationConfig,
    pub has_sortable: bool,
    pub has_date_filter: bool,
    pub has_multiselect_filter: bool,
    pub has_animations: bool,
    pub stagger: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContext {
    pub architecture: Architecture,
    pub page_name: String,
    pub route_path: String,
    pub module_name: String,
    pub entity_name: String,
    pub component_name: String,
    pub component_import: String,
}

/// Route-level page transition wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionContext {
    pub intensity: Intensity,
    pub duration: &'static str,
}

/// Names shared by several contexts
pub(crate) struct Names {
    pub entity_plural: String,
    pub component_name: String,
    pub use_case_name: String,
}

impl Names {
    pub fn of(config: &ValidConfig) -> Self {
        let entity_plural = naming::pluralize(&config.entity_name);
        Self {
            use_case_name: format!("Get{}UseCase", entity_plural),
            component_name: format!("{}List", naming::to_pascal_case(&config.module_name)),
            entity_plural,
        }
    }
}

pub(crate) fn domain(config: &ValidConfig, names: &Names) -> RenderContext {
    RenderContext::Domain(DomainContext {
        entity_name: config.entity_name.clone(),
        entity_plural: names.entity_plural.clone(),
        module_name: config.module_name.clone(),
        columns: config.columns.clone(),
        filters: config.filters.clone(),
    })
}

pub(crate) fn use_case(config: &ValidConfig, names: &Names) -> RenderContext {
    RenderContext::UseCase(UseCaseContext {
        entity_name: config.entity_name.clone(),
        entity_plural: names.entity_plural.clone(),
        module_name: config.module_name.clone(),
        use_case_name: names.use_case_name.clone(),
    })
}

pub(crate) fn component(config: &ValidConfig, names: &Names) -> RenderContext {
    let animations = config.animations;
    RenderContext::Component(Box::new(ComponentContext {
        architecture: config.architecture,
        entity_name: config.entity_name.clone(),
        entity_plural: names.entity_plural.clone(),
        module_name: config.module_name.clone(),
        component_name: names.component_name.clone(),
        use_case_name: names.use_case_name.clone(),
        page_name: config.page_name.clone(),
        route_path: config.route_path.clone(),
        columns: config.columns.clone(),
        filters: config.filters.clone(),
        include_stats: config.include_stats,
        include_row_selection: config.include_row_selection,
        include_search: config.include_search,
        data_fetching: config.data_fetching,
        sortable_columns: config.sortable_columns.clone(),
        animations,
        has_sortable: !config.sortable_columns.is_empty(),
        has_date_filter: config.has_date_filter(),
        has_multiselect_filter: config
            .filters
            .iter()
            .any(|f| f.kind == FilterType::Multiselect),
        has_animations: animations.list_animations || animations.card_animations,
        stagger: animations.intensity.stagger(),
        duration: animations.intensity.duration(),
    }))
}

pub(crate) fn page(config: &ValidConfig, names: &Names, component_import: String) -> RenderContext {
    RenderContext::Page(PageContext {
        architecture: config.architecture,
        page_name: config.page_name.clone(),
        route_path: config.route_path.clone(),
        module_name: config.module_name.clone(),
        entity_name: config.entity_name.clone(),
        component_name: names.component_name.clone(),
        component_import,
    })
}

pub(crate) fn transition(config: &ValidConfig) -> RenderContext {
    RenderContext::Transition(TransitionContext {
        intensity: config.animations.intensity,
        duration: config.animations.intensity.duration(),
    })
}
