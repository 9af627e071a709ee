//! Which shadcn/ui components a generated page consumes

use crate::config::GeneratorConfig;
use std::collections::BTreeSet;
use std::fmt;

/// One reusable UI building block, named as the shadcn registry names it
///
/// Variant order is install order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentId {
    Button,
    Table,
    Select,
    Input,
    Badge,
    Card,
    Pagination,
    DropdownMenu,
    Checkbox,
    Calendar,
    Popover,
}

impl ComponentId {
    /// Components every generated list page imports
    pub const BASELINE: [ComponentId; 8] = [
        ComponentId::Button,
        ComponentId::Table,
        ComponentId::Select,
        ComponentId::Input,
        ComponentId::Badge,
        ComponentId::Card,
        ComponentId::Pagination,
        ComponentId::DropdownMenu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentId::Button => "button",
            ComponentId::Table => "table",
            ComponentId::Select => "select",
            ComponentId::Input => "input",
            ComponentId::Badge => "badge",
            ComponentId::Card => "card",
            ComponentId::Pagination => "pagination",
            ComponentId::DropdownMenu => "dropdown-menu",
            ComponentId::Checkbox => "checkbox",
            ComponentId::Calendar => "calendar",
            ComponentId::Popover => "popover",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect which components are needed for a configuration
pub fn resolve_components(config: &GeneratorConfig) -> BTreeSet<ComponentId> {
    let mut required: BTreeSet<ComponentId> = ComponentId::BASELINE.into_iter().collect();

    if config.include_row_selection {
        required.insert(ComponentId::Checkbox);
    }

    if config.has_date_filter() {
        required.insert(ComponentId::Calendar);
        required.insert(ComponentId::Popover);
    }

    required
}
