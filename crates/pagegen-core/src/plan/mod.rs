//! File planning: which files a configuration produces, and where
//!
//! Planning is pure. Each architecture has its own strategy module; both
//! yield the same [`PlannedFile`] shape so the writer never needs to know
//! which layout it is writing.

pub mod context;
mod ddd;
mod simplified;

use crate::config::{Architecture, ValidConfig};
use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use context::RenderContext;

/// Which template renders a planned file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileRole {
    Entity,
    RepositoryInterface,
    RepositoryImpl,
    UseCase,
    /// DDD presentation-layer list component
    PresentationComponent,
    /// Simplified-layout list component
    ListComponent,
    RoutePage,
    PageTransition,
}

impl FileRole {
    pub fn template_name(&self) -> &'static str {
        match self {
            FileRole::Entity => "entity.ts",
            FileRole::RepositoryInterface => "repository-interface.ts",
            FileRole::RepositoryImpl => "repository-impl.ts",
            FileRole::UseCase => "use-case.ts",
            FileRole::PresentationComponent => "presentation-component.tsx",
            FileRole::ListComponent => "list-component.tsx",
            FileRole::RoutePage => "page.tsx",
            FileRole::PageTransition => "template.tsx",
        }
    }

    pub const ALL: [FileRole; 8] = [
        FileRole::Entity,
        FileRole::RepositoryInterface,
        FileRole::RepositoryImpl,
        FileRole::UseCase,
        FileRole::PresentationComponent,
        FileRole::ListComponent,
        FileRole::RoutePage,
        FileRole::PageTransition,
    ];
}

/// A file to be generated, decided before any I/O happens
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFile {
    pub role: FileRole,
    pub path: PathBuf,
    pub context: RenderContext,
}

impl PlannedFile {
    fn new(role: FileRole, path: PathBuf, context: RenderContext) -> Self {
        Self {
            role,
            path,
            context,
        }
    }
}

/// Plan every file for `config` under the host project `root`
pub fn plan(config: &ValidConfig, root: &Path) -> Result<Vec<PlannedFile>, ConfigError> {
    let files = match config.architecture {
        Architecture::Ddd => ddd::plan(config, root),
        Architecture::Simplified => simplified::plan(config, root),
    };

    ensure_distinct(&files)?;
    Ok(files)
}

/// Route directory inside the dashboard route group
pub(crate) fn route_dir(root: &Path, route_path: &str) -> PathBuf {
    route_path
        .split('/')
        .fold(root.join("app").join("(dashboard)"), |dir, segment| {
            dir.join(segment)
        })
}

/// Page-level files shared by both layouts
pub(crate) fn route_files(
    config: &ValidConfig,
    root: &Path,
    names: &context::Names,
    component_import: String,
) -> Vec<PlannedFile> {
    let app_dir = route_dir(root, &config.route_path);
    let mut files = vec![PlannedFile::new(
        FileRole::RoutePage,
        app_dir.join("page.tsx"),
        context::page(config, names, component_import),
    )];

    if config.animations.page_transitions {
        files.push(PlannedFile::new(
            FileRole::PageTransition,
            app_dir.join("template.tsx"),
            context::transition(config),
        ));
    }

    files
}

fn ensure_distinct(files: &[PlannedFile]) -> Result<(), ConfigError> {
    let mut seen: HashMap<&Path, FileRole> = HashMap::new();
    for file in files {
        if let Some(first) = seen.insert(&file.path, file.role) {
            return Err(ConfigError::DuplicatePath {
                first,
                second: file.role,
                path: file.path.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AnimationConfig, DataFetching, Filter, FilterType, GeneratorConfig, Intensity,
    };
    use std::collections::HashSet;

    fn ticket_config(architecture: Architecture, page_transitions: bool) -> ValidConfig {
        let mut raw = GeneratorConfig::new("Support Tickets", "support/tickets", architecture);
        raw.module_name = "ticket".to_string();
        raw.entity_name = "Ticket".to_string();
        raw.animations.page_transitions = page_transitions;
        raw.validate().unwrap()
    }

    fn roles(files: &[PlannedFile]) -> Vec<FileRole> {
        files.iter().map(|f| f.role).collect()
    }

    fn assert_distinct(files: &[PlannedFile]) {
        let paths: HashSet<_> = files.iter().map(|f| &f.path).collect();
        assert_eq!(paths.len(), files.len());
    }

    #[test]
    fn test_ddd_plans_one_file_per_layer() {
        let root = Path::new("/project");
        let files = plan(&ticket_config(Architecture::Ddd, false), root).unwrap();

        assert_eq!(
            roles(&files),
            vec![
                FileRole::Entity,
                FileRole::RepositoryInterface,
                FileRole::RepositoryImpl,
                FileRole::UseCase,
                FileRole::PresentationComponent,
                FileRole::RoutePage,
            ]
        );
        assert_distinct(&files);

        let module_dir = root.join("modules").join("ticket");
        for file in &files[..5] {
            assert!(file.path.starts_with(&module_dir), "{}", file.path.display());
        }
        assert!(files[5].path.parent().unwrap().ends_with("support/tickets"));
        assert_eq!(
            files[0].path,
            module_dir.join("domain/entities/ticket.entity.ts")
        );
        assert_eq!(
            files[3].path,
            module_dir.join("application/use-cases/get-tickets.use-case.ts")
        );
    }

    #[test]
    fn test_ddd_with_page_transitions_plans_seven_files() {
        let root = Path::new("/project");
        let files = plan(&ticket_config(Architecture::Ddd, true), root).unwrap();

        assert_eq!(files.len(), 7);
        assert_distinct(&files);
        let last = files.last().unwrap();
        assert_eq!(last.role, FileRole::PageTransition);
        assert_eq!(
            last.path,
            root.join("app/(dashboard)/support/tickets/template.tsx")
        );
    }

    #[test]
    fn test_simplified_plans_component_and_page() {
        let root = Path::new("/project");
        let files = plan(&ticket_config(Architecture::Simplified, false), root).unwrap();

        assert_eq!(roles(&files), vec![FileRole::ListComponent, FileRole::RoutePage]);
        assert_eq!(files[0].path, root.join("components/ticket/ticket-list.tsx"));
        assert_eq!(
            files[1].path,
            root.join("app/(dashboard)/support/tickets/page.tsx")
        );

        let with_transition = plan(&ticket_config(Architecture::Simplified, true), root).unwrap();
        assert_eq!(with_transition.len(), 3);
        assert_distinct(&with_transition);
    }

    #[test]
    fn test_page_imports_component_from_layout() {
        let root = Path::new("/project");
        let ddd = plan(&ticket_config(Architecture::Ddd, false), root).unwrap();
        let simple = plan(&ticket_config(Architecture::Simplified, false), root).unwrap();

        let import = |files: &[PlannedFile]| {
            let page = files
                .iter()
                .find(|f| f.role == FileRole::RoutePage)
                .unwrap();
            match &page.context {
                RenderContext::Page(page) => page.component_import.clone(),
                other => panic!("unexpected context {:?}", other),
            }
        };
        assert_eq!(
            import(&ddd),
            "@/modules/ticket/presentation/components/ticket-list"
        );
        assert_eq!(import(&simple), "@/components/ticket/ticket-list");
    }

    #[test]
    fn test_paths_distinct_across_feature_combinations() {
        let root = Path::new("/project");
        for architecture in [Architecture::Ddd, Architecture::Simplified] {
            for page_transitions in [false, true] {
                for (module, route) in [
                    ("ticket", "support/tickets"),
                    ("page", "page"),
                    ("app", "app/page"),
                    ("components", "components/ui"),
                ] {
                    let mut raw = GeneratorConfig::new("Things", route, architecture);
                    raw.module_name = module.to_string();
                    raw.include_row_selection = page_transitions;
                    raw.data_fetching = DataFetching::Fetch;
                    raw.filters.push(Filter {
                        kind: FilterType::Date,
                        label: "When".to_string(),
                        key: "when".to_string(),
                        options: Vec::new(),
                    });
                    raw.animations = AnimationConfig {
                        page_transitions,
                        list_animations: true,
                        card_animations: true,
                        intensity: Intensity::Bold,
                    };
                    let files = plan(&raw.validate().unwrap(), root).unwrap();
                    assert_distinct(&files);
                }
            }
        }
    }

    #[test]
    fn test_duplicate_paths_detected() {
        let config = ticket_config(Architecture::Simplified, false);
        let mut files = plan(&config, Path::new("/project")).unwrap();
        files.push(files[0].clone());

        let err = ensure_distinct(&files).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicatePath {
                first: FileRole::ListComponent,
                second: FileRole::ListComponent,
                ..
            }
        ));
    }

    #[test]
    fn test_template_names_unique() {
        let names: HashSet<_> = FileRole::ALL.iter().map(|r| r.template_name()).collect();
        assert_eq!(names.len(), FileRole::ALL.len());
    }
}
