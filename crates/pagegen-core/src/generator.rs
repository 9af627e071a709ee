//! Generation orchestrator
//!
//! One run goes `PLAN -> RESOLVE/INSTALL -> WRITE -> SUMMARIZE`, each stage
//! exactly once. Validation, planning and rendering finish before the first
//! filesystem or process call, so a bad configuration never touches disk.

use crate::components::{
    resolve_components, shadcn_tool, ComponentId, ComponentInstaller, ComponentTool,
    InstallOutcome, Precondition, ToolManager,
};
use crate::config::{Architecture, DataFetching, GeneratorConfig, ValidConfig};
use crate::error::GenResult;
use crate::events::{Event, EventSink};
use crate::plan::{plan, FileRole};
use crate::render::{render_files, Renderer, TemplateRenderer};
use crate::writer::{find_conflicts, write_files, WriteStatus};
use std::fmt;
use std::path::PathBuf;

/// Dev server the "navigate to your page" step points at
pub const DEFAULT_DEV_SERVER_URL: &str = "http://localhost:3000";

/// Environment variable overriding [`DEFAULT_DEV_SERVER_URL`]
pub const DEV_SERVER_URL_ENV: &str = "PAGEGEN_DEV_SERVER_URL";

/// Per-run settings that are not part of the page configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root of the host Next.js project
    pub project_root: PathBuf,
    pub dev_server_url: String,
    /// Skip component installation entirely
    pub skip_install: bool,
}

impl GenerateOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let dev_server_url = std::env::var(DEV_SERVER_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DEV_SERVER_URL.to_string());

        Self {
            project_root: project_root.into(),
            dev_server_url,
            skip_install: false,
        }
    }
}

/// What happened to the component stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallReport {
    /// The layout does not install components
    NotRequired,
    /// Turned off by [`GenerateOptions::skip_install`]
    Disabled,
    Skipped(Precondition),
    Completed(InstallOutcome),
}

/// Non-fatal conditions worth showing the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    InstallSkipped(Precondition),
    ComponentsFailed(Vec<ComponentId>),
    /// Existing files that were replaced
    ExistingFiles(Vec<PathBuf>),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::InstallSkipped(reason) => write!(f, "{}", reason),
            Warning::ComponentsFailed(ids) => {
                let names: Vec<_> = ids.iter().map(ComponentId::as_str).collect();
                write!(f, "Failed to install: {}", names.join(", "))
            }
            Warning::ExistingFiles(paths) => {
                write!(f, "Overwrote {} existing file(s)", paths.len())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub role: FileRole,
    pub path: PathBuf,
    pub content: String,
    pub status: WriteStatus,
}

/// Summary of one successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Written files in plan order
    pub files: Vec<GeneratedFile>,
    pub instructions: Vec<String>,
    pub warnings: Vec<Warning>,
    pub install: InstallReport,
}

/// Runs the whole pipeline against one project root
pub struct PageGenerator<T: ComponentTool, R: Renderer> {
    tool: T,
    renderer: R,
    options: GenerateOptions,
}

impl PageGenerator<ToolManager, TemplateRenderer> {
    /// The real shadcn CLI and the embedded templates
    pub fn with_defaults(options: GenerateOptions) -> GenResult<Self> {
        Ok(Self::new(shadcn_tool(), TemplateRenderer::new()?, options))
    }
}

impl<T: ComponentTool, R: Renderer> PageGenerator<T, R> {
    pub fn new(tool: T, renderer: R, options: GenerateOptions) -> Self {
        Self {
            tool,
            renderer,
            options,
        }
    }

    pub async fn generate(
        &self,
        config: GeneratorConfig,
        sink: &dyn EventSink,
    ) -> GenResult<GenerationResult> {
        // PLAN
        let config = config.validate()?;
        let root = &self.options.project_root;
        let planned = plan(&config, root)?;
        let rendered = render_files(&self.renderer, &planned)?;
        sink.emit(&Event::Planned {
            count: rendered.len(),
        });

        let mut warnings = Vec::new();

        // RESOLVE/INSTALL
        let install = self.install_stage(&config, sink).await;
        match &install {
            InstallReport::Skipped(reason) => {
                warnings.push(Warning::InstallSkipped(reason.clone()));
            }
            InstallReport::Completed(outcome) if !outcome.failed.is_empty() => {
                warnings.push(Warning::ComponentsFailed(
                    outcome.failed.iter().copied().collect(),
                ));
            }
            _ => {}
        }

        // WRITE
        if config.architecture == Architecture::Simplified {
            let existing = find_conflicts(&rendered).await;
            if !existing.is_empty() {
                sink.emit(&Event::ExistingFiles(existing.clone()));
                warnings.push(Warning::ExistingFiles(existing));
            }
        }
        let statuses = write_files(&rendered, true, sink).await?;

        // SUMMARIZE
        let files = rendered
            .into_iter()
            .zip(statuses)
            .map(|(file, status)| GeneratedFile {
                role: file.role,
                path: file.path,
                content: file.content,
                status,
            })
            .collect();

        let mut steps = instructions(&config, &self.options.dev_server_url);
        if let InstallReport::Completed(outcome) = &install {
            let tool = self.tool.config();
            steps.extend(
                outcome
                    .failed
                    .iter()
                    .map(|&id| format!("Install {} manually: {}", id, tool.add_command(id))),
            );
        }

        Ok(GenerationResult {
            files,
            instructions: steps,
            warnings,
            install,
        })
    }

    async fn install_stage(&self, config: &ValidConfig, sink: &dyn EventSink) -> InstallReport {
        if !config.architecture.installs_components() {
            return InstallReport::NotRequired;
        }
        if self.options.skip_install {
            return InstallReport::Disabled;
        }

        let required = resolve_components(config);
        let installer = ComponentInstaller::new(&self.tool, &self.options.project_root);
        match installer.install_missing(&required, sink).await {
            Ok(outcome) => InstallReport::Completed(outcome),
            Err(reason) => {
                sink.emit(&Event::InstallSkipped(reason.clone()));
                InstallReport::Skipped(reason)
            }
        }
    }
}

/// Next steps shown after a successful run
pub fn instructions(config: &ValidConfig, dev_server_url: &str) -> Vec<String> {
    let mut steps = vec![format!(
        "Navigate to your page: {}/{}",
        dev_server_url.trim_end_matches('/'),
        config.route_path
    )];

    let mut deps = Vec::new();
    if config.data_fetching == DataFetching::Tanstack {
        deps.push("@tanstack/react-query");
    }
    if config.animations.any() {
        deps.push("framer-motion");
    }
    if !deps.is_empty() {
        steps.push(format!("Install dependencies: npm install {}", deps.join(" ")));
    }

    steps.push("Customize the generated code to fit your needs".to_string());
    steps.push(match config.architecture {
        Architecture::Ddd => "Connect to your real API (replace mock repository)".to_string(),
        Architecture::Simplified => "Replace mock data with your real API".to_string(),
    });

    if config.data_fetching == DataFetching::Tanstack {
        steps.push("Ensure your app is wrapped in <QueryClientProvider>".to_string());
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::installer::tests::{init_project, FakeTool};
    use crate::config::{Filter, FilterType};
    use crate::error::{ConfigError, GenError};
    use crate::events::RecordingSink;
    use std::collections::BTreeSet;
    use std::path::Path;

    fn generator(root: &Path, tool: FakeTool) -> PageGenerator<FakeTool, TemplateRenderer> {
        let options = GenerateOptions {
            project_root: root.to_path_buf(),
            dev_server_url: DEFAULT_DEV_SERVER_URL.to_string(),
            skip_install: false,
        };
        PageGenerator::new(tool, TemplateRenderer::new().unwrap(), options)
    }

    fn users() -> GeneratorConfig {
        GeneratorConfig::new("Users", "admin/users", Architecture::Simplified)
    }

    fn snapshot(root: &Path, result: &GenerationResult) -> Vec<(PathBuf, String)> {
        result
            .files
            .iter()
            .map(|f| {
                let relative = f.path.strip_prefix(root).unwrap().to_path_buf();
                (relative, std::fs::read_to_string(&f.path).unwrap())
            })
            .collect()
    }

    #[tokio::test]
    async fn test_simplified_installs_then_writes() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), &[ComponentId::Button]);
        let pages = generator(dir.path(), FakeTool::new());
        let sink = RecordingSink::new();

        let result = pages.generate(users(), &sink).await.unwrap();

        let InstallReport::Completed(outcome) = &result.install else {
            panic!("expected completed install, got {:?}", result.install);
        };
        assert_eq!(outcome.skipped, BTreeSet::from([ComponentId::Button]));
        assert_eq!(outcome.installed.len(), 7);
        assert!(result.warnings.is_empty());

        assert_eq!(result.files.len(), 3);
        assert!(result
            .files
            .iter()
            .all(|f| f.status == WriteStatus::Created && f.path.exists()));
        assert!(dir
            .path()
            .join("components/admin-users/admin-users-list.tsx")
            .exists());
        assert!(dir
            .path()
            .join("app/(dashboard)/admin/users/template.tsx")
            .exists());

        // installs finish before the first write
        let events = sink.events();
        let last_install = events
            .iter()
            .rposition(|e| matches!(e, Event::ComponentInstalled(_)))
            .unwrap();
        let first_write = events
            .iter()
            .position(|e| matches!(e, Event::FileWritten { .. }))
            .unwrap();
        assert!(last_install < first_write);
        assert_eq!(events[0], Event::Planned { count: 3 });
    }

    #[tokio::test]
    async fn test_second_run_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), &[]);
        let pages = generator(dir.path(), FakeTool::new());
        let mut config = users();
        config.filters.push(Filter {
            kind: FilterType::Date,
            label: "Joined".to_string(),
            key: "joinedAt".to_string(),
            options: Vec::new(),
        });

        let first = pages.generate(config.clone(), &RecordingSink::new()).await.unwrap();
        let sink = RecordingSink::new();
        let second = pages.generate(config, &sink).await.unwrap();

        assert_eq!(snapshot(dir.path(), &first), snapshot(dir.path(), &second));
        for file in &second.files {
            assert_eq!(std::fs::read_to_string(&file.path).unwrap(), file.content);
        }
        assert!(second.files.iter().all(|f| f.status == WriteStatus::Updated));

        let InstallReport::Completed(outcome) = &second.install else {
            panic!("expected completed install");
        };
        assert!(outcome.installed.is_empty());
        assert_eq!(outcome.skipped.len(), 10);

        assert!(matches!(
            second.warnings.as_slice(),
            [Warning::ExistingFiles(paths)] if paths.len() == 3
        ));
        assert!(sink
            .events()
            .iter()
            .any(|e| matches!(e, Event::ExistingFiles(paths) if paths.len() == 3)));
    }

    #[tokio::test]
    async fn test_invalid_route_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), &[]);
        let tool = FakeTool::new();
        let pages = generator(dir.path(), tool);
        let sink = RecordingSink::new();

        let mut config = users();
        config.route_path = "Admin/Users".to_string();
        let err = pages.generate(config, &sink).await.unwrap_err();

        assert!(matches!(err, GenError::Config(ConfigError::RoutePath(_))));
        assert!(sink.events().is_empty());
        assert!(!dir.path().join("app").exists());
        assert!(pages.tool.calls().is_empty());
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn render(&self, file: &crate::plan::PlannedFile) -> GenResult<String> {
            Err(GenError::Render {
                role: file.role,
                reason: "unknown variable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_render_failure_leaves_project_untouched() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), &[]);
        let options = GenerateOptions {
            project_root: dir.path().to_path_buf(),
            dev_server_url: DEFAULT_DEV_SERVER_URL.to_string(),
            skip_install: false,
        };
        let pages = PageGenerator::new(FakeTool::new(), FailingRenderer, options);
        let sink = RecordingSink::new();

        let err = pages.generate(users(), &sink).await.unwrap_err();

        assert!(matches!(
            err,
            GenError::Render {
                role: FileRole::ListComponent,
                ..
            }
        ));
        assert!(sink.events().is_empty());
        assert!(pages.tool.calls().is_empty());
        assert!(!dir.path().join("app").exists());
        assert!(!dir.path().join("components/admin-users").exists());
    }

    #[tokio::test]
    async fn test_write_failure_keeps_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("app/(dashboard)/admin");
        std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut pages = generator(dir.path(), FakeTool::new());
        pages.options.skip_install = true;
        let sink = RecordingSink::new();

        let err = pages.generate(users(), &sink).await.unwrap_err();

        assert!(matches!(err, GenError::Filesystem { .. }));
        assert!(dir
            .path()
            .join("components/admin-users/admin-users-list.tsx")
            .exists());
        assert!(!dir.path().join("app/(dashboard)/admin/users").exists());
        let written = sink
            .events()
            .iter()
            .filter(|e| matches!(e, Event::FileWritten { .. }))
            .count();
        assert_eq!(written, 1);
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[tokio::test]
    async fn test_ddd_never_installs() {
        let dir = tempfile::tempdir().unwrap();
        let tool = FakeTool::new();
        let pages = generator(dir.path(), tool);
        let mut config =
            GeneratorConfig::new("Support Tickets", "support/tickets", Architecture::Ddd);
        config.module_name = "ticket".to_string();

        let result = pages.generate(config, &RecordingSink::new()).await.unwrap();

        assert_eq!(result.install, InstallReport::NotRequired);
        assert!(pages.tool.calls().is_empty());
        assert_eq!(result.files.len(), 7);
        assert!(dir
            .path()
            .join("modules/ticket/domain/entities/ticket.entity.ts")
            .exists());
        assert_eq!(
            result.instructions[3],
            "Connect to your real API (replace mock repository)"
        );
    }

    #[tokio::test]
    async fn test_uninitialized_project_warns_and_still_writes() {
        let dir = tempfile::tempdir().unwrap();
        let pages = generator(dir.path(), FakeTool::new());
        let sink = RecordingSink::new();

        let result = pages.generate(users(), &sink).await.unwrap();

        assert!(matches!(
            result.install,
            InstallReport::Skipped(Precondition::NotInitialized { .. })
        ));
        assert!(matches!(
            result.warnings.as_slice(),
            [Warning::InstallSkipped(Precondition::NotInitialized { .. })]
        ));
        assert!(sink
            .events()
            .iter()
            .any(|e| matches!(e, Event::InstallSkipped(_))));
        assert_eq!(result.files.len(), 3);
    }

    #[tokio::test]
    async fn test_failed_components_become_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), &[]);
        let pages = generator(dir.path(), FakeTool::failing(&[ComponentId::Card]));

        let result = pages.generate(users(), &RecordingSink::new()).await.unwrap();

        assert_eq!(
            result.warnings,
            vec![Warning::ComponentsFailed(vec![ComponentId::Card])]
        );
        assert_eq!(result.warnings[0].to_string(), "Failed to install: card");
        assert_eq!(
            result.instructions.last().unwrap(),
            "Install card manually: npx shadcn@latest add card --yes --overwrite"
        );
        assert_eq!(result.files.len(), 3);
    }

    #[tokio::test]
    async fn test_skip_install_option() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), &[]);
        let mut pages = generator(dir.path(), FakeTool::new());
        pages.options.skip_install = true;

        let result = pages.generate(users(), &RecordingSink::new()).await.unwrap();

        assert_eq!(result.install, InstallReport::Disabled);
        assert!(pages.tool.calls().is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_instructions() {
        let mut config = users();
        config.data_fetching = DataFetching::Tanstack;
        let valid = config.validate().unwrap();

        assert_eq!(
            instructions(&valid, "http://localhost:4000/"),
            vec![
                "Navigate to your page: http://localhost:4000/admin/users",
                "Install dependencies: npm install @tanstack/react-query framer-motion",
                "Customize the generated code to fit your needs",
                "Replace mock data with your real API",
                "Ensure your app is wrapped in <QueryClientProvider>",
            ]
        );
    }

    #[test]
    fn test_instructions_without_dependencies() {
        let mut config = users();
        config.animations.page_transitions = false;
        config.animations.list_animations = false;
        let valid = config.validate().unwrap();

        let steps = instructions(&valid, DEFAULT_DEV_SERVER_URL);
        assert_eq!(steps.len(), 3);
        assert!(!steps.iter().any(|s| s.starts_with("Install dependencies")));
    }
}
