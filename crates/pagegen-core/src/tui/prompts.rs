//! Charm-style CLI prompts using cliclack

use super::sink::CliclackSink;
use crate::config::validate::{
    check_filter_key, check_identifier, is_js_identifier, is_module_name, validate_route_path,
    JS_IDENT_RULE, MODULE_RULE,
};
use crate::config::{
    default_columns, load_config, AnimationConfig, Architecture, Column, ColumnType,
    DataFetching, Filter, FilterType, GeneratorConfig, Intensity,
};
use crate::generator::{GenerateOptions, GenerationResult, PageGenerator, Warning};
use crate::naming;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// CLI arguments for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Read the page configuration from a YAML or JSON file instead of prompting
    pub config: Option<PathBuf>,

    /// Root of the Next.js project to generate into
    pub directory: Option<PathBuf>,

    /// Skip shadcn/ui component installation
    pub skip_install: bool,

    /// Dev server base URL used in the next steps
    pub dev_server_url: Option<String>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: GenerateArgs) -> Result<()> {
    cliclack::intro("pagegen")?;

    // Step 1: Resolve the host project
    let project_root = select_directory(&args)?;

    // Step 2: Collect the page configuration
    let config = match &args.config {
        Some(path) => {
            let config = load_config(path).await?;
            cliclack::log::info(format!("Loaded configuration from {}", path.display()))?;
            config
        }
        None => collect_configuration()?,
    };

    // Step 3: Confirm
    print_summary(&config)?;
    let proceed = if args.yes {
        true
    } else {
        cliclack::confirm("Generate files?")
            .initial_value(true)
            .interact()?
    };
    if !proceed {
        cliclack::outro_cancel("Operation cancelled")?;
        return Ok(());
    }

    // Step 4: Generate
    let mut options = GenerateOptions::new(&project_root);
    options.skip_install = args.skip_install;
    if let Some(url) = args.dev_server_url {
        options.dev_server_url = url;
    }
    if options.skip_install && config.architecture.installs_components() {
        cliclack::log::info("Skipping component installation")?;
    }

    let generator = PageGenerator::with_defaults(options)?;
    let sink = CliclackSink::new(&project_root);
    let result = match generator.generate(config, &sink).await {
        Ok(result) => result,
        Err(e) => {
            cliclack::log::error("Generation failed")?;
            return Err(e.into());
        }
    };
    cliclack::log::success("Files generated successfully!")?;

    // Step 5: Show what happened and what to do next
    print_files(&project_root, &result)?;
    print_next_steps(&result)?;

    Ok(())
}

fn select_directory(args: &GenerateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }
    if args.directory.is_some() {
        cliclack::log::info(format!("Using directory: {}", path.display()))?;
    }

    Ok(path)
}

/// Entity name the page name implies, if it is a valid identifier
fn derived_entity_name(page_name: &str) -> Option<String> {
    Some(naming::to_pascal_case(page_name)).filter(|name| is_js_identifier(name))
}

/// Walk the user through every configuration field
fn collect_configuration() -> Result<GeneratorConfig> {
    // Names and location
    let page_name: String = cliclack::input("What is the name of the page?")
        .placeholder("User Management")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Page name is required")
            } else {
                Ok(())
            }
        })
        .interact()?;

    let route_path: String = cliclack::input("What is the route path?")
        .placeholder("admin/users")
        .default_input(&naming::to_kebab_case(&page_name))
        .validate(|input: &String| {
            validate_route_path(input.trim().trim_matches('/')).map_err(|e| e.to_string())
        })
        .interact()?;
    let route_path = route_path.trim().trim_matches('/').to_string();

    let module_name: String = cliclack::input("Module name?")
        .default_input(&route_path.replace('/', "-"))
        .validate(|input: &String| {
            check_identifier("module name", input, is_module_name, MODULE_RULE)
                .map_err(|e| e.to_string())
        })
        .interact()?;

    let architecture: Architecture = cliclack::select("Choose architecture pattern")
        .item(
            Architecture::Ddd,
            "DDD (Domain-Driven Design)",
            "Full layers: Domain, Application, Infrastructure, Presentation",
        )
        .item(
            Architecture::Simplified,
            "Simplified",
            "Just components and pages, cleaner and faster",
        )
        .initial_value(Architecture::Ddd)
        .interact()?;

    // The simplified layout only asks when the page name gives no usable identifier
    let derived = derived_entity_name(&page_name);
    let entity_name: String = match &derived {
        Some(name) if architecture == Architecture::Simplified => name.clone(),
        _ => {
            if derived.is_none() {
                cliclack::log::warning(format!(
                    "'{}' does not give a valid entity name",
                    naming::to_pascal_case(&page_name)
                ))?;
            }
            let mut prompt = cliclack::input("Entity name?").placeholder("Ticket");
            if let Some(name) = derived.as_deref() {
                prompt = prompt.default_input(name);
            }
            prompt
                .validate(|input: &String| {
                    check_identifier("entity name", input, is_js_identifier, JS_IDENT_RULE)
                        .map_err(|e| e.to_string())
                })
                .interact()?
        }
    };

    let columns = collect_columns()?;
    let filters = collect_filters()?;

    // UI options
    let include_stats: bool = cliclack::confirm("Include stats cards at the top?")
        .initial_value(true)
        .interact()?;
    let include_row_selection: bool = cliclack::confirm("Include row selection (checkboxes)?")
        .initial_value(false)
        .interact()?;

    let data_fetching: DataFetching = cliclack::select("Data fetching strategy")
        .item(
            DataFetching::Mock,
            DataFetching::Mock.display_name(),
            "Default mock data with repository pattern",
        )
        .item(
            DataFetching::Tanstack,
            DataFetching::Tanstack.display_name(),
            "Modern data fetching with caching",
        )
        .item(
            DataFetching::Fetch,
            DataFetching::Fetch.display_name(),
            "Basic fetch with useEffect",
        )
        .initial_value(DataFetching::Mock)
        .interact()?;

    let sortable_columns = collect_sorting(&columns)?;
    let animations = collect_animations(include_stats)?;

    Ok(GeneratorConfig {
        page_name,
        route_path,
        module_name,
        architecture,
        entity_name,
        columns,
        filters,
        include_stats,
        include_row_selection,
        include_search: true,
        data_fetching,
        sortable_columns,
        animations,
    })
}

fn collect_columns() -> Result<Vec<Column>> {
    cliclack::log::step("Table columns (ID is automatic)")?;

    let use_defaults: bool = cliclack::confirm("Use default columns? (Name, Status, Created At)")
        .initial_value(true)
        .interact()?;
    if use_defaults {
        return Ok(default_columns());
    }

    let mut columns: Vec<Column> = Vec::new();
    loop {
        let prompt = if columns.is_empty() {
            "Add a column?"
        } else {
            "Add another column?"
        };
        let more: bool = cliclack::confirm(prompt).initial_value(true).interact()?;
        if !more {
            break;
        }

        let label: String = cliclack::input("Column label")
            .placeholder("Email Address")
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Label is required")
                } else {
                    Ok(())
                }
            })
            .interact()?;

        let taken: Vec<String> = columns.iter().map(|c| c.key.clone()).collect();
        let key: String = cliclack::input("Column key")
            .placeholder("email")
            .validate(move |input: &String| {
                if input == "id" {
                    return Err("id is reserved for the generated row id".to_string());
                }
                if taken.contains(input) {
                    return Err(format!("Column key '{}' is already used", input));
                }
                check_identifier("column key", input, is_js_identifier, JS_IDENT_RULE)
                    .map_err(|e| e.to_string())
            })
            .interact()?;

        let kind: ColumnType = cliclack::select("Column type")
            .item(ColumnType::String, "String", "")
            .item(ColumnType::Number, "Number", "")
            .item(ColumnType::Boolean, "Boolean", "")
            .item(ColumnType::Date, "Date", "")
            .interact()?;

        columns.push(Column::new(label.trim(), &key, kind));
    }

    if columns.is_empty() {
        cliclack::log::info("No columns added, using the defaults")?;
        columns = default_columns();
    }

    Ok(columns)
}

fn collect_filters() -> Result<Vec<Filter>> {
    cliclack::log::step("Filters")?;

    let mut filters: Vec<Filter> = Vec::new();
    let wanted: bool = cliclack::confirm("Add filters?")
        .initial_value(true)
        .interact()?;
    if !wanted {
        return Ok(filters);
    }

    loop {
        let prompt = if filters.is_empty() {
            "Add a filter?"
        } else {
            "Add another filter?"
        };
        let more: bool = cliclack::confirm(prompt)
            .initial_value(filters.is_empty())
            .interact()?;
        if !more {
            break;
        }

        let kind: FilterType = cliclack::select("Filter type")
            .item(FilterType::Select, "Dropdown (Select)", "")
            .item(FilterType::Multiselect, "Multi-select", "")
            .item(FilterType::Date, "Date Picker", "")
            .item(FilterType::Input, "Text Input", "")
            .interact()?;

        let label: String = cliclack::input("Filter label")
            .placeholder("Status")
            .validate(|input: &String| {
                if input.trim().is_empty() {
                    Err("Label is required")
                } else {
                    Ok(())
                }
            })
            .interact()?;

        let taken: Vec<String> = filters.iter().map(|f| f.key.clone()).collect();
        let key: String = cliclack::input("Filter key (URL param)")
            .placeholder("status")
            .validate(move |input: &String| {
                check_filter_key(input, taken.iter().map(String::as_str))
                    .map_err(|e| e.to_string())
            })
            .interact()?;

        let options = if matches!(kind, FilterType::Select | FilterType::Multiselect) {
            let raw: String = cliclack::input("Options (comma-separated)")
                .placeholder("active, inactive")
                .required(false)
                .interact()?;
            split_options(&raw)
        } else {
            Vec::new()
        };

        filters.push(Filter {
            kind,
            label: label.trim().to_string(),
            key,
            options,
        });
    }

    Ok(filters)
}

fn split_options(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}

fn collect_sorting(columns: &[Column]) -> Result<Vec<String>> {
    let enabled: bool = cliclack::confirm("Enable column sorting?")
        .initial_value(true)
        .interact()?;
    if !enabled {
        return Ok(Vec::new());
    }

    let mut multi = cliclack::multiselect("Select columns to enable sorting");
    for column in columns {
        multi = multi.item(column.key.clone(), &column.label, "");
    }
    let selected: Vec<String> = multi
        .initial_values(columns.iter().map(|c| c.key.clone()).collect())
        .required(false)
        .interact()?;

    Ok(selected)
}

fn collect_animations(include_stats: bool) -> Result<AnimationConfig> {
    cliclack::log::step("Animations (Framer Motion)")?;

    let page_transitions: bool = cliclack::confirm("Add page transition animations?")
        .initial_value(true)
        .interact()?;
    let list_animations: bool = cliclack::confirm("Animate table rows on load?")
        .initial_value(true)
        .interact()?;
    let card_animations: bool = cliclack::confirm("Animate stats cards?")
        .initial_value(include_stats)
        .interact()?;
    let intensity: Intensity = cliclack::select("Animation intensity")
        .item(Intensity::Subtle, "Subtle", "professional")
        .item(Intensity::Moderate, "Moderate", "balanced")
        .item(Intensity::Bold, "Bold", "eye-catching")
        .initial_value(Intensity::Moderate)
        .interact()?;

    Ok(AnimationConfig {
        page_transitions,
        list_animations,
        card_animations,
        intensity,
    })
}

fn print_summary(config: &GeneratorConfig) -> Result<()> {
    let animations = if config.animations.any() {
        format!("{:?} intensity", config.animations.intensity).to_lowercase()
    } else {
        "none".to_string()
    };

    cliclack::note(
        "Configuration summary",
        format!(
            "Page name:     {}\nRoute:         /{}\nArchitecture:  {}\nData fetching: {}\nAnimations:    {}",
            config.page_name.trim(),
            config.route_path.trim().trim_matches('/'),
            config.architecture.display_name(),
            config.data_fetching.display_name(),
            animations,
        ),
    )?;

    Ok(())
}

fn print_files(root: &Path, result: &GenerationResult) -> Result<()> {
    let listing: Vec<String> = result
        .files
        .iter()
        .map(|file| {
            let path = file.path.strip_prefix(root).unwrap_or(&file.path);
            format!("{}: {}", file.status, path.display())
        })
        .collect();
    cliclack::note("Generated files", listing.join("\n"))?;

    // Skipped installs and overwritten files were already logged as events
    for warning in &result.warnings {
        if let Warning::ComponentsFailed(_) = warning {
            cliclack::log::warning(warning)?;
        }
    }

    Ok(())
}

fn print_next_steps(result: &GenerationResult) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in result.instructions.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
