//! Layered layout: one file per DDD layer under `modules/<module>`

use super::context::{self, Names};
use super::{route_files, FileRole, PlannedFile};
use crate::config::ValidConfig;
use std::path::Path;

pub(super) fn plan(config: &ValidConfig, root: &Path) -> Vec<PlannedFile> {
    let module = config.module_name.as_str();
    let module_dir = root.join("modules").join(module);
    let names = Names::of(config);

    let mut files = vec![
        PlannedFile::new(
            FileRole::Entity,
            module_dir
                .join("domain")
                .join("entities")
                .join(format!("{}.entity.ts", module)),
            context::domain(config, &names),
        ),
        PlannedFile::new(
            FileRole::RepositoryInterface,
            module_dir
                .join("domain")
                .join("repositories")
                .join(format!("{}.repository.interface.ts", module)),
            context::domain(config, &names),
        ),
        PlannedFile::new(
            FileRole::RepositoryImpl,
            module_dir
                .join("infrastructure")
                .join("repositories")
                .join(format!("{}.repository.ts", module)),
            context::domain(config, &names),
        ),
        PlannedFile::new(
            FileRole::UseCase,
            module_dir
                .join("application")
                .join("use-cases")
                .join(format!("get-{}s.use-case.ts", module)),
            context::use_case(config, &names),
        ),
        PlannedFile::new(
            FileRole::PresentationComponent,
            module_dir
                .join("presentation")
                .join("components")
                .join(format!("{}-list.tsx", module)),
            context::component(config, &names),
        ),
    ];

    let import = format!("@/modules/{0}/presentation/components/{0}-list", module);
    files.extend(route_files(config, root, &names, import));
    files
}
