//! Shallow layout: a single component under `components/<module>`

use super::context::{self, Names};
use super::{route_files, FileRole, PlannedFile};
use crate::config::ValidConfig;
use std::path::Path;

pub(super) fn plan(config: &ValidConfig, root: &Path) -> Vec<PlannedFile> {
    let module = config.module_name.as_str();
    let names = Names::of(config);

    let mut files = vec![PlannedFile::new(
        FileRole::ListComponent,
        root.join("components")
            .join(module)
            .join(format!("{}-list.tsx", module)),
        context::component(config, &names),
    )];

    let import = format!("@/components/{0}/{0}-list", module);
    files.extend(route_files(config, root, &names, import));
    files
}
