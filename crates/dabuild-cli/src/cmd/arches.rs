use anyhow::Result;
use dabuild_core::BuildConfig;
use dabuild_schema::{Arch, BuilderHost, Release};
use serde::Serialize;
use tracing::warn;

use crate::ui;

#[derive(Debug, Serialize)]
struct ArchRow<'a> {
    arch: Arch,
    builder: Option<&'a BuilderHost>,
    supported: bool,
}

/// List architectures and whether `release` is built for each.
pub fn arches(config: &BuildConfig, release: &Release, json: bool) -> Result<()> {
    if config.release_family(release).is_none() {
        warn!(%release, "not a configured release");
    }

    let rows: Vec<ArchRow<'_>> = config
        .arches()
        .iter()
        .map(|&arch| ArchRow {
            arch,
            builder: config.builder_for(arch),
            supported: config.arch_supported_for_release(arch, release),
        })
        .collect();

    if json {
        return ui::print_json(&rows);
    }

    let mut table = ui::table(&["ARCH", "BUILDER", "BUILT"]);
    for row in &rows {
        table.add_row(vec![
            row.arch.to_string(),
            row.builder.map(ToString::to_string).unwrap_or_default(),
            if row.supported { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
