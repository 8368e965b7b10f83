use anyhow::Result;
use dabuild_core::BuildConfig;
use dabuild_schema::{Release, ReleaseFamily};
use serde::Serialize;

use crate::ui;

#[derive(Debug, Serialize)]
struct ReleaseRow<'a> {
    release: &'a Release,
    family: Option<ReleaseFamily>,
    tag: Option<&'a str>,
}

/// List releases in build order.
pub fn releases(config: &BuildConfig, json: bool) -> Result<()> {
    let rows: Vec<ReleaseRow<'_>> = config
        .releases()
        .iter()
        .map(|release| ReleaseRow {
            release,
            family: config.release_family(release),
            tag: config.release_tag(release),
        })
        .collect();

    if json {
        return ui::print_json(&rows);
    }

    let mut table = ui::table(&["RELEASE", "FAMILY", "TAG"]);
    for row in &rows {
        table.add_row(vec![
            row.release.to_string(),
            row.family.map(|f| f.to_string()).unwrap_or_default(),
            row.tag.unwrap_or("-").to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
