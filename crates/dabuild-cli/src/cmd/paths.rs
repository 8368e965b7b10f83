use anyhow::Result;
use dabuild_core::BuildConfig;
use serde::Serialize;
use std::path::Path;

use crate::ui;

#[derive(Debug, Serialize)]
struct Paths<'a> {
    package_root: &'a Path,
    source_package_dir: &'a Path,
    orig_tarball_dir: &'a Path,
    apt_root_dir: &'a Path,
    release_tag_key: &'a str,
}

/// Show the configured directories and signing key.
pub fn paths(config: &BuildConfig, json: bool) -> Result<()> {
    let paths = Paths {
        package_root: config.package_root(),
        source_package_dir: config.source_package_dir(),
        orig_tarball_dir: config.orig_tarball_dir(),
        apt_root_dir: config.apt_root_dir(),
        release_tag_key: config.release_tag_key(),
    };

    if json {
        return ui::print_json(&paths);
    }

    let mut table = ui::table(&["SETTING", "VALUE"]);
    table.add_row(vec![
        "package_root".to_string(),
        paths.package_root.display().to_string(),
    ]);
    table.add_row(vec![
        "source_package_dir".to_string(),
        paths.source_package_dir.display().to_string(),
    ]);
    table.add_row(vec![
        "orig_tarball_dir".to_string(),
        paths.orig_tarball_dir.display().to_string(),
    ]);
    table.add_row(vec![
        "apt_root_dir".to_string(),
        paths.apt_root_dir.display().to_string(),
    ]);
    table.add_row(vec![
        "release_tag_key".to_string(),
        paths.release_tag_key.to_string(),
    ]);
    println!("{table}");
    Ok(())
}
