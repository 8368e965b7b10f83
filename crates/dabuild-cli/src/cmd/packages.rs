use std::path::Path;

use anyhow::{Result, bail};
use dabuild_core::BuildConfig;
use serde::Serialize;

use crate::ui;

/// JSON shape of a single package lookup.
#[derive(Debug, Serialize)]
struct PackageEntry<'a> {
    name: &'a str,
    path: &'a Path,
}

/// List every discovered package, or print the checkout path of `name`.
pub fn packages(config: &BuildConfig, name: Option<&str>, json: bool) -> Result<()> {
    if let Some(name) = name {
        let Some(path) = config.package_path(name) else {
            bail!(
                "No package named '{name}' under {}",
                config.package_root().display()
            );
        };
        if json {
            return ui::print_json(&PackageEntry { name, path });
        }
        println!("{}", path.display());
        return Ok(());
    }

    if json {
        return ui::print_json(config.package_map());
    }

    if config.package_map().is_empty() {
        println!(
            "No packages found under {}",
            config.package_root().display()
        );
        return Ok(());
    }

    let mut table = ui::table(&["PACKAGE", "PATH"]);
    for (name, path) in config.package_map() {
        table.add_row(vec![name.to_string(), path.display().to_string()]);
    }
    println!("{table}");
    Ok(())
}
