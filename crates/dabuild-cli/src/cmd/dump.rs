use anyhow::Result;
use dabuild_core::BuildConfig;

use crate::ui;

/// Print the full configuration as JSON.
pub fn dump(config: &BuildConfig) -> Result<()> {
    ui::print_json(config)
}
