use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Arguments;
use crate::{
    config::{default_template_path, load_config},
    core::{CheckResult, check},
};

/// Load configuration, resolve the template and run the check.
///
/// The default template location is only computed when `--template-path`
/// is absent.
pub fn run(args: &Arguments) -> Result<CheckResult> {
    let search_start = fs::canonicalize(&args.path).unwrap_or_else(|_| args.path.clone());
    let loaded = load_config(&search_start)?;
    if args.verbose
        && let Some(config_path) = &loaded.path
    {
        eprintln!("{} using {}", "note:".bold().cyan(), config_path.display());
    }

    let template_path = resolve_template_path(args.template_path.as_deref(), invoking_path)?;
    if args.verbose {
        eprintln!(
            "{} template {}",
            "note:".bold().cyan(),
            template_path.display()
        );
    }

    Ok(check(&args.path, &template_path, &loaded.config)?)
}

/// Pick the explicit template path, or derive the default from the
/// invoking executable's location.
pub fn resolve_template_path<F>(explicit: Option<&Path>, invoking_path: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(default_template_path(&invoking_path()?)),
    }
}

/// Resolved location of the running executable.
fn invoking_path() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    Ok(fs::canonicalize(&exe).unwrap_or(exe))
}
