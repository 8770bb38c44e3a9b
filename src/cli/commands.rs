//! Command dispatch: load the tree, run the requested operation, render output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::LoadReport;
use crate::application::{ApplicationError, IoResultExt};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::PathTree;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{InfraError, InfraResult};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `pathtree --help`".to_string(),
        ));
    };

    // Commands that need no settings or tree
    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        }
        Commands::Config {
            command: ConfigCommands::Template,
        } => {
            output::info(&Settings::template());
            return Ok(());
        }
        Commands::Config {
            command: ConfigCommands::Path,
        } => {
            return match global_config_path() {
                Some(path) => {
                    output::info(&path.display());
                    Ok(())
                }
                None => Err(CliError::Usage(
                    "cannot determine config directory".to_string(),
                )),
            };
        }
        _ => {}
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    if let Commands::Config {
        command: ConfigCommands::Show,
    } = command
    {
        output::info(&container.settings.to_toml()?);
        return Ok(());
    }

    let dir = resolve_dir(cli.dir.as_deref(), &container.settings)?;
    let (mut tree, report) = container.load_service.load_new(&dir)?;
    report_load(&dir, &report);

    match command {
        Commands::Tree { depth } => cmd_tree(&tree, depth.unwrap_or(container.settings.display_depth)),
        Commands::Find { paths } => cmd_find(&tree, paths),
        Commands::List { dirs, files } => cmd_list(&tree, *dirs, *files),
        Commands::Stats => cmd_stats(&tree),
        Commands::Edit {
            inserts,
            mkdirs,
            deletes,
        } => cmd_edit(&mut tree, inserts, mkdirs, deletes),
        Commands::Completion { .. } | Commands::Config { .. } => Ok(()),
    }
}

/// Canonicalize the directory to load, falling back to the configured default.
fn resolve_dir(dir: Option<&Path>, settings: &Settings) -> CliResult<PathBuf> {
    let dir = dir.unwrap_or(settings.default_dir.as_path());
    let resolved = match std::fs::canonicalize(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ApplicationError::BaseNotFound(dir.to_path_buf()).into());
        }
        res => res.with_path_context("resolve directory", dir)?,
    };
    debug!("loading from {}", resolved.display());
    Ok(resolved)
}

fn report_load(dir: &Path, report: &LoadReport) {
    debug!("{}: {}", dir.display(), report);
    for err in &report.errors {
        output::warning(err);
    }
}

#[instrument(skip(tree))]
fn cmd_tree(tree: &PathTree, depth: usize) -> CliResult<()> {
    output::info(&tree.to_display_tree(depth));
    Ok(())
}

#[instrument(skip(tree))]
fn cmd_find(tree: &PathTree, paths: &[String]) -> CliResult<()> {
    for path in paths {
        output::classification(path, tree.find(path));
    }
    Ok(())
}

#[instrument(skip(tree))]
fn cmd_list(tree: &PathTree, dirs: bool, files: bool) -> CliResult<()> {
    let paths = if dirs {
        tree.all_directories()
    } else if files {
        tree.all_files()
    } else {
        tree.all_paths()
    };
    Ok(write_lines(&paths)?)
}

#[instrument(skip(tree))]
fn cmd_stats(tree: &PathTree) -> CliResult<()> {
    let stats = tree.stats();
    output::header("Tree statistics");
    output::action("nodes", &stats.node_count);
    output::action("files", &stats.file_count);
    output::action("directories", &stats.directory_count);
    output::action("height", &stats.height);
    Ok(())
}

#[instrument(skip(tree))]
fn cmd_edit(
    tree: &mut PathTree,
    inserts: &[String],
    mkdirs: &[String],
    deletes: &[String],
) -> CliResult<()> {
    if inserts.is_empty() && mkdirs.is_empty() && deletes.is_empty() {
        return Err(CliError::InvalidArgs(
            "edit needs at least one --insert, --mkdir or --delete".to_string(),
        ));
    }

    let before = tree.len();
    output::header("Applying edits");

    let hinted = mkdirs
        .iter()
        .map(|p| (p, true))
        .chain(inserts.iter().map(|p| (p, false)));
    for (path, is_dir) in hinted {
        match tree.insert(path, is_dir) {
            Ok(()) => output::success_detail(&format!("inserted {}", path)),
            Err(e) => output::failure(&e),
        }
    }

    for path in deletes {
        match tree.delete(path) {
            Ok(removed) => output::success_detail(&format!(
                "deleted {} ({} descendants)",
                path,
                removed.descendant_count()
            )),
            Err(e) => output::failure(&e),
        }
    }

    output::action("nodes", &format!("{} -> {}", before, tree.len()));
    Ok(write_lines(&tree.all_paths())?)
}

/// Write one line per item through a locked stdout.
fn write_lines(lines: &[String]) -> InfraResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", line).map_err(|e| InfraError::io("write output", e))?;
    }
    Ok(())
}
