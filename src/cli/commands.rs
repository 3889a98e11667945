//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{parse_params, ApplicationError};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{config_template, global_config_path, local_config_path, Settings};
use crate::infrastructure::traits::SubPageFinder;
use crate::infrastructure::{InfraError, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config_dir.as_deref())?;
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Render { pages, params }) => {
            cmd_render(&container, pages.as_deref(), params)
        }
        Some(Commands::Tree { pages, page }) => cmd_tree(&container, pages.as_deref(), page),
        Some(Commands::Pages { pages, page }) => cmd_pages(&container, pages.as_deref(), page),
        Some(Commands::Config { command }) => {
            cmd_config(&container, command, cli.config_dir.as_deref())
        }
        Some(Commands::Completion { shell }) => {
            cmd_completion(*shell);
            Ok(())
        }
        None => Ok(()),
    }
}

/// `--pages` wins over the configured pages file.
fn resolve_pages_file(container: &ServiceContainer, pages: Option<&Path>) -> CliResult<PathBuf> {
    pages
        .map(Path::to_path_buf)
        .or_else(|| container.settings.pages_file.clone())
        .ok_or_else(|| {
            CliError::Usage("no pages file: pass --pages or set pages_file in config".into())
        })
}

fn load_finder(
    container: &ServiceContainer,
    pages: Option<&Path>,
) -> CliResult<Arc<dyn SubPageFinder>> {
    let pages_file = resolve_pages_file(container, pages)?;
    let index = container.page_index(&pages_file)?;
    Ok(Arc::new(index))
}

#[instrument(level = "debug", skip(container))]
fn cmd_render(
    container: &ServiceContainer,
    pages: Option<&Path>,
    params: &[String],
) -> CliResult<()> {
    let request = parse_params(params, &container.settings.render.to_options())?;
    let service = container.subpage_service(load_finder(container, pages)?);

    let text = service.handle(&request)?;
    debug!("cmd_render: {} bytes", text.len());
    output::raw(&text);
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_tree(container: &ServiceContainer, pages: Option<&Path>, page: &str) -> CliResult<()> {
    let service = container.subpage_service(load_finder(container, pages)?);
    let root = service.hierarchy_for(page)?;
    debug!(
        "cmd_tree: {} has {} pages below it, {} levels",
        root.path,
        root.descendant_count(),
        root.depth()
    );
    output::info(&root.to_tree_string());
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_pages(container: &ServiceContainer, pages: Option<&Path>, page: &str) -> CliResult<()> {
    let target = container
        .normalizer
        .normalize(page)
        .map_err(ApplicationError::from)?;
    let finder = load_finder(container, pages)?;
    let sub_pages = finder.sub_pages_for(&target);
    if sub_pages.is_empty() {
        output::warning(&format!("\"{}\" has no sub pages.", target));
    }
    for path in sub_pages {
        output::info(&path);
    }
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    config_dir: Option<&Path>,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::raw(&container.settings.to_toml()?);
        }
        ConfigCommands::Init => {
            output::raw(config_template());
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory on this platform"),
            }
            let local_dir = match config_dir {
                Some(dir) => dir.to_path_buf(),
                None => std::env::current_dir()
                    .map_err(|e| InfraError::io("current directory", e))?,
            };
            output::action("local", &local_config_path(&local_dir).display());
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
}
