//! hyvadump - Hyvä CMS component dumper
//!
//! A read-only command line tool that collects the `etc/hyva_cms/components.json`
//! manifest of every enabled module in a Magento installation and prints the
//! merged component list to stdout as pretty JSON.

use clap::Parser;
use console::Style;

mod cli;
mod discovery;
mod emit;
mod error;
mod merge;
mod project;
mod registry;
mod resolver;
mod vfs;

use cli::Cli;
use error::{DumpError, Result};
use registry::ModuleRegistry;
use vfs::OsFs;

fn run(cli: &Cli) -> Result<()> {
    let fs = OsFs;
    let cwd = std::env::current_dir()?;
    let start = match &cli.root {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    let root = project::find_root(&fs, &start).ok_or_else(|| DumpError::RootNotFound {
        start: start.display().to_string(),
    })?;

    let registry = ModuleRegistry::load(&fs, &root)?;
    let fragments = discovery::discover_fragments(&fs, &root);
    let by_module = resolver::map_fragments(&fs, &root, &fragments);
    let merged = merge::merge_components(&fs, &registry.enabled_names(), &by_module);

    // Warnings go out before the payload so they cannot interleave with it.
    let warning = Style::new().yellow().bold().for_stderr();
    for skipped in &merged.skipped {
        eprintln!("{} {}", warning.apply_to("Warning:"), skipped);
    }

    emit::write(&mut std::io::stdout().lock(), &merged.components)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        let error = Style::new().red().bold().for_stderr();
        eprintln!("{} {}", error.apply_to("Error:"), e);
        std::process::exit(1);
    }
}
