//! CLI definition using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// hyvadump - Hyvä CMS component dumper
///
/// Collect and merge the Hyvä CMS component definitions of every enabled
/// module in a Magento installation.
#[derive(Parser, Debug)]
#[command(
    name = "hyvadump",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Dump merged Hyvä CMS component definitions as JSON",
    long_about = "hyvadump locates the surrounding Magento installation, reads the enabled module \
                  list from app/etc/config.php, collects every module's \
                  etc/hyva_cms/components.json manifest from app/code and vendor, and prints the \
                  merged component list to stdout as pretty-printed JSON.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  hyvadump                        \x1b[90m# Dump from the enclosing project\x1b[0m\n   \
                  hyvadump -C /var/www/magento    \x1b[90m# Dump a specific installation\x1b[0m\n   \
                  hyvadump > components.json      \x1b[90m# Capture the merged manifest\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Directory to start the project root search from (defaults to the
    /// current directory)
    #[arg(long = "root", short = 'C', value_name = "DIR")]
    pub root: Option<PathBuf>,
}
