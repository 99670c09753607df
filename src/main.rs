use std::path::PathBuf;

use clap::Parser;
use jira_version_sync::commands::{run_sync, SyncParams};
use jira_version_sync::core::error::print_error;

/// Sync Jenkins core and plugin releases into a JIRA project
#[derive(Parser)]
#[command(name = "jira-version-sync")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// The base URL for the JIRA instance to add versions to
  #[arg(long = "jira-base-url")]
  jira_base_url: String,

  /// Exclude alpha/beta releases
  #[arg(long = "no-experimental")]
  no_experimental: bool,

  /// JIRA project key that receives the version entries
  #[arg(long = "project-key", default_value = "JENKINS")]
  project_key: String,

  /// Base URL of the update-centre mirror to read releases from
  #[arg(long = "update-center-url", default_value = "https://updates.jenkins.io")]
  update_center_url: String,

  /// Credentials properties file (default: ~/.jenkins-ci.org)
  #[arg(long = "credentials-file")]
  credentials_file: Option<PathBuf>,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
}

fn main() {
  // Malformed arguments exit 1, not clap's default 2
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      // --help/--version land here too and still exit 0
      let code = if e.use_stderr() { 1 } else { 0 };
      let _ = e.print();
      std::process::exit(code);
    }
  };

  let params = SyncParams {
    jira_base_url: cli.jira_base_url,
    update_center_url: cli.update_center_url,
    project_key: cli.project_key,
    no_experimental: cli.no_experimental,
    credentials_file: cli.credentials_file,
  };

  if let Err(err) = run_sync(params) {
    print_error(&err);
    std::process::exit(err.exit_code().as_i32());
  }
}
