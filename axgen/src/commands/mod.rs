mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use axgen_manifest::Overrides;
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for axgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "axgen")]
#[command(version)]
#[command(about = "Generate a typed axios client from a server's route folders")]
pub(crate) struct Cli {
    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client package next to the project
    Generate(GenerateCommand),

    /// Scan the routes and report problems without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Project selection and the settings that override axiosClient.config.json.
#[derive(Args, Debug)]
pub(crate) struct ProjectArgs {
    /// Project folder holding package.json and src/routes
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Client configuration file, relative to the project
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<String>,

    /// Folder of the generated client, relative to the project
    #[arg(long)]
    pub folder_name: Option<String>,

    /// `name` of the generated package.json
    #[arg(long)]
    pub package_name: Option<String>,

    /// tsconfig whose path aliases are copied to the client
    #[arg(long, value_name = "FILE")]
    pub ts_config_path: Option<String>,

    /// Project file or folder re-exported from the client index
    #[arg(short, long = "extra-export", value_name = "PATH")]
    pub extra_exports: Vec<String>,

    /// Only scan routes under this folder of src/routes
    #[arg(long = "included-route", value_name = "FOLDER")]
    pub included_routes: Vec<String>,

    /// Skip routes under this folder of src/routes
    #[arg(long = "excluded-route", value_name = "FOLDER")]
    pub excluded_routes: Vec<String>,
}

impl ProjectArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config_file.clone(),
            folder_name: self.folder_name.clone(),
            package_name: self.package_name.clone(),
            ts_config_path: self.ts_config_path.clone(),
            extra_exports: self.extra_exports.clone(),
            included_routes: self.included_routes.clone(),
            excluded_routes: self.excluded_routes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_repeated_flags_collect() {
        let cli = Cli::try_parse_from([
            "axgen",
            "-vv",
            "generate",
            "--project",
            "api",
            "-e",
            "src/shared/types.ts",
            "-e",
            "src/shared/errors.ts",
            "--excluded-route",
            "private",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert!(cmd.dry_run);
        let overrides = cmd.args.overrides();
        assert_eq!(
            overrides.extra_exports,
            vec!["src/shared/types.ts", "src/shared/errors.ts"]
        );
        assert_eq!(overrides.excluded_routes, vec!["private"]);
        assert!(overrides.folder_name.is_none());
        assert_eq!(cmd.args.project, PathBuf::from("api"));
    }
}
