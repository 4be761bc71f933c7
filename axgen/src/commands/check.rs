use clap::Args;
use eyre::{Context, Result};

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops::{self, Project},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: ProjectArgs,

    /// Print the scanned routes as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::load(&self.args.project, &self.args.overrides()).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&project.routes)
                .wrap_err("Failed to serialize routes")?;
            println!("{json}");
            return Ok(());
        }

        let report = ops::check(&project);
        report.render(&mut TerminalOutput::new());
        if !report.is_clean() {
            std::process::exit(1);
        }
        Ok(())
    }
}
