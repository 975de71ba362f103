use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kiln_manifest::KilnToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,

    /// Only explain this declaration (qualified or simple name)
    pub declaration: Option<String>,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let kiln_toml = KilnToml::open(&self.config).unwrap_or_exit();

        let report = ops::explain(
            kiln_toml.manifest(),
            kiln_toml.path(),
            self.declaration.as_deref(),
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
