use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use kiln_manifest::KilnToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to `project.output` next to kiln.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated artifacts without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let kiln_toml = KilnToml::open(&self.config).unwrap_or_exit();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| kiln_toml.output_dir());

        kiln_codegen_java::install();

        let report = ops::bake(
            kiln_toml.manifest(),
            BakeOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.failures.is_empty() {
            bail!("{} artifact(s) could not be generated", report.failures.len());
        }
        Ok(())
    }
}
