use std::path::PathBuf;

use clap::Parser;
use anyhow::Result;

use super::Fixture;

/// Drives `mendel_sims::run()` with a `generate` command line, writing into a temporary directory.
pub struct MendelRunner {
    args      : Vec<String>,
    common    : parser::Common,
    output_dir: Fixture,
}

impl MendelRunner {
    pub fn run(&self) -> Result<()> {
        mendel_sims::run(self.cli()?)
    }

    pub fn cli(&self) -> Result<parser::Cli> {
        Ok(parser::Cli::try_parse_from(&self.args)?)
    }

    pub fn output_dir(&self) -> &Fixture {
        &self.output_dir
    }

    pub fn dataset(&self) -> PathBuf {
        self.common.dataset_path()
    }

    pub fn chart(&self, gene: &str) -> PathBuf {
        self.common.chart_path(gene)
    }
}

pub struct MendelRunnerBuilder {
    args: Vec<String>,
}

impl Default for MendelRunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MendelRunnerBuilder {
    pub fn new() -> Self {
        let args = ["mendel-sims", "--quiet", "generate"].map(String::from).to_vec();
        Self { args }
    }

    fn arg(mut self, flag: &str, values: &[&str]) -> Self {
        self.args.push(flag.to_string());
        self.args.extend(values.iter().map(|v| v.to_string()));
        self
    }

    pub fn genes(self, genes: &[&str]) -> Self {
        self.arg("--genes", genes)
    }

    pub fn genotypes(self, genotypes: &[&str]) -> Self {
        self.arg("--genotypes", genotypes)
    }

    pub fn families(self, n: u32) -> Self {
        self.arg("--families", &[&n.to_string()])
    }

    pub fn children(self, k: u32) -> Self {
        self.arg("--children", &[&k.to_string()])
    }

    pub fn seed(self, seed: u64) -> Self {
        self.arg("--seed", &[&seed.to_string()])
    }

    pub fn output(self, filename: &str) -> Self {
        self.arg("--output", &[filename])
    }

    pub fn chart_gene(self, gene: &str) -> Self {
        self.arg("--chart-gene", &[gene])
    }

    pub fn chart_order(self, order: &str) -> Self {
        self.arg("--chart-order", &[order])
    }

    pub fn no_chart(self) -> Self {
        self.arg("--no-chart", &[])
    }

    /// Reserve a temporary output directory and validate the command line.
    pub fn build(self) -> Result<MendelRunner> {
        let output_dir = Fixture::blank("mendel-test-output");
        let mut args = self.args;
        args.extend(["--output-dir".to_string(), output_dir.to_string()]);

        let common = match parser::Cli::try_parse_from(&args)?.commands {
            parser::Commands::Generate { common, .. } => common,
            parser::Commands::FromYaml { .. } => anyhow::bail!("Expected a generate command"),
        };
        Ok(MendelRunner { args, common, output_dir })
    }
}
