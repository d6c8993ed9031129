use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use located_error::prelude::*;
use log::{debug, info};

pub mod config;
pub use config::SimConfig;

pub mod family;
pub mod sampler;
pub mod inheritance;

pub mod dataset;
pub use dataset::{Dataset, DatasetAssembler};

pub mod sink;

#[cfg(test)]
mod tests;

/// Output files of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutputs {
    pub dataset: PathBuf,
    pub chart  : Option<PathBuf>,
}

/// Generate a family genotype dataset, write it and chart the genotype distribution of one gene.
///
/// # Arguments
/// - `common`: output parameters (directory, filenames, chart options)
/// - `sims`  : simulation parameters
/// - `quiet` : do not echo the chart to stdout, and do not display progress.
///
/// # Errors
/// - if the simulation parameters are invalid, or if `--chart-gene` is not a simulated gene.
/// - if any of the output files cannot be written.
pub fn run(common: &parser::Common, sims: &parser::FamilySims, quiet: bool) -> Result<RunOutputs> {
    // ---- Validate parameters before anything gets generated.
    let config = SimConfig::try_from(sims).loc("Failed to generate dataset")?;
    info!("Simulation parameters: {config}");

    let chart_gene = match &common.chart_gene {
        Some(gene) => gene.clone(),
        None       => config.genes()[0].to_string(),
    };
    let Some(chart_gene_idx) = config.gene_index(&chart_gene) else {
        return Err(dataset::DatasetError::UnknownGene(chart_gene))
            .loc("Failed to generate dataset: invalid --chart-gene");
    };

    // ---- Generate.
    let progress = (!quiet).then(|| family_progress_bar(u64::from(config.num_families())));
    let dataset = DatasetAssembler::new(&config)
        .assemble(progress.as_ref())
        .loc("Failed to generate dataset")?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    for (gene_idx, gene) in dataset.genes().iter().enumerate() {
        let [(_, dominant), (_, recessive)] = dataset.phenotype_counts(gene_idx);
        info!("{gene}: {dominant} Dominant / {recessive} Recessive children");
    }

    // ---- Write.
    let dataset_path = common.dataset_path();
    dataset.write(&dataset_path)
        .with_loc(|| format!("Failed to write output dataset {}", dataset_path.display()))?;

    let chart = match common.no_chart {
        true  => {
            debug!("--no-chart was provided. Skipping genotype distribution chart.");
            None
        },
        false => {
            let chart_path = common.chart_path(&chart_gene);
            let chart = dataset.genotype_chart(chart_gene_idx, common.chart_order)
                .loc("Failed to generate genotype distribution chart")?;

            info!("Writing {chart_gene} genotype distribution chart ({}) into {}", common.chart_order, chart_path.display());
            sink::write_chart(&chart, Some(&chart_path))
                .with_loc(|| format!("Failed to write output chart {}", chart_path.display()))?;
            if !quiet {
                sink::write_chart(&chart, None).loc("Failed to write chart to stdout")?;
            }
            Some(chart_path)
        }
    };

    Ok(RunOutputs{dataset: dataset_path, chart})
}

/// Progress bar tracking simulated families. Attached to the global logger when available,
/// so that log records do not tear the bar.
fn family_progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} families")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    let pb = ProgressBar::new(len).with_style(style);
    match logger::Logger::multi() {
        Some(multi) => multi.add(pb),
        None        => pb,
    }
}
