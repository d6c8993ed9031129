use std::path::Path;

use located_error::prelude::*;
use log::info;
use mendel_io::write::{BarChart, GenericWriter};
use parser::ChartOrder;

use crate::dataset::{Dataset, DatasetError};

/// Title of the genotype distribution chart of a given gene.
pub fn chart_title(gene: &str) -> String {
    format!("{gene} Genotype Distribution (All Children)")
}

impl Dataset {
    /// Write the dataset as a comma-separated file: one header line, then one line per child.
    /// Any pre-existing file at `path` is overwritten.
    ///
    /// # Errors
    /// - if `path` cannot be created, or if writing any record fails.
    pub fn write(&self, path: &Path) -> Result<()> {
        info!("Writing dataset ({} rows) into {}", self.len(), path.display());
        let mut writer = GenericWriter::new(Some(path))
            .and_then(|mut writer| {
                writer.write_record(self.header())?;
                for row in self.rows() {
                    writer.write_record(row.fields())?;
                }
                Ok(writer)
            })
            .with_loc(|| DatasetError::WriteDataset)?;
        writer.flush().with_loc(|| format!("While flushing {}", path.display()))
    }

    /// Build the children genotype distribution chart of the gene found at `gene_idx`.
    ///
    /// # Errors
    /// - if `gene_idx` is out of bounds.
    pub fn genotype_chart(&self, gene_idx: usize, order: ChartOrder) -> Result<BarChart> {
        let gene = self.genes().get(gene_idx)
            .with_loc(|| format!("While building genotype distribution chart: no gene at index {gene_idx}"))?;
        let mut chart = BarChart::new(chart_title(gene.name()));
        for (genotype, count) in self.genotype_counts(gene_idx, order) {
            chart.push(genotype, count);
        }
        Ok(chart)
    }
}

/// Render a chart into a file, or to stdout if `path` is `None`.
///
/// # Errors
/// - if the target cannot be opened or written into.
pub fn write_chart(chart: &BarChart, path: Option<&Path>) -> Result<()> {
    GenericWriter::new(path)
        .and_then(|mut writer| writer.write_iter([chart]))
        .with_loc(|| DatasetError::WriteChart)
}
