extern crate parser;

use parser::{Cli, Commands::{Generate, FromYaml}};

#[macro_use]
extern crate log;

use located_error::prelude::*;

/// Unpack the command line arguments and run the appropriate module.
///
/// # Errors
/// - if the requested module fails. The returned error carries the failing operation and path.
pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Generate {common, sims} => {
            info!("Generating {} families of {} children (seed: {})", sims.families, sims.children, sims.seed);
            let outputs = family_sims::run(&common, &sims, cli.quiet)?;
            info!("Dataset written into {}", outputs.dataset.display());
            if let Some(chart) = outputs.chart {
                info!("Genotype distribution chart written into {}", chart.display());
            }
        },

        FromYaml {yaml} => {
            info!("Replaying arguments from {}", yaml.display());
            let mut replay = Cli::deserialize(&yaml)?;
            // Verbosity flags of the current invocation take precedence.
            replay.quiet = cli.quiet;
            if let Generate{common, ..} = &replay.commands {
                std::fs::create_dir_all(&common.output_dir)
                    .with_loc(|| format!("Failed to create output directory {}", common.output_dir.display()))?;
            }
            self::run(replay)?;
        },
    };
    Ok(())
}
