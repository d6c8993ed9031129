use std::{
    fs::File,
    path::{Path, PathBuf},
    fmt::{self, Display, Formatter},
    ffi::OsStr,
};

use located_error::prelude::*;

use clap::{Parser, Subcommand, Args, ArgEnum};
use serde::{Serialize, Deserialize};
use log::debug;

mod error;
pub use error::ParserError;


/// Default name of the generated dataset.
pub const DEFAULT_DATASET_FILENAME: &str = "multi_gene_family_genotypes.csv";

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="mendel-sims", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// mendel-sims: generate synthetic family genotype datasets through Mendelian inheritance simulations
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed, and the genotype
    /// distribution chart is no longer echoed to the terminal.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Serialize command line arguments within a `.yaml` file.
    ///
    /// # Behavior
    /// - File naming follows the convention '{current time}-{module name}.yaml'. current time follows the format
    ///   `YYYY`-`MM`-`DD`T`hhmmss`
    /// - File is written at the root of the user-provided `--output-dir` folder.
    /// - Returns the path of the written file, or `None` when the subcommand does not produce any output.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to serialize `Self` to a string.
    /// - if the `.yaml` file cannot be written within `--output-dir`
    pub fn serialize(&self) -> Result<Option<PathBuf>> {
        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::Serialize)
            .loc("While serializing command line arguments")?;

        debug!("\n---- Command line args ----\n{}\n---", serialized);

        let current_time = chrono::offset::Local::now().format("%Y-%m-%dT%H%M%S").to_string();
        let output_file = match &self.commands {
            Commands::Generate{common, ..} => common.output_dir.join(format!("{current_time}-generate.yaml")),
            Commands::FromYaml{..}         => return Ok(None),
        };

        std::fs::write(&output_file, serialized)
            .with_loc(|| format!("Unable to serialize arguments into {}", output_file.display()))?;
        Ok(Some(output_file))
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` does not exist, or does not carry read permissions
    /// - if `serde_yaml` fails to parse the provided file into `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let file = File::open(yaml)
            .with_loc(|| format!("Failed to open {}", yaml.display()))?;
        serde_yaml::from_reader(file)
            .map_err(ParserError::Deserialize)
            .with_loc(|| format!("Unable to deserialize arguments from {}", yaml.display()))
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Generate a synthetic family genotype dataset.
    ///
    /// Parents are assigned random genotypes for each gene, and children genotypes are simulated
    /// through Mendelian inheritance. The resulting dataset is written as a comma-separated file,
    /// along with a bar chart summarizing the genotype distribution of one gene.
    Generate {
        #[clap(flatten)]
        common: Common,
        #[clap(flatten)]
        sims: FamilySims,
    },

    /// Run mendel-sims using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply a mendel-sims command using the exact same parameters
    /// and arguments (including the seed).
    FromYaml {
        yaml: PathBuf,
    },
}

/// Ordering of the categories within the genotype distribution chart.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ArgEnum, Serialize, Deserialize)]
pub enum ChartOrder {
    #[default]
    Count,
    Genotype,
}

impl Display for ChartOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count    => write!(f, "descending count"),
            Self::Genotype => write!(f, "genotype"),
        }
    }
}

#[derive(Args, Debug, Default, Serialize, Deserialize)]
pub struct Common {
    /// Output directory where results will be written.
    ///
    /// Note that mendel-sims will create the specified leaf directory if it is not present, but does not
    /// allow itself from creating parent directories.
    #[clap(short, long, default_value("mendel-output"), parse(try_from_os_str=valid_output_dir))]
    pub output_dir: PathBuf,

    /// Filename of the generated dataset.
    ///
    /// The file is written within --output-dir. Any pre-existing file with the same name is overwritten.
    #[clap(short='f', long, default_value(DEFAULT_DATASET_FILENAME), parse(try_from_str=valid_filename))]
    pub output: String,

    /// Gene whose children genotype distribution should be charted.
    ///
    /// Defaults to the first gene provided through --genes.
    #[clap(short='c', long, required(false))]
    pub chart_gene: Option<String>,

    /// Ordering of the genotype distribution chart categories.
    ///
    /// count: sort categories by descending count. genotype: sort categories by genotype (AA, Aa, aa)
    #[clap(long, arg_enum, default_value("count"))]
    pub chart_order: ChartOrder,

    /// Do not render the genotype distribution chart.
    #[clap(long)]
    pub no_chart: bool,
}

impl Common {
    /// Full path of the output dataset.
    pub fn dataset_path(&self) -> PathBuf {
        self.output_dir.join(&self.output)
    }

    /// Full path of the rendered chart for a given gene: '{dataset file stem}.{gene}.chart.txt'
    pub fn chart_path(&self, gene: &str) -> PathBuf {
        let stem = Path::new(&self.output)
            .file_stem()
            .map_or_else(|| self.output.clone(), |stem| stem.to_string_lossy().into_owned());
        self.output_dir.join(format!("{stem}.{gene}.chart.txt"))
    }
}

/// Family simulation parameters.
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct FamilySims {
    /// Ordered list of simulated genes.
    ///
    /// Order matters: the output dataset columns follow the order in which genes are provided.
    #[clap(short='g', long, multiple_values(true), default_values(&["Gene1", "Gene2", "Gene3"]))]
    pub genes: Vec<String>,

    /// Set of genotypes parents may be assigned to.
    ///
    /// Parent genotypes are drawn uniformly from this set, independently for each gene.
    #[clap(short='G', long, multiple_values(true), default_values(&["AA", "Aa", "aa"]))]
    pub genotypes: Vec<String>,

    /// Number of simulated families.
    #[clap(short='n', long, default_value("100"), parse(try_from_str=parse_positive))]
    pub families: u32,

    /// Number of children per family.
    #[clap(short='k', long, default_value("3"), parse(try_from_str=parse_positive))]
    pub children: u32,

    /// Provide the RNG with a set seed.
    #[clap(long, required(false), default_value_t=fastrand::u64(u64::MIN..=u64::MAX))]
    pub seed: u64,
}

impl Default for FamilySims {
    fn default() -> Self {
        Self {
            genes    : ["Gene1", "Gene2", "Gene3"].map(String::from).to_vec(),
            genotypes: ["AA", "Aa", "aa"].map(String::from).to_vec(),
            families : 100,
            children : 3,
            seed     : fastrand::u64(..),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FileEntity {File, Directory}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File      => write!(f, "File"),
            Self::Directory => write!(f, "Directory"),
        }
    }
}

impl FileEntity {
    fn validate(&self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File      => path.is_file(),
            Self::Directory => path.is_dir()
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(*self, path.display().to_string()))
        }
    }
}

fn valid_output_dir(s: &OsStr) -> Result<PathBuf> {
    let path = Path::new(s);
    if ! path.exists() {
        std::fs::create_dir(path)
            .with_loc(|| format!("Failed to create output directory {}", path.display()))?;
    }
    FileEntity::Directory.validate(path).loc("While checking for directory validity")?;
    Ok(PathBuf::from(s))
}

fn valid_filename(s: &str) -> Result<String> {
    let path = Path::new(s);
    match path.file_name() {
        Some(name) if name == path.as_os_str() => Ok(s.to_string()),
        _ => Err(ParserError::InvalidFilename(s.to_string())).loc("While parsing --output")
    }
}

fn parse_positive(s: &str) -> Result<u32> {
    let value = s.parse::<u32>()
        .map_err(|err| ParserError::ParseArg{arg: s.to_string(), err: err.to_string()})?;
    match value {
        0 => Err(ParserError::NonPositive(s.to_string())).loc("While parsing a positive integer"),
        _ => Ok(value)
    }
}
