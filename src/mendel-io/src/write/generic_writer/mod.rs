use std::{fs::File, io::{Write, BufWriter}, path::Path, fmt::Display};
use anyhow::Result;
use itertools::Itertools;
use log::trace;

use located_error::LocatedError;

pub mod error;
pub use error::WriterError;

/// THE field separator used for this generic writer.
pub const WRITER_SEPARATOR: &str = ",";

/// A generic line writer.
/// - source: Boxed `BufWriter` (can either handle file-writing, or stdout).
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> GenericWriter<'a>{
    /// Instantiate a new `Writer`, linked to a file. Any pre-existing file at `path` is truncated.
    /// Provide `None` to write to stdout instead.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<GenericWriter<'a>>{
        Ok(GenericWriter{ source: match path {
            Some(path) => {
                let path = path.as_ref();
                trace!("Opening {} for writing", path.display());
                let file = File::create(path)
                    .map_err(WriterError::Open)
                    .with_loc(|| format!("While creating file {}", path.display()))?;
                BufWriter::new(Box::new(file))
            },
            None => {
                BufWriter::new(Box::new(std::io::stdout()))
            }
        }})
    }

    /// Write a single delimited record: fields are joined with `WRITER_SEPARATOR`.
    ///
    /// # Errors
    /// - if the record fails to get written within the underlying buffer.
    pub fn write_record<T, I>(&mut self, fields: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: Display,
    {
        writeln!(self.source, "{}", fields.into_iter().join(WRITER_SEPARATOR))
            .map_err(WriterError::IOError)
            .loc("While writing record")
    }

    /// Write the contents of a generic iterator within a file/stdout.
    /// one Iteration step = one line.
    ///
    /// # Errors
    /// - If any of the Items within `iter` fails to get written within the file.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: Display,
    {
        iter.into_iter()
            .try_for_each(|obj| writeln!(self.source, "{obj}"))
            .map_err(WriterError::IOError)
            .loc("While writing contents into file")?;

        self.flush()
    }

    /// Flush the inner buffer.
    ///
    /// # Errors
    /// - if the inner writer fails to flush its contents.
    pub fn flush(&mut self) -> Result<()> {
        self.source.flush()
            .map_err(WriterError::IOError)
            .loc("While flushing buffer contents of Writer")
    }
}
