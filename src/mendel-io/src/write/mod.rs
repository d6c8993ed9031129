pub mod generic_writer;
pub use generic_writer::{GenericWriter, WRITER_SEPARATOR};

pub mod bar_chart;
pub use bar_chart::BarChart;
