#[cfg(test)]
mod fixture;
pub use fixture::Fixture;

#[cfg(test)]
mod mendel_runner;
pub use mendel_runner::MendelRunnerBuilder;

#[macro_export]
macro_rules! read_lines {
    ($file:expr) => {
        std::fs::read_to_string($file)
            .unwrap_or_else(|_| panic!("Failed to open {:?}", $file))
            .lines()
            .map(String::from)
            .collect::<Vec<String>>()
    };
}
