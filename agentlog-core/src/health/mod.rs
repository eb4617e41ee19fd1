mod checks;
mod report;

#[cfg(test)]
mod tests;

pub use checks::*;
pub use report::*;
