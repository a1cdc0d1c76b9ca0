mod config;
mod core;
mod errors;

pub use self::core::Evaluator;
pub use config::EvaluatorConfig;
pub use errors::CalcError;

#[cfg(test)]
mod tests;
