use anyhow::{Context, Result, ensure};
use arithmetix::{Evaluator, EvaluatorConfig};
use clap::{Parser, ValueEnum};
use log::{debug, info};

/// Expression evaluated when none is given on the command line
pub const DEMO_EXPRESSION: &str = "(1+2)*3/4";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Arithmetix - Evaluate arithmetic expressions
#[derive(Parser, Debug)]
#[command(name = "arithmetix")]
#[command(about = "Evaluate arithmetic expressions with + - * / and parentheses")]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate (default: the demonstration expression)
    pub expressions: Vec<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Deepest parenthesis nesting accepted
    #[arg(long, default_value_t = EvaluatorConfig::default().max_depth)]
    pub max_depth: usize,

    /// Also print each parsed expression in canonical form
    #[arg(long)]
    pub show_tree: bool,
}

/// Configuration for the CLI application
#[derive(Debug)]
pub struct CliConfig {
    pub expressions: Vec<String>,
    pub log_level: LogLevel,
    pub evaluator: EvaluatorConfig,
    pub show_tree: bool,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    ensure!(args.max_depth > 0, "--max-depth must be at least 1");

    let expressions = if args.expressions.is_empty() {
        vec![DEMO_EXPRESSION.to_string()]
    } else {
        args.expressions
    };

    Ok(CliConfig {
        expressions,
        log_level: args.log_level,
        evaluator: EvaluatorConfig {
            max_depth: args.max_depth,
            ..EvaluatorConfig::default()
        },
        show_tree: args.show_tree,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Format one evaluation outcome the way it is printed
pub fn render_outcome(outcome: &Result<f64, arithmetix::CalcError>) -> String {
    match outcome {
        Ok(value) => format!("Result: {}", value),
        Err(err) => format!("Error: {}", err),
    }
}

/// Run the main application logic
///
/// Evaluation failures are printed and do not make the process fail.
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let evaluator = Evaluator::with_config(config.evaluator);
    debug!("Evaluator configuration: {:?}", evaluator.config());
    info!("Evaluating {} expression(s)", config.expressions.len());

    if config.show_tree {
        for expression in &config.expressions {
            let outcome = evaluator.parse(expression).and_then(|tree| {
                println!("Tree: {}", tree);
                evaluator.evaluate_tree(&tree)
            });
            println!("{}", render_outcome(&outcome));
        }
    } else {
        for outcome in evaluator.evaluate_batch(&config.expressions) {
            println!("{}", render_outcome(&outcome));
        }
    }

    Ok(())
}
