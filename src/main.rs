//! Numcore - Freestanding Numeric Runtime Core
//!
//! Command line front end for evaluating registered functions, drawing random
//! values, and self-checking the wide-integer intrinsics.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use numcore::config::{NumcoreConfig, OutputFormat, CONFIG_FILE_NAME};
use numcore::runtime::{
    decode_ret, encode_arg, entropy_from_config, CallError, EntropySource, FnCategory,
    FunctionRegistry, SecureRandom, SeededEntropy, Value,
};
use numcore::verify::verify_wide;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "numcore")]
#[command(version)]
#[command(about = "Freestanding numeric core: 64-bit intrinsics, f32 math, secure random", long_about = None)]
struct Cli {
    /// Config file (default: search for numcore.toml from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a registered function
    Call {
        /// Function name (see `numcore list`)
        name: String,

        /// Arguments: decimal, negative, 0x hex, or float text
        #[arg(allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// List registered functions
    List {
        /// Only show one category (wide, bits, arithmetic, rounding, trig, explog, utility, constant, random)
        #[arg(long)]
        category: Option<FnCategory>,
    },

    /// Draw random values
    Random {
        /// What to draw
        #[arg(value_enum)]
        kind: RandomKind,

        /// Number of values
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Use a reproducible seeded source
        #[arg(long)]
        seed: Option<u64>,

        /// Range start (inclusive) for `range` and `range64`
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,

        /// Range end (exclusive) for `range` and `range64`
        #[arg(long, default_value = "100", allow_negative_numbers = true)]
        end: i64,
    },

    /// Check the wide-integer intrinsics against native arithmetic
    Verify {
        /// Number of random operand pairs
        #[arg(long, default_value = "10000")]
        samples: u64,

        /// Use a reproducible seeded source
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the effective configuration
    Config {
        /// Write a default numcore.toml instead
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RandomKind {
    Int,
    Int64,
    Float,
    Bool,
    Range,
    Range64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let init = matches!(cli.command, Commands::Config { init: true });
    let config = match &cli.config {
        // --config names the file to create
        Some(_) if init => NumcoreConfig::default(),
        Some(path) => NumcoreConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => NumcoreConfig::load_from_cwd().context("Failed to load numcore.toml")?,
    };

    // Set up logging; stdout is reserved for results
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        config.log_level()?
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let json = cli.json || config.output.format == OutputFormat::Json;

    match cli.command {
        Commands::Call { ref name, ref args } => cmd_call(&config, json, name, args),
        Commands::List { category } => cmd_list(json, category),
        Commands::Random {
            kind,
            count,
            seed,
            start,
            end,
        } => cmd_random(&config, json, kind, count, seed, start, end),
        Commands::Verify { samples, seed } => cmd_verify(&config, json, samples, seed),
        Commands::Config { init } => cmd_config(&cli, &config, json, init),
    }
}

/// The configured random source, with `--seed` taking precedence.
fn make_random(config: &NumcoreConfig, seed: Option<u64>) -> SecureRandom<Box<dyn EntropySource>> {
    let source: Box<dyn EntropySource> = match seed {
        Some(seed) => Box::new(SeededEntropy::new(seed)),
        None => entropy_from_config(&config.random),
    };
    tracing::debug!("Using {} entropy source", source.name());
    SecureRandom::new(source)
}

fn render_values(values: &[Value], precision: usize) -> String {
    values
        .iter()
        .map(|v| v.render(precision))
        .collect::<Vec<_>>()
        .join(" ")
}

fn cmd_call(config: &NumcoreConfig, json: bool, name: &str, args: &[String]) -> Result<()> {
    let registry = FunctionRegistry::with_random(Arc::new(make_random(config, None)));
    let entry = registry
        .get_by_name(name)
        .ok_or_else(|| CallError::UnknownName(name.to_string()))?;

    let kinds = &entry.signature.args;
    if args.len() != kinds.len() {
        return Err(CallError::InvalidArgCount {
            expected: kinds.len(),
            got: args.len(),
        })
        .with_context(|| format!("Calling {}", name));
    }

    let regs = kinds
        .iter()
        .zip(args)
        .map(|(&kind, text)| encode_arg(kind, text))
        .collect::<Result<Vec<_>, _>>()?;

    let outputs = registry.call(entry.id, &regs)?;
    let values: Vec<Value> = entry
        .signature
        .returns
        .iter()
        .zip(outputs)
        .map(|(&kind, reg)| decode_ret(kind, reg))
        .collect();

    if json {
        let out = json!({
            "function": name,
            "args": args,
            "result": values,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", render_values(&values, config.output.precision));
    }
    Ok(())
}

fn cmd_list(json: bool, category: Option<FnCategory>) -> Result<()> {
    let registry = FunctionRegistry::new();
    let entries = match category {
        Some(category) => registry.list_by_category(category),
        None => registry.list(),
    };

    if json {
        let out: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "id": e.id,
                    "name": e.signature.name,
                    "category": e.signature.category,
                    "args": e.signature.args,
                    "returns": e.signature.returns,
                    "description": e.signature.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{:<5} {:<24} {:<12} {:<28} DESCRIPTION", "ID", "NAME", "CATEGORY", "SIGNATURE");
    println!("{:-<5} {:-<24} {:-<12} {:-<28} {:-<11}", "", "", "", "", "");
    for e in &entries {
        let args: Vec<String> = e.signature.args.iter().map(|k| k.to_string()).collect();
        let returns: Vec<String> = e.signature.returns.iter().map(|k| k.to_string()).collect();
        let signature = format!("({}) -> {}", args.join(", "), returns.join(", "));
        println!(
            "{:<5} {:<24} {:<12} {:<28} {}",
            e.id,
            e.signature.name,
            e.signature.category.to_string(),
            signature,
            e.signature.description
        );
    }
    println!();
    println!("{} functions", entries.len());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_random(
    config: &NumcoreConfig,
    json: bool,
    kind: RandomKind,
    count: usize,
    seed: Option<u64>,
    start: i64,
    end: i64,
) -> Result<()> {
    let rng = make_random(config, seed);

    let (start32, end32) = match kind {
        RandomKind::Range => (
            i32::try_from(start).context("--start does not fit in 32 bits")?,
            i32::try_from(end).context("--end does not fit in 32 bits")?,
        ),
        _ => (0, 0),
    };

    let values: Vec<Value> = (0..count)
        .map(|_| match kind {
            RandomKind::Int => Value::Int(rng.random_i32() as i64),
            RandomKind::Int64 => Value::Int(rng.random_i64()),
            RandomKind::Float => Value::Float(rng.random_float()),
            RandomKind::Bool => Value::Bool(rng.random_bool()),
            RandomKind::Range => Value::Int(rng.random_range(start32, end32) as i64),
            RandomKind::Range64 => Value::Int(rng.random_range64(start, end)),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for value in &values {
            println!("{}", value.render(config.output.precision));
        }
    }
    Ok(())
}

fn cmd_verify(config: &NumcoreConfig, json: bool, samples: u64, seed: Option<u64>) -> Result<()> {
    let rng = make_random(config, seed);
    let report = verify_wide(&rng, samples);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Wide-integer verification");
        println!("=========================");
        println!("  Samples:  {}", report.samples);
        println!("  Checks:   {}", report.checks);
        println!("  Failures: {}", report.failures.len());
        for m in report.failures.iter().take(10) {
            println!(
                "  {}({}, {}): expected {:?}, got {:?}",
                m.operation, m.a, m.b, m.expected, m.actual
            );
        }
    }

    if !report.passed() {
        bail!("{} mismatches found", report.failures.len());
    }
    Ok(())
}

fn cmd_config(cli: &Cli, config: &NumcoreConfig, json: bool, init: bool) -> Result<()> {
    if init {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        if path.exists() {
            bail!("{} already exists", path.display());
        }
        NumcoreConfig::default()
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Created {}", path.display());
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
