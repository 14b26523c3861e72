//! curl-ternary - CLI Entry Point
//!
//! Commands:
//! - `curl-ternary decode <trytes>` - Show the trits of a tryte string
//! - `curl-ternary encode <trits>` - Pack trits into trytes
//! - `curl-ternary add <trytes> <n>` - Add to a tryte counter
//! - `curl-ternary increment <trytes>` - Increment a tryte counter
//! - `curl-ternary truth` - Print the substitution table

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use curl_ternary::codec::{self, CodecError};
use curl_ternary::ternary::{arith, Trit};
use curl_ternary::truth::{self, TRUTH_TABLE};

#[derive(Parser)]
#[command(name = "curl-ternary")]
#[command(version)]
#[command(about = "Balanced ternary tryte/trit tools for the Curl hash")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a tryte string into trits
    Decode {
        /// Trytes from the alphabet 9A-Z
        trytes: String,
    },
    /// Encode trits into a tryte string
    Encode {
        /// Trits, either as symbols ("-0+", "NOP") or comma separated ("-1,0,1")
        #[arg(allow_hyphen_values = true)]
        trits: String,
    },
    /// Add a non-negative number to a tryte counter
    Add {
        /// Counter as trytes (least significant tryte first)
        trytes: String,
        /// Amount to add
        n: u64,
    },
    /// Increment a tryte counter by one
    Increment {
        /// Counter as trytes (least significant tryte first)
        trytes: String,
    },
    /// Print the substitution table and check it against the gate circuit
    Truth,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("cannot parse {input:?} as a trit at position {position}")]
    BadTrit { input: String, position: usize },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Decoded {
    trytes: String,
    trits: Vec<i8>,
    value: Option<i128>,
}

#[derive(Serialize)]
struct Counter {
    trytes: String,
    trits: Vec<i8>,
    carry: u64,
}

#[derive(Serialize)]
struct TruthRow {
    x1: i8,
    x2: i8,
    gates: i8,
    table: i8,
    index: usize,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Decode { trytes }) => decode_command(&trytes, cli.json),
        Some(Commands::Encode { trits }) => encode_command(&trits, cli.json),
        Some(Commands::Add { trytes, n }) => add_command(&trytes, n, cli.json),
        Some(Commands::Increment { trytes }) => increment_command(&trytes, cli.json),
        Some(Commands::Truth) => truth_command(cli.json),
        None => {
            println!("curl-ternary v{}", env!("CARGO_PKG_VERSION"));
            println!("Balanced ternary tools for the Curl hash");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_ternary_primitives();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn value_of(trits: &[Trit]) -> Option<i128> {
    (trits.len() <= arith::MAX_I128_WIDTH).then(|| arith::to_i128(trits))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_trits(trits: &[Trit]) -> String {
    trits.iter().map(|t| format!("{:?}", t)).collect()
}

fn decode_command(trytes: &str, json: bool) -> Result<(), CliError> {
    let trits = codec::decode(trytes)?;
    let decoded = Decoded {
        trytes: trytes.to_string(),
        trits: codec::trits_to_i8(&trits),
        value: value_of(&trits),
    };

    if json {
        return print_json(&decoded);
    }
    println!("trits: {}", format_trits(&trits));
    if let Some(value) = decoded.value {
        println!("value: {}", value);
    }
    Ok(())
}

fn parse_trits(input: &str) -> Result<Vec<Trit>, CliError> {
    if input.contains(',') {
        let mut values = Vec::new();
        for (position, part) in input.split(',').enumerate() {
            let value = part.trim().parse::<i8>().map_err(|_| CliError::BadTrit {
                input: part.to_string(),
                position,
            })?;
            values.push(value);
        }
        return Ok(codec::trits_from_i8(&values)?);
    }

    input
        .chars()
        .enumerate()
        .map(|(position, c)| {
            Trit::from_char(c).ok_or_else(|| CliError::BadTrit { input: c.to_string(), position })
        })
        .collect()
}

fn encode_command(input: &str, json: bool) -> Result<(), CliError> {
    let trits = parse_trits(input)?;
    let decoded = Decoded {
        trytes: codec::encode(&trits),
        trits: codec::trits_to_i8(&trits),
        value: value_of(&trits),
    };

    if json {
        return print_json(&decoded);
    }
    println!("{}", decoded.trytes);
    Ok(())
}

fn print_counter(trits: &[Trit], carry: u64, json: bool) -> Result<(), CliError> {
    let counter = Counter {
        trytes: codec::encode(trits),
        trits: codec::trits_to_i8(trits),
        carry,
    };

    if json {
        return print_json(&counter);
    }
    println!("trytes: {}", counter.trytes);
    println!("carry:  {}", counter.carry);
    Ok(())
}

fn add_command(trytes: &str, n: u64, json: bool) -> Result<(), CliError> {
    let mut trits = codec::decode(trytes)?;
    let carry = arith::add(&mut trits, n);
    print_counter(&trits, carry, json)
}

fn increment_command(trytes: &str, json: bool) -> Result<(), CliError> {
    let mut trits = codec::decode(trytes)?;
    let carry = arith::increment(&mut trits);
    print_counter(&trits, u64::from(carry == Trit::P), json)
}

fn truth_command(json: bool) -> Result<(), CliError> {
    let rows: Vec<TruthRow> = Trit::ALL
        .iter()
        .flat_map(|&x1| Trit::ALL.iter().map(move |&x2| (x1, x2)))
        .map(|(x1, x2)| TruthRow {
            x1: x1.to_i8(),
            x2: x2.to_i8(),
            gates: truth::truth(x1, x2).to_i8(),
            table: truth::truth_lookup(x1, x2).to_i8(),
            index: truth::table_index(x1, x2),
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    println!("━━━ Curl Substitution ━━━");
    println!("table: {:?}", TRUTH_TABLE);
    println!();
    println!(" x1  x2 | gates table (index)");
    for row in &rows {
        println!("{:>3} {:>3} | {:>5} {:>5} ({})", row.x1, row.x2, row.gates, row.table, row.index);
    }

    let mismatches = rows.iter().filter(|r| r.gates != r.table).count();
    println!();
    if mismatches == 0 {
        println!("✓ gate circuit and table agree");
    } else {
        println!("❌ {} mismatching entries", mismatches);
    }
    Ok(())
}

fn demo_ternary_primitives() {
    println!("━━━ Balanced Ternary Demo ━━━");
    println!();

    println!("Trytes (3 trits per character):");
    for trytes in ["9", "A", "M", "N", "Z"] {
        if let Ok(trits) = codec::decode(trytes) {
            println!("  {} = {} = {}", trytes, format_trits(&trits), arith::to_i128(&trits));
        }
    }
    println!();

    println!("Counter arithmetic:");
    if let Ok(mut trits) = codec::decode("MM") {
        let carry = arith::increment(&mut trits);
        println!("  MM + 1 = {} (carry {:?})", codec::encode(&trits), carry);
    }
    if let Ok(mut trits) = codec::decode("9999") {
        let carry = arith::add(&mut trits, 1_000);
        println!("  9999 + 1000 = {} (carry {})", codec::encode(&trits), carry);
    }
}
