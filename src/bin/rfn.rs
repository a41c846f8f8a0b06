//! Reportfn CLI - call catalog functions from the command line.

use clap::{Parser, Subcommand};
use reportfn::{call_function, signatures, CallResult, Value, Variables};

#[derive(Parser)]
#[command(name = "rfn")]
#[command(version)]
#[command(about = "Reportfn - report text-function catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the function catalog
    List {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Call a function by name with scalar arguments
    ///
    /// Arguments are parsed as JSON scalars (null, true, 42, 19.99,
    /// "text", [..]); anything that is not valid JSON is taken as a
    /// bare string.
    Call {
        /// Catalog name of the function
        name: String,

        /// Function arguments
        args: Vec<String>,
    },
}

fn to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::None,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n
                .to_string()
                .parse()
                .map(Value::Decimal)
                .unwrap_or(Value::Str(n.to_string())),
        },
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(to_value).collect())
        }
        other => Value::Str(other.to_string()),
    }
}

fn parse_arg(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => to_value(json),
        Err(_) => Value::Str(raw.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => {
            let catalog = signatures();
            if json {
                match serde_json::to_string_pretty(&catalog) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                for entry in catalog {
                    println!("{}({}) -> {}", entry.name, entry.params, entry.returns);
                }
            }
        }

        Commands::Call { name, args } => {
            let args: Vec<Value> = args.iter().map(|raw| parse_arg(raw)).collect();
            let mut vars = Variables::new();
            match call_function(&name, args, &mut vars) {
                CallResult::Ok(value) => println!("{}", value.display()),
                CallResult::Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
                CallResult::NotFound => {
                    eprintln!("error: unknown function `{}`", name);
                    std::process::exit(2);
                }
            }
        }
    }
}
