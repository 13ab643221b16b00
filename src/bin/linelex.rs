//! Command-line interface for linelex
//! This binary tokenizes a source file line by line and prints the classified tokens, threading
//! each line's exit state into the next line the way an editor host would.
//!
//! Usage:
//!   linelex `<path>` [--format `<format>`] [--config `<file>`] [--show-text]
//!   linelex -                                  - Read the source from stdin
//!   linelex --list-token-types                 - Print token category codes and labels

use clap::{Arg, ArgAction, Command};
use linelex::config::{LinelexConfig, Loader, OutputFormat};
use linelex::{tokenize_line, State, TokenType, TokenizeError, INITIAL_LINE_STATE, TOKEN_NAMES};
use serde::Serialize;
use std::io::Read;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Optional project-local configuration, layered under `--config`.
const LOCAL_CONFIG: &str = "linelex.toml";

fn main() {
    let matches = Command::new("linelex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize source files line by line for syntax highlighting")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file, or '-' for stdin")
                .required_unless_present("list-token-types")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: simple, json, yaml or flat (default from config)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("show-text")
                .long("show-text")
                .help("Print each token's text in simple output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-token-types")
                .long("list-token-types")
                .help("List token category codes and labels")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-token-types") {
        handle_list_token_types_command();
        return;
    }

    let config = load_config(
        matches.get_one::<String>("config"),
        matches.get_one::<String>("format"),
        matches.get_flag("show-text"),
    );
    init_logging(&config);

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing token types");
    handle_tokenize_command(path, &config);
}

fn load_config(
    file: Option<&String>,
    format: Option<&String>,
    show_text: bool,
) -> LinelexConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(file) = file {
        loader = loader.with_file(file);
    }
    let loader = loader.with_environment();
    let loader = match format {
        Some(format) => loader.set_override("output.format", format.as_str()),
        None => Ok(loader),
    }
    .and_then(|loader| {
        if show_text {
            loader.set_override("output.show_text", true)
        } else {
            Ok(loader)
        }
    });

    loader.and_then(Loader::build).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn init_logging(config: &LinelexConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log.level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// One tokenized source line, as serialized by the json and yaml formats.
#[derive(Debug, Serialize)]
struct LineRecord {
    line: usize,
    state: State,
    tokens: Vec<TokenRecord>,
    #[serde(skip)]
    flat: Vec<u32>,
}

#[derive(Debug, Serialize)]
struct TokenRecord {
    kind: TokenType,
    len: usize,
    text: String,
}

/// Handle the default tokenize command
fn handle_tokenize_command(path: &str, config: &LinelexConfig) {
    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let records = tokenize_source(&source).unwrap_or_else(|(line, e)| {
        error!(line, error = %e, "tokenizer failed");
        eprintln!("Tokenize error on line {}: {}", line, e);
        std::process::exit(1);
    });
    info!(path, lines = records.len(), "tokenized source");

    let output = match config.output.format {
        OutputFormat::Simple => render_simple(&records, config),
        OutputFormat::Flat => render_flat(&records),
        OutputFormat::Json => serde_json::to_string_pretty(&records)
            .map(|json| json + "\n")
            .unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            }),
        OutputFormat::Yaml => serde_yaml::to_string(&records).unwrap_or_else(|e| {
            eprintln!("Error formatting tokens: {}", e);
            std::process::exit(1);
        }),
    };

    print!("{}", output);
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Tokenize every line top to bottom. Errors carry the 1-based line number.
fn tokenize_source(source: &str) -> Result<Vec<LineRecord>, (usize, TokenizeError)> {
    let mut state = INITIAL_LINE_STATE;
    let mut records = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let result = tokenize_line(line, state).map_err(|e| (index + 1, e))?;
        let tokens = result
            .spans(line)
            .zip(result.tokens.iter())
            .map(|((kind, text), token)| TokenRecord {
                kind,
                len: token.len,
                text: text.to_string(),
            })
            .collect();
        records.push(LineRecord {
            line: index + 1,
            state: result.state.state,
            tokens,
            flat: result.to_flat(),
        });
        state = result.state;
    }

    Ok(records)
}

fn render_simple(records: &[LineRecord], config: &LinelexConfig) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&format!("{}:", record.line));
        for token in &record.tokens {
            if config.output.show_text {
                output.push_str(&format!(" {}({}):{:?}", token.kind, token.len, token.text));
            } else {
                output.push_str(&format!(" {}({})", token.kind, token.len));
            }
        }
        if config.output.show_state {
            output.push_str(&format!(" -> {}", record.state));
        }
        output.push('\n');
    }
    output
}

fn render_flat(records: &[LineRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let codes: Vec<String> = record.flat.iter().map(|n| n.to_string()).collect();
            format!("{}: [{}]\n", record.line, codes.join(", "))
        })
        .collect()
}

/// Handle the list-token-types command
fn handle_list_token_types_command() {
    println!("Token categories:\n");
    for (kind, name) in TOKEN_NAMES {
        println!("  {:>4}  {}", kind.code(), name);
    }
}
