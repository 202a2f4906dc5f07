//! objkit CLI
//!
//! Runs the object exercises from the command line.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use objkit_common::warning::set_color_enabled;
use objkit_css::{PartKind, SelectorBuilder, combine};
use objkit_objects::{Object, make_word, merge_objects, sell_tickets};
use owo_colors::OwoColorize;
use serde_json::Value;

/// objkit — object utilities, ticket queues and CSS selectors
#[derive(Parser, Debug)]
#[command(name = "objkit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    objkit tickets 25 25 50
    objkit selector element=a 'attr=href$=".png"' pseudo-class=focus
    objkit combine 'div#main' + 'table#data'
    objkit word '{"a": [0, 1], "b": [2]}'
    objkit merge '[{"a": 1}, {"a": 2, "b": 3}]'"#)]
struct Cli {
    /// Print without ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Only print the result, without the status line
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Can a cashier with an empty drawer serve this queue of bills?
    Tickets {
        /// Bills in queue order (25, 50 or 100)
        #[arg(required = true)]
        bills: Vec<u32>,
    },
    /// Build a selector from `kind=value` parts, in call order
    Selector {
        /// Parts such as `element=div`, `id=main`, `class=x`, `attr=href`,
        /// `pseudo-class=hover`, `pseudo-element=before`
        #[arg(required = true)]
        parts: Vec<String>,
    },
    /// Join two selectors with a combinator (" ", ">", "+" or "~")
    Combine {
        /// Left selector
        left: String,
        /// Combinator token
        connector: String,
        /// Right selector
        right: String,
    },
    /// Rebuild a word from a JSON object of letter -> positions
    Word {
        /// e.g. '{"H": [0], "i": [1]}'
        json: String,
    },
    /// Merge a JSON array of objects, adding values of shared keys
    Merge {
        /// e.g. '[{"a": 1}, {"a": 2}]'
        json: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_color_enabled(!cli.no_color);
    let out = Output {
        color: !cli.no_color,
        quiet: cli.quiet,
    };

    match cli.command {
        Command::Tickets { bills } => {
            let served = sell_tickets(&bills)?;
            if served {
                out.status(true, &format!("all {} customers served", bills.len()));
            } else {
                out.status(false, "ran out of change");
            }
            println!("{served}");
        }
        Command::Selector { parts } => {
            let selector = build_selector(&parts)?;
            out.status(true, "selector built");
            println!("{selector}");
        }
        Command::Combine {
            left,
            connector,
            right,
        } => {
            let combined = combine(left, &connector, right)?;
            out.status(true, &format!("joined with {:?}", combined.combinator()));
            println!("{combined}");
        }
        Command::Word { json } => {
            let word = make_word(&parse_letters(&json)?);
            out.status(true, &format!("{} letters", word.chars().count()));
            println!("{word}");
        }
        Command::Merge { json } => {
            let objects = parse_objects(&json)?;
            let merged = merge_objects(&objects);
            out.status(true, &format!("merged {} objects", objects.len()));
            println!("{}", Value::Object(merged));
        }
    }
    Ok(())
}

/// Where and how status lines are printed.
struct Output {
    color: bool,
    quiet: bool,
}

impl Output {
    fn status(&self, ok: bool, message: &str) {
        if self.quiet {
            return;
        }
        let mark = if ok { "✓" } else { "✗" };
        match (self.color, ok) {
            (false, _) => eprintln!("{mark} {message}"),
            (true, true) => eprintln!("{} {message}", mark.green()),
            (true, false) => eprintln!("{} {message}", mark.red()),
        }
    }
}

/// Feed `kind=value` parts to a fresh builder and render the result.
fn build_selector(parts: &[String]) -> Result<String> {
    let mut builder = SelectorBuilder::new();
    for part in parts {
        let Some((kind, value)) = part.split_once('=') else {
            bail!("expected kind=value, got '{part}'");
        };
        let kind: PartKind = kind
            .parse()
            .with_context(|| format!("unknown selector part kind '{kind}'"))?;
        let _ = builder
            .add(kind, value.to_string())
            .with_context(|| format!("cannot add '{part}'"))?;
    }
    Ok(builder.stringify())
}

fn parse_letters(json: &str) -> Result<HashMap<char, Vec<usize>>> {
    let raw: HashMap<String, Vec<usize>> =
        serde_json::from_str(json).context("expected a JSON object of letter -> positions")?;
    raw.into_iter()
        .map(|(key, positions)| -> Result<(char, Vec<usize>)> {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => Ok((letter, positions)),
                _ => bail!("key '{key}' is not a single letter"),
            }
        })
        .collect()
}

fn parse_objects(json: &str) -> Result<Vec<Object>> {
    serde_json::from_str(json).context("expected a JSON array of objects")
}
