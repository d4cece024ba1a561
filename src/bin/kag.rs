//! Command-line interface for kag-parser
//! This binary inspects and converts KiriKiri KAG scenario files.
//!
//! Usage:
//!   kag tokens `<path>`   - Print the finalized token stream
//!   kag ast `<path>`      - Print the script AST as JSON
//!   kag webgal `<path>`   - Convert the script to a WebGAL scene

use clap::{Arg, ArgMatches, Command};
use kag_parser::kag::{parse_events, parse_to_ast, webgal_scene, TokenKind};

fn main() {
    let matches = Command::new("kag")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting KAG scenario scripts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the finalized token stream")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("ast")
                .about("Print the script AST as JSON")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("webgal")
                .about("Convert the script to a WebGAL scene")
                .arg(path_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokens", sub)) => handle_tokens_command(&read_source(sub)),
        Some(("ast", sub)) => handle_ast_command(&read_source(sub)),
        Some(("webgal", sub)) => handle_webgal_command(&read_source(sub)),
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the .ks scenario file")
        .required(true)
        .index(1)
}

fn read_source(matches: &ArgMatches) -> String {
    let path = matches.get_one::<String>("path").unwrap();
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the tokens command
fn handle_tokens_command(source: &str) {
    let events = parse_events(source).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });
    for event in events {
        if event.kind == TokenKind::EndOfInput {
            println!("{}", event.kind);
        } else {
            println!("{} {:?}", event.kind, event.value);
        }
    }
}

/// Handle the ast command
fn handle_ast_command(source: &str) {
    let nodes = parse_to_ast(source).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });
    let json = serde_json::to_string_pretty(&nodes).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}

/// Handle the webgal command
fn handle_webgal_command(source: &str) {
    let scene = webgal_scene(source).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });
    print!("{}", scene);
}
