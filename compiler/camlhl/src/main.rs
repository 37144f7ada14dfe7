//! camlhl: OCaml highlighter CLI.

use std::io::IsTerminal;

use camlhl::commands::{
    emit_outputs, render_files, render_highlight, render_mode, render_tokens, ModeOptions,
    TokenOptions,
};
use camlhl::theme::{ColorMode, Theme};
use camlhl::{init_tracing, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "tokens" => tokens(&args[2..]),
        "highlight" => highlight(&args[2..]),
        "mode" => mode(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(true)
        }
        "version" | "--version" | "-V" => {
            println!("camlhl {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn tokens(args: &[String]) -> Result<bool, CliError> {
    let mut options = TokenOptions::default();
    let mut paths = Vec::new();
    for arg in args {
        if arg == "--whitespace" || arg == "-w" {
            options.whitespace = true;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownFlag {
                command: "tokens",
                flag: arg.clone(),
            });
        } else {
            paths.push(arg.clone());
        }
    }
    if paths.is_empty() {
        eprintln!("Usage: camlhl tokens <file.ml>... [--whitespace]");
        return Err(CliError::MissingFiles { command: "tokens" });
    }

    let outputs = render_files(&paths, |text| render_tokens(text, options));
    Ok(emit_outputs(&outputs))
}

fn highlight(args: &[String]) -> Result<bool, CliError> {
    let mut color = ColorMode::Auto;
    let mut paths = Vec::new();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::parse(value).ok_or_else(|| CliError::InvalidColorMode {
                value: value.to_string(),
            })?;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownFlag {
                command: "highlight",
                flag: arg.clone(),
            });
        } else {
            paths.push(arg.clone());
        }
    }
    if paths.is_empty() {
        eprintln!("Usage: camlhl highlight <file.ml>... [--color=auto|always|never]");
        return Err(CliError::MissingFiles {
            command: "highlight",
        });
    }

    let theme = if color.should_use_colors(std::io::stdout().is_terminal()) {
        Theme::DEFAULT
    } else {
        Theme::MONOCHROME
    };
    let outputs = render_files(&paths, |text| render_highlight(text, &theme));
    Ok(emit_outputs(&outputs))
}

fn mode(args: &[String]) -> Result<bool, CliError> {
    let mut options = ModeOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--set" {
            let Some(assignment) = args.get(i + 1) else {
                return Err(CliError::MissingValue { flag: "--set" });
            };
            options.config.set_assignment(assignment)?;
            i += 2;
        } else if let Some(assignment) = arg.strip_prefix("--set=") {
            options.config.set_assignment(assignment)?;
            i += 1;
        } else if let Some(kernel) = arg.strip_prefix("--kernel=") {
            options.kernel = Some(kernel.to_string());
            i += 1;
        } else {
            return Err(CliError::UnknownFlag {
                command: "mode",
                flag: arg.clone(),
            });
        }
    }

    print!("{}", render_mode(&options));
    Ok(true)
}

fn print_usage() {
    println!("camlhl: OCaml syntax highlighter");
    println!();
    println!("Usage: camlhl <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokens <file.ml>...      Dump tokens with positions and tags");
    println!("  highlight <file.ml>...   Print files with ANSI highlighting");
    println!("  mode                     Show mode metadata and editor config");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Tokens options:");
    println!("  --whitespace, -w         Include whitespace tokens");
    println!();
    println!("Highlight options:");
    println!("  --color=<mode>           auto (default), always, never");
    println!();
    println!("Mode options:");
    println!("  --set <name>=<value>     Set an editor option before defaults apply");
    println!("                           (indent_unit, line_numbers)");
    println!("  --kernel=<language>      Attach as for a notebook kernel language");
    println!();
    println!("Examples:");
    println!("  camlhl tokens main.ml");
    println!("  camlhl highlight src/*.ml --color=always");
    println!("  camlhl mode --set indentUnit=4 --kernel=ocaml");
    println!();
    println!("Set RUST_LOG=debug to enable logging.");
}
