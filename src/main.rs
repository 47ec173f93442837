extern crate clap;
#[macro_use]
extern crate rawline;

use std::process;

use clap::Parser;

use rawline::{history, keycodes, Color, Completer, Config, Editor, Hint, PathCompleter, ReadResult};

#[derive(Parser, Debug)]
#[command(name = "rawline", about = "A tiny line editor demo: type lines, get them echoed back")]
struct Opts {
    #[arg(long, help = "Edit lines spanning several rows")]
    multiline: bool,
    #[arg(long, help = "Show the codes sent by each key, type quit to exit")]
    keycodes: bool,
    #[arg(long, value_name = "FILE", help = "Load and save history in FILE")]
    history: Option<String>,
    #[arg(short = 'V', long, help = "Show version and exit")]
    version: bool,
}

fn completion(line: &str) -> Vec<String> {
    if line.starts_with('h') {
        return vec!["hello".to_string(), "hello there".to_string()];
    }
    PathCompleter.complete(line)
}

fn hint(line: &str) -> Option<Hint> {
    if line == "hello" {
        return Some(Hint::new(" World").color(Color::Magenta));
    }
    None
}

fn main() {
    let opts = Opts::parse();

    if opts.version {
        println!("rawline {}", env!("CARGO_PKG_VERSION"));
        println!("git commit: {}", env!("GIT_HASH"));
        println!("built on: {}", env!("BUILD_DATE"));
        return;
    }

    if opts.keycodes {
        if let Err(e) = keycodes::print_key_codes() {
            eprintln!("rawline: {}", e);
            process::exit(1);
        }
        return;
    }

    let config = Config::load();
    let mut editor = Editor::with_config(&config);
    if opts.multiline {
        editor.set_multi_line(true);
    }
    editor.set_completer(completion);
    editor.set_hinter(hint);

    let history_file = opts
        .history
        .or(config.history_file)
        .unwrap_or_else(history::get_history_file);
    if let Err(e) = editor.load_history(&history_file) {
        log!("load history {} err: {:?}", history_file, e);
    }

    loop {
        let line = match editor.input("hello> ") {
            ReadResult::Input(x) => x,
            ReadResult::Interrupted => continue,
            ReadResult::Eof => break,
        };

        if let Some(arg) = line.strip_prefix("/historylen") {
            match arg.trim().parse::<usize>() {
                Ok(n) => editor.set_history_max_size(n),
                Err(_) => println!("usage: /historylen <size>"),
            }
            continue;
        }
        if line.starts_with('/') {
            println!("Unrecognized command: {}", line);
            continue;
        }
        if line.is_empty() {
            continue;
        }

        println!("echo: '{}'", line);
        editor.add_history(&line);
        if let Err(e) = editor.save_history(&history_file) {
            log!("save history {} err: {:?}", history_file, e);
        }
    }
}
