use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use leafmark_core::{RenderOptions, render, render_sanitized};

fn main() {
    let mut input: Option<String> = None;
    let mut sanitized = false;
    let mut options = RenderOptions::chat();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--sanitized" => sanitized = true,
            "--profile" => {
                options = match args.next().as_deref() {
                    Some("chat") => RenderOptions::chat(),
                    Some("history") => RenderOptions::history(),
                    _ => {
                        eprintln!("--profile expects: chat | history");
                        print_usage();
                        process::exit(2);
                    }
                };
            }
            _ => {
                if arg.starts_with('-') {
                    eprintln!("unknown flag: {}", arg);
                    print_usage();
                    process::exit(2);
                }
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let html = if sanitized {
        render_sanitized(&source, &options)
    } else {
        render(&source, &options)
    };

    print!("{}", html);
}

fn print_usage() {
    eprintln!("Usage: leafmark-cli [--profile chat|history] [--sanitized] [input]");
}
