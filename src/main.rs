mod cli;

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use cli::{Cli, Command};
use matheval::{Lexer, Options};

fn options(lenient: bool) -> Options {
    if lenient {
        Options::lenient()
    } else {
        Options::default()
    }
}

fn repl(options: &Options) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match matheval::evaluate_with(&line, options) {
                Ok(value) => writeln!(stdout, "{value}")?,
                Err(why) => eprintln!("error: {why}"),
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    writeln!(stdout)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("{cli:?}");

    match cli.command {
        Command::Eval { expr, lenient } => match matheval::evaluate_with(&expr, &options(lenient)) {
            Ok(value) => println!("{value}"),
            Err(why) => {
                eprintln!("error: {why}");
                process::exit(1);
            }
        },
        Command::Tokens { expr, lenient } => {
            let mut lexer = Lexer::new(&expr).skip_unrecognized(lenient);
            while let Some(token) = lexer.next() {
                match token {
                    Ok(token) => println!("{token:?}"),
                    Err(why) => {
                        match lexer.current() {
                            Some(prev) => eprintln!("error: {why} (after `{}`)", prev.lexeme()),
                            None => eprintln!("error: {why}"),
                        }
                        process::exit(1);
                    }
                }
            }
        }
        Command::Repl { lenient } => {
            if let Err(why) = repl(&options(lenient)) {
                eprintln!("error: {why}");
                process::exit(1);
            }
        }
    }
}
