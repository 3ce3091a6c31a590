mod config;
mod env;
mod error;
mod eval;
mod expr;
mod intern;
mod primitives;
mod reader;
mod value;

use clap::Parser;
use env::Environment;
use eval::evaluate;
use primitives::make_global_environment;
use reader::read_all;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::rc::Rc;

/// A minimal lexically-scoped Lisp interpreter
#[derive(Parser, Debug)]
#[command(name = "schemelet")]
#[command(version = config::VERSION)]
#[command(about = "A tree-walking evaluator for a minimal lexically-scoped Lisp")]
struct CliArgs {
    /// Script file to execute (optional - if not provided, starts a REPL)
    #[arg(value_name = "FILE")]
    script: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let env = make_global_environment();

    if let Some(script_path) = args.script {
        run_script(&script_path, env)?;
        return Ok(());
    }

    run_repl(env)
}

/// Evaluates every form in `path` in order, aborting on the first error
/// (§4.8 — a script is trusted input and a failure is fatal).
fn run_script(path: &PathBuf, env: Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read script file {}: {}", path.display(), e))?;

    let forms = read_all(&contents).map_err(|e| format!("{}: {}", path.display(), e))?;
    for form in forms {
        evaluate(form, env.clone()).map_err(|e| format!("{}: {}", path.display(), e))?;
    }
    Ok(())
}

/// Interactive loop: reads one form at a time, prints the result, and keeps
/// going on error instead of exiting (§4.8).
fn run_repl(env: Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = Editor::<(), DefaultHistory>::with_config(config)?;

    let history_file = ".schemelet_history";
    let _ = rl.load_history(history_file);

    println!("{}", config::WELCOME_MESSAGE);
    println!("{}", config::WELCOME_SUBTITLE);

    loop {
        match rl.readline("schemelet> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if matches!(line.trim(), "(quit)" | "(exit)") {
                    break;
                }
                match reader::read_one(&line) {
                    Ok(form) => match evaluate(form, env.clone()) {
                        Ok(result) => println!("=> {}", result),
                        Err(e) => eprintln!("error: {}", e),
                    },
                    Err(e) => eprintln!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);
    Ok(())
}
