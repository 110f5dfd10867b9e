use std::io::{BufRead, Write};

use calq::render::SvgDrawer;
use calq::{interpret, Environment};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File that plot(...) writes its SVG output to
    #[arg(long, default_value = "plot.svg")]
    plot_file: std::path::PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single calculator statement
    Eval {
        /// The statement to run, e.g. "3 * (2 + 4)" or "plot(x^2, x, 0, 5, 0.5)"
        statement: String,
    },
    /// Read statements from stdin, one per line
    Repl,
}

fn main() {
    let cli = Cli::parse();
    let mut env = Environment::new(Box::new(SvgDrawer::new(cli.plot_file)));

    match cli.command {
        Commands::Eval { statement } => match interpret(&mut env, &statement) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Repl => {
            let stdin = std::io::stdin();
            prompt();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                let line = line.trim();
                if line == "exit" || line == "quit" {
                    break;
                }
                if !line.is_empty() {
                    match interpret(&mut env, line) {
                        Ok(result) => println!("{result}"),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                prompt();
            }
        }
    }
}

fn prompt() {
    print!(">>> ");
    let _ = std::io::stdout().flush();
}
