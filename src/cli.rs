#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate an expression and print the result
    Eval {
        expr: String,

        /// Skip unrecognized characters instead of failing
        #[arg(short, long)]
        lenient: bool,
    },

    /// Print the tokens of an expression, one per line
    Tokens {
        expr: String,

        /// Skip unrecognized characters instead of failing
        #[arg(short, long)]
        lenient: bool,
    },

    /// Evaluate expressions read line by line from stdin
    Repl {
        /// Skip unrecognized characters instead of failing
        #[arg(short, long)]
        lenient: bool,
    },
}
