use std::io;

use clap::Parser;
use color_eyre::eyre::Result;
use rpn_calc::{
    base::{Handler, PrintHandler},
    calculate, evaluate, parse,
    print::render_trace,
    tokenize,
};
use tracing_subscriber::{filter::EnvFilter, fmt::MakeWriter};

/// Environment variable holding the log filter, e.g. `RPN_CALC_LOG=trace`.
const LOG_ENV: &str = "RPN_CALC_LOG";

/// Evaluates integer arithmetic expressions with `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(name = "rpn-calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expression to evaluate. Reads one expression per line from stdin if omitted
    expression: Option<String>,

    /// Print the expression in reverse polish notation before its value
    #[arg(short, long)]
    rpn: bool,

    /// Disable colour output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    tracing::subscriber::set_global_default(log_subscriber(
        EnvFilter::from_env(LOG_ENV),
        io::stderr,
    ))?;

    color_eyre::install()?;

    let args = Cli::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let handler = PrintHandler::new();

    if let Some(expression) = &args.expression {
        run(expression, &args, &handler);
    } else {
        for line in io::stdin().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            run(&line, &args, &handler);
        }
    }

    if handler.has_received() {
        std::process::exit(1);
    }

    Ok(())
}

fn log_subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

fn run(expression: &str, args: &Cli, handler: &PrintHandler) {
    let result = if args.rpn {
        let rpn = parse(tokenize(expression)).collect::<Vec<_>>();
        let trace = render_trace(&rpn);
        if trace.ends_with('\n') {
            print!("{trace}");
        } else {
            println!("{trace}");
        }

        evaluate(rpn).map_err(|err| {
            handler.receive(err.clone());
            err.into()
        })
    } else {
        calculate(expression, handler)
    };

    if let Ok(value) = result {
        println!("{value}");
    }
}
