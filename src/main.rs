//! Interactive shell around the pumping-lemma checker.
//!
//! Collects the pumping length, witness string and repetition bound — command-line flags first,
//! stdin prompts for whatever is missing — then runs [`pumpcheck::check::Checker`] against one
//! of the built-in languages and renders the verdict. The shell owns all printing: the library
//! itself never logs or writes.

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use pumpcheck::{
    check::{CheckRes, Checker, DEFAULT_MAX_REP},
    lang::{AnBn, Language, PrimeAs, SigmaStar},
    prelude::{fmt, Plain, Rep, Res, ResExt, Style},
    split::Witness,
};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "pumpcheck",
    version,
    about = "Checks whether the pumping lemma for regular languages can be violated for a \
             given pumping length and witness string"
)]
struct Args {
    /// Pumping length `p`, a positive integer; prompted for when absent.
    #[arg(short, long)]
    pumping_length: Option<usize>,

    /// Witness string `w`; must belong to the language and have at least `p` symbols.
    #[arg(short, long)]
    witness: Option<String>,

    /// Bound on the repetition counts tried per split, `i` ranging over `0..=BOUND`.
    #[arg(short, long)]
    max_rep: Option<Rep>,

    /// Language to check against.
    #[arg(short, long, value_enum, default_value = "anbn")]
    lang: LangChoice,

    /// Disables colored output.
    #[arg(long)]
    no_color: bool,
}

/// Built-in languages the shell can check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LangChoice {
    /// `{ a^n b^n | n >= 0 }`.
    Anbn,
    /// `{ a^p | p prime }`.
    PrimeAs,
    /// All strings.
    Sigma,
}

fn main() {
    let args = Args::parse();
    let outcome = match args.lang {
        LangChoice::Anbn => run(&AnBn, &args),
        LangChoice::PrimeAs => run(&PrimeAs, &args),
        LangChoice::Sigma => run(&SigmaStar, &args),
    };
    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        for e in e.iter().skip(1) {
            eprintln!("- {}", e)
        }
        std::process::exit(2)
    }
}

/// Collects the inputs, runs the check and renders the outcome.
fn run<L>(lang: &L, args: &Args) -> Res<()>
where
    L: Language + fmt::Display,
{
    let interactive = args.pumping_length.is_none() || args.witness.is_none();
    if interactive {
        println!("=== pumping lemma checker ===");
        println!("language: {}", lang)
    }

    let p = match args.pumping_length {
        Some(p) => p,
        None => {
            let reply = prompt("pumping length p (positive integer):")?;
            parse_int(&reply)?
        }
    };
    let witness = match &args.witness {
        Some(w) => w.clone(),
        None => prompt("witness string w in the language, with |w| >= p:")?,
    };
    let max_rep = match args.max_rep {
        Some(m) => m,
        None if interactive => {
            let reply = prompt(&format!(
                "max repetitions i to try (empty for {}):",
                DEFAULT_MAX_REP
            ))?;
            if reply.is_empty() {
                DEFAULT_MAX_REP
            } else {
                parse_int(&reply)?
            }
        }
        None => DEFAULT_MAX_REP,
    };

    let wit = Witness::new(witness);
    let res = Checker::new(lang, p, &wit, max_rep)?.check();

    if args.no_color {
        report(&res, &wit, p, max_rep, Plain)
    } else {
        report(&res, &wit, p, max_rep, Ansi)
    }
    Ok(())
}

/// Renders a check result on stdout.
fn report(res: &CheckRes, wit: &Witness, p: usize, max_rep: Rep, style: impl Style) {
    if res.all_falsified() {
        println!(
            "{}: every split of `{}` breaks the lemma for p = {}",
            style.green("violated"),
            style.bold(wit.as_str()),
            p,
        );
        println!("the language is likely not regular; escaping repetitions:");
        for fail in res.fails.iter() {
            println!("  {}", fail.pretty(&style))
        }
    } else {
        println!(
            "{}: could not break the lemma for p = {} with repetitions up to {}",
            style.red("no violation"),
            p,
            max_rep,
        );
        if let Some(split) = res.survivors.first() {
            println!(
                "{} split(s) survived pumping, first: {}",
                res.survivors.len(),
                split,
            )
        }
    }
}

/// Prompts on stdout and reads one line from stdin.
fn prompt(msg: &str) -> Res<String> {
    print!("{} ", msg);
    io::stdout().flush()?;
    let mut reply = String::new();
    io::stdin().read_line(&mut reply)?;
    Ok(reply.trim().to_string())
}

/// Parses a non-negative integer reply.
fn parse_int(reply: &str) -> Res<usize> {
    reply
        .parse()
        .chain_err(|| format!("expected a non-negative integer, got `{}`", reply))
}

/// Styles text with ANSI escapes, for terminal output.
#[derive(Debug, Clone, Copy)]
struct Ansi;
impl Style for Ansi {
    fn red(&self, s: &str) -> String {
        s.red().to_string()
    }
    fn green(&self, s: &str) -> String {
        s.green().to_string()
    }
    fn bold(&self, s: &str) -> String {
        s.bold().to_string()
    }
    fn under(&self, s: &str) -> String {
        s.underline().to_string()
    }
}
