
use infixcalc::{check_balanced, evaluate, render_tokens, to_postfix, tokenize, EvaluationError};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Evaluates infix arithmetic expressions such as `3 + 4 * (2 - 1)`.
///
/// With no EXPRESSION, reads expressions line by line until `exit` or
/// end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Evaluate this expression once and exit.
  expression: Option<String>,

  /// Also print the postfix form of each expression.
  #[arg(long)]
  show_postfix: bool,

  /// Prompt shown before each line in interactive mode.
  #[arg(long, default_value = "> ")]
  prompt: String,
}

fn main() -> anyhow::Result<ExitCode> {
  init_logging();
  let args = Args::parse();

  if let Some(expression) = &args.expression {
    let ok = report(&mut io::stdout().lock(), expression, args.show_postfix)?;
    return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
  }

  run_repl(io::stdin().lock(), io::stdout().lock(), &args)?;
  Ok(ExitCode::SUCCESS)
}

fn init_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn run_repl<R: BufRead, W: Write>(input: R, mut output: W, args: &Args) -> io::Result<()> {
  writeln!(output, "Enter an arithmetic expression (or type 'exit' to quit):")?;
  let mut lines = input.lines();
  loop {
    write!(output, "{}", args.prompt)?;
    output.flush()?;
    let Some(line) = lines.next().transpose()? else {
      writeln!(output)?;
      return Ok(());
    };
    let line = line.trim();
    if line == "exit" {
      return Ok(());
    }
    if line.is_empty() {
      continue;
    }
    report(&mut output, line, args.show_postfix)?;
  }
}

/// Evaluates `expression` and writes the result or error. Returns
/// whether evaluation succeeded.
fn report<W: Write>(output: &mut W, expression: &str, show_postfix: bool) -> io::Result<bool> {
  if show_postfix {
    match postfix_text(expression) {
      Ok(text) => writeln!(output, "Postfix: {text}")?,
      Err(err) => tracing::debug!(%err, "could not render postfix form"),
    }
  }
  match evaluate(expression) {
    Ok(value) => {
      writeln!(output, "Result: {value}")?;
      Ok(true)
    }
    Err(err) => {
      writeln!(output, "Error: {err}")?;
      Ok(false)
    }
  }
}

fn postfix_text(expression: &str) -> Result<String, EvaluationError> {
  check_balanced(expression)?;
  let tokens = tokenize(expression)?;
  Ok(render_tokens(&to_postfix(&tokens)?))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(show_postfix: bool) -> Args {
    Args { expression: None, show_postfix, prompt: "> ".to_owned() }
  }

  fn run(input: &str, show_postfix: bool) -> String {
    let mut output = Vec::new();
    run_repl(input.as_bytes(), &mut output, &args(show_postfix)).unwrap();
    String::from_utf8(output).unwrap()
  }

  #[test]
  fn test_repl_session() {
    let output = run("2+2\n5/0\n\n(1\n3*-2\nexit\n4\n", false);
    assert_eq!(
      output,
      "Enter an arithmetic expression (or type 'exit' to quit):\n\
       > Result: 4\n\
       > Error: Division by zero\n\
       > > Error: Mismatched parentheses at position 0\n\
       > Result: -6\n\
       > ",
    );
  }

  #[test]
  fn test_repl_stops_at_end_of_input() {
    let output = run("1.5*2", false);
    assert!(output.ends_with("> Result: 3\n> \n"), "unexpected output: {output:?}");
  }

  #[test]
  fn test_repl_show_postfix() {
    let output = run("3 + 4 * (2 - 1)\nexit\n", true);
    assert!(output.contains("Postfix: 3 4 2 1 - * +\n"));
    assert!(output.contains("Result: 7\n"));
  }

  #[test]
  fn test_report_failure_flag() {
    let mut output = Vec::new();
    assert!(!report(&mut output, "2+#3", false).unwrap());
    assert_eq!(String::from_utf8(output).unwrap(), "Error: Invalid character '#' at position 2\n");
  }

  #[test]
  fn test_args_parse() {
    let args = Args::parse_from(["infixcalc", "--show-postfix", "1+1"]);
    assert_eq!(args.expression.as_deref(), Some("1+1"));
    assert!(args.show_postfix);
    assert_eq!(args.prompt, "> ");
  }
}
