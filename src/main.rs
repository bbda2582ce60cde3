use horn_logic::config::Settings;
use horn_logic::error::{Error, Result};
use horn_logic::problem::{write_answers, Problem};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: horn-logic [-i INPUT] [-o OUTPUT] [--config FILE]";

#[derive(Default)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "-i" | "--input" => &mut parsed.input,
            "-o" | "--output" => &mut parsed.output,
            "-c" | "--config" => &mut parsed.config,
            _ => return Err(Error::Config(format!("unknown argument `{}`\n{}", flag, USAGE))),
        };
        let value = args
            .next()
            .ok_or_else(|| Error::Config(format!("`{}` needs a value\n{}", flag, USAGE)))?;
        *slot = Some(PathBuf::from(value));
    }
    Ok(parsed)
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(input) = args.input {
        settings.input = input;
    }
    if let Some(output) = args.output {
        settings.output = output;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let problem = Problem::load(&settings.input)?;
    for query in &problem.queries {
        info!(%query, "query");
    }
    info!("{}", problem.knowledge_base);

    let answers = problem.solve(&settings.limits());
    write_answers(&settings.output, &answers)?;
    info!(output = %settings.output.display(), answers = answers.len(), "done");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Result<Args> {
        parse_args(words.iter().map(|w| w.to_string()))
    }

    #[test]
    fn no_arguments_override_nothing() {
        let parsed = args(&[]).unwrap();
        assert_eq!(parsed.input, None);
        assert_eq!(parsed.output, None);
        assert_eq!(parsed.config, None);
    }

    #[test]
    fn short_and_long_flags_map_to_paths() {
        let parsed = args(&["-i", "in.txt", "-o", "out.txt", "--config", "run.toml"]).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("in.txt")));
        assert_eq!(parsed.output, Some(PathBuf::from("out.txt")));
        assert_eq!(parsed.config, Some(PathBuf::from("run.toml")));

        let parsed = args(&["--input", "a.txt", "-c", "b.toml", "--output", "c.txt"]).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("a.txt")));
        assert_eq!(parsed.config, Some(PathBuf::from("b.toml")));
        assert_eq!(parsed.output, Some(PathBuf::from("c.txt")));
    }

    #[test]
    fn later_flags_win() {
        let parsed = args(&["-i", "first.txt", "-i", "second.txt"]).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("second.txt")));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        match args(&["--verbose"]) {
            Err(Error::Config(message)) => assert!(message.contains("--verbose")),
            Err(e) => panic!("expected config error, got {:?}", e),
            Ok(_) => panic!("expected config error"),
        }
    }

    #[test]
    fn flag_without_value_is_an_error() {
        match args(&["-i", "in.txt", "-o"]) {
            Err(Error::Config(message)) => assert!(message.contains("needs a value")),
            Err(e) => panic!("expected config error, got {:?}", e),
            Ok(_) => panic!("expected config error"),
        }
    }
}
