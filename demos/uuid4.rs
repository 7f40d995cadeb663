//! Simple command that prints one or '-n count' UUIDv4 strings, optionally from a generator
//! seeded with '-s seed'

use std::{env, io, io::Write, process::ExitCode};

#[derive(Debug, Default, PartialEq)]
struct Options {
    count: Option<usize>,
    seed: Option<u64>,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-s seed]",
                    program.as_deref().unwrap_or("uuid4")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let count = opts.count.unwrap_or(1);
    let mut buf = io::BufWriter::new(io::stdout());
    match opts.seed {
        Some(seed) => {
            for e in uuidv4::V4Generator::with_seed(seed).take(count) {
                writeln!(buf, "{}", e)?;
            }
        }
        None => {
            for _ in 0..count {
                writeln!(buf, "{}", uuidv4::uuid4())?;
            }
        }
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        let name = match arg.as_str() {
            "-n" => 'n',
            "-s" => 's',
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", name));
        };
        let invalid = || format!("invalid argument to option '{}': '{}'", name, value);
        if name == 'n' {
            if opts.count.is_some() {
                return Err("option 'n' given more than once".to_owned());
            }
            opts.count = Some(value.parse().map_err(|_| invalid())?);
        } else {
            if opts.seed.is_some() {
                return Err("option 's' given more than once".to_owned());
            }
            opts.seed = Some(value.parse().map_err(|_| invalid())?);
        }
    }
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Options};

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    /// Parses count and seed options
    #[test]
    fn parses_count_and_seed_options() {
        assert_eq!(parse_args(args(&[])), Ok(Options::default()));
        assert_eq!(
            parse_args(args(&["-n", "3", "-s", "42"])),
            Ok(Options {
                count: Some(3),
                seed: Some(42)
            })
        );
    }

    /// Rejects malformed arguments
    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse_args(args(&["-x"])).is_err());
        assert!(parse_args(args(&["-n"])).is_err());
        assert!(parse_args(args(&["-n", "two"])).is_err());
        assert!(parse_args(args(&["-n", "1", "-n", "2"])).is_err());
        assert!(parse_args(args(&["-s", "-1"])).is_err());
    }
}
