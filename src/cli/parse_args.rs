use std::path::PathBuf;

use three_occ::config::Config;

/// Issues with the arguments given to the cli.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgError {
    /// Some count of positional arguments other than two.
    Usage,

    /// An option which is not recognised.
    Unrecognised(String),

    /// A recognised option with a missing or invalid value, paired with a description of valid values.
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgError::Usage => write!(f, "{}", crate::USAGE),
            ArgError::Unrecognised(arg) => write!(f, "Unrecognised argument: {arg}"),
            ArgError::InvalidValue(name, valid) => write!(f, "{name} requires {valid}"),
        }
    }
}

/// Parse CLI arguments to a [Config] struct, returning the input and output paths.
///
/// The first argument is taken to be the name of the program.
pub fn parse_args(args: &[String], cfg: &mut Config) -> Result<(PathBuf, PathBuf), ArgError> {
    let mut positionals = Vec::default();

    'arg_examination: for arg in args.iter().skip(1) {
        if !arg.starts_with("--") {
            positionals.push(arg.as_str());
            continue 'arg_examination;
        }

        let mut split = arg.split("=");
        match split.next() {
            // Each case follows a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, an error is returned.
            //
            // Further, the cases should be in lexicographic order.
            //
            Some("--bound") => {
                let (min, max) = cfg.occurrence_bound.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if cfg.occurrence_bound.set(value) {
                            println!("c bound set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ArgError::InvalidValue(
                    cfg.occurrence_bound.name,
                    format!("a value between {min} and {max}"),
                ));
            }

            Some("--strict_preamble") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<bool>() {
                        if cfg.strict_preamble.set(value) {
                            println!("c strict_preamble set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ArgError::InvalidValue(
                    cfg.strict_preamble.name,
                    "either 'true' or 'false'".to_string(),
                ));
            }

            _ => return Err(ArgError::Unrecognised(arg.clone())),
        }
    }

    match positionals.as_slice() {
        [input, output] => Ok((PathBuf::from(*input), PathBuf::from(*output))),
        _ => Err(ArgError::Usage),
    }
}
