use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use kryptos_lacuna::cipher::Cipher;
use kryptos_lacuna::config::{CipherConfig, CipherConfigBuilder};
use kryptos_lacuna::table::DistanceCache;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "usage: lacuna-decipher [--invert] [--skip-non-alphabetic] [--width N] \
[--config FILE] [--trace] [CIPHERTEXT...]";

struct Options {
    config_path: Option<PathBuf>,
    invert: bool,
    skip_non_alphabetic: bool,
    width: Option<usize>,
    trace: bool,
    text: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lacuna-decipher: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let options = parse_args(env::args().skip(1))?;

    let base = match &options.config_path {
        Some(path) => CipherConfig::from_json(&fs::read_to_string(path)?)?,
        None => CipherConfig::default(),
    };
    let mut builder = CipherConfigBuilder::from_config(base);
    builder.invert |= options.invert;
    builder.skip_non_alphabetic |= options.skip_non_alphabetic;
    if let Some(width) = options.width {
        builder.row_width = width;
    }
    let config = builder.build()?;

    let text = if options.text.is_empty() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        options.text.join("")
    };
    let text: String = text.split_whitespace().collect();

    let cipher = Cipher::new(&text, &config, &DistanceCache::new())?;
    if options.trace {
        println!("{}", serde_json::to_string_pretty(&cipher.trace())?);
    } else {
        for row in cipher.layout() {
            println!("{row}");
        }
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, Box<dyn Error>> {
    let mut options = Options {
        config_path: None,
        invert: false,
        skip_non_alphabetic: false,
        width: None,
        trace: false,
        text: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--invert" => options.invert = true,
            "--skip-non-alphabetic" => options.skip_non_alphabetic = true,
            "--trace" => options.trace = true,
            "--config" => {
                let value = args.next().ok_or("--config needs a file")?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--width" => {
                let value = args.next().ok_or("--width needs a number")?;
                options.width = Some(value.parse()?);
            }
            "-h" | "--help" => return Err(USAGE.into()),
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}\n{USAGE}").into())
            }
            text => options.text.push(text.to_owned()),
        }
    }
    Ok(options)
}
