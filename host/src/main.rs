use std::env;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use sha256_stream::{hash_reader, hash_str, hex_encode, Digest, DEFAULT_CHUNK_SIZE};

/// Published vectors checked before anything else is hashed.
const KNOWN_ANSWERS: [(&str, &str); 4] = [
    ("", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
    ("abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
    (
        "The quick brown fox jumps over the lazy dog",
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
    ),
    (
        "The quick brown fox jumps over the lazy dog.",
        "ef537f25c895bfa782526529a9b63d97aa631564d5d789c2b765448c8635fb6c",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Hex,
    Json,
}

#[derive(Debug)]
struct Config {
    args: Vec<String>,
    files: Vec<String>,
    chunk_size: usize,
    format: OutputFormat,
    self_check: bool,
}

impl Config {
    fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let split = |name: &str| -> Vec<String> {
            lookup(name)
                .unwrap_or_default()
                .split_whitespace()
                .map(String::from)
                .collect()
        };

        let chunk_size = lookup("CHUNK_SIZE").unwrap_or(format!("{DEFAULT_CHUNK_SIZE}"));
        let chunk_size = match chunk_size.parse::<usize>() {
            Ok(size) if size > 0 => size,
            _ => {
                log::warn!("invalid CHUNK_SIZE {:?}, using {}", chunk_size, DEFAULT_CHUNK_SIZE);
                DEFAULT_CHUNK_SIZE
            }
        };

        let format = match lookup("OUTPUT_FORMAT")
            .unwrap_or("hex".to_string())
            .as_str()
        {
            "hex" => OutputFormat::Hex,
            "json" => OutputFormat::Json,
            other => bail!("unknown OUTPUT_FORMAT {:?}, expected hex or json", other),
        };

        let self_check = lookup("SELF_CHECK").map(|v| v != "0").unwrap_or(true);

        Ok(Self {
            args: split("ARGS"),
            files: split("HASH_FILES"),
            chunk_size,
            format,
            self_check,
        })
    }
}

#[derive(Serialize)]
struct Record<'a> {
    source: &'a str,
    name: &'a str,
    digest: Digest,
}

fn self_check() -> Result<()> {
    for (input, expected) in KNOWN_ANSWERS {
        let digest = hash_str(input);
        if digest.to_hex() != expected {
            bail!(
                "self check failed for {:?}: got {}, expected {}",
                input,
                digest,
                expected
            );
        }
    }
    log::info!("self check passed: {} vectors", KNOWN_ANSWERS.len());
    Ok(())
}

/// Log line for a hashed argument. The argument itself is left out.
fn describe_arg(arg: &str, digest: &Digest) -> String {
    format!("arg of {} bytes: {}", arg.len(), digest)
}

fn render(format: OutputFormat, record: &Record<'_>) -> Result<String> {
    Ok(match format {
        OutputFormat::Hex => format!("{}  {}", record.digest, record.name),
        OutputFormat::Json => serde_json::to_string(record)?,
    })
}

fn emit(format: OutputFormat, record: &Record<'_>) -> Result<()> {
    println!("{}", render(format, record)?);
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    if config.self_check {
        self_check()?;
    }

    for arg in &config.args {
        let digest = hash_str(arg);
        log::info!("{}", describe_arg(arg, &digest));
        emit(
            config.format,
            &Record {
                source: "arg",
                name: arg,
                digest,
            },
        )?;
    }

    for path in &config.files {
        let file = std::fs::File::open(path).with_context(|| format!("open {}", path))?;
        let digest =
            hash_reader(file, config.chunk_size).with_context(|| format!("read {}", path))?;
        log::info!("file {}: {}", path, hex_encode(digest.as_bytes()));
        emit(
            config.format,
            &Record {
                source: "file",
                name: path,
                digest,
            },
        )?;
    }

    if config.args.is_empty() && config.files.is_empty() {
        log::info!("nothing to hash, set ARGS or HASH_FILES");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::try_init().unwrap_or_default();
    let config = Config::from_env()?;
    log::debug!("config: {:?}", config);
    run(&config)
}
