//! Command line driver
//!
//! Wires [`Config`], the [`Registry`], descriptor extraction and rendering
//! together. A generator binary only needs to register its types and call
//! [`main_with`].

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::format::{Format, Formats};
use crate::registry::{Registry, Target};
use crate::render::{self, split_case, Document};
use crate::varinfo;
use crate::{logging, VERSION};

/// Format generated when none is selected on the command line.
pub const DEFAULT_FORMAT: Format = Format::DirEnv;

/// Run the generator for `args`, writing to `out` unless `-output` is given.
pub fn run<I, S>(args: I, registry: &Registry, out: &mut dyn Write) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let config = Config::from_args(args)?;

    if config.help() {
        write!(out, "{}", Config::usage())?;
        return Ok(());
    }

    if config.version() {
        writeln!(out, "envrcconfig {}", VERSION)?;
        return Ok(());
    }

    logging::init(config.log_level());
    debug!(?config, "parsed configuration");

    if config.targets().is_empty() {
        anyhow::bail!(
            "no targets given (expected <package>,<typename>, known: {})",
            registry.ids().collect::<Vec<_>>().join(" ")
        );
    }

    let formats = if config.formats().is_empty() {
        warn!("no formats selected, defaulting to {}", DEFAULT_FORMAT);
        std::iter::once(DEFAULT_FORMAT).collect()
    } else {
        config.formats().clone()
    };

    let mut written = 0usize;
    for id in config.targets() {
        let target = registry.get(id)?;
        let vars = varinfo::process(target.prefix(), target.table())
            .with_context(|| format!("failed to extract variables for '{}'", id))?;
        info!(target = %target.id(), vars = vars.len(), formats = %formats, "generating");

        written += generate(target, &vars, &formats, config.output(), out, written)?;
    }

    Ok(())
}

/// Render every selected format for one target. Returns the number of documents produced.
fn generate(
    target: &Target,
    vars: &[varinfo::VarInfo],
    formats: &Formats,
    output: Option<&Path>,
    out: &mut dyn Write,
    already_written: usize,
) -> anyhow::Result<usize> {
    let id = target.id();
    let doc = Document {
        target: &id,
        type_name: target.type_name(),
        vars,
    };

    let mut count = 0;
    for format in formats.iter() {
        let text = render::render(format, &doc)?;

        match output {
            Some(dir) => {
                let path = dir.join(format!(
                    "{}.{}",
                    split_case(target.type_name(), '_'),
                    format.file_extension()
                ));
                write_file(&path, &text)?;
                info!(path = %path.display(), "wrote {}", format);
            }
            None => {
                if already_written + count > 0 {
                    let separator = if format == Format::Kubernetes { "---\n" } else { "\n" };
                    out.write_all(separator.as_bytes())?;
                }
                out.write_all(text.as_bytes())?;
            }
        }
        count += 1;
    }

    Ok(count)
}

fn write_file(path: &Path, text: &str) -> Result<(), Error> {
    let io_error = |source| Error::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, text).map_err(io_error)
}

/// Entry point for generator binaries.
///
/// Exits with 2 on command line errors and 1 on any other failure.
pub fn main_with(registry: &Registry) -> ExitCode {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(std::env::args(), registry, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let usage = err
                .downcast_ref::<Error>()
                .is_some_and(Error::is_usage_error);
            if usage {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
