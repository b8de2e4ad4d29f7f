//! Command line options and the run loop behind the `domaincloud` binary.

use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cloud::{self, CloudError, Generator};
use crate::{Error, FrequencyTable, RenderMode};

/// Argument naming standard input or standard output.
pub const STDIO: &str = "-";

/// Generate a word cloud from source files and show the domain as
/// expressed by the code.
#[derive(Debug, Parser)]
#[command(name = "domaincloud", version, about)]
pub struct Args {
    /// Input files; `-` reads standard input.
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<String>,

    /// Output file; `-` is standard output. In image mode this is the
    /// picture handed to the generator.
    #[arg(short, long, value_name = "FILE", default_value = STDIO)]
    pub output: String,

    /// Only remove comments and string literals and print the result.
    #[arg(short = 'S', long, conflicts_with = "list")]
    pub substitute_only: bool,

    /// Print the word table instead of generating an image.
    #[arg(short, long, value_name = "MODE", value_enum)]
    pub list: Option<RenderMode>,

    /// Word-cloud generator program.
    #[arg(
        long,
        value_name = "PROG",
        env = "DOMAINCLOUD_GENERATOR",
        default_value = cloud::DEFAULT_PROGRAM
    )]
    pub generator: OsString,

    /// Image width in pixels.
    #[arg(long, value_name = "PX", default_value_t = cloud::DEFAULT_WIDTH)]
    pub width: u32,

    /// Image height in pixels.
    #[arg(long, value_name = "PX", default_value_t = cloud::DEFAULT_HEIGHT)]
    pub height: u32,
}

/// Where words are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Open the input for reading.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

impl From<&str> for Input {
    fn from(arg: &str) -> Self {
        if arg == STDIO {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIO),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where results are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// Create (or truncate) the output for writing.
    pub fn create(&self) -> io::Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout().lock())),
            Self::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        }
    }

    /// The path argument naming this output for another program.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        match self {
            Self::Stdout => Path::new(STDIO),
            Self::File(path) => path,
        }
    }
}

impl From<&str> for Output {
    fn from(arg: &str) -> Self {
        if arg == STDIO {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path().display())
    }
}

/// What a run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the inputs without comments and string literals.
    Strip,
    /// Print the word table.
    List(RenderMode),
    /// Generate a word-cloud image.
    Cloud(Generator),
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inputs: Vec<Input>,
    pub output: Output,
    pub action: Action,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let action = if args.substitute_only {
            Action::Strip
        } else if let Some(mode) = args.list {
            Action::List(mode)
        } else {
            Action::Cloud(Generator {
                program: args.generator,
                width: args.width,
                height: args.height,
            })
        };

        Self {
            inputs: args.inputs.iter().map(|arg| Input::from(arg.as_str())).collect(),
            output: Output::from(args.output.as_str()),
            action,
        }
    }
}

/// Error that ends a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("can't open '{output}' for writing: {source}")]
    Output {
        output: Output,
        #[source]
        source: io::Error,
    },
    #[error("can't write to '{output}': {source}")]
    Write {
        output: Output,
        #[source]
        source: io::Error,
    },
    #[error("can't create the temporary word list: {0}")]
    WordList(#[source] io::Error),
    #[error(transparent)]
    Count(#[from] Error),
    #[error(transparent)]
    Cloud(#[from] CloudError),
}

/// Outcome of a run that reached its end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Inputs that could not be opened or read.
    pub failed_inputs: usize,
}

impl Summary {
    #[must_use]
    pub const fn success(self) -> bool {
        self.failed_inputs == 0
    }
}

/// Execute `config`.
///
/// Inputs that fail are reported through the log and skipped; the
/// remaining inputs are still processed.
pub fn run(config: &Config) -> Result<Summary, AppError> {
    match &config.action {
        Action::Strip => strip_inputs(config),
        Action::List(mode) => {
            let out = create_output(&config.output)?;
            let (table, summary) = count_inputs(&config.inputs)?;
            crate::render(out, &table, *mode).map_err(|source| AppError::Write {
                output: config.output.clone(),
                source,
            })?;
            Ok(summary)
        }
        Action::Cloud(generator) => {
            let (table, summary) = count_inputs(&config.inputs)?;
            let mut word_list = tempfile::NamedTempFile::new().map_err(AppError::WordList)?;
            crate::render(
                BufWriter::new(word_list.as_file_mut()),
                &table,
                RenderMode::Raw,
            )
            .map_err(AppError::WordList)?;
            log::debug!("word list written to {}", word_list.path().display());
            generator.run(word_list.path(), config.output.as_path())?;
            Ok(summary)
        }
    }
}

fn create_output(output: &Output) -> Result<Box<dyn Write>, AppError> {
    output.create().map_err(|source| AppError::Output {
        output: output.clone(),
        source,
    })
}

fn strip_inputs(config: &Config) -> Result<Summary, AppError> {
    let mut out = create_output(&config.output)?;
    let mut summary = Summary::default();

    for input in &config.inputs {
        log::debug!("stripping '{input}'");
        let reader = match input.open() {
            Ok(reader) => reader,
            Err(e) => {
                log::error!("can't open '{input}': {e}");
                summary.failed_inputs += 1;
                continue;
            }
        };
        if let Err(e) = crate::strip(reader, &mut out) {
            log::error!("error during processing of '{input}': {e}");
            summary.failed_inputs += 1;
        }
    }

    Ok(summary)
}

fn count_inputs(inputs: &[Input]) -> Result<(FrequencyTable, Summary), AppError> {
    let mut table = FrequencyTable::new();
    let mut summary = Summary::default();

    for input in inputs {
        log::debug!("counting words of '{input}'");
        let reader = match input.open() {
            Ok(reader) => reader,
            Err(e) => {
                log::error!("can't open '{input}': {e}");
                summary.failed_inputs += 1;
                continue;
            }
        };
        match crate::count(reader, &mut table) {
            Ok(()) => {}
            Err(Error::Io(e)) => {
                log::error!("error during processing of '{input}': {e}");
                summary.failed_inputs += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    log::info!(
        "{} distinct words, {} in total",
        table.len(),
        table.total()
    );
    Ok((table, summary))
}
