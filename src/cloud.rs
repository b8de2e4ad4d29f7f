//! Hand a word list to an external word-cloud image generator.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

pub const DEFAULT_PROGRAM: &str = "wordcloud_cli.py";
pub const DEFAULT_WIDTH: u32 = 1500;
pub const DEFAULT_HEIGHT: u32 = 1000;

/// Error produced while running the generator.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("can't run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("'{program}' failed: {status}")]
    Failed { program: String, status: ExitStatus },
}

/// Command line of the image generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    pub program: OsString,
    pub width: u32,
    pub height: u32,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Generator {
    /// The generator invocation reading words from `text` and writing
    /// the picture to `image`.
    #[must_use]
    pub fn command(&self, text: &Path, image: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--text")
            .arg(text)
            .arg("--imagefile")
            .arg(image)
            .arg(format!("--width={}", self.width))
            .arg(format!("--height={}", self.height));
        cmd
    }

    /// Run the generator and wait for it.
    pub fn run(&self, text: &Path, image: &Path) -> Result<(), CloudError> {
        let program = self.program.to_string_lossy().into_owned();
        log::info!("running {program} for {}", image.display());

        let status = self
            .command(text, image)
            .status()
            .map_err(|source| CloudError::Spawn {
                program: program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CloudError::Failed { program, status })
        }
    }
}
