use fs_err as fs;
use humansize::{format_size, DECIMAL};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::CampaignError;

/// Where exported content ends up.
pub trait ExportSink {
    fn persist(&self, content: &str, filename: &str) -> Result<PathBuf, CampaignError>;
}

/// Writes exports into a directory, creating it if needed.
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileSink {
    fn persist(&self, content: &str, filename: &str) -> Result<PathBuf, CampaignError> {
        if filename.is_empty() || filename.contains(&['/', '\\'][..]) {
            return Err(CampaignError::Export(format!("bad file name {filename:?}")));
        }
        fs::create_dir_all(&self.dir).map_err(|e| CampaignError::Export(e.to_string()))?;
        let path = self.dir.join(filename);
        fs::write(&path, content).map_err(|e| CampaignError::Export(e.to_string()))?;
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Saved { path: PathBuf, bytes: usize },
    /// The sink failed; content was printed with copy instructions.
    ShownInline,
    /// Printing failed too; raw content went to stderr.
    Dumped,
}

impl PersistOutcome {
    pub fn describe(&self) -> String {
        match self {
            PersistOutcome::Saved { path, bytes } => {
                format!("saved {} ({})", path.display(), format_size(*bytes, DECIMAL))
            }
            PersistOutcome::ShownInline => "could not save; content shown above for manual copy".into(),
            PersistOutcome::Dumped => "could not save; raw content written to stderr".into(),
        }
    }
}

pub fn persist_export(sink: &dyn ExportSink, content: &str, filename: &str) -> PersistOutcome {
    let stdout = io::stdout();
    let mut view = stdout.lock();
    persist_export_with(sink, content, filename, &mut view)
}

/// Tries the sink, then a readable view on `view`, then stderr. Content is never dropped.
pub fn persist_export_with<W: Write + ?Sized>(
    sink: &dyn ExportSink,
    content: &str,
    filename: &str,
    view: &mut W,
) -> PersistOutcome {
    match sink.persist(content, filename) {
        Ok(path) => {
            log::info!("campaign exported to {}", path.display());
            return PersistOutcome::Saved { path, bytes: content.len() };
        }
        Err(e) => log::warn!("export of {filename} failed ({e}); showing content instead"),
    }

    let shown = view
        .write_all(readable_view(content, filename).as_bytes())
        .and_then(|_| view.flush());
    match shown {
        Ok(()) => PersistOutcome::ShownInline,
        Err(e) => {
            log::error!("could not display {filename} ({e})");
            eprintln!("Download failed. Here's your campaign content:\n\n{content}");
            PersistOutcome::Dumped
        }
    }
}

pub fn readable_view(content: &str, filename: &str) -> String {
    let bar = "━".repeat(56);
    format!(
        "{bar}\n📧 Email Campaign Content\nFile: {filename}\n{bar}\n\
📋 Instructions:\n\
1. Select all content below\n\
2. Copy it\n\
3. Paste into your email marketing tool or text editor\n\
4. Save the file manually as \"{filename}\" if needed\n\
{bar}\n{content}\n{bar}\n"
    )
}
