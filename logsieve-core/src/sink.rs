use crate::error::RunError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where rendered reports go: a console writer and an optional report file.
///
/// The sink is flushed by `finish`, and again on drop so an aborted run still leaves
/// everything written so far on disk.
pub struct ReportSink<W: Write = io::Stdout> {
    console: Option<W>,
    file: Option<(PathBuf, BufWriter<File>)>,
    color: bool,
}

impl ReportSink<io::Stdout> {
    pub fn stdout(output: Option<&Path>, color: bool) -> Result<Self, RunError> {
        Self::open(io::stdout(), output, color)
    }
}

impl<W: Write> ReportSink<W> {
    pub fn open(console: W, output: Option<&Path>, color: bool) -> Result<Self, RunError> {
        let file = output
            .map(|path| {
                File::create(path)
                    .map(|f| (path.to_path_buf(), BufWriter::new(f)))
                    .map_err(|source| RunError::OpenOutput {
                        path: path.to_path_buf(),
                        source,
                    })
            })
            .transpose()?;

        Ok(Self {
            console: Some(console),
            file,
            color,
        })
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.file.as_ref().map(|(path, _)| path.as_path())
    }

    /// Writes a block rendered once per target: the console honours `color`, the
    /// report file is always plain.
    pub fn write_with(&mut self, render: impl Fn(bool) -> String) -> Result<(), RunError> {
        if let Some(console) = self.console.as_mut() {
            console
                .write_all(render(self.color).as_bytes())
                .map_err(|e| RunError::sink("console", e))?;
        }

        if let Some((path, file)) = self.file.as_mut() {
            file.write_all(render(false).as_bytes())
                .map_err(|e| RunError::sink(path.display().to_string(), e))?;
        }

        Ok(())
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), RunError> {
        self.write_with(|_| format!("{line}\n"))
    }

    fn flush(&mut self) -> Result<(), RunError> {
        if let Some(console) = self.console.as_mut() {
            console.flush().map_err(|e| RunError::sink("console", e))?;
        }

        if let Some((path, file)) = self.file.as_mut() {
            file.flush()
                .map_err(|e| RunError::sink(path.display().to_string(), e))?;
        }

        Ok(())
    }

    /// Flushes and closes the sink, handing back the console writer.
    pub fn finish(mut self) -> Result<W, RunError> {
        self.flush()?;
        self.file = None;

        self.console
            .take()
            .ok_or_else(|| RunError::sink("console", io::ErrorKind::BrokenPipe.into()))
    }
}

impl<W: Write> Drop for ReportSink<W> {
    fn drop(&mut self) {
        if let Err(err) = self.flush() {
            tracing::warn!(error = %err, "failed to flush report sink");
        }
    }
}
