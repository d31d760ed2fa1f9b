use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;

use crate::command::{CommandLine, build_command_line};
use crate::exec::run_command;
use crate::foundation::error::{HtmlpressError, HtmlpressResult};
use crate::options::schema::{IMAGE_OPTIONS, PDF_OPTIONS};
use crate::options::set::OptionSet;
use crate::options::value::OptionValue;

/// Wall-clock limit on a single renderer invocation.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// The closed set of renderers htmlpress can drive.
///
/// Each kind supplies its own recognized-option schema, default output
/// extension and conventional binary location; the invocation pipeline is
/// shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// `wkhtmltopdf`, producing PDF documents.
    Pdf,
    /// `wkhtmltoimage`, producing raster images.
    Image,
}

impl RendererKind {
    /// Recognized option names, in serialization order.
    pub fn recognized_options(self) -> &'static [&'static str] {
        match self {
            RendererKind::Pdf => PDF_OPTIONS,
            RendererKind::Image => IMAGE_OPTIONS,
        }
    }

    /// Conventional install location of the renderer binary.
    pub fn default_binary(self) -> &'static str {
        match self {
            RendererKind::Pdf => "/usr/local/bin/wkhtmltopdf",
            RendererKind::Image => "/usr/local/bin/wkhtmltoimage",
        }
    }

    /// Extension used when htmlpress picks the output file itself.
    pub fn default_extension(self) -> &'static str {
        match self {
            RendererKind::Pdf => "pdf",
            RendererKind::Image => "jpg",
        }
    }
}

/// Drives one renderer binary.
///
/// A generator is constructed once, configured through its setters, then used
/// for any number of independent conversion calls. Calls share the instance
/// option set but are otherwise stateless with respect to each other; every
/// call re-reads the configuration and builds its command fresh.
#[derive(Clone, Debug)]
pub struct Generator {
    kind: RendererKind,
    binary: Option<PathBuf>,
    options: OptionSet,
    default_extension: String,
    timeout: Duration,
    temp_dir: PathBuf,
}

impl Generator {
    /// Create a generator for `kind` using the conventional binary location.
    pub fn new(kind: RendererKind) -> Self {
        let mut generator = Self::unconfigured(kind);
        generator.binary = Some(PathBuf::from(kind.default_binary()));
        generator
    }

    /// Create a generator with no binary configured.
    ///
    /// Conversion calls fail with [`HtmlpressError::NotConfigured`] until
    /// [`Generator::set_binary`] is called.
    pub fn unconfigured(kind: RendererKind) -> Self {
        Self {
            kind,
            binary: None,
            options: OptionSet::with_names(kind.recognized_options().iter().copied()),
            default_extension: kind.default_extension().to_string(),
            timeout: DEFAULT_TIMEOUT,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// The renderer kind this generator drives.
    pub fn kind(&self) -> RendererKind {
        self.kind
    }

    /// The configured renderer binary, if any.
    pub fn binary(&self) -> Option<&Path> {
        self.binary.as_deref()
    }

    /// Point the generator at a renderer binary.
    pub fn set_binary(&mut self, binary: impl Into<PathBuf>) {
        self.binary = Some(binary.into());
    }

    /// Extension used for self-created output files.
    pub fn default_extension(&self) -> &str {
        &self.default_extension
    }

    /// Override the extension used for self-created output files.
    pub fn set_default_extension(&mut self, extension: impl Into<String>) {
        self.default_extension = extension.into();
    }

    /// The wall-clock limit on renderer invocations.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Override the wall-clock limit on renderer invocations.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Directory for temporary input/output artifacts.
    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Override the directory for temporary input/output artifacts.
    pub fn set_temp_dir(&mut self, dir: impl Into<PathBuf>) {
        self.temp_dir = dir.into();
    }

    /// Overwrite one option value; see [`OptionSet::set`].
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> HtmlpressResult<()> {
        self.options.set(name, value)
    }

    /// Overwrite several option values in order; see [`OptionSet::set_many`].
    pub fn set_options<I, S, V>(&mut self, pairs: I) -> HtmlpressResult<()>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<OptionValue>,
    {
        self.options.set_many(pairs)
    }

    /// The full current option set, unset entries included.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Instance options with `overrides` applied on top; never mutates the
    /// instance. See [`OptionSet::merged`].
    pub fn merge_options(&self, overrides: &[(&str, OptionValue)]) -> HtmlpressResult<OptionSet> {
        self.options
            .merged(overrides.iter().map(|(n, v)| (*n, v.clone())))
    }

    /// Resolve the exact command line for converting `input` into `output`.
    pub fn get_command(
        &self,
        input: &str,
        output: &Path,
        overrides: &[(&str, OptionValue)],
    ) -> HtmlpressResult<CommandLine> {
        let binary = self.binary.as_ref().ok_or(HtmlpressError::NotConfigured)?;
        let merged = self.merge_options(overrides)?;
        Ok(build_command_line(
            &binary.to_string_lossy(),
            input,
            &output.to_string_lossy(),
            &merged,
        ))
    }

    /// Convert `input` (a file path or URL) into the file at `output`.
    ///
    /// Returns the output path on success. `overwrite` decides whether an
    /// existing output file is replaced or reported as a collision.
    #[tracing::instrument(skip(self, overrides), fields(kind = ?self.kind, output = %output.display()))]
    pub fn generate(
        &self,
        input: &str,
        output: &Path,
        overrides: &[(&str, OptionValue)],
        overwrite: bool,
    ) -> HtmlpressResult<PathBuf> {
        if self.binary.is_none() {
            return Err(HtmlpressError::NotConfigured);
        }

        prepare_output(output, overwrite)?;

        let command = self.get_command(input, output, overrides)?;
        let streams = run_command(&command, self.timeout)?;
        if !streams.stdout.is_empty() || !streams.stderr.is_empty() {
            // wkhtmltopdf reports progress on stderr even on success.
            tracing::debug!(stdout = %streams.stdout, stderr = %streams.stderr, "renderer diagnostics");
        }

        check_output(output, &command.to_string())
    }

    /// Convert raw HTML into the file at `output` via a temporary `.html`
    /// input file. The temporary file is deleted on every exit path.
    pub fn generate_from_html(
        &self,
        html: &str,
        output: &Path,
        overrides: &[(&str, OptionValue)],
        overwrite: bool,
    ) -> HtmlpressResult<PathBuf> {
        let input = self.write_temp_html(html)?;
        let input_path = input.path().to_string_lossy().into_owned();
        self.generate(&input_path, output, overrides, overwrite)
        // Dropping `input` removes the temporary file, success or not.
    }

    /// Convert `input` and return the produced bytes.
    ///
    /// The output goes to a temporary file named with the generator's default
    /// extension, which is read back and deleted before returning.
    pub fn get_output(
        &self,
        input: &str,
        overrides: &[(&str, OptionValue)],
    ) -> HtmlpressResult<Vec<u8>> {
        let target = self.temp_output_file()?;
        // The placeholder file reserves the path; overwrite lets the
        // pipeline replace it with the rendered artifact.
        self.generate(input, target.path(), overrides, true)?;
        let bytes = std::fs::read(target.path()).with_context(|| {
            format!("read rendered output '{}'", target.path().display())
        })?;
        Ok(bytes)
    }

    /// Convert raw HTML and return the produced bytes.
    ///
    /// Both the temporary HTML input and the temporary output file are
    /// deleted on every exit path.
    pub fn get_output_from_html(
        &self,
        html: &str,
        overrides: &[(&str, OptionValue)],
    ) -> HtmlpressResult<Vec<u8>> {
        let input = self.write_temp_html(html)?;
        let input_path = input.path().to_string_lossy().into_owned();
        self.get_output(&input_path, overrides)
    }

    fn write_temp_html(&self, html: &str) -> HtmlpressResult<tempfile::NamedTempFile> {
        use std::io::Write as _;

        let mut file = tempfile::Builder::new()
            .prefix("htmlpress-")
            .suffix(".html")
            .tempfile_in(&self.temp_dir)
            .with_context(|| {
                format!("create temporary html input in '{}'", self.temp_dir.display())
            })?;
        file.write_all(html.as_bytes())
            .and_then(|()| file.flush())
            .context("write temporary html input")?;
        Ok(file)
    }

    fn temp_output_file(&self) -> HtmlpressResult<tempfile::NamedTempFile> {
        let file = tempfile::Builder::new()
            .prefix("htmlpress-")
            .suffix(&format!(".{}", self.default_extension))
            .tempfile_in(&self.temp_dir)
            .with_context(|| {
                format!("create temporary output in '{}'", self.temp_dir.display())
            })?;
        Ok(file)
    }
}

/// Make sure `output` can be written: reject directories, honor the
/// overwrite policy for existing files, create missing parent directories.
fn prepare_output(output: &Path, overwrite: bool) -> HtmlpressResult<()> {
    match std::fs::metadata(output) {
        Ok(meta) => {
            if !meta.is_file() {
                return Err(HtmlpressError::InvalidOutputTarget {
                    path: output.to_path_buf(),
                });
            }
            if !overwrite {
                return Err(HtmlpressError::OutputExists {
                    path: output.to_path_buf(),
                });
            }
            std::fs::remove_file(output).map_err(|source| HtmlpressError::CleanupFailed {
                path: output.to_path_buf(),
                source,
            })?;
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = output.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent).map_err(|source| {
                    HtmlpressError::DirectoryCreateFailed {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("inspect output path '{}'", output.display()))
                .into());
        }
    }
    Ok(())
}

/// Verify that the renderer actually produced a non-empty `output`.
fn check_output(output: &Path, command: &str) -> HtmlpressResult<PathBuf> {
    let meta = std::fs::metadata(output).map_err(|_| HtmlpressError::OutputMissing {
        path: output.to_path_buf(),
        command: command.to_string(),
    })?;
    if meta.len() == 0 {
        return Err(HtmlpressError::OutputEmpty {
            path: output.to_path_buf(),
            command: command.to_string(),
        });
    }
    Ok(output.to_path_buf())
}

#[cfg(test)]
#[path = "../tests/unit/generator.rs"]
mod tests;
