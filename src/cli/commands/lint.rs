//! Lint command implementation.
//!
//! `hyperion-lint <FILE>` loads the document, runs the selected lint
//! sections and writes the report in the requested format.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, FailOn};
use crate::document::loader::load_document;
use crate::error::Result;
use crate::lint::output::should_use_colors;
use crate::lint::{
    Finding, HumanFormatter, JsonFormatter, LintEngine, LintFormatter, OutputFormat,
    SarifFormatter, Selection,
};

use super::{Command, CommandResult};

/// Everything one lint invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct LintSettings {
    /// Document to lint.
    pub file: PathBuf,
    /// Sections to run.
    pub selection: Selection,
    /// Report format.
    pub format: OutputFormat,
    /// Exit status policy.
    pub fail_on: FailOn,
    /// Color the human report.
    pub use_color: bool,
    /// Include suggestions and a summary in the human report.
    pub details: bool,
}

impl LintSettings {
    /// Plain human report of every section for `file`.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            selection: Selection::All,
            format: OutputFormat::Human,
            fail_on: FailOn::Never,
            use_color: false,
            details: false,
        }
    }

    /// Resolve settings from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if a section name is not a lint category.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self {
            file: cli.file.clone(),
            selection: Selection::from_names(&cli.section)?,
            format: cli.format,
            fail_on: cli.fail_on,
            use_color: !cli.no_color && should_use_colors(),
            details: cli.verbose || cli.debug,
        })
    }
}

/// The lint command implementation.
pub struct LintCommand {
    settings: LintSettings,
    engine: LintEngine,
}

impl LintCommand {
    /// Create a lint command using every built-in rule.
    pub fn new(settings: LintSettings) -> Self {
        Self::with_engine(settings, LintEngine::with_builtins())
    }

    /// Create a lint command over a custom engine.
    pub fn with_engine(settings: LintSettings, engine: LintEngine) -> Self {
        Self { settings, engine }
    }

    /// Get the command settings.
    pub fn settings(&self) -> &LintSettings {
        &self.settings
    }

    /// Format findings using the appropriate formatter.
    fn write_report(
        &self,
        findings: &[Finding],
        source: Option<&Path>,
        out: &mut dyn Write,
    ) -> std::io::Result<()> {
        match self.settings.format {
            OutputFormat::Human => HumanFormatter::new(self.settings.use_color)
                .with_details(self.settings.details)
                .format(findings, &mut *out),
            OutputFormat::Json => JsonFormatter::new().format(findings, &mut *out),
            OutputFormat::Sarif => {
                SarifFormatter::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                    .with_artifact(source)
                    .with_registry(self.engine.registry())
                    .format(findings, &mut *out)
            }
        }
    }
}

impl Command for LintCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let doc = load_document(&self.settings.file)?;
        let findings = self.engine.lint(&doc, &self.settings.selection);

        self.write_report(&findings, doc.source(), out)?;
        out.flush()?;

        if self.settings.fail_on.is_met(&findings) {
            tracing::info!(
                "Findings meet the --fail-on {:?} threshold",
                self.settings.fail_on
            );
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
