use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::io::{self, Write};

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Broad failure class of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Serialization,
    Io,
    Config,
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Serialization => "serialization",
            ErrorCategory::Io => "io",
            ErrorCategory::Config => "config",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// A failure that ends a command.
///
/// `code` is stable and meant for scripts and tests; `context` carries the record index,
/// field or path the failure is about.
#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub code: &'static str,
    pub message: String,
    pub context: BTreeMap<&'static str, String>,
    pub hint: Option<&'static str>,
    cause: Option<Cause>,
}

impl AppError {
    pub fn new(category: ErrorCategory, code: &'static str, message: impl Into<String>) -> Self {
        AppError {
            category,
            code,
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
            cause: None,
        }
    }

    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.insert(key, value.to_string());
        self
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            write!(f, " ({})", pairs.join(", "))?;
        }
        Ok(())
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Errors that escape as plain `anyhow` values are reported as internal failures.
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::new(ErrorCategory::Internal, "INTERNAL", format!("{:#}", error))
    }
}

/// Prints an [`AppError`] for a terminal user.
pub struct ErrorReporter<W> {
    out: W,
}

impl ErrorReporter<io::Stderr> {
    pub fn stderr() -> Self {
        ErrorReporter { out: io::stderr() }
    }
}

impl<W: Write> ErrorReporter<W> {
    pub fn new(out: W) -> Self {
        ErrorReporter { out }
    }

    pub fn report(&mut self, error: &AppError) -> io::Result<()> {
        writeln!(
            self.out,
            "error[{}] {}: {}",
            error.code, error.category, error.message
        )?;
        for (key, value) in &error.context {
            writeln!(self.out, "  {}: {}", key, value)?;
        }
        let mut cause = error.source();
        while let Some(current) = cause {
            writeln!(self.out, "  caused by: {}", current)?;
            cause = current.source();
        }
        if let Some(hint) = error.hint {
            writeln!(self.out, "  hint: {}", hint)?;
        }
        Ok(())
    }
}
