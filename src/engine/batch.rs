//! Line-oriented batch formatting

use crate::engine::Engine;
use crate::format::Template;
use crate::resolve::ResolveOptions;
use serde::Serialize;

/// Outcome of formatting one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatRecord {
    #[serde(rename = "CidStr")]
    pub input: String,
    #[serde(rename = "Formatted")]
    pub formatted: Option<String>,
    #[serde(rename = "ErrorMsg")]
    pub error: Option<String>,
}

impl FormatRecord {
    fn success(input: &str, formatted: String) -> Self {
        Self {
            input: input.to_string(),
            formatted: Some(formatted),
            error: None,
        }
    }

    fn failure(input: &str, error: impl ToString) -> Self {
        Self {
            input: input.to_string(),
            formatted: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a FormatRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut summary, record| {
            summary.total += 1;
            if record.is_ok() {
                summary.succeeded += 1;
            } else {
                summary.failed += 1;
            }
            summary
        })
    }
}

/// Lazy iterator formatting one identifier per input line
///
/// Blank lines are skipped. A failure on one line is recorded in its
/// [`FormatRecord`] and does not stop the batch.
pub struct FormatBatch<'a, I> {
    engine: &'a Engine,
    template: Template,
    options: ResolveOptions,
    inputs: I,
}

impl<'a, I> FormatBatch<'a, I> {
    pub(crate) fn new(engine: &'a Engine, template: Template, options: ResolveOptions, inputs: I) -> Self {
        Self {
            engine,
            template,
            options,
            inputs,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}

impl<'a, I, S> Iterator for FormatBatch<'a, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = FormatRecord;

    fn next(&mut self) -> Option<FormatRecord> {
        loop {
            let line = self.inputs.next()?;
            let input = line.as_ref().trim();
            if input.is_empty() {
                continue;
            }

            let rendered = self
                .engine
                .resolve_identifier(input, &self.options)
                .and_then(|(cid, base)| self.template.render(self.engine.registry(), &cid, &base));

            return Some(match rendered {
                Ok(formatted) => FormatRecord::success(input, formatted),
                Err(e) => FormatRecord::failure(input, e),
            });
        }
    }
}
