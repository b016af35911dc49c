use crate::core::analyzer::Analyzer;
use crate::core::render::render;
use crate::core::{AnalysisResult, ConfigProvider, Pipeline, Storage, TextRecord};
use crate::utils::error::{Result, StrUtilError};
use std::io::{ErrorKind, Write};

/// Marker returned by `load` when the report went to stdout.
pub const STDOUT_TARGET: &str = "-";

pub struct TextPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    analyzer: Analyzer,
}

impl<S: Storage, C: ConfigProvider> TextPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let analyzer = Analyzer::new(config.operations());
        Self {
            storage,
            config,
            analyzer,
        }
    }

    async fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        let bytes = self.storage.read_file(path).await?;
        let content = String::from_utf8(bytes).map_err(|e| StrUtilError::InvalidConfigValueError {
            field: "input_file".to_string(),
            value: path.to_string(),
            reason: format!("File is not valid UTF-8: {}", e),
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Writes the report, treating a closed reader (e.g. `| head -1`) as success.
fn write_report<W: Write>(mut out: W, rendered: &str) -> Result<()> {
    match out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("Report reader closed early");
            Ok(())
        }
        other => Ok(other?),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TextPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<TextRecord>> {
        let mut texts: Vec<String> = self.config.inputs().to_vec();
        tracing::debug!("{} inputs from the command line", texts.len());

        if let Some(path) = self.config.input_file() {
            let lines = self.read_lines(path).await?;
            tracing::debug!("{} inputs from {}", lines.len(), path);
            texts.extend(lines);
        }

        if texts.is_empty() {
            return Err(StrUtilError::NoInput);
        }

        Ok(texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| TextRecord { line: i + 1, text })
            .collect())
    }

    async fn transform(&self, records: Vec<TextRecord>) -> Result<AnalysisResult> {
        tracing::debug!(
            "Applying operations: {}",
            self.analyzer
                .operations()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        );

        let reports: Vec<_> = records.iter().map(|r| self.analyzer.analyze(r)).collect();
        let generated_at = chrono::Utc::now().to_rfc3339();
        let rendered = render(self.config.format(), &reports, &generated_at)?;

        Ok(AnalysisResult {
            reports,
            generated_at,
            rendered,
        })
    }

    async fn load(&self, result: AnalysisResult) -> Result<String> {
        match self.config.output_path() {
            Some(path) => {
                self.storage
                    .write_file(path, result.rendered.as_bytes())
                    .await?;
                Ok(path.to_string())
            }
            None => {
                write_report(std::io::stdout().lock(), &result.rendered)?;
                Ok(STDOUT_TARGET.to_string())
            }
        }
    }
}
