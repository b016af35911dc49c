use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting analysis...");

        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} inputs", records.len());

        let result = self.pipeline.transform(records).await?;
        tracing::info!("Analyzed {} inputs", result.reports.len());

        let target = self.pipeline.load(result).await?;
        tracing::debug!("Report written to: {}", target);

        Ok(target)
    }
}
