use crate::domain::model::{AnalysisResult, Operation, OutputFormat, TextRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn inputs(&self) -> &[String];
    fn input_file(&self) -> Option<&str>;
    fn output_path(&self) -> Option<&str>;
    fn format(&self) -> OutputFormat;
    fn operations(&self) -> &[Operation];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TextRecord>>;
    async fn transform(&self, records: Vec<TextRecord>) -> Result<AnalysisResult>;
    async fn load(&self, result: AnalysisResult) -> Result<String>;
}
