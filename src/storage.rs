use crate::traits::FileSystem;
use std::path::Path;
use tracing::debug;

/// Local disk storage backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

#[async_trait::async_trait]
impl FileSystem for RealFileSystem {
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        debug!("Creating directory: {:?}", path);
        tokio::fs::create_dir_all(path).await
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(path, data).await?;
        debug!("Wrote {} bytes to {:?}", data.len(), path);
        Ok(())
    }
}
