use std::sync::Arc;

use thiserror::Error;

use crate::models::block::Block;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("no block hash known for height {0}")]
    HeightNotFound(u64),
    #[error("block {0} not found")]
    BlockNotFound(String),
}

/// Source of block data for the browser.
///
/// Lookups only answer from what is already available. Missing heights are
/// requested with [`BlockDataProvider::request_blockheight`]; the result is
/// delivered later to [`crate::ViewCoordinator::on_block_arrival`], or never.
pub trait BlockDataProvider {
    fn get_hash(&self, height: u64) -> Result<String, ProviderError>;

    fn get_block(&self, hash: &str) -> Result<Arc<Block>, ProviderError>;

    fn request_blockheight(&mut self, height: u64);

    fn block_at(&self, height: u64) -> Result<Arc<Block>, ProviderError> {
        let hash = self.get_hash(height)?;
        self.get_block(&hash)
    }
}
