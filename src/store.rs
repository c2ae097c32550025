use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::{
    browser::{BlockDataProvider, ProviderError},
    models::block::Block,
};

/// Fetch requests sent to the data worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockRequest {
    Height(u64),
    Tip,
}

/// In-memory block cache answering browser lookups. Heights it doesn't know
/// are requested once over `data_req_tx` until they arrive or fail.
pub struct BlockStore {
    hashes: HashMap<u64, String>,
    blocks: HashMap<String, Arc<Block>>,
    requested: HashSet<u64>,
    tip: Option<u64>,
    data_req_tx: Sender<BlockRequest>,
}

impl BlockStore {
    pub fn new(data_req_tx: Sender<BlockRequest>) -> Self {
        Self {
            hashes: HashMap::new(),
            blocks: HashMap::new(),
            requested: HashSet::new(),
            tip: None,
            data_req_tx,
        }
    }

    /// Caches `block`, replacing any block previously stored at its height.
    pub fn insert(&mut self, block: Block) -> Arc<Block> {
        let block = Arc::new(block);
        self.requested.remove(&block.height);
        if let Some(old_hash) = self.hashes.insert(block.height, block.hash.clone())
            && old_hash != block.hash
        {
            debug!(height = block.height, %old_hash, new_hash = %block.hash, "block replaced");
            self.blocks.remove(&old_hash);
        }
        self.blocks.insert(block.hash.clone(), block.clone());
        block
    }

    pub fn insert_tip(&mut self, block: Block) -> Arc<Block> {
        self.tip = Some(self.tip.map_or(block.height, |tip| tip.max(block.height)));
        self.insert(block)
    }

    pub fn tip(&self) -> Option<u64> {
        self.tip
    }

    pub fn is_requested(&self, height: u64) -> bool {
        self.requested.contains(&height)
    }

    /// Allows a failed height to be requested again.
    pub fn forget_request(&mut self, height: u64) {
        self.requested.remove(&height);
    }

    pub fn request_tip(&self) {
        self.send(BlockRequest::Tip);
    }

    fn send(&self, request: BlockRequest) -> bool {
        match self.data_req_tx.send(request) {
            Ok(()) => true,
            Err(e) => {
                warn!(request = ?e.0, "data worker is gone, dropping request");
                false
            }
        }
    }
}

impl BlockDataProvider for BlockStore {
    fn get_hash(&self, height: u64) -> Result<String, ProviderError> {
        self.hashes
            .get(&height)
            .cloned()
            .ok_or(ProviderError::HeightNotFound(height))
    }

    fn get_block(&self, hash: &str) -> Result<Arc<Block>, ProviderError> {
        self.blocks
            .get(hash)
            .cloned()
            .ok_or_else(|| ProviderError::BlockNotFound(hash.to_string()))
    }

    fn request_blockheight(&mut self, height: u64) {
        if self.hashes.contains_key(&height) || self.requested.contains(&height) {
            debug!(height, "block already available or in flight");
            return;
        }

        if self.send(BlockRequest::Height(height)) {
            self.requested.insert(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(height: u64) -> Block {
        Block {
            hash: format!("{height:064x}"),
            height,
            merkle_root: "00".repeat(32),
            size: 285,
            difficulty: 1.0,
            time: 1_231_469_665,
            version: 1,
            tx: vec![format!("coinbase-{height}")],
        }
    }

    #[test]
    fn test_lookup_after_insert() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let mut store = BlockStore::new(tx);
        assert_eq!(store.get_hash(1), Err(ProviderError::HeightNotFound(1)));

        store.insert(block(1));
        let hash = store.get_hash(1).unwrap();
        assert_eq!(store.get_block(&hash).unwrap().height, 1);
        assert!(matches!(
            store.get_block("missing"),
            Err(ProviderError::BlockNotFound(_))
        ));
    }

    #[test]
    fn test_request_is_deduplicated() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut store = BlockStore::new(tx);

        store.request_blockheight(5);
        store.request_blockheight(5);
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![BlockRequest::Height(5)]);
        assert!(store.is_requested(5));

        store.forget_request(5);
        store.request_blockheight(5);
        assert_eq!(rx.try_iter().count(), 1);

        store.insert(block(5));
        assert!(!store.is_requested(5));
        store.request_blockheight(5);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_request_with_closed_channel() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let mut store = BlockStore::new(tx);

        store.request_blockheight(9);
        assert!(!store.is_requested(9));
    }

    #[test]
    fn test_tip_only_moves_forward() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut store = BlockStore::new(tx);
        store.request_tip();
        assert_eq!(rx.try_recv().unwrap(), BlockRequest::Tip);

        store.insert_tip(block(10));
        store.insert_tip(block(8));
        assert_eq!(store.tip(), Some(10));
        assert!(store.block_at(8).is_ok());
        assert!(store.block_at(10).is_ok());
    }

    #[test]
    fn test_reinsert_at_height_evicts_old_block() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let mut store = BlockStore::new(tx);
        let old = block(7);
        store.insert(old.clone());

        let mut replacement = block(7);
        replacement.hash = "ff".repeat(32);
        replacement.tx.push("second".to_string());
        store.insert(replacement.clone());

        assert_eq!(store.get_hash(7), Ok(replacement.hash.clone()));
        assert_eq!(store.block_at(7).unwrap().tx_count(), 2);
        assert_eq!(
            store.get_block(&old.hash),
            Err(ProviderError::BlockNotFound(old.hash.clone()))
        );
        assert_eq!(store.blocks.len(), 1);

        // same block again keeps its entry
        store.insert(replacement.clone());
        assert!(store.get_block(&replacement.hash).is_ok());
    }
}
