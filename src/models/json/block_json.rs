use serde::Serialize;

use crate::{
    misc::utils::{format_block_time, format_difficulty, format_size},
    models::block::Block,
};

#[derive(Serialize)]
pub struct BlockJson {
    pub height: u64,
    pub hash: String,
    pub merkle_root: String,
    pub size: u64,
    pub bytes_per_tx: u64,
    pub difficulty: f64,
    pub time: i64,
    pub version: i64,
    pub display_size: String,
    pub display_difficulty: String,
    pub display_time: String,
    pub txs_count: usize,
    pub tx: Vec<String>,
}

impl From<&Block> for BlockJson {
    fn from(block: &Block) -> Self {
        Self {
            height: block.height,
            hash: block.hash.clone(),
            merkle_root: block.merkle_root.clone(),
            size: block.size,
            bytes_per_tx: block.bytes_per_tx(),
            difficulty: block.difficulty,
            time: block.time,
            version: block.version,
            display_size: format_size(block.size),
            display_difficulty: format_difficulty(block.difficulty),
            display_time: format_block_time(block.time),
            txs_count: block.tx_count(),
            tx: block.tx.clone(),
        }
    }
}
