use serde::{Deserialize, Serialize};

/// A block as returned by `getblock` with verbosity 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub hash: String,
    pub height: u64,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    pub size: u64,
    pub difficulty: f64,
    pub time: i64,
    pub version: i64,
    pub tx: Vec<String>,
}

impl Block {
    pub fn tx_count(&self) -> usize {
        self.tx.len()
    }

    /// Average transaction size, zero for an empty block.
    pub fn bytes_per_tx(&self) -> u64 {
        match self.tx.len() as u64 {
            0 => 0,
            count => self.size / count,
        }
    }
}
