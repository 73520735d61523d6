//! 哈希模块 - 带种子哈希函数与左右双哈希策略

pub mod strategy;
pub mod double_hash;

pub use strategy::{HashAlgorithm, SeedPair, SeededHasher};
pub use double_hash::DoubleHashStrategy;

/// 哈希值映射到单侧区域内的偏移
pub fn calculate_slot(hash: u64, per_side: usize) -> usize {
    (hash % per_side as u64) as usize
}
