//! 双哈希策略 - 左右两侧各用一组独立种子定位槽位

use crate::{
    hash::{
        calculate_slot,
        strategy::{HashAlgorithm, SeedPair, SeededHasher},
    },
    memory::Side,
};
use rand::Rng;

/// 双哈希策略
///
/// 同一个键在左右两侧的候选槽位由两组独立种子决定，统计上相互独立。
/// 扩容时整体重新抽取。
#[derive(Debug, Clone)]
pub struct DoubleHashStrategy {
    algorithm: HashAlgorithm,
    left_seeds: SeedPair,
    right_seeds: SeedPair,
    left: SeededHasher,
    right: SeededHasher,
}

impl DoubleHashStrategy {
    /// 使用指定种子创建
    pub fn new(algorithm: HashAlgorithm, left_seeds: SeedPair, right_seeds: SeedPair) -> Self {
        Self {
            algorithm,
            left_seeds,
            right_seeds,
            left: algorithm.build(left_seeds),
            right: algorithm.build(right_seeds),
        }
    }

    /// 从随机源抽取四个种子字创建
    pub fn draw<R: Rng + ?Sized>(algorithm: HashAlgorithm, rng: &mut R) -> Self {
        let left_seeds = SeedPair::draw(rng);
        let right_seeds = SeedPair::draw(rng);
        Self::new(algorithm, left_seeds, right_seeds)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// 当前 (左, 右) 种子对
    pub fn seeds(&self) -> (SeedPair, SeedPair) {
        (self.left_seeds, self.right_seeds)
    }

    /// 键在某一侧区域内的偏移
    pub fn offset(&self, side: Side, key: &[u8], per_side: usize) -> usize {
        let hash = match side {
            Side::Left => self.left.hash_bytes(key),
            Side::Right => self.right.hash_bytes(key),
        };
        calculate_slot(hash, per_side)
    }

    /// 键的两个候选偏移 (左, 右)
    pub fn locate(&self, key: &[u8], per_side: usize) -> (usize, usize) {
        (
            self.offset(Side::Left, key, per_side),
            self.offset(Side::Right, key, per_side),
        )
    }
}
