//! 哈希算法模块 - 带种子的非加密键控哈希

use ahash::RandomState;
use rand::Rng;
use siphasher::sip::SipHasher24;
use std::{
    fmt,
    hash::{BuildHasher, Hasher},
};

/// 哈希算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// SipHash-2-4，抗恶意构造键
    #[default]
    SipHash24,
    AHash,
    XxHash,
}

impl HashAlgorithm {
    /// 用种子对实例化一个哈希函数
    pub fn build(self, seeds: SeedPair) -> SeededHasher {
        match self {
            Self::SipHash24 => SeededHasher::Sip(seeds),
            Self::AHash => SeededHasher::AHash(RandomState::with_seeds(
                seeds.k0,
                seeds.k1,
                seeds.k0.rotate_left(32),
                seeds.k1.rotate_left(32),
            )),
            // XxHash64只接受一个64位种子
            Self::XxHash => SeededHasher::Xx(seeds.k0 ^ seeds.k1.rotate_left(32)),
        }
    }
}

/// 种子对 - 两个64位字参数化一个哈希函数实例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPair {
    pub k0: u64,
    pub k1: u64,
}

impl SeedPair {
    pub const fn new(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }

    /// 从随机源抽取两个种子字
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            k0: rng.gen(),
            k1: rng.gen(),
        }
    }
}

/// 已实例化的带种子哈希函数
#[derive(Clone)]
pub enum SeededHasher {
    Sip(SeedPair),
    AHash(RandomState),
    Xx(u64),
}

impl SeededHasher {
    /// 计算字节序列的哈希值
    pub fn hash_bytes(&self, data: &[u8]) -> u64 {
        match self {
            Self::Sip(seeds) => {
                let mut hasher = SipHasher24::new_with_keys(seeds.k0, seeds.k1);
                hasher.write(data);
                hasher.finish()
            }
            Self::AHash(state) => {
                let mut hasher = state.build_hasher();
                hasher.write(data);
                hasher.finish()
            }
            Self::Xx(seed) => {
                let mut hasher = twox_hash::XxHash64::with_seed(*seed);
                hasher.write(data);
                hasher.finish()
            }
        }
    }
}

impl fmt::Debug for SeededHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sip(seeds) => f.debug_tuple("Sip").field(seeds).finish(),
            Self::AHash(_) => f.write_str("AHash(..)"),
            Self::Xx(seed) => f.debug_tuple("Xx").field(seed).finish(),
        }
    }
}
