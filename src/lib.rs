//! 单线程Cuckoo哈希表库
//!
//! 开放寻址哈希表：每个键在左右两个区域各有一个候选槽位，由两组独立种子的
//! 键控哈希决定。插入冲突时沿有界踢出序列搬移占用者，遇到循环则扩容并重新
//! 抽取种子。
//!
//! ## 主要特性
//! - 定长或以 `0` 结尾的变长字节键值
//! - 负载因子始终不超过0.5，查询最多两次探测
//! - SipHash-2-4（默认）、AHash、XxHash 可选
//! - 随机源可注入种子，扩容与踢出行为可复现
//!
//! ## 快速开始
//!
//! ```rust
//! use cuckoo_table::*;
//!
//! let mut map = CuckooMap::<i32, i32>::new().expect("建表失败");
//! map.insert(1, 100).expect("插入失败");
//! map.insert(2, 200).expect("插入失败");
//!
//! assert_eq!(map.get(&1), Some(100));
//! assert_eq!(map.remove(&1), Removal::Removed);
//! assert_eq!(map.get(&1), None);
//!
//! // 字节层接口：变长字符串键值
//! let mut table = CuckooTable::new(Width::Terminated, Width::Terminated).expect("建表失败");
//! table.put(b"key1", b"value1").expect("插入失败");
//! assert_eq!(table.get(b"key1"), Some(&b"value1"[..]));
//! ```

#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod memory;
pub mod map;
pub mod stats;

// 公共接口导出
pub use crate::{
    error::CuckooError,
    hash::{DoubleHashStrategy, HashAlgorithm, SeedPair},
    map::{CuckooMap, CuckooTable, CuckooTableConfig, DEFAULT_CONFIG, INITIAL_CAPACITY},
    memory::Entry,
    stats::{OperationStats, TableStats},
    types::{Key, Lookup, Removal, Value, Width},
};

/// 字符串到字符串的类型化表
pub type StringMap = CuckooMap<String, String>;

/// 批量插入，返回成功条数
pub fn batch_insert<K: Key, V: Value>(
    map: &mut CuckooMap<K, V>,
    items: impl IntoIterator<Item = (K, V)>,
) -> Result<usize, CuckooError> {
    let mut count = 0;
    for (key, value) in items {
        map.insert(key, value)?;
        count += 1;
    }
    Ok(count)
}

/// 批量查询
pub fn batch_get<'a, K: Key + 'a, V: Value>(
    map: &CuckooMap<K, V>,
    keys: impl IntoIterator<Item = &'a K>,
) -> Vec<Option<V>> {
    keys.into_iter().map(|key| map.get(key)).collect()
}
