//! 哈希表核心模块 - 字节表引擎与类型化封装

pub mod cuckoo_table;
pub mod cuckoo_map;

pub use cuckoo_table::{CuckooTable, CuckooTableConfig};
pub use cuckoo_map::CuckooMap;

use once_cell::sync::Lazy;

/// 默认初始单侧槽位数
pub const INITIAL_CAPACITY: usize = 16;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<CuckooTableConfig> = Lazy::new(CuckooTableConfig::default);
