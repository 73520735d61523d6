//! 类型化哈希表 - 在字节表之上提供按类型编解码的接口

use crate::{
    error::CuckooError,
    map::{
        cuckoo_table::{CuckooTable, CuckooTableConfig},
        DEFAULT_CONFIG,
    },
    stats::TableStats,
    types::{Key, Removal, Value},
};
use std::{fmt, marker::PhantomData};

/// 类型化Cuckoo哈希表
///
/// 键/值宽度由 [`Key::WIDTH`] 与 [`Value::WIDTH`] 决定，例如 `i32` 为4字节定长，
/// `String` 为以 `0` 结尾的变长串。
pub struct CuckooMap<K: Key, V: Value> {
    inner: CuckooTable,
    _marker: PhantomData<fn(K) -> V>,
}

impl<K: Key, V: Value> CuckooMap<K, V> {
    /// 使用默认配置创建
    pub fn new() -> Result<Self, CuckooError> {
        Self::with_config(DEFAULT_CONFIG.clone())
    }

    /// 使用指定配置创建
    pub fn with_config(config: CuckooTableConfig) -> Result<Self, CuckooError> {
        Ok(Self {
            inner: CuckooTable::with_config(K::WIDTH, V::WIDTH, config)?,
            _marker: PhantomData,
        })
    }

    /// 插入或更新
    pub fn insert(&mut self, key: K, value: V) -> Result<(), CuckooError> {
        self.inner.put(&key.encode(), &value.encode())
    }

    /// 获取值
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.get(&key.encode()).and_then(V::decode)
    }

    /// 获取值，存储内容无法解码时返回错误
    pub fn try_get(&self, key: &K) -> Result<Option<V>, CuckooError> {
        match self.inner.get(&key.encode()) {
            Some(bytes) => V::decode(bytes).map(Some).ok_or(CuckooError::ValueDeserialization),
            None => Ok(None),
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(&key.encode())
    }

    /// 删除键
    pub fn remove(&mut self, key: &K) -> Removal {
        self.inner.remove(&key.encode())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// 单侧槽位数
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn clear(&mut self) -> Result<(), CuckooError> {
        self.inner.clear()
    }

    pub fn stats(&self) -> TableStats {
        self.inner.stats()
    }

    /// 遍历可解码的键值对，顺序不作保证
    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.inner
            .iter()
            .filter_map(|(key, value)| Some((K::decode(key)?, V::decode(value)?)))
    }

    /// 获取内部字节表引用
    pub fn inner(&self) -> &CuckooTable {
        &self.inner
    }

    /// 获取内部字节表可变引用
    pub fn inner_mut(&mut self) -> &mut CuckooTable {
        &mut self.inner
    }
}

impl<K: Key, V: Value> fmt::Debug for CuckooMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.stats();
        f.debug_struct("CuckooMap")
            .field("size", &stats.size)
            .field("capacity", &stats.capacity)
            .field("load_factor", &stats.load_factor)
            .finish()
    }
}
