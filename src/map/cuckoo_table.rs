//! Cuckoo哈希表核心实现
//!
//! 槽位数组分为左右两个区域，每个键在两侧各有一个候选槽位。插入时若两个候选
//! 槽位都被其他键占用，则启动有界踢出序列；序列超过 `2n` 步视为循环，回滚后
//! 扩容并重新抽取种子再重试。

use crate::{
    error::CuckooError,
    hash::{DoubleHashStrategy, HashAlgorithm},
    map::{DEFAULT_CONFIG, INITIAL_CAPACITY},
    memory::{Entry, Side, Slot, SlotArray},
    stats::{OperationStats, OperationType, TableStats},
    types::{Lookup, Removal, Width},
};
use rand::{rngs::StdRng, SeedableRng};
use std::{cell::Cell, fmt, mem};

/// 哈希表配置
#[derive(Clone, Debug, PartialEq)]
pub struct CuckooTableConfig {
    /// 初始单侧槽位数，`clear` 后也恢复到该值
    pub initial_capacity: usize,
    pub hash_algorithm: HashAlgorithm,
    /// 随机源种子；为 `None` 时从系统熵初始化
    pub seed: Option<u64>,
}

impl Default for CuckooTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: INITIAL_CAPACITY,
            hash_algorithm: HashAlgorithm::SipHash24,
            seed: None,
        }
    }
}

impl CuckooTableConfig {
    /// 使用固定随机种子，扩容与踢出行为可复现
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), CuckooError> {
        if self.initial_capacity == 0 {
            return Err(CuckooError::InvalidConfig {
                reason: "initial_capacity 必须大于0".to_string(),
            });
        }
        if self.initial_capacity > usize::MAX / 4 {
            return Err(CuckooError::InvalidConfig {
                reason: format!("initial_capacity 过大: {}", self.initial_capacity),
            });
        }
        Ok(())
    }
}

/// 可整体替换的表状态：槽位数组、哈希函数对与条目数
struct Layout {
    slots: SlotArray,
    hasher: DoubleHashStrategy,
    size: usize,
}

impl Layout {
    fn allocate(per_side: usize, algorithm: HashAlgorithm, rng: &mut StdRng) -> Result<Self, CuckooError> {
        let slots = SlotArray::try_new(per_side)?;
        Ok(Self {
            slots,
            hasher: DoubleHashStrategy::draw(algorithm, rng),
            size: 0,
        })
    }

    fn per_side(&self) -> usize {
        self.slots.per_side()
    }

    /// 踢出序列上限 2n
    fn max_kicks(&self) -> usize {
        2 * self.per_side()
    }

    /// 键在某一侧的绝对槽位下标
    fn slot_index(&self, side: Side, key: &[u8]) -> usize {
        let offset = self.hasher.offset(side, key, self.per_side());
        self.slots.index(side, offset)
    }

    /// 键的两个候选槽位 (左, 右)
    fn candidates(&self, key: &[u8]) -> (usize, usize) {
        (self.slot_index(Side::Left, key), self.slot_index(Side::Right, key))
    }

    /// 两次探测查找键所在槽位
    fn find(&self, key: &[u8], key_width: Width) -> Option<usize> {
        let (left, right) = self.candidates(key);
        [left, right].into_iter().find(|&index| {
            self.slots
                .get(index)
                .entry()
                .is_some_and(|entry| key_width.payload(entry.key()) == key)
        })
    }

    /// 放置一个表中尚不存在的键（只移动所有权），返回踢出次数
    ///
    /// 成功时条目数加一。踢出序列达到 `2n` 步时把所有交换按逆序撤销，
    /// 表恢复原状并把原条目交还调用方。
    fn place(&mut self, entry: Entry, key_width: Width) -> Result<usize, Entry> {
        let (left, right) = self.candidates(key_width.payload(entry.key()));
        for index in [left, right] {
            if self.slots.get(index).is_empty() {
                self.slots.get_mut(index).swap(entry);
                self.size += 1;
                return Ok(0);
            }
        }

        let max_kicks = self.max_kicks();
        let mut carried = entry;
        let mut side = Side::Left;
        for kicks in 0..max_kicks {
            let index = self.slot_index(side, key_width.payload(carried.key()));
            match self.slots.get_mut(index).swap(carried) {
                None => {
                    self.size += 1;
                    return Ok(kicks);
                }
                Some(evicted) => {
                    carried = evicted;
                    side = side.other();
                }
            }
        }

        // 被挤出的条目总是来自上一步所在一侧的自身槽位，逆序交换即可复原
        for _ in 0..max_kicks {
            side = side.other();
            let index = self.slot_index(side, key_width.payload(carried.key()));
            carried = match self.slots.get_mut(index).swap(carried) {
                Some(previous) => previous,
                None => unreachable!("回滚路径上的槽位不可能为空"),
            };
        }
        Err(carried)
    }

    /// 取出全部条目，条目数归零
    fn drain_into(&mut self, out: &mut Vec<Entry>) {
        self.slots.drain_into(out);
        self.size = 0;
    }
}

/// Cuckoo哈希表
///
/// 键和值以字节序列存储，宽度在建表时声明：定长（每个键/值恰好若干字节）
/// 或变长（以 `0` 结尾）。表独占所有存入的字节缓冲区。
pub struct CuckooTable {
    key_width: Width,
    value_width: Width,
    config: CuckooTableConfig,
    layout: Layout,
    rng: StdRng,
    stats: Cell<OperationStats>,
}

impl CuckooTable {
    /// 使用默认配置创建空表
    pub fn new(key_width: Width, value_width: Width) -> Result<Self, CuckooError> {
        Self::with_config(key_width, value_width, DEFAULT_CONFIG.clone())
    }

    /// 使用指定配置创建空表
    pub fn with_config(
        key_width: Width,
        value_width: Width,
        config: CuckooTableConfig,
    ) -> Result<Self, CuckooError> {
        config.validate()?;
        for (name, width) in [("key_width", key_width), ("value_width", value_width)] {
            if width == Width::Fixed(0) {
                return Err(CuckooError::InvalidConfig {
                    reason: format!("{} 不能为0字节定长，变长请使用 Width::Terminated", name),
                });
            }
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let layout = Layout::allocate(config.initial_capacity, config.hash_algorithm, &mut rng)?;
        log_debug!(
            "cuckoo table created: per_side={} key_width={:?} value_width={:?}",
            config.initial_capacity,
            key_width,
            value_width
        );

        Ok(Self {
            key_width,
            value_width,
            config,
            layout,
            rng,
            stats: Cell::new(OperationStats::new()),
        })
    }

    pub fn key_width(&self) -> Width {
        self.key_width
    }

    pub fn value_width(&self) -> Width {
        self.value_width
    }

    pub fn config(&self) -> &CuckooTableConfig {
        &self.config
    }

    /// 当前条目数
    pub fn len(&self) -> usize {
        self.layout.size
    }

    pub fn is_empty(&self) -> bool {
        self.layout.size == 0
    }

    /// 单侧槽位数 n（槽位总数为 2n）
    pub fn capacity(&self) -> usize {
        self.layout.per_side()
    }

    /// 负载因子（相对单侧容量）
    pub fn load_factor(&self) -> f32 {
        self.layout.size as f32 / self.layout.per_side() as f32
    }

    /// 获取统计信息
    pub fn stats(&self) -> TableStats {
        TableStats::new(self.layout.size, self.layout.per_side(), self.stats.get())
    }

    fn record(&self, op_type: OperationType, times: usize) {
        let mut stats = self.stats.get();
        stats.record_n(op_type, times as u64);
        self.stats.set(stats);
    }

    /// 键在当前种子下的两个候选槽位绝对下标 (左, 右)
    ///
    /// 扩容会重新抽取种子，结果随之失效。
    pub fn slots_for(&self, key: &[u8]) -> Option<(usize, usize)> {
        self.key_width.view(key).map(|key| self.layout.candidates(key))
    }

    fn find(&self, key: &[u8]) -> Option<usize> {
        let key = self.key_width.view(key)?;
        self.layout.find(key, self.key_width)
    }

    /// 查询键对应的值
    ///
    /// 返回值的有效载荷：变长值不含结尾符。
    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.record(OperationType::Get, 1);
        let index = self.find(key)?;
        let entry = self.layout.slots.get(index).entry()?;
        self.record(OperationType::Hit, 1);
        Some(self.value_width.payload(entry.value()))
    }

    /// 查询键并把值拷贝到调用方缓冲区
    ///
    /// 拷贝的是存储形式（变长值含结尾符）。缓冲区缺失或长度不足时返回
    /// `InvalidArgument`，与键不存在区分开。
    pub fn get_into(&self, key: &[u8], buffer: Option<&mut [u8]>) -> Result<Lookup, CuckooError> {
        let buffer = buffer.ok_or_else(|| CuckooError::InvalidArgument {
            reason: "输出缓冲区为空".to_string(),
        })?;
        self.record(OperationType::Get, 1);

        let Some(entry) = self.find(key).and_then(|index| self.layout.slots.get(index).entry()) else {
            return Ok(Lookup::NotFound);
        };
        let value = entry.value();
        if buffer.len() < value.len() {
            return Err(CuckooError::InvalidArgument {
                reason: format!("输出缓冲区过小 (需要: {}, 实际: {})", value.len(), buffer.len()),
            });
        }
        buffer[..value.len()].copy_from_slice(value);
        self.record(OperationType::Hit, 1);
        Ok(Lookup::Found(value.len()))
    }

    /// 是否包含键
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.find(key).is_some()
    }

    /// 插入或更新键值对
    ///
    /// 键已存在时原地替换值，条目数不变。
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), CuckooError> {
        let key = self.key_width.to_owned_bytes(key)?;
        let value = self.value_width.to_owned_bytes(value)?;

        if self.layout.size > self.layout.per_side() / 2 {
            self.grow()?;
        }

        if let Some(index) = self.layout.find(self.key_width.payload(&key), self.key_width) {
            if let Some(entry) = self.layout.slots.get_mut(index).entry_mut() {
                drop(entry.replace_value(value));
                self.record(OperationType::Update, 1);
                return Ok(());
            }
        }

        self.insert_owned(Entry::new(key, value))?;
        self.record(OperationType::Insert, 1);
        Ok(())
    }

    /// 放置新条目；遇到踢出循环则扩容后重试
    fn insert_owned(&mut self, entry: Entry) -> Result<(), CuckooError> {
        let mut pending = entry;
        loop {
            match self.layout.place(pending, self.key_width) {
                Ok(kicks) => {
                    self.record(OperationType::Kick, kicks);
                    return Ok(());
                }
                Err(rejected) => {
                    self.record(OperationType::Kick, self.layout.max_kicks());
                    self.record(OperationType::Cycle, 1);
                    log_debug!(
                        "eviction cycle detected at per_side={}, size={}",
                        self.layout.per_side(),
                        self.layout.size
                    );
                    self.grow()?;
                    pending = rejected;
                }
            }
        }
    }

    /// 扩容：单侧容量翻倍，重新抽取四个种子字并迁移全部条目
    fn grow(&mut self) -> Result<(), CuckooError> {
        let per_side = self
            .layout
            .per_side()
            .checked_mul(2)
            .ok_or(CuckooError::AllocationFailed {
                size: usize::MAX,
                align: mem::align_of::<Slot>(),
            })?;
        self.grow_to(per_side)
    }

    /// 迁移到单侧容量为 `per_side` 的新槽位数组
    ///
    /// 所有分配在迁移开始前完成，失败时表保持原样。
    fn grow_to(&mut self, per_side: usize) -> Result<(), CuckooError> {
        let next = Layout::allocate(per_side, self.config.hash_algorithm, &mut self.rng)
            .map_err(|err| {
                log_error!("grow to per_side={} failed: {}", per_side, err);
                err
            })?;
        log_info!(
            "cuckoo table growing: per_side {} -> {}, size={}",
            self.layout.per_side(),
            per_side,
            self.layout.size
        );
        self.migrate(next)?;

        self.record(OperationType::Grow, 1);
        Ok(())
    }

    /// 把全部条目移入 `next` 并替换当前布局
    ///
    /// 新表出现踢出循环时，在同一容量下重新抽种再迁移，不再分配槽位。
    fn migrate(&mut self, mut next: Layout) -> Result<(), CuckooError> {
        let mut pending = Vec::new();
        pending
            .try_reserve_exact(self.layout.size)
            .map_err(|_| CuckooError::AllocationFailed {
                size: self.layout.size.saturating_mul(mem::size_of::<Entry>()),
                align: mem::align_of::<Entry>(),
            })?;

        self.layout.drain_into(&mut pending);
        while let Some(entry) = pending.pop() {
            if let Err(rejected) = next.place(entry, self.key_width) {
                self.record(OperationType::Cycle, 1);
                log_debug!("eviction cycle while migrating, reseeding per_side={}", next.per_side());
                pending.push(rejected);
                next.drain_into(&mut pending);
                next.hasher = DoubleHashStrategy::draw(self.config.hash_algorithm, &mut self.rng);
            }
        }

        self.layout = next;
        Ok(())
    }

    /// 删除键
    pub fn remove(&mut self, key: &[u8]) -> Removal {
        match self.take(key) {
            Some(_) => Removal::Removed,
            None => Removal::NotFound,
        }
    }

    /// 删除键并返回其条目
    pub fn take(&mut self, key: &[u8]) -> Option<Entry> {
        let index = self.find(key)?;
        let entry = self.layout.slots.get_mut(index).take()?;
        self.layout.size -= 1;
        self.record(OperationType::Remove, 1);
        Some(entry)
    }

    /// 释放全部条目并恢复到初始容量，种子重新抽取
    pub fn clear(&mut self) -> Result<(), CuckooError> {
        let layout = Layout::allocate(
            self.config.initial_capacity,
            self.config.hash_algorithm,
            &mut self.rng,
        )?;
        log_debug!("cuckoo table cleared, released {} entries", self.layout.size);
        self.layout = layout;
        Ok(())
    }

    /// 释放槽位数组和全部条目
    pub fn free(self) {
        log_debug!("cuckoo table freed with {} entries", self.layout.size);
    }

    /// 遍历全部条目 (键, 值) 的有效载荷，顺序不作保证
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> + '_ {
        let (key_width, value_width) = (self.key_width, self.value_width);
        self.layout
            .slots
            .entries()
            .map(move |entry| (key_width.payload(entry.key()), value_width.payload(entry.value())))
    }

    pub fn keys(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

impl fmt::Debug for CuckooTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CuckooTable")
            .field("size", &self.layout.size)
            .field("capacity", &self.layout.per_side())
            .field("load_factor", &self.load_factor())
            .field("key_width", &self.key_width)
            .field("value_width", &self.value_width)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_table(seed: u64) -> CuckooTable {
        CuckooTable::with_config(Width::Fixed(4), Width::Fixed(4), CuckooTableConfig::with_seed(seed)).unwrap()
    }

    fn get_i32(table: &CuckooTable, key: i32) -> Option<i32> {
        table
            .get(&key.to_le_bytes())
            .map(|bytes| i32::from_le_bytes(bytes.try_into().unwrap()))
    }

    /// 找出在当前种子下左右候选槽位都与 `target` 相同的键
    fn colliding_keys(table: &CuckooTable, target: (usize, usize), count: usize) -> Vec<i32> {
        (0i32..)
            .filter(|k| table.slots_for(&k.to_le_bytes()) == Some(target))
            .take(count)
            .collect()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = int_table(1);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.capacity(), INITIAL_CAPACITY);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_invalid_config() {
        let config = CuckooTableConfig {
            initial_capacity: 0,
            ..CuckooTableConfig::default()
        };
        assert!(matches!(
            CuckooTable::with_config(Width::Fixed(4), Width::Fixed(4), config),
            Err(CuckooError::InvalidConfig { .. })
        ));
        assert!(matches!(
            CuckooTable::new(Width::Fixed(0), Width::Fixed(4)),
            Err(CuckooError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_put_get_update() {
        let mut table = int_table(2);
        table.put(&1i32.to_le_bytes(), &100i32.to_le_bytes()).unwrap();
        assert_eq!(get_i32(&table, 1), Some(100));

        table.put(&1i32.to_le_bytes(), &101i32.to_le_bytes()).unwrap();
        assert_eq!(get_i32(&table, 1), Some(101));
        assert_eq!(table.len(), 1, "更新不应增加条目数");
        assert_eq!(table.stats().operations.update_count, 1);
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let mut table = int_table(3);
        assert_eq!(
            table.put(&[1, 2], &[0, 0, 0, 0]),
            Err(CuckooError::WidthMismatch { expected: 4, actual: 2 })
        );
        assert!(table.put(&[1, 2, 3, 4], &[0; 8]).is_err());
        assert!(table.is_empty());
        assert_eq!(table.get(&[1, 2]), None);
        assert_eq!(table.slots_for(&[1, 2]), None);
    }

    #[test]
    fn test_get_into() {
        let mut table = int_table(4);
        table.put(&7i32.to_le_bytes(), &49i32.to_le_bytes()).unwrap();

        let mut buffer = [0u8; 4];
        assert_eq!(table.get_into(&7i32.to_le_bytes(), Some(&mut buffer)), Ok(Lookup::Found(4)));
        assert_eq!(i32::from_le_bytes(buffer), 49);

        assert_eq!(table.get_into(&8i32.to_le_bytes(), Some(&mut buffer)), Ok(Lookup::NotFound));
        assert!(matches!(
            table.get_into(&7i32.to_le_bytes(), None),
            Err(CuckooError::InvalidArgument { .. })
        ));

        let mut small = [0u8; 2];
        assert!(matches!(
            table.get_into(&7i32.to_le_bytes(), Some(&mut small)),
            Err(CuckooError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_entries_live_in_candidate_slots() {
        let mut table = int_table(5);
        for k in 0i32..200 {
            table.put(&k.to_le_bytes(), &k.to_le_bytes()).unwrap();
        }
        for index in 0..table.layout.slots.len() {
            if let Some(entry) = table.layout.slots.get(index).entry() {
                let (left, right) = table.slots_for(entry.key()).unwrap();
                assert!(index == left || index == right, "条目必须位于自身候选槽位");
            }
        }
    }

    #[test]
    fn test_grow_triggered_by_load() {
        let mut table = int_table(6);
        for k in 0i32..=(INITIAL_CAPACITY as i32 / 2 + 1) {
            table.put(&k.to_le_bytes(), &k.to_le_bytes()).unwrap();
        }
        assert!(table.capacity() >= INITIAL_CAPACITY * 2);
        assert!(table.stats().operations.grow_count >= 1);
        assert!(table.len() <= table.capacity());
    }

    #[test]
    fn test_kicks_recorded() {
        let mut table = int_table(7);
        for k in 0i32..500 {
            table.put(&k.to_le_bytes(), &k.to_le_bytes()).unwrap();
        }
        let stats = table.stats();
        assert!(stats.operations.kick_count > 0, "高负载下应发生踢出");
        assert_eq!(stats.operations.insert_count, 500);
        for k in 0i32..500 {
            assert_eq!(get_i32(&table, k), Some(k));
        }
    }

    #[test]
    fn test_cycle_forces_grow() {
        let mut table = int_table(8);
        let target = table.slots_for(&0i32.to_le_bytes()).unwrap();
        // 三个键共用同一对候选槽位，必然形成循环
        let keys = colliding_keys(&table, target, 3);

        for (i, k) in keys.iter().enumerate() {
            table.put(&k.to_le_bytes(), &(i as i32).to_le_bytes()).unwrap();
        }

        let stats = table.stats();
        assert!(stats.operations.cycle_count >= 1, "应检测到踢出循环");
        assert!(table.capacity() > INITIAL_CAPACITY, "循环后应扩容");
        assert_eq!(table.len(), 3);
        for (i, k) in keys.iter().enumerate() {
            assert_eq!(get_i32(&table, *k), Some(i as i32));
        }
    }

    #[test]
    fn test_place_rolls_back_on_cycle() {
        let mut table = int_table(9);
        let target = table.slots_for(&0i32.to_le_bytes()).unwrap();
        let keys = colliding_keys(&table, target, 3);
        for k in &keys[..2] {
            table.put(&k.to_le_bytes(), &k.to_le_bytes()).unwrap();
        }
        let before: Vec<(Vec<u8>, Vec<u8>)> = table.iter().map(|(k, v)| (k.to_vec(), v.to_vec())).collect();

        let entry = Entry::new(Box::from(&keys[2].to_le_bytes()[..]), Box::from(&[0u8; 4][..]));
        let rejected = table.layout.place(entry, Width::Fixed(4)).unwrap_err();

        assert_eq!(rejected.key(), &keys[2].to_le_bytes());
        let after: Vec<(Vec<u8>, Vec<u8>)> = table.iter().map(|(k, v)| (k.to_vec(), v.to_vec())).collect();
        assert_eq!(before, after, "回滚后表内容与位置应完全复原");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_migration_cycle_reseeds_same_capacity() {
        let mut table = int_table(14);
        let per_side = INITIAL_CAPACITY * 2;
        let mut next_rng = StdRng::seed_from_u64(99);
        let next = Layout::allocate(per_side, HashAlgorithm::SipHash24, &mut next_rng).unwrap();

        // 三个键在新布局下共用同一对候选槽位，迁移必然遇到循环
        let target = next.candidates(&0i32.to_le_bytes());
        let keys: Vec<i32> = (0i32..)
            .filter(|k| next.candidates(&k.to_le_bytes()) == target)
            .take(3)
            .collect();
        for k in &keys {
            table.put(&k.to_le_bytes(), &(k ^ 0x55).to_le_bytes()).unwrap();
        }
        let cycles_before = table.stats().operations.cycle_count;

        table.migrate(next).unwrap();

        assert!(table.stats().operations.cycle_count > cycles_before, "迁移中应检测到循环");
        assert_eq!(table.capacity(), per_side, "重新抽种不应改变容量");
        assert_eq!(table.len(), keys.len());
        for k in &keys {
            assert_eq!(get_i32(&table, *k), Some(k ^ 0x55));
        }
        for index in 0..table.layout.slots.len() {
            if let Some(entry) = table.layout.slots.get(index).entry() {
                let (left, right) = table.slots_for(entry.key()).unwrap();
                assert!(index == left || index == right);
            }
        }
    }

    #[test]
    fn test_failed_grow_leaves_table_untouched() {
        let mut table = int_table(15);
        for k in 0i32..6 {
            table.put(&k.to_le_bytes(), &(k * 3).to_le_bytes()).unwrap();
        }
        let before: Vec<(Vec<u8>, Vec<u8>)> = table.iter().map(|(k, v)| (k.to_vec(), v.to_vec())).collect();
        let grows_before = table.stats().operations.grow_count;

        let result = table.grow_to(usize::MAX / 2);

        assert!(matches!(result, Err(CuckooError::AllocationFailed { .. })));
        assert_eq!(table.len(), 6);
        assert_eq!(table.capacity(), INITIAL_CAPACITY);
        assert_eq!(table.stats().operations.grow_count, grows_before);
        let after: Vec<(Vec<u8>, Vec<u8>)> = table.iter().map(|(k, v)| (k.to_vec(), v.to_vec())).collect();
        assert_eq!(before, after, "扩容失败后表内容与位置应保持不变");
        for k in 0i32..6 {
            assert_eq!(get_i32(&table, k), Some(k * 3));
        }
    }

    #[test]
    fn test_remove_take_clear() {
        let mut table = int_table(10);
        for k in 0i32..40 {
            table.put(&k.to_le_bytes(), &(k * k).to_le_bytes()).unwrap();
        }
        assert_eq!(table.remove(&3i32.to_le_bytes()), Removal::Removed);
        assert_eq!(table.remove(&3i32.to_le_bytes()), Removal::NotFound);

        let (key, value) = table.take(&4i32.to_le_bytes()).unwrap().into_parts();
        assert_eq!(&*key, &4i32.to_le_bytes());
        assert_eq!(&*value, &16i32.to_le_bytes());
        assert_eq!(table.len(), 38);

        table.clear().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.capacity(), INITIAL_CAPACITY);
        assert_eq!(get_i32(&table, 5), None);
    }

    #[test]
    fn test_terminated_keys_and_values() {
        let mut table = CuckooTable::with_config(Width::Terminated, Width::Terminated, CuckooTableConfig::with_seed(11)).unwrap();
        table.put(b"alpha", b"one").unwrap();
        table.put(b"beta\0ignored", b"two\0").unwrap();

        assert_eq!(table.get(b"alpha"), Some(&b"one"[..]));
        assert_eq!(table.get(b"beta"), Some(&b"two"[..]));
        assert_eq!(table.get(b"alph"), None);

        let mut buffer = [0xAAu8; 8];
        assert_eq!(table.get_into(b"alpha", Some(&mut buffer)), Ok(Lookup::Found(4)));
        assert_eq!(&buffer[..4], b"one\0");

        table.put(b"alpha", b"a much longer value").unwrap();
        assert_eq!(table.get(b"alpha"), Some(&b"a much longer value"[..]));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_hash_algorithms() {
        for algorithm in [HashAlgorithm::SipHash24, HashAlgorithm::AHash, HashAlgorithm::XxHash] {
            let config = CuckooTableConfig {
                hash_algorithm: algorithm,
                seed: Some(12),
                ..CuckooTableConfig::default()
            };
            let mut table = CuckooTable::with_config(Width::Fixed(4), Width::Fixed(4), config).unwrap();
            for k in 0i32..300 {
                table.put(&k.to_le_bytes(), &(-k).to_le_bytes()).unwrap();
            }
            for k in 0i32..300 {
                assert_eq!(get_i32(&table, k), Some(-k), "{:?}", algorithm);
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut a = int_table(13);
        let mut b = int_table(13);
        for k in 0i32..100 {
            a.put(&k.to_le_bytes(), &k.to_le_bytes()).unwrap();
            b.put(&k.to_le_bytes(), &k.to_le_bytes()).unwrap();
        }
        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
        assert_eq!(a.stats(), b.stats());
    }
}
