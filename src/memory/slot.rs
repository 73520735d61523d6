// src/memory/slot.rs
//! 槽位管理 - 独占所有权的键值条目和左右分区的槽位数组

use crate::error::CuckooError;
use std::mem;

/// 键值条目 - 键和值各自独占一块堆内存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: Box<[u8]>,
    value: Box<[u8]>,
}

impl Entry {
    pub fn new(key: Box<[u8]>, value: Box<[u8]>) -> Self {
        Self { key, value }
    }

    /// 存储形式的键（变长时含结尾符）
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// 存储形式的值（变长时含结尾符）
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// 替换值，返回旧值
    pub fn replace_value(&mut self, value: Box<[u8]>) -> Box<[u8]> {
        mem::replace(&mut self.value, value)
    }

    pub fn into_parts(self) -> (Box<[u8]>, Box<[u8]>) {
        (self.key, self.value)
    }
}

/// 槽位 - 空或持有一个条目
#[derive(Debug, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Self::Occupied(entry) => Some(entry),
            Self::Empty => None,
        }
    }

    pub fn entry_mut(&mut self) -> Option<&mut Entry> {
        match self {
            Self::Occupied(entry) => Some(entry),
            Self::Empty => None,
        }
    }

    /// 取出条目，槽位置空
    pub fn take(&mut self) -> Option<Entry> {
        match mem::take(self) {
            Self::Occupied(entry) => Some(entry),
            Self::Empty => None,
        }
    }

    /// 放入条目，返回被挤出的原占用者
    pub fn swap(&mut self, entry: Entry) -> Option<Entry> {
        match mem::replace(self, Self::Occupied(entry)) {
            Self::Occupied(evicted) => Some(evicted),
            Self::Empty => None,
        }
    }
}

/// 槽位数组的逻辑分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 另一侧
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// 槽位数组 - `[0, n)` 为左区，`[n, 2n)` 为右区
#[derive(Debug)]
pub struct SlotArray {
    slots: Vec<Slot>,
    per_side: usize,
}

impl SlotArray {
    /// 分配 `2 * per_side` 个空槽位，分配失败时返回错误而不是中止
    pub fn try_new(per_side: usize) -> Result<Self, CuckooError> {
        let failed = |len: usize| CuckooError::AllocationFailed {
            size: len.saturating_mul(mem::size_of::<Slot>()),
            align: mem::align_of::<Slot>(),
        };

        let len = per_side.checked_mul(2).ok_or_else(|| failed(usize::MAX))?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|_| failed(len))?;
        slots.resize_with(len, Slot::default);

        Ok(Self { slots, per_side })
    }

    /// 单侧槽位数 n
    pub fn per_side(&self) -> usize {
        self.per_side
    }

    /// 槽位总数 2n
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 某一侧偏移对应的绝对下标
    pub fn index(&self, side: Side, offset: usize) -> usize {
        debug_assert!(offset < self.per_side);
        match side {
            Side::Left => offset,
            Side::Right => self.per_side + offset,
        }
    }

    pub fn get(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Slot {
        &mut self.slots[index]
    }

    /// 按槽位顺序遍历已占用条目
    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.slots.iter().filter_map(Slot::entry)
    }

    /// 转移全部条目到 `out`（只移动所有权，不拷贝数据）
    pub fn drain_into(&mut self, out: &mut Vec<Entry>) {
        out.extend(self.slots.iter_mut().filter_map(Slot::take));
    }
}
