//! 内存管理模块 - 槽位数组与条目所有权

pub mod slot;

pub use slot::{Entry, Side, Slot, SlotArray};
