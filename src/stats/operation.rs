// src/stats/operation.rs
//! 操作统计 - 跟踪哈希表操作次数

use std::fmt::Write;

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 新键插入
    Insert,
    /// 已有键更新值
    Update,
    /// 查询
    Get,
    /// 查询命中
    Hit,
    /// 删除成功
    Remove,
    /// 踢出一个占用者
    Kick,
    /// 扩容
    Grow,
    /// 检测到踢出循环
    Cycle,
}

/// 操作计数器
///
/// 表只在单线程中使用，计数器是普通整数。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperationStats {
    pub insert_count: u64,
    pub update_count: u64,
    pub get_count: u64,
    pub hit_count: u64,
    pub remove_count: u64,
    pub kick_count: u64,
    pub grow_count: u64,
    pub cycle_count: u64,
}

impl OperationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次操作
    pub fn record(&mut self, op_type: OperationType) {
        self.record_n(op_type, 1);
    }

    /// 记录多次同类操作
    pub fn record_n(&mut self, op_type: OperationType, times: u64) {
        let counter = match op_type {
            OperationType::Insert => &mut self.insert_count,
            OperationType::Update => &mut self.update_count,
            OperationType::Get => &mut self.get_count,
            OperationType::Hit => &mut self.hit_count,
            OperationType::Remove => &mut self.remove_count,
            OperationType::Kick => &mut self.kick_count,
            OperationType::Grow => &mut self.grow_count,
            OperationType::Cycle => &mut self.cycle_count,
        };
        *counter = counter.saturating_add(times);
    }

    /// 查询命中率
    pub fn hit_rate(&self) -> f32 {
        if self.get_count == 0 {
            0.0
        } else {
            self.hit_count as f32 / self.get_count as f32
        }
    }

    /// 重置统计
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self, prefix: &str) -> String {
        let mut output = String::new();
        let counters = [
            ("insert_count", self.insert_count),
            ("update_count", self.update_count),
            ("get_count", self.get_count),
            ("hit_count", self.hit_count),
            ("remove_count", self.remove_count),
            ("kick_count", self.kick_count),
            ("grow_count", self.grow_count),
            ("cycle_count", self.cycle_count),
        ];
        for (name, value) in counters {
            let _ = writeln!(output, "# TYPE {prefix}_operation_{name} counter");
            let _ = writeln!(output, "{prefix}_operation_{name} {value}");
        }
        output
    }
}
