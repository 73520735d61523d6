//! 统计模块 - 哈希表容量与操作指标

pub mod operation;

pub use operation::{OperationStats, OperationType};

/// 哈希表统计信息快照
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableStats {
    pub size: usize,
    /// 单侧槽位数
    pub capacity: usize,
    pub load_factor: f32,
    pub operations: OperationStats,
}

impl TableStats {
    pub fn new(size: usize, capacity: usize, operations: OperationStats) -> Self {
        let load_factor = if capacity == 0 {
            0.0
        } else {
            size as f32 / capacity as f32
        };
        Self {
            size,
            capacity,
            load_factor,
            operations,
        }
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        let mut output = format!(
            "# TYPE cuckoo_table_size gauge\ncuckoo_table_size {}\n\
             # TYPE cuckoo_table_capacity gauge\ncuckoo_table_capacity {}\n\
             # TYPE cuckoo_table_load_factor gauge\ncuckoo_table_load_factor {:.4}\n",
            self.size, self.capacity, self.load_factor
        );
        output.push_str(&self.operations.export_prometheus("cuckoo"));
        output
    }
}
