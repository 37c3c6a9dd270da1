//! Error types / 错误类型

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Capacity is zero / 容量为零
  #[error("capacity must be at least 1 / 容量至少为 1")]
  ZeroCap,

  /// Capacity does not fit slot handles / 容量超出槽位句柄范围
  #[error("capacity {cap} exceeds max {max}")]
  CapTooLarge { cap: usize, max: usize },

  /// List length differs from index size / 链表长度与索引大小不一致
  #[error("list holds {list} nodes but index holds {index}")]
  LenMismatch { list: usize, index: usize },

  /// Live node whose key is not indexed to it / 活跃节点未被索引
  #[error("node {0} is not indexed")]
  Unindexed(u32),

  /// prev/next links disagree / 前后链接不对称
  #[error("broken link at node {0}")]
  BrokenLink(u32),

  /// More live nodes than capacity / 活跃节点超过容量
  #[error("{len} entries exceed capacity {cap}")]
  OverCap { len: usize, cap: usize },
}
