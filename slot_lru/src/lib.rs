//! Fixed-capacity LRU cache on a slot arena
//! 基于槽位数组的定长 LRU 缓存
//!
//! # Features
//!
//! - `sync`: [`Locked`], mutex-guarded cache for multi-threaded use
//! - `no`: [`NoCache`], zero overhead no-op
//! - `gxhash`: gxhash key index (needs AES target features)
//!
//! # 特性
//!
//! - `sync`：[`Locked`]，互斥锁保护，用于多线程
//! - `no`：[`NoCache`]，零开销空操作
//! - `gxhash`：gxhash 键索引（需 AES 指令集）

#![cfg_attr(docsrs, feature(doc_cfg))]

mod conf;
mod dump;
mod error;
mod index;
mod list;
mod lru;
mod pool;

#[cfg(feature = "no")]
mod no;
#[cfg(feature = "sync")]
mod sync;

pub use conf::{Conf, MAX_CAP};
pub use error::{Error, Result};
pub use lru::{Iter, Lru};
#[cfg(feature = "no")]
pub use no::NoCache;
#[cfg(feature = "sync")]
pub use sync::Locked;

/// Cache trait for basic operations
/// 缓存基本操作 trait
///
/// # Complexity
/// 复杂度
///
/// - get: O(1)
/// - set: O(1) amortized
/// - rm: O(1)
pub trait Cache<K, V> {
  /// Get value by key, refreshing recency
  /// 按键获取值，刷新访问顺序
  fn get(&mut self, key: &K) -> Option<&V>;

  /// Insert or overwrite key-value pair
  /// 插入或覆盖键值对
  fn set(&mut self, key: K, val: V);

  /// Remove by key, absent key is a no-op
  /// 按键删除，键不存在时不做任何事
  fn rm(&mut self, key: &K);
}
