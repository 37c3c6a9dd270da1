//! NoCache - zero overhead no-op cache
//! NoCache - 零开销空操作缓存
//!
//! Stands in for [`Lru`](crate::Lru) where caching is switched off.
//! 在关闭缓存时替代 [`Lru`](crate::Lru)。

use crate::Cache;

/// No-op cache, `get` always misses
/// 空操作缓存，`get` 永远未命中
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl<K, V> Cache<K, V> for NoCache {
  #[inline(always)]
  fn get(&mut self, _: &K) -> Option<&V> {
    None
  }

  #[inline(always)]
  fn set(&mut self, _: K, _: V) {}

  #[inline(always)]
  fn rm(&mut self, _: &K) {}
}
