//! LRU (Least Recently Used) cache on a slot arena
//! 基于槽位数组的 LRU（最近最少使用）缓存
//!
//! # Complexity
//! 复杂度
//!
//! - get: O(1)
//! - set: O(1) amortized, no allocation once the arena reached `cap`
//! - rm: O(1)
//!
//! Recency list + key index + node pool share one slot arena.
//! Evicted or removed slots go back to the pool and are reused by the next insert.
//! 访问顺序链表、键索引、节点池共用同一槽位数组。
//! 被淘汰或删除的槽位回到节点池，供下次插入复用。

use std::{borrow::Borrow, fmt, hash::Hash};

use log::{debug, trace, warn};

use crate::{
  Cache, Conf, Result,
  index::Index,
  list::{self, List},
  pool::Pool,
};

/// LRU cache with fixed capacity
/// 固定容量的 LRU 缓存
///
/// Evicts the least recently used entry when a new key arrives at capacity.
/// 容量已满时插入新键，淘汰最久未用的条目。
#[must_use]
pub struct Lru<K, V> {
  pub(crate) list: List,
  pub(crate) pool: Pool<K, V>,
  pub(crate) index: Index<K>,
  pub(crate) cap: usize,
}

impl<K: Hash + Eq, V> Lru<K, V> {
  /// Create with capacity, clamped into `1..=MAX_CAP`
  /// 创建，容量钳制到 `1..=MAX_CAP`
  ///
  /// ```
  /// use slot_lru::Lru;
  ///
  /// let mut cache = Lru::new(0);
  /// assert_eq!(cache.cap(), 1);
  /// cache.set("a", 1);
  /// cache.set("b", 2);
  /// assert_eq!(cache.get(&"a"), None);
  /// assert_eq!(cache.get(&"b"), Some(&2));
  /// ```
  pub fn new(cap: usize) -> Self {
    let conf = Conf::new(cap).clamp();
    if conf.cap != cap {
      warn!("lru cap {cap} clamped to {}", conf.cap);
    }
    Self::with_conf(conf)
  }

  /// Create with capacity, reject `0` and values above `MAX_CAP`
  /// 创建，拒绝 `0` 及超过 `MAX_CAP` 的容量
  pub fn try_new(cap: usize) -> Result<Self> {
    let conf = Conf::new(cap);
    conf.check()?;
    Ok(Self::with_conf(conf))
  }

  /// Caller validated `conf` / 调用方已校验 `conf`
  pub(crate) fn with_conf(conf: Conf) -> Self {
    debug!("lru cap {} prealloc {}", conf.cap, conf.prealloc);
    let n = if conf.prealloc { conf.cap } else { 0 };
    Self {
      list: List::with_capacity(n),
      pool: Pool::with_capacity(n),
      index: Index::with_capacity(n),
      cap: conf.cap,
    }
  }

  /// Get value and mark as most recently used
  /// 获取值并标记为最近使用
  #[inline]
  pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let idx = self.index.get(key)?;
    self.list.move_to_front(idx);
    self.pool.get(idx).map(|p| &p.val)
  }

  /// Get mutable value and mark as most recently used
  /// 获取可变值并标记为最近使用
  #[inline]
  pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let idx = self.index.get(key)?;
    self.list.move_to_front(idx);
    self.pool.get_mut(idx).map(|p| &mut p.val)
  }

  /// Read without touching recency
  /// 读取但不改变访问顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<&V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let idx = self.index.get(key)?;
    self.pool.get(idx).map(|p| &p.val)
  }

  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.index.get(key).is_some()
  }

  /// Insert or overwrite, then mark as most recently used
  /// 插入或覆盖，并标记为最近使用
  #[inline]
  pub fn set(&mut self, key: K, val: V)
  where
    K: Clone,
  {
    if let Some(idx) = self.index.get(&key) {
      if let Some(p) = self.pool.get_mut(idx) {
        p.val = val;
      }
      self.list.move_to_front(idx);
      return;
    }

    // Evict before acquire: the freed slot is popped right back
    // 先淘汰再取槽位：刚释放的槽位会被立即复用
    if self.index.len() >= self.cap {
      self.evict();
    }

    let idx = self.pool.acquire(&mut self.list, key.clone(), val);
    self.list.push_front(idx);
    self.index.insert(key, idx);
  }

  /// Remove by key, return the value
  /// 按键删除，返回值
  #[inline]
  pub fn rm<Q>(&mut self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    let idx = self.index.remove(key)?;
    self.list.remove(idx);
    self.pool.release(&self.list, idx).map(|p| p.val)
  }

  /// Remove and return the least recently used entry
  /// 删除并返回最久未用的条目
  pub fn pop_lru(&mut self) -> Option<(K, V)> {
    let idx = self.list.back()?;
    self.list.remove(idx);
    let p = self.pool.release(&self.list, idx)?;
    self.index.remove(&p.key);
    Some((p.key, p.val))
  }

  /// Least recently used entry / 最久未用的条目
  #[inline]
  pub fn peek_lru(&self) -> Option<(&K, &V)> {
    self.entry(self.list.back()?)
  }

  /// Most recently used entry / 最近使用的条目
  #[inline]
  pub fn peek_mru(&self) -> Option<(&K, &V)> {
    self.entry(self.list.front()?)
  }

  #[inline]
  fn evict(&mut self) {
    if let Some(idx) = self.list.back() {
      self.list.remove(idx);
      if let Some(p) = self.pool.release(&self.list, idx) {
        self.index.remove(&p.key);
      }
      trace!("lru evict slot {idx}");
    }
  }

  /// Retire all entries, capacity and pooled slots are kept
  /// 回收所有条目，保留容量与池中槽位
  pub fn clear(&mut self) {
    for idx in self.list.drain() {
      self.pool.release(&self.list, idx);
    }
    self.index.clear();
  }

  /// Reserve storage for `n` more entries (bounded by `cap`)
  /// 为额外 `n` 个条目预留存储（不超过 `cap`）
  pub fn reserve(&mut self, n: usize) {
    let n = n.min(self.cap.saturating_sub(self.len()));
    self.pool.reserve(n);
    self.index.reserve(n);
  }
}

impl<K, V> Lru<K, V> {
  /// Entries from least to most recently used
  /// 从最久未用到最近使用的条目
  #[inline]
  pub fn iter(&self) -> Iter<'_, K, V> {
    Iter {
      slots: self.list.iter(),
      pool: &self.pool,
    }
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    // Arena slots minus sentinel minus retired
    // 数组槽位 - 哨兵 - 已回收
    self.list.slots() - 1 - self.pool.idle()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.list.is_empty()
  }

  #[inline(always)]
  pub fn cap(&self) -> usize {
    self.cap
  }

  /// Retired slots waiting for reuse / 等待复用的回收槽位数
  #[inline(always)]
  pub fn idle(&self) -> usize {
    self.pool.idle()
  }

  #[inline]
  fn entry(&self, idx: list::Idx) -> Option<(&K, &V)> {
    self.pool.get(idx).map(|p| (&p.key, &p.val))
  }
}

/// Iterator from least to most recently used
/// 从最久未用到最近使用的迭代器
pub struct Iter<'a, K, V> {
  slots: list::Iter<'a>,
  pool: &'a Pool<K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
  type Item = (&'a K, &'a V);

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    let pool = self.pool;
    self
      .slots
      .by_ref()
      .find_map(|idx| pool.get(idx).map(|p| (&p.key, &p.val)))
  }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> {
    let pool = self.pool;
    while let Some(idx) = self.slots.next_back() {
      if let Some(p) = pool.get(idx) {
        return Some((&p.key, &p.val));
      }
    }
    None
  }
}

impl<'a, K, V> IntoIterator for &'a Lru<K, V> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Lru<K, V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}

impl<K: Hash + Eq + Clone, V> Cache<K, V> for Lru<K, V> {
  #[inline(always)]
  fn get(&mut self, key: &K) -> Option<&V> {
    Lru::get(self, key)
  }

  #[inline(always)]
  fn set(&mut self, key: K, val: V) {
    Lru::set(self, key, val);
  }

  #[inline(always)]
  fn rm(&mut self, key: &K) {
    Lru::rm(self, key);
  }
}
