//! Mutex-guarded LRU for shared use across threads
//! 互斥锁保护的 LRU，用于跨线程共享
//!
//! One lock per cache, held for the whole of each operation.
//! 每个缓存一把锁，每次操作全程持有。

use std::{borrow::Borrow, hash::Hash};

use parking_lot::{Mutex, MutexGuard};

use crate::{Lru, Result};

/// Thread-safe LRU / 线程安全的 LRU
#[must_use]
pub struct Locked<K, V>(Mutex<Lru<K, V>>);

impl<K: Hash + Eq, V> Locked<K, V> {
  /// Create with capacity, clamped like [`Lru::new`]
  /// 创建，容量钳制同 [`Lru::new`]
  #[inline]
  pub fn new(cap: usize) -> Self {
    Self::from(Lru::new(cap))
  }

  #[inline]
  pub fn try_new(cap: usize) -> Result<Self> {
    Lru::try_new(cap).map(Self::from)
  }

  #[inline]
  pub fn set(&self, key: K, val: V)
  where
    K: Clone,
  {
    self.0.lock().set(key, val);
  }

  /// Clone value out and mark as most recently used
  /// 克隆取出值并标记为最近使用
  #[inline]
  pub fn get<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.0.lock().get(key).cloned()
  }

  /// Borrow value under the lock and mark as most recently used
  /// 在锁内借用值并标记为最近使用
  #[inline]
  pub fn get_with<Q, R>(&self, key: &Q, f: impl FnOnce(Option<&V>) -> R) -> R
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    f(self.0.lock().get(key))
  }

  /// Read without touching recency / 读取但不改变访问顺序
  #[inline]
  pub fn peek<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    V: Clone,
  {
    self.0.lock().peek(key).cloned()
  }

  #[inline]
  pub fn contains<Q>(&self, key: &Q) -> bool
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.lock().contains(key)
  }

  #[inline]
  pub fn rm<Q>(&self, key: &Q) -> Option<V>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.lock().rm(key)
  }

  #[inline]
  pub fn clear(&self) {
    self.0.lock().clear();
  }
}

impl<K, V> Locked<K, V> {
  #[inline]
  pub fn len(&self) -> usize {
    self.0.lock().len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.0.lock().is_empty()
  }

  #[inline]
  pub fn cap(&self) -> usize {
    self.0.lock().cap()
  }

  /// Hold the lock across several operations
  /// 跨多次操作持有锁
  #[inline]
  pub fn lock(&self) -> MutexGuard<'_, Lru<K, V>> {
    self.0.lock()
  }

  #[inline]
  pub fn into_inner(self) -> Lru<K, V> {
    self.0.into_inner()
  }
}

impl<K, V> From<Lru<K, V>> for Locked<K, V> {
  #[inline]
  fn from(lru: Lru<K, V>) -> Self {
    Self(Mutex::new(lru))
  }
}
