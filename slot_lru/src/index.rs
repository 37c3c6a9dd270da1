//! Key index: key -> slot handle
//! 键索引：键 -> 槽位句柄

use std::{borrow::Borrow, hash::Hash};

#[cfg(feature = "gxhash")]
use gxhash::{HashMap, HashMapExt};
#[cfg(not(feature = "gxhash"))]
use std::collections::HashMap;

use crate::list::Idx;

pub(crate) struct Index<K>(HashMap<K, Idx>);

impl<K: Hash + Eq> Index<K> {
  #[inline]
  pub fn with_capacity(n: usize) -> Self {
    Self(HashMap::with_capacity(n))
  }

  #[inline(always)]
  pub fn get<Q>(&self, key: &Q) -> Option<Idx>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.get(key).copied()
  }

  #[inline(always)]
  pub fn insert(&mut self, key: K, idx: Idx) {
    self.0.insert(key, idx);
  }

  #[inline(always)]
  pub fn remove<Q>(&mut self, key: &Q) -> Option<Idx>
  where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
  {
    self.0.remove(key)
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline]
  pub fn clear(&mut self) {
    self.0.clear();
  }

  #[inline]
  pub fn reserve(&mut self, n: usize) {
    self.0.reserve(n);
  }
}
