//! Node pool: payload slots plus LIFO free-list
//! 节点池：载荷槽位与 LIFO 空闲栈
//!
//! Shares slot handles with [`List`]; slot 0 stays empty for the sentinel.
//! 与 [`List`] 共用槽位句柄；0 号槽位留给哨兵，始终为空。

use crate::list::{Idx, List};

/// Cold payload / 冷载荷
pub(crate) struct Payload<K, V> {
  pub key: K,
  pub val: V,
}

pub(crate) struct Pool<K, V> {
  slots: Vec<Option<Payload<K, V>>>,
  free: Vec<Idx>,
}

impl<K, V> Pool<K, V> {
  pub fn with_capacity(n: usize) -> Self {
    let mut slots = Vec::with_capacity(n + 1);
    slots.push(None);
    Self {
      slots,
      free: Vec::new(),
    }
  }

  /// Take a retired slot, or grow the arena by one
  /// 取出一个回收槽位，否则将数组扩展一格
  #[inline]
  pub fn acquire(&mut self, list: &mut List, key: K, val: V) -> Idx {
    let idx = match self.free.pop() {
      Some(idx) => idx,
      None => {
        let idx = list.grow();
        self.slots.push(None);
        idx
      }
    };
    debug_assert_eq!(self.slots.len(), list.slots());
    self.slots[idx as usize] = Some(Payload { key, val });
    idx
  }

  /// Retire a detached slot, return its payload
  /// 回收已脱链的槽位，返回其载荷
  #[inline]
  pub fn release(&mut self, list: &List, idx: Idx) -> Option<Payload<K, V>> {
    debug_assert!(list.is_detached(idx));
    let payload = self.slots.get_mut(idx as usize)?.take();
    if payload.is_some() {
      self.free.push(idx);
    }
    payload
  }

  #[inline(always)]
  pub fn get(&self, idx: Idx) -> Option<&Payload<K, V>> {
    self.slots.get(idx as usize)?.as_ref()
  }

  #[inline(always)]
  pub fn get_mut(&mut self, idx: Idx) -> Option<&mut Payload<K, V>> {
    self.slots.get_mut(idx as usize)?.as_mut()
  }

  /// Retired slots ready for reuse / 可复用的回收槽位数
  #[inline(always)]
  pub fn idle(&self) -> usize {
    self.free.len()
  }

  pub fn reserve(&mut self, n: usize) {
    self.slots.reserve(n);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reuse_is_lifo() {
    let mut list = List::with_capacity(0);
    let mut pool = Pool::with_capacity(0);

    let a = pool.acquire(&mut list, 'a', 1);
    let b = pool.acquire(&mut list, 'b', 2);
    assert_eq!((a, b), (1, 2));
    assert_eq!(pool.idle(), 0);

    let p = pool.release(&list, a).unwrap();
    assert_eq!((p.key, p.val), ('a', 1));
    assert!(pool.get(a).is_none());
    assert_eq!(pool.idle(), 1);

    // Releasing twice must not duplicate the handle
    // 重复回收不应重复入栈
    assert!(pool.release(&list, a).is_none());
    assert_eq!(pool.idle(), 1);

    let c = pool.acquire(&mut list, 'c', 3);
    assert_eq!(c, a);
    assert_eq!(pool.idle(), 0);
    assert_eq!(list.slots(), 3);
    assert_eq!(pool.get(c).map(|p| p.val), Some(3));
  }
}
