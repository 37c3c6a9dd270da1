//! Recency list over slot handles
//! 基于槽位句柄的访问顺序链表
//!
//! Circular doubly-linked list anchored by sentinel slot 0.
//! `HEAD.next` is the most recently used, `HEAD.prev` the least.
//! 以 0 号哨兵槽位为锚的循环双向链表。
//! `HEAD.next` 为最近使用，`HEAD.prev` 为最久未用。
//!
//! # Complexity
//! 复杂度
//!
//! - push_front / move_to_front / remove / back: O(1), no allocation
//! - grow: amortized O(1)

/// Slot handle / 槽位句柄
pub(crate) type Idx = u32;

/// Sentinel slot / 哨兵槽位
pub(crate) const HEAD: Idx = 0;

/// Detached marker / 脱链标记
pub(crate) const NIL: Idx = Idx::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Link {
  pub prev: Idx,
  pub next: Idx,
}

const DETACHED: Link = Link { prev: NIL, next: NIL };

pub(crate) struct List {
  links: Vec<Link>,
}

impl List {
  pub fn with_capacity(n: usize) -> Self {
    let mut links = Vec::with_capacity(n + 1);
    links.push(Link {
      prev: HEAD,
      next: HEAD,
    });
    Self { links }
  }

  #[inline(always)]
  pub fn link(&self, idx: Idx) -> Link {
    self.links[idx as usize]
  }

  #[inline(always)]
  fn link_mut(&mut self, idx: Idx) -> &mut Link {
    &mut self.links[idx as usize]
  }

  /// Append one detached slot, return its handle
  /// 追加一个脱链槽位，返回其句柄
  #[inline]
  pub fn grow(&mut self) -> Idx {
    let idx = self.links.len() as Idx;
    self.links.push(DETACHED);
    idx
  }

  /// Slot count including sentinel / 槽位数（含哨兵）
  #[inline(always)]
  pub fn slots(&self) -> usize {
    self.links.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.link(HEAD).next == HEAD
  }

  #[inline(always)]
  pub fn is_detached(&self, idx: Idx) -> bool {
    self.link(idx) == DETACHED
  }

  /// Most recently used / 最近使用
  #[inline]
  pub fn front(&self) -> Option<Idx> {
    let idx = self.link(HEAD).next;
    (idx != HEAD).then_some(idx)
  }

  /// Least recently used / 最久未用
  #[inline]
  pub fn back(&self) -> Option<Idx> {
    let idx = self.link(HEAD).prev;
    (idx != HEAD).then_some(idx)
  }

  /// Splice a detached slot in as the new front
  /// 将脱链槽位插入为新的表头
  #[inline]
  pub fn push_front(&mut self, idx: Idx) {
    debug_assert!(idx != HEAD && self.is_detached(idx));
    self.splice_front(idx);
  }

  #[inline]
  pub fn move_to_front(&mut self, idx: Idx) {
    if self.link(HEAD).next == idx {
      return;
    }
    self.unsplice(idx);
    self.splice_front(idx);
  }

  /// Unlink and clear links
  /// 断开并清空链接
  #[inline]
  pub fn remove(&mut self, idx: Idx) {
    debug_assert!(idx != HEAD && !self.is_detached(idx));
    self.unsplice(idx);
    *self.link_mut(idx) = DETACHED;
  }

  /// Detach every live slot, return handles from back to front
  /// 断开所有活跃槽位，按从尾到头返回句柄
  pub fn drain(&mut self) -> Vec<Idx> {
    let out: Vec<Idx> = self.iter().collect();
    for &idx in &out {
      *self.link_mut(idx) = DETACHED;
    }
    *self.link_mut(HEAD) = Link {
      prev: HEAD,
      next: HEAD,
    };
    out
  }

  /// Walk from least to most recently used
  /// 从最久未用走到最近使用
  #[inline]
  pub fn iter(&self) -> Iter<'_> {
    Iter {
      links: &self.links,
      back: self.link(HEAD).prev,
      front: self.link(HEAD).next,
      // Bounded so a corrupted ring cannot loop forever
      // 限定步数，损坏的环不会死循环
      left: self.links.len() - 1,
    }
  }

  #[inline(always)]
  fn splice_front(&mut self, idx: Idx) {
    let next = self.link(HEAD).next;
    *self.link_mut(idx) = Link { prev: HEAD, next };
    self.link_mut(next).prev = idx;
    self.link_mut(HEAD).next = idx;
  }

  #[inline(always)]
  fn unsplice(&mut self, idx: Idx) {
    let Link { prev, next } = self.link(idx);
    self.link_mut(prev).next = next;
    self.link_mut(next).prev = prev;
  }
}

/// Slot handles from back (LRU) to front (MRU)
/// 从尾（LRU）到头（MRU）的槽位句柄
pub(crate) struct Iter<'a> {
  links: &'a [Link],
  back: Idx,
  front: Idx,
  left: usize,
}

impl Iterator for Iter<'_> {
  type Item = Idx;

  #[inline]
  fn next(&mut self) -> Option<Idx> {
    if self.left == 0 || self.back == HEAD || self.back == NIL {
      return None;
    }
    let idx = self.back;
    self.left -= 1;
    if idx == self.front {
      self.left = 0;
    } else {
      self.back = self.links.get(idx as usize).map_or(NIL, |l| l.prev);
    }
    Some(idx)
  }
}

impl DoubleEndedIterator for Iter<'_> {
  #[inline]
  fn next_back(&mut self) -> Option<Idx> {
    if self.left == 0 || self.front == HEAD || self.front == NIL {
      return None;
    }
    let idx = self.front;
    self.left -= 1;
    if idx == self.back {
      self.left = 0;
    } else {
      self.front = self.links.get(idx as usize).map_or(NIL, |l| l.next);
    }
    Some(idx)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled(n: u32) -> List {
    let mut list = List::with_capacity(n as usize);
    for _ in 0..n {
      let idx = list.grow();
      list.push_front(idx);
    }
    list
  }

  #[test]
  fn order() {
    let mut list = filled(4);
    assert_eq!(list.iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(list.iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1]);

    list.move_to_front(2);
    assert_eq!(list.iter().collect::<Vec<_>>(), [1, 3, 4, 2]);
    assert_eq!(list.front(), Some(2));
    assert_eq!(list.back(), Some(1));

    // Already front / 已在表头
    list.move_to_front(2);
    assert_eq!(list.iter().collect::<Vec<_>>(), [1, 3, 4, 2]);
  }

  #[test]
  fn remove_clears_links() {
    let mut list = filled(3);
    list.remove(2);
    assert!(list.is_detached(2));
    assert_eq!(list.iter().collect::<Vec<_>>(), [1, 3]);

    list.remove(1);
    list.remove(3);
    assert!(list.is_empty());
    assert_eq!(list.back(), None);
    assert_eq!(list.front(), None);
    assert_eq!(list.iter().count(), 0);

    list.push_front(2);
    assert_eq!(list.back(), Some(2));
    assert_eq!(list.front(), Some(2));
  }

  #[test]
  fn drain() {
    let mut list = filled(3);
    assert_eq!(list.drain(), [1, 2, 3]);
    assert!(list.is_empty());
    assert!((1..4).all(|i| list.is_detached(i)));
  }

  #[test]
  fn iter_meets_in_middle() {
    let list = filled(5);
    let mut it = list.iter();
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.next_back(), Some(5));
    assert_eq!(it.next(), Some(2));
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.next(), Some(3));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
  }
}
