//! Diagnostic dump and structural check
//! 诊断输出与结构校验

use std::{
  fmt::{Debug, Write},
  hash::Hash,
};

use crate::{
  Error, Lru, Result,
  list::{HEAD, Idx},
};

impl<K: Hash + Eq, V> Lru<K, V> {
  /// Render entries from least to most recently used, one `key: val` per line
  /// 从最久未用到最近使用输出条目，每行一个 `key: val`
  ///
  /// Entries the index does not point at are suffixed ` (missed)`.
  /// A leading `len mismatch` line means list length differs from index size.
  /// 索引未指向的条目追加 ` (missed)`。
  /// 首行 `len mismatch` 表示链表长度与索引大小不一致。
  ///
  /// ```
  /// use slot_lru::Lru;
  ///
  /// let mut cache = Lru::new(2);
  /// cache.set("a", 1);
  /// cache.set("b", 2);
  /// assert_eq!(cache.dump(), "\"a\": 1\n\"b\": 2\n");
  /// ```
  pub fn dump(&self) -> String
  where
    K: Debug,
    V: Debug,
  {
    let mut body = String::new();
    let mut n = 0;
    for idx in self.list.iter() {
      n += 1;
      let Some(p) = self.pool.get(idx) else {
        let _ = writeln!(body, "<empty slot {idx}>");
        continue;
      };
      let _ = write!(body, "{:?}: {:?}", p.key, p.val);
      if self.index.get(&p.key) != Some(idx) {
        body.push_str(" (missed)");
      }
      body.push('\n');
    }

    let index = self.index.len();
    if n == index {
      return body;
    }
    let mut out = format!("len mismatch: list {n} index {index}\n");
    out.push_str(&body);
    out
  }

  /// Verify list / index / pool agree
  /// 校验链表、索引、节点池一致
  pub fn check(&self) -> Result<()> {
    let mut n = 0;
    let mut prev: Idx = HEAD;
    for idx in self.list.iter().rev() {
      if self.list.link(idx).prev != prev {
        return Err(Error::BrokenLink(idx));
      }
      let indexed = self
        .pool
        .get(idx)
        .is_some_and(|p| self.index.get(&p.key) == Some(idx));
      if !indexed {
        return Err(Error::Unindexed(idx));
      }
      prev = idx;
      n += 1;
    }
    if prev != self.list.link(HEAD).prev {
      return Err(Error::BrokenLink(prev));
    }

    let index = self.index.len();
    if n != index || n != self.len() {
      return Err(Error::LenMismatch { list: n, index });
    }
    if n > self.cap {
      return Err(Error::OverCap {
        len: n,
        cap: self.cap,
      });
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn abc() -> Lru<&'static str, i32> {
    let mut cache = Lru::new(3);
    cache.set("a", 1);
    cache.set("b", 2);
    cache.set("c", 3);
    cache
  }

  #[test]
  fn clean() {
    let cache = abc();
    assert_eq!(cache.dump(), "\"a\": 1\n\"b\": 2\n\"c\": 3\n");
    assert_eq!(cache.check(), Ok(()));
  }

  #[test]
  fn index_tampered() {
    let mut cache = abc();
    // Bypass the public API
    // 绕过公开接口
    cache.index.remove("b");

    assert_eq!(
      cache.dump(),
      "len mismatch: list 3 index 2\n\"a\": 1\n\"b\": 2 (missed)\n\"c\": 3\n"
    );
    assert_eq!(cache.check(), Err(Error::Unindexed(2)));
  }

  #[test]
  fn index_points_elsewhere() {
    let mut cache = abc();
    cache.index.insert("a", 3);

    assert_eq!(cache.dump(), "\"a\": 1 (missed)\n\"b\": 2\n\"c\": 3\n");
    assert_eq!(cache.check(), Err(Error::Unindexed(1)));
  }

  #[test]
  fn extra_index_entry() {
    let mut cache = abc();
    cache.index.insert("ghost", 2);

    assert!(cache.dump().starts_with("len mismatch: list 3 index 4\n"));
    assert_eq!(
      cache.check(),
      Err(Error::LenMismatch { list: 3, index: 4 })
    );
  }

  #[test]
  fn over_cap() {
    let mut cache = abc();
    cache.cap = 2;
    assert_eq!(cache.check(), Err(Error::OverCap { len: 3, cap: 2 }));
  }
}
