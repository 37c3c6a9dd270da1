//! Cache configuration / 缓存配置

use std::hash::Hash;

#[cfg(feature = "sync")]
use crate::Locked;
use crate::{Error, Lru, Result};

/// Max entries, keeps slot handles inside `u32` (0 is the sentinel, `u32::MAX` is NIL)
/// 最大条目数，保证槽位句柄在 `u32` 内（0 为哨兵，`u32::MAX` 为 NIL）
pub const MAX_CAP: usize = (u32::MAX - 1) as usize;

/// Cache config / 缓存配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conf {
  /// Max entries / 最大条目数
  pub cap: usize,
  /// Reserve storage for `cap` entries up front / 预先为 `cap` 个条目分配存储
  pub prealloc: bool,
}

impl Conf {
  #[inline]
  pub const fn new(cap: usize) -> Self {
    Self {
      cap,
      prealloc: false,
    }
  }

  /// Enable preallocation / 启用预分配
  #[inline]
  pub const fn prealloc(mut self) -> Self {
    self.prealloc = true;
    self
  }

  /// Validate capacity / 校验容量
  pub fn check(&self) -> Result<()> {
    if self.cap == 0 {
      return Err(Error::ZeroCap);
    }
    if self.cap > MAX_CAP {
      return Err(Error::CapTooLarge {
        cap: self.cap,
        max: MAX_CAP,
      });
    }
    Ok(())
  }

  /// Clamp capacity into `1..=MAX_CAP` / 将容量钳制到 `1..=MAX_CAP`
  #[inline]
  pub fn clamp(mut self) -> Self {
    self.cap = self.cap.clamp(1, MAX_CAP);
    self
  }

  pub fn build<K: Hash + Eq + Clone, V>(&self) -> Result<Lru<K, V>> {
    self.check()?;
    Ok(Lru::with_conf(*self))
  }

  #[cfg(feature = "sync")]
  pub fn build_locked<K: Hash + Eq + Clone, V>(&self) -> Result<Locked<K, V>> {
    self.build().map(Locked::from)
  }
}
