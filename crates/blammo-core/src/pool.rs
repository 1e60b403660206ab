//! A small pool of reusable byte buffers.
//!
//! Rendering a line needs a scratch buffer; reusing buffers saves an
//! allocation per log call. Buffers are checked out through a
//! [`PooledBuffer`] guard that hands the buffer back, cleared, when dropped.
//! Pooling has no observable effect on output.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// Buffers that grew past this capacity are dropped instead of pooled.
pub const MAX_RETAINED_CAPACITY: usize = 64 * 1024;

/// Default number of idle buffers kept.
pub const DEFAULT_MAX_IDLE: usize = 16;

const INITIAL_CAPACITY: usize = 256;

#[derive(Debug)]
pub struct BufferPool {
    idle: Mutex<Vec<Vec<u8>>>,
    max_idle: usize,
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IDLE)
    }
}

impl BufferPool {
    pub fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(max_idle)),
            max_idle,
        }
    }

    /// Checks out an empty buffer.
    pub fn get(&self) -> PooledBuffer<'_> {
        let buf = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(INITIAL_CAPACITY));
        PooledBuffer { buf, pool: self }
    }

    /// Number of buffers currently idle.
    pub fn idle(&self) -> usize {
        self.idle.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn put(&self, mut buf: Vec<u8>) {
        if buf.capacity() > MAX_RETAINED_CAPACITY {
            return;
        }
        buf.clear();
        let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
        if idle.len() < self.max_idle {
            idle.push(buf);
        }
    }
}

/// A buffer on loan from a [`BufferPool`].
#[derive(Debug)]
pub struct PooledBuffer<'p> {
    buf: Vec<u8>,
    pool: &'p BufferPool,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.put(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_come_back_empty() {
        let pool = BufferPool::default();
        {
            let mut buf = pool.get();
            buf.extend_from_slice(b"leftover");
        }
        assert_eq!(pool.idle(), 1);
        let buf = pool.get();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 8);
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn oversized_buffers_are_not_retained() {
        let pool = BufferPool::default();
        {
            let mut buf = pool.get();
            buf.resize(MAX_RETAINED_CAPACITY + 1, b'x');
        }
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn idle_count_is_bounded() {
        let pool = BufferPool::new(2);
        let held: Vec<_> = (0..5).map(|_| pool.get()).collect();
        drop(held);
        assert_eq!(pool.idle(), 2);
    }

    #[test]
    fn returned_on_panic() {
        let pool = BufferPool::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut buf = pool.get();
            buf.push(b'x');
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(pool.idle(), 1);
    }
}
