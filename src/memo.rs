// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Derived-value cache keyed by an observed input
//!
//! A [`Memo`] keeps the last derived value together with the input it was
//! derived from. Asking again with an equal input hands back the same
//! [`Arc`], so consumers can cheaply tell "nothing changed" by identity;
//! a different input recomputes and replaces the entry.

use std::sync::Arc;

/// Single-entry cache of a value derived from a key
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use terra_display::Memo;
///
/// let mut memo = Memo::new();
/// let a = memo.get_or_compute(2u64, |n| n * 10);
/// let b = memo.get_or_compute(2u64, |_| unreachable!());
/// assert!(Arc::ptr_eq(&a, &b));
///
/// let c = memo.get_or_compute(3u64, |n| n * 10);
/// assert_eq!(*c, 30);
/// ```
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, Arc<V>)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it if the key changed
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> Arc<V> {
        if let Some((cached, value)) = &self.entry {
            if *cached == key {
                return Arc::clone(value);
            }
        }

        let value = Arc::new(compute(&key));
        self.entry = Some((key, Arc::clone(&value)));
        value
    }

    /// The last derived value, if any
    pub fn current(&self) -> Option<Arc<V>> {
        self.entry.as_ref().map(|(_, value)| Arc::clone(value))
    }

    /// The key the current value was derived from
    pub fn key(&self) -> Option<&K> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    /// Drop the cached entry
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
