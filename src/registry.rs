use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::Token;

const SHARD_BITS: usize = 4;
const SHARDS: usize = 1 << SHARD_BITS;

/// Marker cell whose heap address becomes the token value. Must not be
/// zero-size, otherwise distinct allocations could share an address.
struct TokenCell {
    _pad: u8,
}

struct Entry {
    // Keeps the token address allocated for as long as the mapping lives, so
    // two live tokens never compare equal.
    cell: Box<TokenCell>,
    value: Arc<dyn Any + Send + Sync>,
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Concurrent store associating opaque [`Token`]s with type-erased values.
///
/// All operations are safe to call from any number of threads on the same
/// instance; conflicting access is serialized per shard. Tokens are only
/// valid against the instance that issued them.
pub struct Registry {
    shards: [RwLock<HashMap<usize, Entry>>; SHARDS],
}

fn shard_for_addr(addr: usize) -> usize {
    let mut x = addr as u64;
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    (x as usize) & (SHARDS - 1)
}

impl Registry {
    pub fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| RwLock::new(HashMap::new())),
        }
    }

    /// Process-wide shared instance, for callers indifferent to lock
    /// contention. Callers that want an isolated lock domain construct their
    /// own instance with [`Registry::new`].
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Creates a mapping to `value` and returns its token.
    ///
    /// Every call returns a fresh token, distinct from every other live
    /// token issued by this registry, even when `value` is identical or
    /// zero-size across calls. The registry keeps the value alive until the
    /// mapping is removed.
    pub fn insert<T: Send + Sync + 'static>(&self, value: T) -> Token {
        self.insert_arc(Arc::new(value))
    }

    /// Creates a mapping to an already shared value.
    pub fn insert_arc(&self, value: Arc<dyn Any + Send + Sync>) -> Token {
        let cell = Box::new(TokenCell { _pad: 0 });
        let addr = &*cell as *const TokenCell as usize;
        let mut shard = self.shards[shard_for_addr(addr)].write().unwrap();
        let prior = shard.insert(addr, Entry { cell, value });
        debug_assert!(prior.is_none(), "token cell address already mapped");
        Token(addr)
    }

    /// Returns the value mapped under `token`, identity-preserving.
    ///
    /// # Panics
    ///
    /// Panics if `token` is not currently mapped by this registry: never
    /// issued here, already removed, or issued by a different instance. An
    /// unmapped lookup is a use-after-remove or cross-registry bug at the
    /// foreign boundary and must not be masked as a recoverable error.
    pub fn get(&self, token: Token) -> Arc<dyn Any + Send + Sync> {
        let shard = self.shards[shard_for_addr(token.0)].read().unwrap();
        match shard.get(&token.0) {
            Some(entry) => Arc::clone(&entry.value),
            None => panic!("moor: token not mapped: {token:?}"),
        }
    }

    /// Removes the mapping under `token`, releasing the registry's reference
    /// to the value. Removing a token that is not mapped is a no-op, so
    /// cleanup paths may call this without tracking prior state.
    pub fn remove(&self, token: Token) {
        let mut shard = self.shards[shard_for_addr(token.0)].write().unwrap();
        if let Some(entry) = shard.remove(&token.0) {
            debug_assert_eq!(&*entry.cell as *const TokenCell as usize, token.0);
        }
    }

    /// Number of live mappings.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().unwrap().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every mapping, releasing all held values. Outstanding tokens
    /// become unmapped.
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.write().unwrap().clear();
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
