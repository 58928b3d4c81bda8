//! The live token set read by components at render time.
//!
//! [`TokenStore`] is an explicit, injectable holder for one [`DesignTokens`]
//! value. Reads hand out a shared snapshot; writes merge a partial override
//! and swap the snapshot, so concurrent callers are serialized and the last
//! write wins.
//!
//! A process-wide store backs [`get_tokens`], [`set_tokens`] and
//! [`reset_tokens`] for callers that want a single global token set.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::config::{ConfigError, TokenOverrides};
use crate::tokens::{default_tokens, DesignTokens, PartialDesignTokens};

/// Holder for the current token set.
///
/// # Example
///
/// ```rust
/// use tempo_tokens::{PartialColorTokens, PartialDesignTokens, TokenStore};
///
/// let store = TokenStore::new();
/// store.set(PartialDesignTokens {
///     colors: Some(PartialColorTokens {
///         primary: Some("#111111".into()),
///         ..Default::default()
///     }),
///     ..Default::default()
/// });
/// assert_eq!(store.get().colors.primary, "#111111");
///
/// store.reset();
/// assert_eq!(store.get().colors.primary, "#2563eb");
/// ```
#[derive(Debug)]
pub struct TokenStore {
    current: RwLock<Arc<DesignTokens>>,
}

impl TokenStore {
    /// Creates a store holding the built-in defaults.
    pub fn new() -> Self {
        Self::with_tokens(default_tokens().clone())
    }

    /// Creates a store holding `tokens`.
    pub fn with_tokens(tokens: DesignTokens) -> Self {
        Self {
            current: RwLock::new(Arc::new(tokens)),
        }
    }

    /// Returns the current token set.
    ///
    /// The snapshot is shared; later writes do not affect it.
    pub fn get(&self) -> Arc<DesignTokens> {
        // A panicking writer never leaves a half-merged value behind: the
        // snapshot is swapped only after the merge completes.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Merges `partial` onto the current token set.
    pub fn set(&self, partial: PartialDesignTokens) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.merged(partial);
        *guard = Arc::new(next);
        log::debug!("design tokens updated");
    }

    /// Restores the built-in defaults.
    pub fn reset(&self) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(default_tokens().clone());
        log::debug!("design tokens reset to defaults");
    }

    /// Loads an override file (JSON or YAML) and merges it.
    pub fn apply_overrides_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let overrides = TokenOverrides::from_path(path)?;
        self.set(overrides.into_partial());
        Ok(())
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_STORE: Lazy<TokenStore> = Lazy::new(TokenStore::new);

/// The process-wide store used by the free functions below.
pub fn global_store() -> &'static TokenStore {
    &GLOBAL_STORE
}

/// Returns the current process-wide token set.
pub fn get_tokens() -> Arc<DesignTokens> {
    GLOBAL_STORE.get()
}

/// Merges `partial` onto the process-wide token set.
pub fn set_tokens(partial: PartialDesignTokens) {
    GLOBAL_STORE.set(partial)
}

/// Restores the process-wide token set to the built-in defaults.
pub fn reset_tokens() {
    GLOBAL_STORE.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{PartialColorTokens, PartialTextColorTokens};
    use serial_test::serial;

    fn primary(color: &str) -> PartialDesignTokens {
        PartialDesignTokens {
            colors: Some(PartialColorTokens {
                primary: Some(color.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_store_holds_defaults() {
        let store = TokenStore::new();
        assert_eq!(*store.get(), DesignTokens::default());
    }

    #[test]
    fn test_set_merges_partial() {
        let store = TokenStore::new();
        store.set(primary("#111111"));

        let tokens = store.get();
        assert_eq!(tokens.colors.primary, "#111111");
        assert_eq!(tokens.colors.secondary, "#64748b");
        assert_eq!(tokens.colors.accent, "#f59e0b");
    }

    #[test]
    fn test_successive_sets_accumulate() {
        let store = TokenStore::new();
        store.set(primary("#111111"));
        store.set(PartialDesignTokens {
            colors: Some(PartialColorTokens {
                text: Some(PartialTextColorTokens {
                    secondary: Some("#333333".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });

        let tokens = store.get();
        assert_eq!(tokens.colors.primary, "#111111");
        assert_eq!(tokens.colors.text.secondary, "#333333");
        assert_eq!(tokens.colors.text.primary, "#1a1a1a");
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_writes() {
        let store = TokenStore::new();
        let before = store.get();
        store.set(primary("#111111"));
        assert_eq!(before.colors.primary, "#2563eb");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let store = TokenStore::new();
        store.set(primary("#111111"));
        store.reset();
        assert_eq!(*store.get(), DesignTokens::default());
    }

    #[test]
    fn test_stores_are_isolated() {
        let a = TokenStore::new();
        let b = TokenStore::new();
        a.set(primary("#111111"));
        assert_eq!(b.get().colors.primary, "#2563eb");
    }

    #[test]
    fn test_concurrent_writers_do_not_lose_groups() {
        let store = Arc::new(TokenStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        store.set(primary("#111111"));
                    } else {
                        store.set(PartialDesignTokens {
                            colors: Some(PartialColorTokens {
                                accent: Some("#222222".into()),
                                ..Default::default()
                            }),
                            ..Default::default()
                        });
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let tokens = store.get();
        assert_eq!(tokens.colors.primary, "#111111");
        assert_eq!(tokens.colors.accent, "#222222");
    }

    #[test]
    #[serial]
    fn test_global_functions_share_one_store() {
        reset_tokens();
        set_tokens(primary("#111111"));
        assert_eq!(get_tokens().colors.primary, "#111111");
        assert_eq!(global_store().get().colors.primary, "#111111");

        reset_tokens();
        assert_eq!(get_tokens().colors.primary, "#2563eb");
    }
}
