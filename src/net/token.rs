//! Persisted bearer-token store.
//!
//! The token is the only durable client-side state: one opaque string in
//! `localStorage` under an app-named key. Reads and writes are synchronous,
//! so a `set_token`/`clear_token` always lands before the next request
//! builder consults the store. No validation happens here — the startup
//! session resolution decides whether a stored token is still good.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "wortschatz_token";

// Native test builds swap localStorage for a thread-local cell so session
// transitions stay unit-testable without a browser.
#[cfg(all(not(feature = "hydrate"), test))]
thread_local! {
    static TEST_TOKEN: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

/// Read the stored token, if any.
pub fn get_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        TEST_TOKEN.with(|t| t.borrow().clone())
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        None
    }
}

/// Store `token`, replacing any previous value.
pub fn set_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        TEST_TOKEN.with(|t| *t.borrow_mut() = Some(token.to_owned()));
    }
    #[cfg(all(not(feature = "hydrate"), not(test)))]
    {
        let _ = token;
    }
}

/// Remove the stored token. A no-op when none is stored.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(all(not(feature = "hydrate"), test))]
    {
        TEST_TOKEN.with(|t| *t.borrow_mut() = None);
    }
}
