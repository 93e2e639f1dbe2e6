pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
