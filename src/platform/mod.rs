//! Platform bindings for the welcome renderer.

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        mod dom;
        pub use dom::DomPage;
    }
}
