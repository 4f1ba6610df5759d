//! Platform glue for spawning detached futures from UI event handlers.

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    // Dioxus desktop runs inside a tokio runtime, so a plain spawn suffices.
    tokio::spawn(future);
}
