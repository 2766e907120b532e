//! Binary entrypoint for the browser-hosted component gallery.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    component_gallery::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `component_gallery_app` for wasm32 with the `csr` feature."
    );
}
