#![cfg_attr(target_arch = "wasm32", no_main)]

// DOM frontend for the welcome page.
//
// Loaded from static/index.html:
//   import init from "/static/pkg/welcome-web.js";
//   await init();   // runs wasm_start()

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    use welcome::platform::DomPage;
    use welcome::HttpWhoAmIClient;

    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());

        let page = match DomPage::current() {
            Ok(page) => page,
            Err(e) => {
                log::error!("[welcome] page unavailable: {e:#}");
                return;
            }
        };
        let origin = match page.origin() {
            Ok(origin) => origin,
            Err(e) => {
                log::error!("[welcome] {e:#}");
                return;
            }
        };
        let client = HttpWhoAmIClient::new(origin);

        spawn_local(async move {
            // Failures are already logged by the renderer
            if let Ok(outcome) = welcome::run(&page, &client).await {
                log::debug!("[welcome] finished: {outcome:?}");
            }
        });
    }
}

// Native builds: just provide a stub main so `cargo build --all-features` doesn't explode.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("welcome-web is only supported on wasm32 (browser) target.");
}
