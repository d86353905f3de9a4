#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod build_info;
pub mod effects;
pub mod markdown;
pub mod pages;
pub mod portfolio;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use std::sync::Arc;

    use crate::app::*;
    use crate::portfolio::Portfolio;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let portfolio = match Portfolio::embedded() {
        Ok(p) => Arc::new(p),
        Err(e) => {
            log::error!("couldn't load portfolio content: {e}");
            return;
        }
    };
    leptos::mount::hydrate_body(move || {
        leptos::prelude::provide_context(portfolio.clone());
        App()
    });
}
