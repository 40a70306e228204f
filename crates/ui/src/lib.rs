mod app;
mod host;
mod theme;

pub use app::DemoApp;
pub use host::Host;

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn canvas() -> anyhow::Result<web_sys::HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .get_element_by_id("demo_state_canvas")
        .ok_or_else(|| anyhow::anyhow!("no canvas element with id 'demo_state_canvas'"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("element is not a canvas"))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let setup = canvas().and_then(|canvas| {
            let host = host::BrowserLocation::new()?;
            Ok((canvas, host))
        });
        let (canvas, host) = match setup {
            Ok(parts) => parts,
            Err(e) => {
                web_sys::console::error_1(&format!("demo-state: {e}").into());
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(DemoApp::new(cc, host)))),
            )
            .await;
        if let Err(e) = start_result {
            web_sys::console::error_1(&format!("Failed to start eframe: {e:?}").into());
        }
    });
    Ok(())
}
