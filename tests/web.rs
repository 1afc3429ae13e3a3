#![cfg(target_arch = "wasm32")]

//! Browser smoke test: the rendering collaborator the painting depends on
//! (a canvas with a 2d context) must be available in the host page.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn canvas_2d_context_is_available() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(320);
    canvas.set_height(200);

    let ctx = canvas
        .get_context("2d")
        .unwrap()
        .expect("2d context not supported")
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();

    ctx.set_fill_style_str("rgba(10,20,30,1.000)");
    ctx.fill_rect(0.0, 0.0, 320.0, 200.0);
}
