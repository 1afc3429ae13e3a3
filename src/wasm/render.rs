//! Render loop wiring: sizes the canvas to the window, owns the session and
//! the cached background raster, and hooks up the animation-frame, resize
//! and pointer callbacks. The host guarantees the callbacks never overlap,
//! so a shared `Rc<RefCell<..>>` is all the coordination needed.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement};

use super::draw;
use crate::session::Session;

pub fn start(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let document = win.document().ok_or("no document")?;

    let width = win.inner_width()?.as_f64().ok_or("bad window width")?;
    let height = win.inner_height()?.as_f64().ok_or("bad window height")?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx = draw::context_of(&canvas)?;
    let mut rng = rand::thread_rng();
    let session = Rc::new(RefCell::new(Session::new(&mut rng, width, height)));
    let backdrop = {
        let s = session.borrow();
        Rc::new(RefCell::new(draw::paint_background(&document, s.background())?))
    };

    // Resize: fit the canvas to the window and regenerate the background at
    // the new size before the next frame can blit it.
    let resize_closure = {
        let canvas = canvas.clone();
        let document = document.clone();
        let session = session.clone();
        let backdrop = backdrop.clone();
        Closure::wrap(Box::new(move || {
            let w = window().unwrap().inner_width().unwrap().as_f64().unwrap();
            let h = window().unwrap().inner_height().unwrap().as_f64().unwrap();
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);
            let mut s = session.borrow_mut();
            s.resize(&mut rand::thread_rng(), w, h);
            *backdrop.borrow_mut() = draw::paint_background(&document, s.background()).unwrap();
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Pointer press plants a bold shape under the cursor.
    let pointer_closure = {
        let session = session.clone();
        Closure::wrap(Box::new(move |event: web_sys::PointerEvent| {
            let mut s = session.borrow_mut();
            s.pointer_press(
                &mut rand::thread_rng(),
                event.offset_x() as f64,
                event.offset_y() as f64,
            );
        }) as Box<dyn FnMut(web_sys::PointerEvent)>)
    };
    canvas.add_event_listener_with_callback(
        "pointerdown",
        pointer_closure.as_ref().unchecked_ref(),
    )?;
    pointer_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut rng = rand::thread_rng();
        session.borrow_mut().tick(&mut rng);

        let s = session.borrow();
        let bg = backdrop.borrow();
        ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &*bg,
            0.0,
            0.0,
            s.width(),
            s.height(),
        )
        .unwrap();
        draw::vignette(&ctx, s.width(), s.height()).unwrap();

        for i in s.draw_order() {
            draw::draw_shape(&ctx, &s.shapes()[i], s.frame(), s.palette(), &mut rng).unwrap();
        }

        // schedule next
        window()
            .unwrap()
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .unwrap();
    }) as Box<dyn FnMut()>));

    win.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;

    Ok(())
}
