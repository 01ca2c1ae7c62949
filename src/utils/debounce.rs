use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `on_settled` once no resize has fired
/// for `delay_ms`. Dropping the listener also cancels a pending run.
///
/// Returns `None` outside a browser window.
pub fn on_resize_settled<F>(delay_ms: u32, on_settled: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let on_settled = Rc::new(on_settled);

    Some(EventListener::new(&window, "resize", move |_| {
        let on_settled = on_settled.clone();
        // Replacing the handle drops and cancels the previous timeout
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || on_settled()));
    }))
}
