use feed::GeolocationError;
use futures::channel::oneshot;
use payloads::Coordinates;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};

type Outcome = Result<Coordinates, GeolocationError>;
type Reply = Rc<RefCell<Option<oneshot::Sender<Outcome>>>>;

/// Ask the browser for the device position once.
pub async fn current_position() -> Outcome {
    let geolocation = web_sys::window()
        .ok_or(GeolocationError::Unsupported)?
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationError::Unsupported)?;

    let (sender, receiver) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(sender)));

    let on_success: Closure<dyn FnMut(GeolocationPosition)> = {
        let reply = reply.clone();
        Closure::once(move |position: GeolocationPosition| {
            let coords = position.coords();
            send(
                &reply,
                Ok(Coordinates {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                }),
            );
        })
    };

    let on_error: Closure<dyn FnMut(GeolocationPositionError)> = {
        let reply = reply.clone();
        Closure::once(move |error: GeolocationPositionError| {
            tracing::warn!("geolocation failed: {}", error.message());
            let error = match error.code() {
                GeolocationPositionError::PERMISSION_DENIED => {
                    GeolocationError::Denied
                }
                _ => GeolocationError::Unavailable,
            };
            send(&reply, Err(error));
        })
    };

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(false);
    options.set_maximum_age(5 * 60 * 1000);
    options.set_timeout(20 * 1000);

    geolocation
        .get_current_position_with_error_callback_and_options(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(|_| GeolocationError::Unavailable)?;

    // Both closures must outlive the browser's call into them
    let result = receiver.await.unwrap_or(Err(GeolocationError::Unavailable));
    drop((on_success, on_error));
    result
}

fn send(reply: &Reply, result: Outcome) {
    if let Some(sender) = reply.borrow_mut().take() {
        let _ = sender.send(result);
    }
}
