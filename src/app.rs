use gloo::console::log;
use gloo::events::EventListener;
use yew::prelude::*;

use crate::config::MOUNT_ELEMENT_ID;
use crate::error::MountError;
use crate::greeting::{GreetingState, GreetingView};
use crate::host::{read_window_host, HostGlobals};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Reads the host global. Injected so the app never reaches for `window` itself.
    pub read_host: Callback<(), Option<HostGlobals>>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_state(GreetingState::default);

    // Read the host once after first paint.
    {
        let state = state.clone();
        let read_host = props.read_host.clone();
        use_effect_with((), move |_| {
            if let Some(found) = host_greeting(&read_host) {
                log!(format!("greeting {} from host", found.label()));
                state.set(found);
            }

            let subscription = subscribe_updates(read_host, state);
            move || drop(subscription)
        });
    }

    html! {
        <GreetingView state={(*state).clone()} />
    }
}

/// State to apply after first paint. `None` leaves the fallback in place.
fn host_greeting(read_host: &Callback<(), Option<HostGlobals>>) -> Option<GreetingState> {
    let state = GreetingState::from_host(read_host.emit(()).as_ref());
    state.name.is_some().then_some(state)
}

#[cfg(feature = "live-updates")]
fn subscribe_updates(
    read_host: Callback<(), Option<HostGlobals>>,
    state: UseStateHandle<GreetingState>,
) -> Option<EventListener> {
    use crate::config::HOST_UPDATE_EVENT;

    let window = web_sys::window()?;
    Some(EventListener::new(&window, HOST_UPDATE_EVENT, move |_| {
        state.set(GreetingState::from_host(read_host.emit(()).as_ref()))
    }))
}

#[cfg(not(feature = "live-updates"))]
fn subscribe_updates(
    _read_host: Callback<(), Option<HostGlobals>>,
    _state: UseStateHandle<GreetingState>,
) -> Option<EventListener> {
    None
}

/// Renders the widget into `#root`. Call once at startup.
pub fn mount() -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let root = document
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .ok_or_else(|| MountError::MissingRoot(MOUNT_ELEMENT_ID.to_string()))?;

    let props = AppProps {
        read_host: Callback::from(|_: ()| read_window_host()),
    };
    yew::Renderer::<App>::with_root_and_props(root, props).render();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn reader(
        json: Option<&'static str>,
        calls: Rc<Cell<usize>>,
    ) -> Callback<(), Option<HostGlobals>> {
        Callback::from(move |_: ()| {
            calls.set(calls.get() + 1);
            json.map(|j| HostGlobals::from_json(j).expect("decodes"))
        })
    }

    #[test]
    fn found_name_is_applied() {
        let calls = Rc::new(Cell::new(0));
        let read = reader(
            Some(r#"{"toolResponseMetadata":{"structuredContent":{"name":"Ada"}}}"#),
            calls.clone(),
        );
        let state = host_greeting(&read).expect("name found");
        assert_eq!(state.greeting(), "Hello Ada");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn missing_host_leaves_state_alone() {
        let calls = Rc::new(Cell::new(0));
        assert_eq!(host_greeting(&reader(None, calls.clone())), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn missing_or_empty_name_leaves_state_alone() {
        let calls = Rc::new(Cell::new(0));
        let no_content = reader(Some(r#"{"toolResponseMetadata":{}}"#), calls.clone());
        let empty = reader(
            Some(r#"{"toolResponseMetadata":{"structuredContent":{"name":""}}}"#),
            calls.clone(),
        );
        assert_eq!(host_greeting(&no_content), None);
        assert_eq!(host_greeting(&empty), None);
        assert_eq!(calls.get(), 2);
    }
}
