use yew::prelude::*;

use crate::config::FALLBACK_NAME;
use crate::host::{display_name, HostGlobals};

/// The name the widget greets. Absent until the host supplies one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingState {
    pub name: Option<String>,
}

impl GreetingState {
    pub fn from_host(host: Option<&HostGlobals>) -> Self {
        Self {
            name: display_name(host),
        }
    }

    /// Never empty.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
    }

    pub fn greeting(&self) -> String {
        format!("Hello {}", self.label())
    }
}

pub fn greeting_markup(state: &GreetingState) -> Html {
    html! {
        <div style="font-family: sans-serif; padding: 20px;">
            <h1>{ state.greeting() }</h1>
            <p>{ "This is a Rust + Yew widget rendered by MCP!" }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GreetingViewProps {
    pub state: GreetingState,
}

#[function_component(GreetingView)]
pub fn greeting_view(props: &GreetingViewProps) -> Html {
    greeting_markup(&props.state)
}
