pub mod message;
pub mod widget;

use leptos::prelude::RwSignal;

use crate::api::HttpEndpoint;
use crate::controller::ChatWidget;
use crate::state::WidgetState;

/// The controller as wired in the browser, provided via Leptos context.
pub type BrowserWidget = ChatWidget<RwSignal<WidgetState>, HttpEndpoint>;
