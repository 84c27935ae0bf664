use dioxus_core::{ElementId, Event, Mutation, Mutations, VirtualDom};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use std::any::Any;
use std::rc::Rc;

/// Elements that got a click listener in this batch, in tree order.
pub fn click_targets(mutations: &Mutations) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
            _ => None,
        })
        .collect()
}

/// Fires a mouse click at `id`. Handlers run before this returns.
pub fn click(dom: &VirtualDom, id: ElementId) {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::new(
        SerializedMouseData::default(),
    )));
    dom.runtime().handle_event("click", Event::new(data, true), id);
}
