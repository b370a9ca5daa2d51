use touch_trigger::{SlideHandlers, TriggerOptions, use_touch_trigger};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SlidePanelProps {
    pub options: TriggerOptions,
    pub handlers: SlideHandlers,
}

/// Scrollable area (both axes) with a trigger attached.
#[function_component(SlidePanel)]
pub fn slide_panel(props: &SlidePanelProps) -> Html {
    let node = use_node_ref();
    use_touch_trigger(node.clone(), props.options.clone(), props.handlers.clone());

    html! {<div ref={node} style="width:100%; height:60vh; overflow:auto; background:#0d1117; border:1px solid #30363d; border-radius:8px;">
        <div style="width:200%; padding:12px; display:flex; flex-direction:column; gap:8px;">
            { for (1..=40).map(|i| html! {
                <div style="padding:10px; background:#161b22; border-radius:6px;">{ format!("Row {i}") }</div>
            }) }
        </div>
    </div>}
}
