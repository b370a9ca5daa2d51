use touch_trigger::TriggerOptions;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub options: TriggerOptions,
    pub on_change: Callback<TriggerOptions>,
    pub on_reset: Callback<()>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    // click handler that applies an edit to a copy of the current options
    let edit = |apply: fn(&mut TriggerOptions)| {
        let cb = props.on_change.clone();
        let current = props.options.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = current.clone();
            apply(&mut next);
            cb.emit(next);
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let o = &props.options;

    html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; flex-direction:column; gap:8px;">
        <strong>{"Options"}</strong>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={o.enable_x} onclick={edit(|s| s.enable_x = !s.enable_x)} />
            <span>{"Horizontal slides"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={o.enable_y} onclick={edit(|s| s.enable_y = !s.enable_y)} />
            <span>{"Vertical slides"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={o.sync_with_scroll} onclick={edit(|s| s.sync_with_scroll = !s.sync_with_scroll)} />
            <span>{"Only at scroll edges"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={o.block_scroll} onclick={edit(|s| s.block_scroll = !s.block_scroll)} />
            <span>{"Block scrolling"}</span>
        </label>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input type="checkbox" checked={o.debug} onclick={edit(|s| s.debug = !s.debug)} />
            <span>{"Log to console"}</span>
        </label>
        <div style="display:flex; align-items:center; gap:6px;">
            <button onclick={edit(|s| s.threshold_x = (s.threshold_x - 10.0).max(0.0))}>{"-"}</button>
            <button onclick={edit(|s| s.threshold_x += 10.0)}>{"+"}</button>
            <span>{ format!("X threshold {}px", o.threshold_x) }</span>
        </div>
        <div style="display:flex; align-items:center; gap:6px;">
            <button onclick={edit(|s| s.threshold_y = (s.threshold_y - 10.0).max(0.0))}>{"-"}</button>
            <button onclick={edit(|s| s.threshold_y += 10.0)}>{"+"}</button>
            <span>{ format!("Y threshold {}px", o.threshold_y) }</span>
        </div>
        <div style="display:flex; align-items:center; gap:6px;">
            <button onclick={edit(|s| s.min_speed = (s.min_speed - 50.0).max(0.0))}>{"-"}</button>
            <button onclick={edit(|s| s.min_speed += 50.0)}>{"+"}</button>
            <span>{ format!("Min speed {}px/s", o.min_speed) }</span>
        </div>
        <button onclick={reset_cb}>{"Defaults"}</button>
    </div>}
}
