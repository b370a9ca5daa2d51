use super::{
    settings_panel::SettingsPanel,
    slide_log::{SlideLog, SlideLogAction, SlideLogView},
    slide_panel::SlidePanel,
};
use touch_trigger::{Horizontal, SlideHandlers, TriggerOptions, Vertical};
use touch_trigger::util::clog;
use yew::prelude::*;

const OPTIONS_KEY: &str = "touch_trigger_options";

fn load_options() -> Option<TriggerOptions> {
    let store = web_sys::window()?.local_storage().ok()??;
    let raw = store.get_item(OPTIONS_KEY).ok()??;
    match TriggerOptions::from_json(&raw) {
        Ok(o) => Some(o),
        Err(err) => {
            clog(&format!("ignoring stored options: {err}"));
            None
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let options = use_state(|| TriggerOptions {
        enable_x: true,
        ..Default::default()
    });
    let log = use_reducer(SlideLog::default);

    // Load persisted options
    {
        let options = options.clone();
        use_effect_with((), move |_| {
            if let Some(o) = load_options() {
                options.set(o);
            }
            || ()
        });
    }
    // Persist option changes
    {
        let options = options.clone();
        use_effect_with((*options).clone(), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.set_item(OPTIONS_KEY, &options.to_json());
                }
            }
            || ()
        });
    }

    // Built once so the trigger is not re-attached on every log update.
    let handlers = {
        let dispatcher = log.dispatcher();
        use_memo((), move |_| {
            let dx = dispatcher.clone();
            let dy = dispatcher;
            SlideHandlers::new()
                .on_slide_x(move |d: Horizontal| dx.dispatch(SlideLogAction::Push(d.as_str())))
                .on_slide_y(move |d: Vertical| dy.dispatch(SlideLogAction::Push(d.as_str())))
        })
    };

    let on_change = {
        let options = options.clone();
        Callback::from(move |next: TriggerOptions| options.set(next))
    };
    let on_reset = {
        let options = options.clone();
        Callback::from(move |_| options.set(TriggerOptions::default()))
    };
    let on_clear = {
        let log = log.clone();
        Callback::from(move |_| log.dispatch(SlideLogAction::Clear))
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; gap:12px; padding:12px; color:#c9d1d9; background:#010409; min-height:100vh; font-family:sans-serif;">
            <h2 style="margin:0;">{"Touch trigger"}</h2>
            <SlidePanel options={(*options).clone()} handlers={(*handlers).clone()} />
            <div style="display:flex; gap:12px; flex-wrap:wrap;">
                <SettingsPanel options={(*options).clone()} {on_change} {on_reset} />
                <SlideLogView log={(*log).clone()} {on_clear} />
            </div>
        </div>
    }
}
