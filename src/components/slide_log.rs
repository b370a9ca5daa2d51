use std::collections::VecDeque;
use std::rc::Rc;
use yew::prelude::*;

const MAX_ENTRIES: usize = 12;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideLog {
    pub entries: VecDeque<String>,
    pub total: u32,
}

pub enum SlideLogAction {
    Push(&'static str),
    Clear,
}

impl Reducible for SlideLog {
    type Action = SlideLogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SlideLogAction::Push(dir) => {
                next.total += 1;
                next.entries.push_front(format!("#{} {}", next.total, dir));
                next.entries.truncate(MAX_ENTRIES);
            }
            SlideLogAction::Clear => next = SlideLog::default(),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SlideLogViewProps {
    pub log: SlideLog,
    pub on_clear: Callback<()>,
}

#[function_component(SlideLogView)]
pub fn slide_log_view(props: &SlideLogViewProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; flex-direction:column; gap:6px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <strong>{"Slides"}</strong>
            <button onclick={clear_cb} style="padding:2px 8px; font-size:12px;">{"Clear"}</button>
        </div>
        if props.log.entries.is_empty() {
            <div style="opacity:0.6; font-size:12px;">{"Swipe inside the panel."}</div>
        }
        { for props.log.entries.iter().map(|e| html! { <div style="font-family:monospace; font-size:13px;">{ e.clone() }</div> }) }
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_newest_entries_first_and_bounded() {
        let mut log = Rc::new(SlideLog::default());
        for _ in 0..(MAX_ENTRIES + 3) {
            log = log.reduce(SlideLogAction::Push("up"));
        }
        log = log.reduce(SlideLogAction::Push("left"));
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries.front().map(String::as_str), Some("#16 left"));
        assert_eq!(log.clone().reduce(SlideLogAction::Clear).total, 0);
    }
}
