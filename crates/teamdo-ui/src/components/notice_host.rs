use crate::core::notice::Notice;
use crate::core::store::AppStore;
use crate::i18n::Translator;
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct NoticeHostProps {
    pub(crate) dismiss_ms: u32,
    #[prop_or_default]
    pub(crate) class: Classes,
}

#[function_component(NoticeHost)]
pub(crate) fn notice_host(props: &NoticeHostProps) -> Html {
    let t = use_context::<Translator>().unwrap_or_default();
    let notices = use_selector(|store: &AppStore| store.notices.items().to_vec());
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    let dispatch = Dispatch::<AppStore>::new();
    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| dispatch.reduce_mut(|store| store.notices.dismiss(id)))
    };
    {
        let on_dismiss = on_dismiss.clone();
        let dismiss_ms = props.dismiss_ms;
        use_effect_with_deps(
            move |list: &std::rc::Rc<Vec<Notice>>| {
                let mut handles = timers.borrow_mut();
                handles.retain(|id, _| list.iter().any(|notice| notice.id == *id));
                for notice in list.iter() {
                    let id = notice.id;
                    let on_dismiss = on_dismiss.clone();
                    handles
                        .entry(id)
                        .or_insert_with(|| Timeout::new(dismiss_ms, move || on_dismiss.emit(id)));
                }
                || ()
            },
            notices.clone(),
        );
    }

    html! {
        <div class={classes!("notice-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for notices.iter().map(|notice| render_notice(notice, &t, on_dismiss.clone()))}
        </div>
    }
}

fn render_notice(notice: &Notice, t: &Translator, on_dismiss: Callback<u64>) -> Html {
    let id = notice.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));
    html! {
        <div class={classes!("notice", notice.draft.kind.class())} role="status">
            <span>{notice.draft.message(t)}</span>
            <button class="ghost" aria-label={t.text("common.dismiss")} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
