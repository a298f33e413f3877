//! Language selector used in the top bar.
//!
//! # Design
//! - Only locales whose bundles loaded are offered.
//! - Emit the selected locale via callback; loading and persistence belong to the app root.

use crate::i18n::LocaleCode;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub(crate) locale: LocaleCode,
    pub(crate) available: Vec<LocaleCode>,
    pub(crate) label: AttrValue,
    pub(crate) on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                    on_select.emit(locale);
                }
            }
        })
    };

    html! {
        <select class="locale-menu" aria-label={props.label.clone()} {onchange}>
            {for props.available.iter().map(|lc| html! {
                <option value={lc.code()} selected={*lc == props.locale}>{lc.label()}</option>
            })}
        </select>
    }
}
