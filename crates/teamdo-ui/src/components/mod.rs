//! Reusable Yew components and the glue that runs workflows from callbacks.

pub(crate) mod locale_menu;
pub(crate) mod notice_host;
pub(crate) mod shell;
pub(crate) mod todo_list;

use crate::core::host::Services;
use crate::core::outcome::Outcome;
use crate::core::store::AppStore;
use crate::features::todos::actions::TodoAction;
use crate::features::todos::state::TodoListState;
use crate::features::todos::workflow::TodoWorkflow;
use crate::i18n::Translator;
use std::cell::RefCell;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::Properties;
use yew::functional::UseForceUpdateHandle;
use yewdux::prelude::Dispatch;

/// Props shared by every routed page.
#[derive(Properties, PartialEq)]
pub(crate) struct PageProps {
    pub(crate) services: Services,
    pub(crate) translator: Translator,
}

/// Push the outcome's notice, if any, into the shared store.
pub(crate) fn surface(outcome: Outcome) {
    if let Some(draft) = outcome.into_notice() {
        Dispatch::<AppStore>::new().reduce_mut(|store| {
            store.notify(draft);
        });
    }
}

/// Run a todo action against a list held in a shared page cell.
///
/// The list is copied when the task starts and written back as soon as the
/// workflow returns. Operations on one scope are serialized by its in-flight
/// lane, so the copy is never older than what it replaces.
pub(crate) fn run_list_action<T, F>(
    services: Services,
    translator: Translator,
    state: Rc<RefCell<T>>,
    refresh: UseForceUpdateHandle,
    lens: F,
    action: TodoAction,
) where
    T: 'static,
    F: Fn(&mut T) -> Option<&mut TodoListState> + 'static,
{
    spawn_local(async move {
        let Some(mut list) = lens(&mut *state.borrow_mut()).cloned() else {
            return;
        };
        let outcome = TodoWorkflow::new(&services, &translator)
            .apply(&mut list, action)
            .await;
        if outcome != Outcome::Redirected {
            let mut current = state.borrow_mut();
            if let Some(slot) = lens(&mut *current) {
                *slot = list;
            }
            drop(current);
            refresh.force_update();
        }
        surface(outcome);
    });
}
