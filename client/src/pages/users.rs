//! User management page: list bot subscribers, block/unblock, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/users` once on mount. Each action updates the local list only
//! after the backend confirms it, then reports via toast; a failure leaves
//! the list untouched.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::components::skeleton::SkeletonRows;
use crate::components::toast_host::Notifier;
use crate::config::ConsoleConfig;
use crate::state::session::Session;
use crate::state::users::{UserAction, UserRow, UsersState};
use crate::util::auth::install_unauth_redirect;

const SKELETON_ROWS: usize = 5;
const COLUMNS: usize = 4;

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session.clone(), use_navigate());
    let session = StoredValue::new(session);
    let config = StoredValue::new(expect_context::<ConsoleConfig>());
    let notifier = expect_context::<Notifier>();
    let users = RwSignal::new(UsersState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(token) = session.get_value().token() else {
            return;
        };
        match crate::net::api::fetch_users(&config.get_value(), &token).await {
            Ok(items) => users.update(|s| s.loaded(items)),
            Err(e) => {
                leptos::logging::warn!("users fetch failed: {e}");
                notifier.error("Failed to load users");
                users.update(|s| s.loaded(Vec::new()));
            }
        }
    });

    let run_action = Callback::new(move |(id, action): (String, UserAction)| {
        let mut accepted = false;
        users.update(|s| accepted = s.begin(&id));
        if !accepted {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_value().token().unwrap_or_default();
            let result = crate::net::api::apply_user_action(&config.get_value(), &token, &id, action).await;
            if let Err(e) = &result {
                leptos::logging::warn!("user action {action:?} on {id} failed: {e}");
            }
            users.update(|s| s.finish(&id, action, result.is_ok()));
            if result.is_ok() {
                notifier.success(action.success_message());
            } else {
                notifier.error(action.failure_message());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, config, notifier);
            users.update(|s| s.finish(&id, action, false));
        }
    });

    view! {
        <div class="users-page">
            <PageHeader title="Manage Users"/>
            <div class="users-page__table-wrap">
                <table class="users-table">
                    <thead>
                        <tr>
                            <th>"Telegram ID"</th>
                            <th>"Subscribed"</th>
                            <th>"Blocked"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !users.get().loading
                            fallback=|| view! { <SkeletonRows rows=SKELETON_ROWS columns=COLUMNS/> }
                        >
                            <For
                                each=move || users.get().rows()
                                key=|row| (row.id.clone(), row.blocked)
                                children=move |row| view! { <UserTableRow row=row users=users on_action=run_action/> }
                            />
                            <Show when=move || users.get().is_empty_after_load()>
                                <tr>
                                    <td class="users-table__empty" colspan="4">
                                        "No users found."
                                    </td>
                                </tr>
                            </Show>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn UserTableRow(row: UserRow, users: RwSignal<UsersState>, on_action: Callback<(String, UserAction)>) -> impl IntoView {
    let toggle = row.toggle;
    let offers_unblock = toggle == UserAction::Unblock;
    let offers_block = toggle == UserAction::Block;
    let pending = {
        let id = row.id.clone();
        move || users.get().is_pending(&id)
    };
    let toggle_id = row.id.clone();
    let delete_id = row.id.clone();

    view! {
        <tr class="users-table__row">
            <td class="users-table__telegram-id">{row.telegram_id}</td>
            <td>{row.subscribed}</td>
            <td>{row.blocked}</td>
            <td class="users-table__actions">
                <button
                    class="btn"
                    class:btn--success=offers_unblock
                    class:btn--warning=offers_block
                    disabled=pending.clone()
                    on:click=move |_| on_action.run((toggle_id.clone(), toggle))
                >
                    {toggle.label()}
                </button>
                <button
                    class="btn btn--danger"
                    disabled=pending
                    on:click=move |_| on_action.run((delete_id.clone(), UserAction::Delete))
                >
                    {UserAction::Delete.label()}
                </button>
            </td>
        </tr>
    }
}
