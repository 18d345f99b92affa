//! Profile dropdown: identity header, account actions, theme toggle, sign-out
//!
//! Behaviour lives in [`SessionMenu`]; this component only translates DOM
//! events into [`MenuEvent`]s and applies the returned effects.

use crate::components::IconView;
use crate::state::{use_auth, use_global_state, AuthContext, GlobalState};
use develevate_types::menu::{
    apply_effect, AuthService, Icon, MenuEvent, MenuHost, MenuSection, MenuView,
    Navigator, PointerTarget, PreferenceDispatch, SessionMenu,
};
use develevate_types::{PreferenceAction, Preferences, UserRecord};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

type NavigateFn = Box<dyn Fn(&str)>;

/// Inside only when the menu is mounted and contains the press target
fn classify_press<M>(
    menu: Option<M>,
    contains_target: impl FnOnce(&M) -> bool,
) -> PointerTarget {
    match menu {
        Some(menu) if contains_target(&menu) => PointerTarget::InsideMenu,
        _ => PointerTarget::Outside,
    }
}

/// Registered listener that can be taken off the window
trait DetachListener {
    fn detach(self);
}

impl DetachListener for WindowListenerHandle {
    fn detach(self) {
        self.remove();
    }
}

/// Holds at most one live listener; replacing or clearing detaches the old one
struct ListenerSlot<H: DetachListener> {
    handle: Option<H>,
}

impl<H: DetachListener> ListenerSlot<H> {
    fn new() -> Self {
        Self { handle: None }
    }

    fn install(&mut self, handle: H) {
        if let Some(stale) = self.handle.replace(handle) {
            stale.detach();
        }
    }

    fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.detach();
        }
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

/// Browser side of the menu: contexts, router, parent callback, DOM listener
#[derive(Clone, Copy)]
struct DropdownHost {
    auth: AuthContext,
    prefs: GlobalState,
    navigate: StoredValue<NavigateFn, LocalStorage>,
    on_close: Callback<()>,
    menu: StoredValue<SessionMenu>,
    menu_ref: NodeRef<Div>,
    listener: StoredValue<ListenerSlot<WindowListenerHandle>, LocalStorage>,
}

impl DropdownHost {
    /// Run the state machine, then apply its effects outside the borrow
    fn send(mut self, event: MenuEvent) {
        let effects = self
            .menu
            .try_update_value(|menu| menu.handle(event))
            .unwrap_or_default();
        for effect in effects {
            apply_effect(&mut self, effect);
        }
    }

    fn pointer_target(&self, ev: &web_sys::MouseEvent) -> PointerTarget {
        let target = ev.target();
        classify_press(self.menu_ref.get_untracked(), |menu| {
            menu.contains(target.as_ref().and_then(|t| t.dyn_ref::<web_sys::Node>()))
        })
    }
}

impl AuthService for DropdownHost {
    fn current_user(&self) -> Option<UserRecord> {
        AuthService::current_user(&self.auth)
    }

    fn logout(&self) {
        self.auth.logout();
    }
}

impl Navigator for DropdownHost {
    fn go_to(&self, path: &str) {
        self.navigate.try_with_value(|navigate| navigate(path));
    }
}

impl PreferenceDispatch for DropdownHost {
    fn current_prefs(&self) -> Preferences {
        PreferenceDispatch::current_prefs(&self.prefs)
    }

    fn dispatch(&self, action: PreferenceAction) {
        self.prefs.dispatch(action);
    }
}

impl MenuHost for DropdownHost {
    fn close(&mut self) {
        self.on_close.run(());
    }

    fn listen_outside(&mut self) {
        let host = *self;
        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            host.send(MenuEvent::PointerDown(host.pointer_target(&ev)));
        });
        self.listener.try_update_value(|slot| slot.install(handle));
    }

    fn stop_listening(&mut self) {
        self.listener.try_update_value(ListenerSlot::clear);
    }
}

/// Profile dropdown menu
///
/// Visibility is owned by the parent: `is_open` decides whether anything is
/// rendered, and every dismissal goes through `on_close`.
#[component]
pub fn ProfileDropdown(
    /// Whether the parent wants the menu shown
    #[prop(into)]
    is_open: Signal<bool>,
    /// Asks the parent to hide the menu
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let prefs = use_global_state();
    let navigate = use_navigate();
    let menu_ref = NodeRef::<Div>::new();

    let host = DropdownHost {
        auth,
        prefs,
        navigate: StoredValue::new_local(
            Box::new(move |path: &str| navigate(path, Default::default())) as NavigateFn,
        ),
        on_close,
        menu: StoredValue::new(SessionMenu::new()),
        menu_ref,
        listener: StoredValue::new_local(ListenerSlot::new()),
    };

    // Mirror the prop into the machine (registers/removes the listener)
    Effect::new(move |_| {
        host.send(MenuEvent::Visibility(is_open.get()));
    });
    on_cleanup(move || host.send(MenuEvent::Unmount));

    let model = Memo::new(move |_| MenuView::build(auth.user().as_ref(), prefs.prefs()));

    view! {
        <Show when=move || is_open.get()>
            <div
                node_ref=menu_ref
                class=move || {
                    if prefs.dark_mode() {
                        "profile-dropdown profile-dropdown-dark"
                    } else {
                        "profile-dropdown"
                    }
                }
            >
                // User info header
                <div class="profile-dropdown-header">
                    <div class="profile-avatar">
                        <img
                            class="profile-avatar-img"
                            src=move || model.with(|m| m.identity.avatar_url.clone())
                            alt=move || model.with(|m| m.identity.avatar_alt.clone())
                        />
                        <span class="profile-avatar-status"></span>
                    </div>
                    <div class="profile-identity">
                        <h3 class="profile-name">{move || model.with(|m| m.identity.name.clone())}</h3>
                        <p class="profile-email">{move || model.with(|m| m.identity.email.clone())}</p>
                        <div class="profile-progress">
                            <span class="profile-level">
                                {move || model.with(|m| m.identity.level.clone())}
                            </span>
                            <span class="profile-points">
                                {move || model.with(|m| m.identity.points_label())}
                            </span>
                        </div>
                    </div>
                </div>

                // Menu items
                <div class="profile-dropdown-sections">
                    {model
                        .with_untracked(|m| m.sections.clone())
                        .into_iter()
                        .map(|section| view! { <MenuSectionView section host /> })
                        .collect_view()}
                </div>

                // Theme toggle & logout
                <div class="profile-dropdown-actions">
                    <div class="profile-theme-row">
                        <span class="profile-theme-label">"Theme"</span>
                        <button
                            class="profile-theme-toggle"
                            on:click=move |_| host.send(MenuEvent::ToggleTheme)
                        >
                            {move || {
                                let theme = model.with(|m| m.theme);
                                view! {
                                    <IconView icon=theme.icon size=16 />
                                    <span>{theme.label}</span>
                                }
                            }}
                        </button>
                    </div>
                    <button class="profile-sign-out" on:click=move |_| host.send(MenuEvent::SignOut)>
                        <IconView icon=Icon::LogOut size=16 />
                        <span>"Sign Out"</span>
                    </button>
                </div>

                <div class="profile-dropdown-footer">{move || model.with(|m| m.footer)}</div>
            </div>
        </Show>
    }
}

/// One titled group of catalog items
#[component]
fn MenuSectionView(section: MenuSection, host: DropdownHost) -> impl IntoView {
    view! {
        <div class="profile-menu-section">
            <div class="profile-menu-section-title">{section.section}</div>
            <div class="profile-menu-items">
                {section
                    .items
                    .into_iter()
                    .map(|item| {
                        let action = item.action;
                        let class = if item.highlight {
                            "profile-menu-item profile-menu-item-highlight"
                        } else {
                            "profile-menu-item"
                        };
                        view! {
                            <button class=class on:click=move |_| host.send(MenuEvent::Select(action))>
                                <IconView icon=item.icon />
                                <span class="profile-menu-item-label">{item.label}</span>
                                {item
                                    .highlight
                                    .then(|| view! { <span class="profile-menu-item-badge">"New"</span> })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use develevate_types::menu::{MenuEffect, MenuState};
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeHandle(Rc<Cell<u32>>);

    impl DetachListener for FakeHandle {
        fn detach(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_press_classification() {
        assert_eq!(classify_press(None::<()>, |_| true), PointerTarget::Outside);
        assert_eq!(classify_press(Some(()), |_| true), PointerTarget::InsideMenu);
        assert_eq!(classify_press(Some(()), |_| false), PointerTarget::Outside);
    }

    #[test]
    fn test_listener_slot_never_holds_two_handles() {
        let detached = Rc::new(Cell::new(0));
        let mut slot = ListenerSlot::new();

        slot.install(FakeHandle(detached.clone()));
        slot.install(FakeHandle(detached.clone()));
        assert_eq!(detached.get(), 1);
        assert!(slot.is_active());

        slot.clear();
        assert_eq!(detached.get(), 2);
        assert!(!slot.is_active());

        slot.clear();
        assert_eq!(detached.get(), 2);
    }

    #[test]
    fn test_open_close_cycles_release_every_listener() {
        let detached = Rc::new(Cell::new(0));
        let mut slot = ListenerSlot::new();
        let mut menu = SessionMenu::new();
        let mut installed = 0;

        let events = [
            MenuEvent::Visibility(true),
            MenuEvent::PointerDown(classify_press(Some(()), |_| false)),
            MenuEvent::Visibility(false),
            MenuEvent::Visibility(true),
            MenuEvent::Visibility(true),
            MenuEvent::Unmount,
        ];
        for event in events {
            for effect in menu.handle(event) {
                match effect {
                    MenuEffect::ListenOutside => {
                        installed += 1;
                        slot.install(FakeHandle(detached.clone()));
                    }
                    MenuEffect::StopListening => slot.clear(),
                    _ => {}
                }
            }
        }

        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(installed, 2);
        assert_eq!(detached.get(), 2);
        assert!(!slot.is_active());
    }
}
