//! Collaborator seams for the profile menu and the controller that drives them

use super::machine::{MenuEffect, MenuEvent, MenuState, MenuView, SessionMenu};
use crate::models::UserRecord;
use crate::preferences::{PreferenceAction, Preferences};

/// Session owner (login state)
pub trait AuthService {
    fn current_user(&self) -> Option<UserRecord>;

    /// Best-effort client-side session clearing
    fn logout(&self);
}

/// Client-side router
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Read access to preferences plus the single mutation entry point
pub trait PreferenceDispatch {
    fn current_prefs(&self) -> Preferences;

    fn dispatch(&self, action: PreferenceAction);
}

/// Everything the menu needs from the page hosting it
pub trait MenuHost: AuthService + Navigator + PreferenceDispatch {
    /// Parent-supplied close callback
    fn close(&mut self);

    /// Start delivering document pointer presses to the menu
    fn listen_outside(&mut self);

    /// Stop delivering document pointer presses
    fn stop_listening(&mut self);
}

/// Apply one effect to a host
pub fn apply_effect<H: MenuHost + ?Sized>(host: &mut H, effect: MenuEffect) {
    match effect {
        MenuEffect::ListenOutside => host.listen_outside(),
        MenuEffect::StopListening => host.stop_listening(),
        MenuEffect::Navigate(route) => host.go_to(route.path()),
        MenuEffect::Logout => host.logout(),
        MenuEffect::Dispatch(action) => host.dispatch(action),
        MenuEffect::Close => host.close(),
    }
}

/// [`SessionMenu`] bound to a host: events in, effects applied in order
pub struct SessionMenuController<H: MenuHost> {
    menu: SessionMenu,
    host: H,
}

impl<H: MenuHost> SessionMenuController<H> {
    pub fn new(host: H) -> Self {
        Self {
            menu: SessionMenu::new(),
            host,
        }
    }

    pub fn send(&mut self, event: MenuEvent) {
        for effect in self.menu.handle(event) {
            apply_effect(&mut self.host, effect);
        }
    }

    pub fn state(&self) -> MenuState {
        self.menu.state()
    }

    /// Current render model, read through the host's collaborators
    pub fn view(&self) -> Option<MenuView> {
        self.menu
            .view(self.host.current_user().as_ref(), self.host.current_prefs())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: MenuHost> Drop for SessionMenuController<H> {
    fn drop(&mut self) {
        self.send(MenuEvent::Unmount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::catalog::{catalog, MenuAction};
    use crate::menu::machine::PointerTarget;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Logout,
        GoTo(String),
        Dispatch(PreferenceAction),
        Close,
    }

    /// Records collaborator calls; listener count shared so it survives drop
    #[derive(Default)]
    struct RecordingHost {
        calls: RefCell<Vec<Call>>,
        prefs: Cell<Preferences>,
        user: Option<UserRecord>,
        listeners: Rc<Cell<i32>>,
    }

    impl AuthService for RecordingHost {
        fn current_user(&self) -> Option<UserRecord> {
            self.user.clone()
        }
        fn logout(&self) {
            self.calls.borrow_mut().push(Call::Logout);
        }
    }

    impl Navigator for RecordingHost {
        fn go_to(&self, path: &str) {
            self.calls.borrow_mut().push(Call::GoTo(path.to_string()));
        }
    }

    impl PreferenceDispatch for RecordingHost {
        fn current_prefs(&self) -> Preferences {
            self.prefs.get()
        }
        fn dispatch(&self, action: PreferenceAction) {
            self.calls.borrow_mut().push(Call::Dispatch(action));
            self.prefs.set(self.prefs.get().reduce(action));
        }
    }

    impl MenuHost for RecordingHost {
        fn close(&mut self) {
            self.calls.borrow_mut().push(Call::Close);
        }
        fn listen_outside(&mut self) {
            self.listeners.set(self.listeners.get() + 1);
        }
        fn stop_listening(&mut self) {
            self.listeners.set(self.listeners.get() - 1);
        }
    }

    fn calls(controller: &SessionMenuController<RecordingHost>) -> Vec<Call> {
        controller.host().calls.borrow().clone()
    }

    fn opened() -> SessionMenuController<RecordingHost> {
        let mut controller = SessionMenuController::new(RecordingHost::default());
        controller.send(MenuEvent::Visibility(true));
        controller
    }

    #[test]
    fn test_closed_menu_has_no_view_and_no_listener() {
        let mut controller = SessionMenuController::new(RecordingHost::default());
        controller.send(MenuEvent::Visibility(false));
        assert!(controller.view().is_none());
        assert_eq!(controller.host().listeners.get(), 0);
        assert!(calls(&controller).is_empty());
    }

    #[test]
    fn test_no_listener_leak_over_cycles() {
        let mut controller = SessionMenuController::new(RecordingHost::default());
        for _ in 0..5 {
            controller.send(MenuEvent::Visibility(true));
            controller.send(MenuEvent::Visibility(true));
            assert_eq!(controller.host().listeners.get(), 1);
            controller.send(MenuEvent::Visibility(false));
            assert_eq!(controller.host().listeners.get(), 0);
        }
    }

    #[test]
    fn test_drop_while_open_releases_listener() {
        let listeners = Rc::new(Cell::new(0));
        let host = RecordingHost {
            listeners: Rc::clone(&listeners),
            ..Default::default()
        };
        let mut controller = SessionMenuController::new(host);
        controller.send(MenuEvent::Visibility(true));
        assert_eq!(listeners.get(), 1);

        drop(controller);
        assert_eq!(listeners.get(), 0);
    }

    #[test]
    fn test_each_item_runs_action_once_then_closes_once() {
        for item in catalog().into_iter().flat_map(|s| s.items) {
            let mut controller = opened();
            controller.send(MenuEvent::Select(item.action));

            let MenuAction::Navigate(route) = item.action else {
                panic!("catalog items navigate");
            };
            assert_eq!(
                calls(&controller),
                vec![Call::GoTo(route.path().to_string()), Call::Close],
                "{}",
                item.label
            );
        }
    }

    #[test]
    fn test_theme_toggle_dispatches_exactly_once() {
        let mut controller = opened();
        assert!(!controller.host().current_prefs().dark_mode);

        controller.send(MenuEvent::ToggleTheme);

        assert_eq!(
            calls(&controller),
            vec![Call::Dispatch(PreferenceAction::ToggleDarkMode)]
        );
        // Re-read through the store, not computed by the menu
        let view = controller.view().unwrap();
        assert!(view.dark_mode);
        assert_eq!(view.theme.label, "Light");
    }

    #[test]
    fn test_sign_out_sequence() {
        let mut controller = opened();
        controller.send(MenuEvent::SignOut);
        assert_eq!(
            calls(&controller),
            vec![Call::Logout, Call::GoTo("/login".to_string()), Call::Close]
        );
    }

    #[test]
    fn test_outside_press_closes_once_per_event() {
        let mut controller = opened();
        controller.send(MenuEvent::PointerDown(PointerTarget::InsideMenu));
        assert!(calls(&controller).is_empty());

        controller.send(MenuEvent::PointerDown(PointerTarget::Outside));
        assert_eq!(calls(&controller), vec![Call::Close]);
    }

    #[test]
    fn test_view_reads_user_from_host() {
        let host = RecordingHost {
            user: Some(UserRecord::new("Linus", "linus@example.com").with_progress("Pro", 90)),
            ..Default::default()
        };
        let mut controller = SessionMenuController::new(host);
        controller.send(MenuEvent::Visibility(true));

        let view = controller.view().unwrap();
        assert_eq!(view.identity.name, "Linus");
        assert_eq!(view.identity.points_label(), "90 points");
    }
}
