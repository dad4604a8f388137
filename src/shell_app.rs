use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement};

use queryquill_core::controller::SIMULATED_UPLOAD_NOTICE;
use queryquill_core::views::{SIDEBAR_ID, SIDEBAR_OVERLAY_ID, SIGNUP_NAME_ID, SIGNUP_ROLE_ID};
use queryquill_core::{
    Effect, EventKind, Route, ShellAction, ShellController, SignupForm, UserProfile,
};

use crate::dom_render;
use crate::hash_route;
use crate::local_store::{log_storage_error, LocalStore};

const MOUNT_ID: &str = "app";

thread_local! {
    static SHELL: RefCell<Option<Rc<ShellApp>>> = RefCell::new(None);
}

/// The hash-routed workspace shell.
///
/// Every render replaces the mounted page and its listeners; the controller
/// is the only state that survives between renders.
pub(crate) struct ShellApp {
    document: Document,
    container: Element,
    controller: RefCell<ShellController<LocalStore>>,
    listeners: RefCell<Vec<EventListener>>,
    router: RefCell<Option<EventListener>>,
}

pub(crate) fn mount() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let container = document
        .get_element_by_id(MOUNT_ID)
        .or_else(|| document.body().map(Element::from));
    let Some(container) = container else {
        gloo::console::warn!("shell: no mount point");
        return;
    };
    let (controller, corruption) = ShellController::load(LocalStore::open());
    if let Some(err) = corruption {
        log_storage_error("discarded stored state", &err);
    }
    let app = Rc::new(ShellApp {
        document,
        container,
        controller: RefCell::new(controller),
        listeners: RefCell::new(Vec::new()),
        router: RefCell::new(None),
    });
    app.install_router();
    app.route();
    SHELL.with(|slot| {
        *slot.borrow_mut() = Some(app);
    });
}

impl ShellApp {
    fn install_router(self: &Rc<Self>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let weak = Rc::downgrade(self);
        let listener = EventListener::new(&window, "hashchange", move |_event| {
            if let Some(app) = weak.upgrade() {
                app.route();
            }
        });
        *self.router.borrow_mut() = Some(listener);
    }

    /// Resolves the current fragment through the auth guard and renders it.
    fn route(self: &Rc<Self>) {
        let fragment = hash_route::current_fragment();
        let resolution = self.controller.borrow().resolve(&fragment);
        if resolution.redirected {
            hash_route::replace_fragment(resolution.route);
        }
        self.render(resolution.route);
    }

    fn render(self: &Rc<Self>, route: Route) {
        let view = self.controller.borrow().render(route);
        let mut listeners = Vec::new();
        let weak = Rc::downgrade(self);
        let mut bind = |element: &Element, kind: EventKind, action: &ShellAction| {
            listeners.push(bind_action(&weak, element, kind, *action));
        };
        if let Err(err) = dom_render::mount(&self.document, &self.container, &view, &mut bind) {
            gloo::console::warn!("shell: render failed", err);
            return;
        }
        *self.listeners.borrow_mut() = listeners;
        let Some(window) = web_sys::window() else {
            return;
        };
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn dispatch(self: &Rc<Self>, action: ShellAction, target: &Element) {
        match action {
            ShellAction::DemoLogin => {
                let effect = self.controller.borrow_mut().authenticate(UserProfile::demo());
                self.apply(effect);
            }
            ShellAction::Signup => {
                let Some(profile) = self.read_signup_form().into_profile() else {
                    return;
                };
                let effect = self.controller.borrow_mut().authenticate(profile);
                self.apply(effect);
            }
            ShellAction::Logout => {
                let effect = self.controller.borrow_mut().logout();
                self.apply(effect);
            }
            ShellAction::ToggleRole => {
                let effect = self.controller.borrow_mut().toggle_role();
                self.apply(effect);
            }
            ShellAction::ToggleSidebar => {
                let Some(sidebar) = self.document.get_element_by_id(SIDEBAR_ID) else {
                    return;
                };
                let open = sidebar.class_list().toggle("open").unwrap_or(false);
                self.set_overlay_visible(open);
            }
            ShellAction::CloseSidebar => {
                if let Some(sidebar) = self.document.get_element_by_id(SIDEBAR_ID) {
                    let _ = sidebar.class_list().remove_1("open");
                }
                self.set_overlay_visible(false);
            }
            ShellAction::SimulateUpload => alert(SIMULATED_UPLOAD_NOTICE),
            ShellAction::PickAnswer { correct } => {
                let class = if correct { "answer-correct" } else { "answer-wrong" };
                let _ = target.class_list().add_1(class);
            }
            ShellAction::FlipFlashcard => {
                if let Ok(Some(inner)) = target.query_selector(".flashcard-inner") {
                    let _ = inner.class_list().toggle("flipped");
                }
            }
        }
    }

    /// Carries out a controller effect. Re-renders and same-route
    /// navigations are deferred so no listener is dropped while it runs.
    fn apply(self: &Rc<Self>, effect: Effect) {
        if let Some(err) = effect.storage_error.as_ref() {
            log_storage_error("write failed", err);
        }
        if let Some(notice) = effect.notice.as_deref() {
            alert(notice);
        }
        let rerender = match effect.navigate {
            Some(route) if Route::from_fragment(&hash_route::current_fragment()) != Some(route) => {
                hash_route::navigate(route);
                false
            }
            Some(_) => true,
            None => effect.rerender,
        };
        if rerender {
            let weak = Rc::downgrade(self);
            Timeout::new(0, move || {
                if let Some(app) = weak.upgrade() {
                    app.route();
                }
            })
            .forget();
        }
    }

    fn read_signup_form(&self) -> SignupForm {
        let name = self
            .document
            .get_element_by_id(SIGNUP_NAME_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        let role = self
            .document
            .get_element_by_id(SIGNUP_ROLE_ID)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();
        SignupForm::new(name, role)
    }

    fn set_overlay_visible(&self, visible: bool) {
        let Some(overlay) = self.document.get_element_by_id(SIDEBAR_OVERLAY_ID) else {
            return;
        };
        let display = if visible { "display: block;" } else { "display: none;" };
        let _ = overlay.set_attribute("style", display);
    }
}

fn bind_action(
    app: &Weak<ShellApp>,
    element: &Element,
    kind: EventKind,
    action: ShellAction,
) -> EventListener {
    let app = app.clone();
    let target = element.clone();
    EventListener::new(element, kind.dom_name(), move |event: &Event| {
        if kind == EventKind::Submit {
            event.prevent_default();
        }
        if let Some(app) = app.upgrade() {
            app.dispatch(action, &target);
        }
    })
}

fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.alert_with_message(message);
}
