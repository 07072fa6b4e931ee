use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::Timeout;
use js_sys::Array;
use shared::{
    config::MobileConfig,
    models::{
        InteractionError,
        mobile::{SIDEBAR_OPEN_CLASS, should_release_after_sidebar_change},
    },
};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Element, MutationObserver, MutationObserverInit, MutationRecord};
use yew::{NodeRef, hook, use_effect_with};

use super::{mobile_forcer::release_controls, report};
use crate::dom;

type MutationCallback = Closure<dyn FnMut(Array, MutationObserver)>;

/// Watches the sidebar's class list and re-enables controls once it closes on
/// a narrow viewport.
pub struct SidebarWatcher {
    observer: MutationObserver,
    _callback: MutationCallback,
}

impl std::fmt::Debug for SidebarWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SidebarWatcher").finish_non_exhaustive()
    }
}

impl SidebarWatcher {
    pub fn watch(sidebar: &Element, config: &MobileConfig) -> Result<Self, InteractionError> {
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let callback = {
            let sidebar = sidebar.clone();
            let config = config.clone();
            Closure::wrap(Box::new(move |records: Array, _: MutationObserver| {
                let class_changed = records
                    .iter()
                    .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                    .any(|record| record.attribute_name().as_deref() == Some("class"));
                if class_changed {
                    on_class_change(&sidebar, &config, &pending);
                }
            }) as Box<dyn FnMut(Array, MutationObserver)>)
        };

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|err| InteractionError::Dom(dom::js_error(&err)))?;
        let options = MutationObserverInit::new();
        options.set_attributes(true);
        observer
            .observe_with_options(sidebar, &options)
            .map_err(|err| InteractionError::Dom(dom::js_error(&err)))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SidebarWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn on_class_change(sidebar: &Element, config: &MobileConfig, pending: &RefCell<Option<Timeout>>) {
    let open = dom::class_names(sidebar)
        .iter()
        .any(|class| class == SIDEBAR_OPEN_CLASS);
    let width = match dom::window().and_then(|window| dom::viewport_width(&window)) {
        Ok(width) => width,
        Err(err) => {
            report("sidebar watcher", &err);
            return;
        }
    };
    if !should_release_after_sidebar_change(open, width, config) {
        return;
    }

    let timeout = Timeout::new(config.sidebar_settle_ms, || {
        match dom::document().and_then(|document| release_controls(&document)) {
            Ok(released) => log::debug!("released {released} controls after sidebar closed"),
            Err(err) => report("sidebar watcher", &err),
        }
    });
    pending.borrow_mut().replace(timeout);
}

/// Install the sidebar watcher when both the sidebar and its overlay exist.
#[hook]
pub fn use_sidebar_release(sidebar: NodeRef, overlay: NodeRef, config: MobileConfig) {
    use_effect_with(config, move |config| {
        let watcher = match (sidebar.cast::<Element>(), overlay.cast::<Element>()) {
            (Some(sidebar), Some(_)) => SidebarWatcher::watch(&sidebar, config)
                .map_err(|err| report("sidebar watcher", &err))
                .ok(),
            _ => {
                log::debug!("sidebar or overlay missing; sidebar watcher not installed");
                None
            }
        };
        move || drop(watcher)
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture::{html, mount};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn config(breakpoint_px: f64) -> MobileConfig {
        MobileConfig {
            breakpoint_px,
            sidebar_settle_ms: 10,
            ..MobileConfig::default()
        }
    }

    #[wasm_bindgen_test]
    async fn closing_sidebar_releases_controls() {
        let root = mount(
            r#"<nav class="sidebar open"></nav>
               <button class="watch-button" style="pointer-events: none">Go</button>"#,
        );
        let sidebar = root.query_selector(".sidebar").unwrap().unwrap();
        let button = html(&root, ".watch-button");
        let _watcher = SidebarWatcher::watch(&sidebar, &config(1_000_000.0)).unwrap();

        sidebar.set_attribute("class", "sidebar").unwrap();
        TimeoutFuture::new(60).await;

        let style = button.style();
        assert_eq!(style.get_property_value("pointer-events").unwrap(), "auto");
        assert_eq!(style.get_property_priority("pointer-events"), "important");
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn wide_viewport_keeps_controls_as_they_are() {
        let root = mount(
            r#"<nav class="sidebar open"></nav>
               <button class="watch-button" style="pointer-events: none">Go</button>"#,
        );
        let sidebar = root.query_selector(".sidebar").unwrap().unwrap();
        let button = html(&root, ".watch-button");
        let _watcher = SidebarWatcher::watch(&sidebar, &config(1.0)).unwrap();

        sidebar.set_attribute("class", "sidebar").unwrap();
        TimeoutFuture::new(60).await;

        assert_eq!(
            button.style().get_property_value("pointer-events").unwrap(),
            "none"
        );
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn dropped_watcher_cancels_pending_release() {
        let root = mount(
            r#"<nav class="sidebar open"></nav>
               <button class="watch-button" style="pointer-events: none">Go</button>"#,
        );
        let sidebar = root.query_selector(".sidebar").unwrap().unwrap();
        let button = html(&root, ".watch-button");
        let watcher = SidebarWatcher::watch(&sidebar, &config(1_000_000.0)).unwrap();

        sidebar.set_attribute("class", "sidebar").unwrap();
        // Let the mutation callback schedule the release, then cancel it.
        TimeoutFuture::new(0).await;
        drop(watcher);
        TimeoutFuture::new(60).await;

        assert_eq!(
            button.style().get_property_value("pointer-events").unwrap(),
            "none"
        );
        root.remove();
    }
}
