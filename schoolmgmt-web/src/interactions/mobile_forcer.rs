//! Keeps controls tappable on narrow viewports.
//!
//! The overrides are re-applied on a fixed interval, on resize and shortly
//! after every click or touch. All timers and listeners live in a
//! [`MobileForcer`], so unmounting the owning component stops every trigger.

use std::{cell::RefCell, rc::Rc};

use gloo_timers::callback::{Interval, Timeout};
use shared::{
    config::MobileConfig,
    models::{
        InteractionError, StyleDeclaration,
        mobile::{
            CONTAINER_OVERRIDES, CONTAINER_SELECTOR, INTERACTIVE_OVERRIDES, INTERACTIVE_SELECTOR,
            MAIN_CONTENT_SELECTOR, RELEASE_OVERRIDES, SIDEBAR_RELEASE_SELECTOR, is_forceable,
            is_narrow,
        },
    },
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};
use yew::{hook, use_effect_with};

use super::report;
use crate::{dom, events::EventListener};

/// Apply the overrides when the viewport is narrow.
///
/// Returns the number of interactive elements forced; zero on wide viewports.
pub fn force_mobile_interaction(config: &MobileConfig) -> Result<usize, InteractionError> {
    let window = dom::window()?;
    if !is_narrow(dom::viewport_width(&window)?, config) {
        return Ok(0);
    }
    let document = dom::document()?;
    apply_interactive_overrides(&document)
}

/// Force every interactive element and content container in `document`.
pub fn apply_interactive_overrides(document: &Document) -> Result<usize, InteractionError> {
    let forced = force_all(document, INTERACTIVE_SELECTOR, &INTERACTIVE_OVERRIDES)?;

    let mut containers = dom::query_all(document, MAIN_CONTENT_SELECTOR)?;
    containers.extend(dom::query_all(document, CONTAINER_SELECTOR)?);
    for container in &containers {
        if let Some(container) = container.dyn_ref::<HtmlElement>() {
            dom::apply_styles(container, &CONTAINER_OVERRIDES)?;
        }
    }

    Ok(forced)
}

/// Re-enable pointer and touch input after the sidebar has closed.
pub fn release_controls(document: &Document) -> Result<usize, InteractionError> {
    force_all(document, SIDEBAR_RELEASE_SELECTOR, &RELEASE_OVERRIDES)
}

fn force_all(
    document: &Document,
    selector: &str,
    declarations: &[StyleDeclaration],
) -> Result<usize, InteractionError> {
    let mut forced = 0;
    for element in dom::query_all(document, selector)? {
        if force(&element, declarations)? {
            forced += 1;
        }
    }
    Ok(forced)
}

fn force(element: &Element, declarations: &[StyleDeclaration]) -> Result<bool, InteractionError> {
    let classes = dom::class_names(element);
    if !is_forceable(classes.iter().map(String::as_str)) {
        return Ok(false);
    }
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return Ok(false);
    };
    dom::apply_styles(element, declarations)?;
    Ok(true)
}

fn run(config: &MobileConfig) {
    match force_mobile_interaction(config) {
        Ok(forced) => log::trace!("mobile overrides applied to {forced} controls"),
        Err(err) => report("mobile forcer", &err),
    }
}

/// Re-applications scheduled after user input. Each one removes itself once
/// it has run; dropping the set cancels whatever is still waiting.
#[derive(Default)]
struct PendingRuns {
    next_id: u64,
    waiting: Vec<(u64, Timeout)>,
}

impl PendingRuns {
    fn schedule(runs: &Rc<RefCell<Self>>, config: &MobileConfig) {
        let finished = Rc::downgrade(runs);
        let mut pending = runs.borrow_mut();
        let id = pending.next_id;
        pending.next_id += 1;

        let run_config = config.clone();
        let timeout = Timeout::new(config.deferred_delay_ms, move || {
            run(&run_config);
            if let Some(runs) = finished.upgrade() {
                runs.borrow_mut().waiting.retain(|(waiting, _)| *waiting != id);
            }
        });
        pending.waiting.push((id, timeout));
    }
}

/// Every trigger of the forcer. Dropping it cancels them all.
pub struct MobileForcer {
    _interval: Interval,
    listeners: Vec<EventListener>,
    pending: Rc<RefCell<PendingRuns>>,
}

impl std::fmt::Debug for MobileForcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobileForcer")
            .field("listeners", &self.listeners)
            .field("waiting", &self.pending.borrow().waiting.len())
            .finish_non_exhaustive()
    }
}

impl MobileForcer {
    /// Apply once, then install the interval, resize and deferred triggers.
    pub fn start(config: &MobileConfig) -> Result<Self, InteractionError> {
        run(config);

        let interval = {
            let period = config.reapply_interval_ms;
            let config = config.clone();
            Interval::new(period, move || run(&config))
        };

        let window = dom::window()?;
        let document = dom::document()?;
        let resize = {
            let config = config.clone();
            EventListener::new(&window, "resize", move |_| run(&config))?
        };

        let pending = Rc::new(RefCell::new(PendingRuns::default()));
        let mut listeners = vec![resize];
        for event_type in ["click", "touchstart"] {
            listeners.push(deferred(&document, event_type, &pending, config)?);
        }

        Ok(Self {
            _interval: interval,
            listeners,
            pending,
        })
    }
}

/// Every `event_type` on `document` schedules its own delayed run.
fn deferred(
    document: &Document,
    event_type: &'static str,
    pending: &Rc<RefCell<PendingRuns>>,
    config: &MobileConfig,
) -> Result<EventListener, InteractionError> {
    let pending = pending.clone();
    let config = config.clone();
    EventListener::new(document, event_type, move |_| {
        PendingRuns::schedule(&pending, &config);
    })
}

/// Run the forcer for as long as the calling component is mounted.
#[hook]
pub fn use_mobile_interaction(config: MobileConfig) {
    use_effect_with(config, |config| {
        let forcer = MobileForcer::start(config)
            .map_err(|err| report("mobile forcer", &err))
            .ok();
        move || drop(forcer)
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::dom::fixture::{html, mount};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <main class="forcer-main">
            <button class="forcer-button">Save</button>
            <a class="forcer-overlay mobile-overlay" href="/x">overlay</a>
        </main>"#;

    fn always_narrow() -> MobileConfig {
        MobileConfig {
            breakpoint_px: 1_000_000.0,
            ..MobileConfig::default()
        }
    }

    fn never_narrow() -> MobileConfig {
        MobileConfig {
            breakpoint_px: 1.0,
            ..MobileConfig::default()
        }
    }

    fn snapshot(element: &HtmlElement) -> String {
        element.style().css_text()
    }

    #[wasm_bindgen_test]
    fn narrow_viewport_forces_controls() {
        let root = mount(FIXTURE);
        let button = html(&root, ".forcer-button");

        assert!(force_mobile_interaction(&always_narrow()).unwrap() >= 1);

        let style = button.style();
        assert_eq!(style.get_property_value("min-height").unwrap(), "48px");
        assert_eq!(style.get_property_value("z-index").unwrap(), "999");
        assert_eq!(style.get_property_priority("pointer-events"), "important");

        let main = html(&root, ".forcer-main");
        assert_eq!(main.style().get_property_value("touch-action").unwrap(), "auto");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn overlay_is_never_touched() {
        let root = mount(FIXTURE);
        let overlay = html(&root, ".forcer-overlay");

        force_mobile_interaction(&always_narrow()).unwrap();
        release_controls(&dom::document().unwrap()).unwrap();

        assert_eq!(snapshot(&overlay), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn repeated_application_converges() {
        let root = mount(FIXTURE);
        let button = html(&root, ".forcer-button");

        let first = force_mobile_interaction(&always_narrow()).unwrap();
        let after_first = snapshot(&button);
        let second = force_mobile_interaction(&always_narrow()).unwrap();

        assert_eq!(first, second);
        assert_eq!(snapshot(&button), after_first);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn wide_viewport_is_left_alone() {
        let root = mount(FIXTURE);
        let button = html(&root, ".forcer-button");

        assert_eq!(force_mobile_interaction(&never_narrow()).unwrap(), 0);
        assert_eq!(snapshot(&button), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn release_only_touches_pointer_properties() {
        let root = mount(FIXTURE);
        let button = html(&root, ".forcer-button");

        release_controls(&dom::document().unwrap()).unwrap();

        let style = button.style();
        assert_eq!(style.get_property_value("pointer-events").unwrap(), "auto");
        assert_eq!(
            style.get_property_value("touch-action").unwrap(),
            "manipulation"
        );
        assert_eq!(style.get_property_value("min-height").unwrap(), "");
        root.remove();
    }

    #[wasm_bindgen_test]
    fn starting_the_forcer_applies_immediately() {
        let root = mount(FIXTURE);
        let button = html(&root, ".forcer-button");

        let forcer = MobileForcer::start(&always_narrow()).unwrap();
        assert_eq!(
            button.style().get_property_value("cursor").unwrap(),
            "pointer"
        );

        drop(forcer);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn every_click_gets_its_own_deferred_run() {
        let root = mount(FIXTURE);
        let button = html(&root, ".forcer-button");
        let config = MobileConfig {
            reapply_interval_ms: 60_000,
            deferred_delay_ms: 100,
            ..always_narrow()
        };
        let forcer = MobileForcer::start(&config).unwrap();

        button.style().set_css_text("");
        button.click();
        TimeoutFuture::new(40).await;
        button.click();
        assert_eq!(forcer.pending.borrow().waiting.len(), 2);

        // Past the first click's delay, before the second's.
        TimeoutFuture::new(80).await;
        assert_eq!(
            button.style().get_property_value("cursor").unwrap(),
            "pointer"
        );
        assert_eq!(forcer.pending.borrow().waiting.len(), 1);

        TimeoutFuture::new(60).await;
        assert!(forcer.pending.borrow().waiting.is_empty());

        drop(forcer);
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn dropping_the_forcer_cancels_deferred_runs() {
        let root = mount(FIXTURE);
        let button = html(&root, ".forcer-button");
        let config = MobileConfig {
            reapply_interval_ms: 60_000,
            deferred_delay_ms: 20,
            ..always_narrow()
        };
        let forcer = MobileForcer::start(&config).unwrap();

        button.style().set_css_text("");
        button.click();
        drop(forcer);
        TimeoutFuture::new(60).await;

        assert_eq!(snapshot(&button), "");
        root.remove();
    }
}
