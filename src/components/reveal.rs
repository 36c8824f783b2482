//! Scroll-triggered fade-ins.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{PortfolioError, Result};

/// Elements opted into the effect.
pub const REVEAL_SELECTOR: &str = ".fade-in";
/// Class added once an element has been seen.
pub const VISIBLE_CLASS: &str = "fade-in-visible";
/// Fraction of an element that must be visible before it is revealed.
pub const VISIBLE_THRESHOLD: f64 = 0.1;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type ObserverSlot = Rc<RefCell<Option<RevealObserver>>>;

struct RevealObserver {
	observer: IntersectionObserver,
	// Kept alive for as long as the observer may call it.
	_callback: EntriesCallback,
}

impl RevealObserver {
	fn observe_all() -> Result<Self> {
		let callback: EntriesCallback =
			Closure::new(|entries: js_sys::Array, _observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if entry.is_intersecting() {
						let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
					}
				}
			});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

		let document = web_sys::window()
			.ok_or(PortfolioError::NoWindow)?
			.document()
			.ok_or(PortfolioError::NoDocument)?;
		let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
		for i in 0..nodes.length() {
			if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
				observer.observe(&element);
			}
		}

		Ok(Self {
			observer,
			_callback: callback,
		})
	}

	fn disconnect(self) {
		self.observer.disconnect();
	}
}

/// Reveals every `.fade-in` element under the calling component as it scrolls into view.
///
/// Call from a component body; the observer is installed by an effect, once the
/// view is in the DOM, and disconnected when the calling owner is cleaned up.
pub fn use_scroll_reveal() {
	let observer: ObserverSlot = Rc::new(RefCell::new(None));
	let observer_init = observer.clone();

	Effect::new(move |_| {
		if observer_init.borrow().is_some() {
			return;
		}
		match RevealObserver::observe_all() {
			Ok(o) => *observer_init.borrow_mut() = Some(o),
			Err(e) => warn!("reveal: observer not installed: {}", e),
		}
	});

	let observer = SendWrapper::new(observer);
	on_cleanup(move || {
		let slot = observer.take();
		let observer = slot.borrow_mut().take();
		if let Some(observer) = observer {
			observer.disconnect();
		}
	});
}
