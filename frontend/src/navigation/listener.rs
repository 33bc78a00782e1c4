use log::warn;

/// Something that delivers scroll notifications to registered handlers.
pub trait ScrollSource {
    /// Keeps a registered handler alive until it is handed back to `unsubscribe`.
    type Registration;

    fn subscribe(&self, handler: Box<dyn FnMut()>) -> Option<Self::Registration>;

    fn unsubscribe(&self, registration: Self::Registration);
}

/// A scroll handler registered for as long as this value lives.
///
/// Dropping the subscription deregisters the handler, so a view that owns one
/// stops reacting to scroll events once it is torn down.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    registration: Option<S::Registration>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn new(source: S, handler: impl FnMut() + 'static) -> Self {
        let registration = source.subscribe(Box::new(handler));
        if registration.is_none() {
            warn!("Could not register scroll listener, navigation highlighting disabled");
        }
        Self {
            source,
            registration,
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(registration) = self.registration.take() {
            self.source.unsubscribe(registration);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Handlers = Rc<RefCell<Vec<(usize, Box<dyn FnMut()>)>>>;

    /// In-memory event target; `fire` plays the part of the browser.
    #[derive(Clone, Default)]
    pub(crate) struct FakeScrollSource {
        handlers: Handlers,
        next_id: Rc<Cell<usize>>,
        refuse: bool,
    }

    impl FakeScrollSource {
        pub(crate) fn refusing() -> Self {
            Self {
                refuse: true,
                ..Self::default()
            }
        }

        pub(crate) fn fire(&self) {
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler();
            }
        }

        pub(crate) fn listener_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    impl ScrollSource for FakeScrollSource {
        type Registration = usize;

        fn subscribe(&self, handler: Box<dyn FnMut()>) -> Option<usize> {
            if self.refuse {
                return None;
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, handler));
            Some(id)
        }

        fn unsubscribe(&self, registration: usize) {
            self.handlers.borrow_mut().retain(|(id, _)| *id != registration);
        }
    }

    #[test]
    fn handler_runs_while_subscribed() {
        let source = FakeScrollSource::default();
        let calls = Rc::new(Cell::new(0));

        let _subscription = {
            let calls = calls.clone();
            ScrollSubscription::new(source.clone(), move || calls.set(calls.get() + 1))
        };
        assert_eq!(source.listener_count(), 1);

        source.fire();
        source.fire();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn drop_deregisters_handler() {
        let source = FakeScrollSource::default();
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            ScrollSubscription::new(source.clone(), move || calls.set(calls.get() + 1))
        };
        source.fire();
        drop(subscription);

        assert_eq!(source.listener_count(), 0);
        source.fire();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn only_the_dropped_subscription_is_removed() {
        let source = FakeScrollSource::default();
        let first = ScrollSubscription::new(source.clone(), || {});
        let second = ScrollSubscription::new(source.clone(), || {});
        assert_eq!(source.listener_count(), 2);

        drop(first);
        assert_eq!(source.listener_count(), 1);
        drop(second);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn refused_registration_is_inactive() {
        let source = FakeScrollSource::refusing();
        let subscription = ScrollSubscription::new(source.clone(), || {});
        assert_eq!(source.listener_count(), 0);

        // nothing to hand back on drop
        drop(subscription);
        assert_eq!(source.listener_count(), 0);
    }
}
