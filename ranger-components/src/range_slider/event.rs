//! Notifications and form binding.

use std::sync::atomic::{AtomicU64, Ordering};

use ranger_ui::{Callback, CallbackWith};

use super::value_model::RangeValue;

static NEXT_SLIDER_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a range slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RangeSliderId(u64);

impl RangeSliderId {
    pub(super) fn next() -> Self {
        Self(NEXT_SLIDER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Payload of `input` and `change` notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSliderChange {
    /// The slider that changed.
    pub source: RangeSliderId,
    /// The new min value.
    pub min_value: f64,
    /// The new max value.
    pub max_value: f64,
}

impl RangeSliderChange {
    /// The interval carried by this notification.
    pub fn range(&self) -> RangeValue {
        RangeValue::new(self.min_value, self.max_value)
    }
}

/// Handle returned by a subscription, used to unsubscribe.
///
/// Ids are unique process-wide, so an id taken from one observer list never
/// matches an entry of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An ordered list of observers.
#[derive(Debug, Default, Clone)]
pub(super) struct Observers {
    entries: Vec<(SubscriptionId, CallbackWith<RangeSliderChange>)>,
}

impl Observers {
    pub(super) fn subscribe(&mut self, observer: CallbackWith<RangeSliderChange>) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.entries.push((id, observer));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(super) fn notify(&self, change: RangeSliderChange) {
        for (_, observer) in &self.entries {
            observer.call(change);
        }
    }
}

/// Form-integration callbacks. Each slot holds at most one callback;
/// registering again replaces it.
#[derive(Debug, Default, Clone)]
pub(super) struct FormBinding {
    pub(super) on_change: Option<CallbackWith<RangeValue>>,
    pub(super) on_touched: Option<Callback>,
}

impl FormBinding {
    pub(super) fn changed(&self, value: RangeValue) {
        if let Some(on_change) = &self.on_change {
            on_change.call(value);
        }
    }

    pub(super) fn touched(&self) {
        if let Some(on_touched) = &self.on_touched {
            on_touched.call();
        }
    }
}
