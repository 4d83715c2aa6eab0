//! A headless dual-thumb slider for selecting an interval within a range.
//!
//! ## Usage
//!
//! Use to let users pick a `[min_value, max_value]` interval inside
//! `[min, max]` by dragging either thumb or clicking the track. The host
//! forwards pointer events and focus signals, attaches the track element so
//! the slider can query its layout box, and draws the slider from the
//! transform helpers.
//!
//! ## Notifications
//!
//! - `input` fires on every tick that changes the interval while dragging.
//! - `change` fires once when a gesture completes with a net change.
//!
//! Programmatic writes never notify.
//!
//! ## Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use ranger_components::range_slider::{
//!     RangeSlider, RangeSliderArgs, RangeSliderChange, RangeValue, Thumb,
//! };
//! use ranger_ui::{CursorEvent, LayoutBox, Px, PxPosition};
//!
//! let committed = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&committed);
//!
//! let mut slider = RangeSlider::new(
//!     RangeSliderArgs::default()
//!         .min_value(20.0)
//!         .max_value(80.0),
//! );
//! slider.attach_track(LayoutBox::new(Px(0), Px(200)));
//! slider.subscribe_change(move |change: RangeSliderChange| {
//!     if let Ok(mut log) = sink.lock() {
//!         log.push(change.range());
//!     }
//! });
//!
//! // Drag the min thumb from 40px to 100px (value 20 to 50).
//! slider.on_thumb_pointer_down(Thumb::Min);
//! slider.handle_cursor_event(&CursorEvent::pressed(PxPosition::new(Px(40), Px(0))));
//! slider.handle_cursor_event(&CursorEvent::moved(PxPosition::new(Px(100), Px(0))));
//! slider.handle_cursor_event(&CursorEvent::released(PxPosition::new(Px(100), Px(0))));
//!
//! assert_eq!(slider.value(), RangeValue::new(50.0, 80.0));
//! assert_eq!(*committed.lock().unwrap(), vec![RangeValue::new(50.0, 80.0)]);
//! ```

use std::sync::Arc;

use derive_setters::Setters;
use ranger_ui::{
    Callback, CallbackWith, CursorEvent, CursorEventContent, FocusOrigin, Px, PxPosition,
    TrackElement,
};
use tracing::{debug, trace};

pub use coerce::NumericInput;
pub use error::RangeSliderError;
pub use event::{RangeSliderChange, RangeSliderId, SubscriptionId};
pub use interaction::InteractionState;
pub use layout::TrackGeometry;
pub use render::{ThumbTransform, TrackTransform};
pub use value_model::{
    Bounds, DisplayValue, MAX_PRECISION, PercentValue, RangeValue, RoundingPrecision, Thumb,
    ValueModel,
};

use event::{FormBinding, Observers};
use interaction::{nearest_thumb, resolve_position};

mod coerce;
mod error;
mod event;
mod interaction;
mod layout;
mod render;
mod value_model;

/// Arguments for [`RangeSlider`].
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct RangeSliderArgs {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Snap granularity. Non-integral steps also set the number of decimal
    /// places values are rounded to.
    pub step: f64,
    /// Initial min value. Follows `min` when unset.
    #[setters(strip_option)]
    pub min_value: Option<f64>,
    /// Initial max value. Follows `max` when unset.
    #[setters(strip_option)]
    pub max_value: Option<f64>,
    /// Disable interaction.
    pub disabled: bool,
    /// Whether thumb labels should be shown.
    pub thumb_label: bool,
    /// Formatter applied to both display values.
    #[setters(skip)]
    pub display_with: Option<CallbackWith<f64, DisplayValue>>,
}

impl Default for RangeSliderArgs {
    fn default() -> Self {
        let bounds = Bounds::default();
        Self {
            min: bounds.min,
            max: bounds.max,
            step: bounds.step,
            min_value: None,
            max_value: None,
            disabled: false,
            thumb_label: false,
            display_with: None,
        }
    }
}

impl RangeSliderArgs {
    /// Sets the display formatter.
    pub fn display_with<F, D>(mut self, formatter: F) -> Self
    where
        F: Fn(f64) -> D + Send + Sync + 'static,
        D: Into<DisplayValue>,
    {
        self.display_with = Some(CallbackWith::new(move |value| formatter(value).into()));
        self
    }

    /// Checks the bounds and initial values.
    pub fn validate(&self) -> Result<(), RangeSliderError> {
        Bounds {
            min: self.min,
            max: self.max,
            step: self.step,
        }
        .validate()?;
        if self.min_value.is_some_and(|v| !v.is_finite()) {
            return Err(RangeSliderError::NonFinite("min_value"));
        }
        if self.max_value.is_some_and(|v| !v.is_finite()) {
            return Err(RangeSliderError::NonFinite("max_value"));
        }
        Ok(())
    }
}

/// A dual-thumb range slider.
///
/// Every entry point runs to completion synchronously. Interaction entry
/// points are no-ops while disabled.
pub struct RangeSlider {
    id: RangeSliderId,
    model: ValueModel,
    disabled: bool,
    thumb_label: bool,
    display_with: Option<CallbackWith<f64, DisplayValue>>,
    track: Option<Arc<dyn TrackElement>>,
    geometry: Option<TrackGeometry>,
    state: InteractionState,
    is_active: bool,
    input_observers: Observers,
    change_observers: Observers,
    binding: FormBinding,
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(RangeSliderArgs::default())
    }
}

impl RangeSlider {
    /// Creates a slider. Invalid numbers in `args` fall back to defaults.
    pub fn new(args: RangeSliderArgs) -> Self {
        let mut model = ValueModel::new();
        model.set_step(args.step);
        model.set_min(args.min);
        model.set_max(args.max);
        if let Some(value) = args.min_value {
            model.set_min_value(value);
        }
        if let Some(value) = args.max_value {
            model.set_max_value(value);
        }
        model.resolve();

        let id = RangeSliderId::next();
        debug!(id = id.raw(), bounds = ?model.bounds(), range = ?model.range(), "range slider created");

        Self {
            id,
            model,
            disabled: args.disabled,
            thumb_label: args.thumb_label,
            display_with: args.display_with,
            track: None,
            geometry: None,
            state: InteractionState::Idle,
            is_active: false,
            input_observers: Observers::default(),
            change_observers: Observers::default(),
            binding: FormBinding::default(),
        }
    }

    /// Creates a slider after validating `args`.
    pub fn try_new(args: RangeSliderArgs) -> Result<Self, RangeSliderError> {
        args.validate()?;
        Ok(Self::new(args))
    }

    /// This slider's identity, carried as the source of notifications.
    pub fn id(&self) -> RangeSliderId {
        self.id
    }

    /// The value model.
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    /// Lowest selectable value.
    pub fn min(&self) -> f64 {
        self.model.bounds().min
    }

    /// Sets the lowest selectable value.
    pub fn set_min(&mut self, value: impl NumericInput) {
        self.model.set_min(value);
    }

    /// Highest selectable value.
    pub fn max(&self) -> f64 {
        self.model.bounds().max
    }

    /// Sets the highest selectable value.
    pub fn set_max(&mut self, value: impl NumericInput) {
        self.model.set_max(value);
    }

    /// Snap granularity.
    pub fn step(&self) -> f64 {
        self.model.bounds().step
    }

    /// Sets the snap granularity.
    pub fn set_step(&mut self, value: impl NumericInput) {
        self.model.set_step(value);
    }

    /// Decimal places values are rounded to.
    pub fn rounding_precision(&self) -> RoundingPrecision {
        self.model.precision()
    }

    /// The min value.
    pub fn min_value(&self) -> f64 {
        self.model.min_value()
    }

    /// Sets the min value without notifying. Returns whether it changed.
    pub fn set_min_value(&mut self, value: impl NumericInput) -> bool {
        self.model.set_min_value(value)
    }

    /// The max value.
    pub fn max_value(&self) -> f64 {
        self.model.max_value()
    }

    /// Sets the max value without notifying. Returns whether it changed.
    pub fn set_max_value(&mut self, value: impl NumericInput) -> bool {
        self.model.set_max_value(value)
    }

    /// The selected interval.
    pub fn value(&self) -> RangeValue {
        self.model.range()
    }

    /// Thumb positions along the track.
    pub fn percent_value(&self) -> PercentValue {
        self.model.percent()
    }

    /// Whether both thumbs sit at the ends of the track.
    pub fn is_start_value(&self) -> bool {
        self.model.is_start_value()
    }

    /// Label for the min thumb.
    pub fn min_display_value(&self) -> DisplayValue {
        self.model.display_value(Thumb::Min, self.display_with.as_ref())
    }

    /// Label for the max thumb.
    pub fn max_display_value(&self) -> DisplayValue {
        self.model.display_value(Thumb::Max, self.display_with.as_ref())
    }

    /// Replaces the display formatter.
    pub fn set_display_with(&mut self, formatter: Option<CallbackWith<f64, DisplayValue>>) {
        self.display_with = formatter;
    }

    /// Whether interaction is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables interaction. Disabling aborts any gesture in
    /// progress without notifying.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled && self.state != InteractionState::Idle {
            debug!(id = self.id.raw(), "gesture aborted by disable");
            self.state = InteractionState::Idle;
        }
    }

    /// Whether thumb labels should be shown.
    pub fn thumb_label(&self) -> bool {
        self.thumb_label
    }

    /// Shows or hides thumb labels.
    pub fn set_thumb_label(&mut self, thumb_label: bool) {
        self.thumb_label = thumb_label;
    }

    /// Where the slider is in a pointer gesture.
    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// Whether a drag is in progress.
    pub fn is_sliding(&self) -> bool {
        self.state.is_sliding()
    }

    /// Whether the slider holds pointer-originated focus.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether `thumb` is the target of the current gesture.
    pub fn is_thumb_active(&self, thumb: Thumb) -> bool {
        self.state.pinned_thumb() == Some(thumb)
    }

    /// The last captured track geometry.
    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.geometry
    }

    /// Attaches the track element whose layout box drives position mapping.
    /// Geometry is captured on the next focus, hover or drag start.
    pub fn attach_track(&mut self, track: impl TrackElement + 'static) {
        self.track = Some(Arc::new(track));
    }

    /// Detaches the track element and forgets captured geometry.
    pub fn detach_track(&mut self) {
        self.track = None;
        self.geometry = None;
    }

    /// Subscribes to `input` notifications.
    pub fn subscribe_input(
        &mut self,
        observer: impl Into<CallbackWith<RangeSliderChange>>,
    ) -> SubscriptionId {
        self.input_observers.subscribe(observer.into())
    }

    /// Subscribes to `change` notifications.
    pub fn subscribe_change(
        &mut self,
        observer: impl Into<CallbackWith<RangeSliderChange>>,
    ) -> SubscriptionId {
        self.change_observers.subscribe(observer.into())
    }

    /// Removes a subscription made through either subscribe method.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.input_observers.unsubscribe(id) || self.change_observers.unsubscribe(id)
    }

    /// Writes both values at once, as a form model update. Never notifies.
    pub fn write_value(&mut self, value: RangeValue) {
        self.model.set_min_value(value.min);
        self.model.set_max_value(value.max);
    }

    /// Registers the form callback invoked with the interval on every
    /// committed change. Replaces any previous registration.
    pub fn register_on_change(&mut self, callback: impl Into<CallbackWith<RangeValue>>) {
        self.binding.on_change = Some(callback.into());
    }

    /// Registers the form callback invoked on blur. Replaces any previous
    /// registration.
    pub fn register_on_touched(&mut self, callback: impl Into<Callback>) {
        self.binding.on_touched = Some(callback.into());
    }

    /// Form-driven disable toggle.
    pub fn set_disabled_state(&mut self, disabled: bool) {
        self.set_disabled(disabled);
    }

    /// The slider received focus.
    pub fn on_focus(&mut self, origin: FocusOrigin) {
        self.is_active = !origin.is_keyboard();
        self.capture_geometry();
    }

    /// The slider lost focus.
    pub fn on_blur(&mut self) {
        self.is_active = false;
        self.binding.touched();
    }

    /// The pointer entered the slider.
    pub fn on_pointer_enter(&mut self) {
        if self.disabled {
            return;
        }
        self.capture_geometry();
    }

    /// A pointer went down on `thumb`'s marker.
    pub fn on_thumb_pointer_down(&mut self, thumb: Thumb) {
        if self.disabled {
            return;
        }
        match &mut self.state {
            InteractionState::Sliding { thumb: pinned, .. } => *pinned = Some(thumb),
            state => *state = InteractionState::Selecting(thumb),
        }
    }

    /// A click on the track without a drag. Resolves once against the
    /// targeted thumb, or the nearest one, then returns to idle.
    pub fn on_track_click(&mut self, position: PxPosition) {
        if self.disabled {
            return;
        }
        let before = self.model.range();
        let thumb = self
            .state
            .pinned_thumb()
            .or_else(|| nearest_thumb(position.x, self.geometry, &self.model));

        if let Some(thumb) = thumb {
            self.update_from_position(thumb, position);
        }
        self.state = InteractionState::Idle;

        if self.model.range() != before {
            self.emit_input();
            self.emit_change();
        }
    }

    /// A drag started, optionally at a known pointer position.
    pub fn on_slide_start(&mut self, position: Option<PxPosition>) {
        if self.disabled || self.is_sliding() {
            return;
        }
        self.capture_geometry();

        self.state = InteractionState::Sliding {
            thumb: self.state.pinned_thumb(),
            origin: self.model.range(),
        };
        trace!(id = self.id.raw(), state = ?self.state, "slide start");

        if let Some(position) = position {
            self.slide_to(position);
        }
    }

    /// The pointer moved during a drag.
    pub fn on_slide(&mut self, position: PxPosition) {
        if self.disabled {
            return;
        }
        if !self.is_sliding() {
            self.on_slide_start(None);
        }
        self.slide_to(position);
    }

    /// The pointer was released, anywhere.
    pub fn on_slide_end(&mut self) {
        let InteractionState::Sliding { origin, .. } = self.state else {
            return;
        };
        self.state = InteractionState::Idle;
        trace!(id = self.id.raw(), "slide end");

        if self.model.range() != origin {
            self.emit_change();
        }
    }

    /// Dispatches a host cursor event: press starts a drag, move continues
    /// it, release ends it.
    pub fn handle_cursor_event(&mut self, event: &CursorEvent) {
        match event.content {
            CursorEventContent::Pressed => self.on_slide_start(Some(event.position)),
            CursorEventContent::Moved => {
                if self.is_sliding() {
                    self.on_slide(event.position);
                }
            }
            CursorEventContent::Released => self.on_slide_end(),
        }
    }

    /// Transform for the filled segment between the thumbs.
    pub fn track_fill_transform(&self) -> TrackTransform {
        render::track_fill(self.percent_value())
    }

    /// Transform for the unfilled segment on the outer side of `thumb`.
    pub fn track_background_transform(&self, thumb: Thumb) -> TrackTransform {
        render::track_background(thumb, self.percent_value())
    }

    /// Transform for `thumb`'s container.
    pub fn thumb_container_transform(&self, thumb: Thumb) -> ThumbTransform {
        render::thumb_container(thumb, self.percent_value())
    }

    /// Pixel coordinate of `thumb`'s centre along the captured track.
    pub fn thumb_center(&self, thumb: Thumb) -> Option<Px> {
        self.geometry
            .map(|geometry| geometry.position_at(self.percent_value().get(thumb)))
    }

    fn capture_geometry(&mut self) {
        self.geometry = self
            .track
            .as_deref()
            .and_then(|track| TrackGeometry::capture(track));
        trace!(id = self.id.raw(), geometry = ?self.geometry, "geometry captured");
    }

    fn slide_to(&mut self, position: PxPosition) {
        let thumb = match self.state {
            InteractionState::Sliding {
                thumb: Some(thumb), ..
            } => thumb,
            InteractionState::Sliding {
                thumb: None,
                origin,
            } => {
                let Some(thumb) = nearest_thumb(position.x, self.geometry, &self.model) else {
                    trace!(id = self.id.raw(), "no geometry, slide ignored");
                    return;
                };
                self.state = InteractionState::Sliding {
                    thumb: Some(thumb),
                    origin,
                };
                thumb
            }
            _ => return,
        };

        if self.update_from_position(thumb, position) {
            self.emit_input();
        }
    }

    fn update_from_position(&mut self, thumb: Thumb, position: PxPosition) -> bool {
        match resolve_position(thumb, position.x, self.geometry, &self.model) {
            Some(value) => self.model.set_value(thumb, value),
            None => {
                trace!(id = self.id.raw(), ?thumb, "position not resolvable, ignored");
                false
            }
        }
    }

    fn change_event(&self) -> RangeSliderChange {
        RangeSliderChange {
            source: self.id,
            min_value: self.model.min_value(),
            max_value: self.model.max_value(),
        }
    }

    fn emit_input(&self) {
        let change = self.change_event();
        trace!(id = self.id.raw(), min = change.min_value, max = change.max_value, "input");
        self.input_observers.notify(change);
    }

    fn emit_change(&self) {
        let change = self.change_event();
        debug!(id = self.id.raw(), min = change.min_value, max = change.max_value, "change");
        self.binding.changed(change.range());
        self.change_observers.notify(change);
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use ranger_ui::{LayoutBox, SharedLayoutBox};

    use super::*;

    #[derive(Default, Clone)]
    struct Recorder {
        inputs: Arc<Mutex<Vec<RangeSliderChange>>>,
        changes: Arc<Mutex<Vec<RangeSliderChange>>>,
    }

    impl Recorder {
        fn attach(slider: &mut RangeSlider) -> Self {
            let recorder = Self::default();
            let inputs = Arc::clone(&recorder.inputs);
            slider.subscribe_input(move |change| inputs.lock().push(change));
            let changes = Arc::clone(&recorder.changes);
            slider.subscribe_change(move |change| changes.lock().push(change));
            recorder
        }

        fn inputs(&self) -> Vec<RangeValue> {
            self.inputs.lock().iter().map(RangeSliderChange::range).collect()
        }

        fn changes(&self) -> Vec<RangeValue> {
            self.changes.lock().iter().map(RangeSliderChange::range).collect()
        }
    }

    fn at(x: i32) -> PxPosition {
        PxPosition::new(Px(x), Px(0))
    }

    fn slider(args: RangeSliderArgs) -> RangeSlider {
        let mut slider = RangeSlider::new(args);
        slider.attach_track(LayoutBox::new(Px(0), Px(100)));
        slider
    }

    fn drag(slider: &mut RangeSlider, thumb: Thumb, path: &[i32]) {
        slider.on_thumb_pointer_down(thumb);
        let (first, rest) = path.split_first().expect("drag path is empty");
        slider.handle_cursor_event(&CursorEvent::pressed(at(*first)));
        for x in rest {
            slider.handle_cursor_event(&CursorEvent::moved(at(*x)));
        }
        let last = path.last().copied().unwrap_or(*first);
        slider.handle_cursor_event(&CursorEvent::released(at(last)));
    }

    #[test]
    fn defaults() {
        let slider = RangeSlider::default();
        assert_eq!(slider.min(), 0.0);
        assert_eq!(slider.max(), 100.0);
        assert_eq!(slider.step(), 1.0);
        assert_eq!(slider.value(), RangeValue::new(0.0, 100.0));
        assert!(slider.is_start_value());
        assert!(!slider.disabled());
        assert!(!slider.thumb_label());
        assert_eq!(slider.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn percent_value_from_initial_args() {
        let slider = slider(RangeSliderArgs::default().min_value(25.0).max_value(75.0));
        assert_eq!(slider.percent_value(), PercentValue { min: 0.25, max: 0.75 });
        assert_eq!(
            slider.track_fill_transform().to_string(),
            "translateX(25%) scale3d(0.5,1,1)"
        );
    }

    #[test]
    fn dragging_min_past_max_collapses_interval() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::attach(&mut slider);

        drag(&mut slider, Thumb::Min, &[20, 60, 90]);

        assert_eq!(slider.value(), RangeValue::new(80.0, 80.0));
        assert_eq!(
            recorder.inputs(),
            vec![RangeValue::new(60.0, 80.0), RangeValue::new(80.0, 80.0)]
        );
        assert_eq!(recorder.changes(), vec![RangeValue::new(80.0, 80.0)]);
    }

    #[test]
    fn dragging_max_below_min_pins_to_min() {
        let mut slider = slider(
            RangeSliderArgs::default()
                .min(0.0)
                .max(10.0)
                .min_value(2.0)
                .max_value(8.0),
        );
        let recorder = Recorder::attach(&mut slider);

        drag(&mut slider, Thumb::Max, &[80, 10]);

        assert_eq!(slider.value(), RangeValue::new(2.0, 2.0));
        assert_eq!(recorder.inputs(), vec![RangeValue::new(2.0, 2.0)]);
        assert_eq!(recorder.changes(), vec![RangeValue::new(2.0, 2.0)]);
        assert_eq!(recorder.changes.lock()[0].source, slider.id());
    }

    #[test]
    fn pointer_outside_track_clamps_to_bounds() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));

        drag(&mut slider, Thumb::Min, &[20, -300]);
        assert_eq!(slider.min_value(), 0.0);

        drag(&mut slider, Thumb::Max, &[80, 4000]);
        assert_eq!(slider.max_value(), 100.0);
    }

    #[test]
    fn extreme_pointer_coordinates_resolve_to_bounds() {
        let mut slider = RangeSlider::new(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        slider.attach_track(LayoutBox::new(Px(100), Px(100)));

        drag(&mut slider, Thumb::Min, &[i32::MIN]);
        drag(&mut slider, Thumb::Max, &[i32::MAX]);
        assert_eq!(slider.value(), RangeValue::new(0.0, 100.0));

        slider.on_track_click(at(i32::MIN));
        slider.on_track_click(at(i32::MAX));
        assert_eq!(slider.value(), RangeValue::new(0.0, 100.0));
    }

    #[test]
    fn step_snapping_during_drag() {
        let mut slider = slider(RangeSliderArgs::default().step(5.0));
        drag(&mut slider, Thumb::Min, &[0, 42]);
        assert_eq!(slider.min_value(), 40.0);
        drag(&mut slider, Thumb::Min, &[40, 43]);
        assert_eq!(slider.min_value(), 45.0);
    }

    #[test]
    fn fractional_step_rounds_stored_values() {
        let mut slider = slider(RangeSliderArgs::default().step(0.25));
        assert_eq!(slider.rounding_precision(), RoundingPrecision(2));
        slider.set_min_value(10.247);
        assert_eq!(slider.min_value(), 10.25);
        assert_eq!(slider.min_display_value().to_string(), "10.25");
    }

    #[test]
    fn ticks_without_change_do_not_notify() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::attach(&mut slider);

        drag(&mut slider, Thumb::Min, &[20, 20, 20]);
        assert!(recorder.inputs().is_empty());
        assert!(recorder.changes().is_empty());

        // Out and back: inputs fire, but the gesture has no net change.
        drag(&mut slider, Thumb::Min, &[20, 30, 20]);
        assert_eq!(
            recorder.inputs(),
            vec![RangeValue::new(30.0, 80.0), RangeValue::new(20.0, 80.0)]
        );
        assert!(recorder.changes().is_empty());
    }

    #[test]
    fn programmatic_writes_do_not_notify() {
        let mut slider = slider(RangeSliderArgs::default());
        let recorder = Recorder::attach(&mut slider);
        let bound = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&bound);
        slider.register_on_change(move |value| sink.lock().push(value));

        assert!(!slider.set_min_value(0.0));
        slider.set_min_value(10.0);
        slider.write_value(RangeValue::new(15.0, 30.0));

        assert_eq!(slider.value(), RangeValue::new(15.0, 30.0));
        assert!(recorder.inputs().is_empty());
        assert!(recorder.changes().is_empty());
        assert!(bound.lock().is_empty());
    }

    #[test]
    fn track_click_resolves_nearest_thumb_once() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::attach(&mut slider);
        slider.on_pointer_enter();

        slider.on_track_click(at(70));
        assert_eq!(slider.value(), RangeValue::new(20.0, 70.0));
        slider.on_track_click(at(10));
        assert_eq!(slider.value(), RangeValue::new(10.0, 70.0));

        assert_eq!(recorder.inputs(), recorder.changes());
        assert_eq!(recorder.changes().len(), 2);
        assert_eq!(slider.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn track_click_prefers_targeted_thumb() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        slider.on_pointer_enter();

        slider.on_thumb_pointer_down(Thumb::Max);
        assert!(slider.is_thumb_active(Thumb::Max));
        slider.on_track_click(at(30));

        assert_eq!(slider.value(), RangeValue::new(20.0, 30.0));
        assert!(!slider.is_thumb_active(Thumb::Max));
    }

    #[test]
    fn track_click_without_geometry_is_noop() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::attach(&mut slider);

        slider.on_thumb_pointer_down(Thumb::Min);
        slider.on_track_click(at(50));

        assert_eq!(slider.value(), RangeValue::new(20.0, 80.0));
        assert!(recorder.changes().is_empty());
    }

    #[test]
    fn drag_without_targeted_thumb_picks_nearest() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));

        slider.handle_cursor_event(&CursorEvent::pressed(at(75)));
        assert_eq!(
            slider.interaction_state(),
            InteractionState::Sliding {
                thumb: Some(Thumb::Max),
                origin: RangeValue::new(20.0, 80.0),
            }
        );
        slider.handle_cursor_event(&CursorEvent::moved(at(10)));
        slider.handle_cursor_event(&CursorEvent::released(at(10)));

        assert_eq!(slider.value(), RangeValue::new(20.0, 20.0));
    }

    #[test]
    fn slide_from_idle_starts_gesture_on_nearest_thumb() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::attach(&mut slider);
        assert_eq!(slider.geometry(), None);

        slider.on_slide(at(70));
        assert_eq!(slider.geometry(), Some(TrackGeometry::new(Px(0), Px(100))));
        assert!(slider.is_sliding());
        assert!(slider.is_thumb_active(Thumb::Max));

        slider.on_slide(at(60));
        slider.on_slide_end();

        assert_eq!(slider.value(), RangeValue::new(20.0, 60.0));
        assert_eq!(
            recorder.inputs(),
            vec![RangeValue::new(20.0, 70.0), RangeValue::new(20.0, 60.0)]
        );
        assert_eq!(recorder.changes(), vec![RangeValue::new(20.0, 60.0)]);
        assert_eq!(slider.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn slide_from_idle_uses_pinned_thumb_and_fresh_geometry() {
        let layout = SharedLayoutBox::new(LayoutBox::new(Px(0), Px(100)));
        let mut slider = RangeSlider::new(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        slider.attach_track(layout.clone());
        let recorder = Recorder::attach(&mut slider);

        slider.on_pointer_enter();
        layout.set(LayoutBox::new(Px(100), Px(200)));

        slider.on_thumb_pointer_down(Thumb::Min);
        slider.on_slide(at(180));
        assert_eq!(slider.geometry(), Some(TrackGeometry::new(Px(100), Px(200))));
        assert_eq!(slider.min_value(), 40.0);

        slider.on_slide(at(300));
        slider.on_slide_end();
        slider.on_slide_end();

        assert_eq!(slider.value(), RangeValue::new(80.0, 80.0));
        assert_eq!(
            recorder.inputs(),
            vec![RangeValue::new(40.0, 80.0), RangeValue::new(80.0, 80.0)]
        );
        assert_eq!(recorder.changes(), vec![RangeValue::new(80.0, 80.0)]);
    }

    #[test]
    fn slide_start_with_position_resolves_immediately() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::attach(&mut slider);

        slider.on_thumb_pointer_down(Thumb::Min);
        slider.on_slide_start(Some(at(30)));
        assert_eq!(slider.min_value(), 30.0);
        assert_eq!(recorder.inputs(), vec![RangeValue::new(30.0, 80.0)]);

        // A second start while sliding keeps the original gesture.
        slider.on_slide_start(Some(at(90)));
        assert_eq!(slider.min_value(), 30.0);

        slider.on_slide_end();
        assert_eq!(recorder.changes(), vec![RangeValue::new(30.0, 80.0)]);
    }

    #[test]
    fn moves_outside_gesture_are_ignored() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        slider.on_pointer_enter();
        slider.handle_cursor_event(&CursorEvent::moved(at(50)));
        slider.handle_cursor_event(&CursorEvent::released(at(50)));
        assert_eq!(slider.value(), RangeValue::new(20.0, 80.0));
    }

    #[test]
    fn disabled_slider_ignores_interaction() {
        let mut slider = slider(
            RangeSliderArgs::default()
                .min_value(20.0)
                .max_value(80.0)
                .disabled(true),
        );
        let recorder = Recorder::attach(&mut slider);

        slider.on_pointer_enter();
        assert_eq!(slider.geometry(), None);
        drag(&mut slider, Thumb::Min, &[20, 50]);
        slider.on_track_click(at(50));

        assert_eq!(slider.value(), RangeValue::new(20.0, 80.0));
        assert!(recorder.inputs().is_empty());
    }

    #[test]
    fn disabling_mid_drag_aborts_without_change() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::attach(&mut slider);

        slider.on_thumb_pointer_down(Thumb::Min);
        slider.handle_cursor_event(&CursorEvent::pressed(at(20)));
        slider.handle_cursor_event(&CursorEvent::moved(at(40)));
        slider.set_disabled_state(true);
        slider.handle_cursor_event(&CursorEvent::released(at(40)));

        assert_eq!(slider.min_value(), 40.0);
        assert_eq!(recorder.inputs().len(), 1);
        assert!(recorder.changes().is_empty());
        assert!(!slider.is_sliding());
    }

    #[test]
    fn binding_receives_committed_changes_and_touched() {
        let mut slider = slider(RangeSliderArgs::default());
        let committed = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&committed);
        slider.register_on_change(move |value| sink.lock().push(value));
        let touched = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&touched);
        slider.register_on_touched(move || *counter.lock() += 1);

        drag(&mut slider, Thumb::Max, &[100, 90, 50]);
        slider.on_blur();

        assert_eq!(*committed.lock(), vec![RangeValue::new(0.0, 50.0)]);
        assert_eq!(*touched.lock(), 1);
    }

    #[test]
    fn unsubscribe_removes_only_the_matching_observer() {
        let mut slider = slider(RangeSliderArgs::default().min_value(20.0).max_value(80.0));
        let recorder = Recorder::default();
        let inputs = Arc::clone(&recorder.inputs);
        slider.subscribe_input(move |change| inputs.lock().push(change));
        let changes = Arc::clone(&recorder.changes);
        let change_id = slider.subscribe_change(move |change| changes.lock().push(change));

        assert!(slider.unsubscribe(change_id));
        slider.on_pointer_enter();
        slider.on_track_click(at(10));

        assert_eq!(recorder.inputs(), vec![RangeValue::new(10.0, 80.0)]);
        assert!(recorder.changes().is_empty());
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let mut slider = slider(RangeSliderArgs::default());
        let recorder = Recorder::default();
        let inputs = Arc::clone(&recorder.inputs);
        let id = slider.subscribe_input(move |change| inputs.lock().push(change));

        drag(&mut slider, Thumb::Min, &[0, 10]);
        assert!(slider.unsubscribe(id));
        assert!(!slider.unsubscribe(id));
        drag(&mut slider, Thumb::Min, &[10, 20]);

        assert_eq!(recorder.inputs(), vec![RangeValue::new(10.0, 100.0)]);
    }

    #[test]
    fn geometry_is_recaptured_at_every_slide_start() {
        let layout = SharedLayoutBox::new(LayoutBox::new(Px(0), Px(100)));
        let mut slider = RangeSlider::new(RangeSliderArgs::default());
        slider.attach_track(layout.clone());

        drag(&mut slider, Thumb::Min, &[0, 50]);
        assert_eq!(slider.min_value(), 50.0);

        // The track moved and doubled in width between gestures.
        layout.set(LayoutBox::new(Px(100), Px(200)));
        drag(&mut slider, Thumb::Min, &[200, 150]);
        assert_eq!(slider.min_value(), 25.0);
        assert_eq!(slider.geometry(), Some(TrackGeometry::new(Px(100), Px(200))));
        assert_eq!(slider.thumb_center(Thumb::Min), Some(Px(150)));
    }

    #[test]
    fn focus_tracks_active_state_and_geometry() {
        let mut slider = slider(RangeSliderArgs::default());
        slider.on_focus(FocusOrigin::Keyboard);
        assert!(!slider.is_active());
        assert!(slider.geometry().is_some());

        slider.on_focus(FocusOrigin::Mouse);
        assert!(slider.is_active());
        slider.on_blur();
        assert!(!slider.is_active());
    }

    #[test]
    fn detached_track_forgets_geometry() {
        let mut slider = slider(RangeSliderArgs::default());
        slider.on_pointer_enter();
        assert!(slider.geometry().is_some());
        slider.detach_track();
        assert_eq!(slider.geometry(), None);
        assert_eq!(slider.thumb_center(Thumb::Max), None);
    }

    #[test]
    fn display_with_formats_both_thumbs() {
        let slider = slider(
            RangeSliderArgs::default()
                .min_value(1.0)
                .max_value(2.0)
                .display_with(|v| format!("${v}")),
        );
        assert_eq!(slider.min_display_value(), DisplayValue::Text("$1".into()));
        assert_eq!(slider.max_display_value(), DisplayValue::Text("$2".into()));
    }

    #[test]
    fn try_new_validates_args() {
        assert!(RangeSlider::try_new(RangeSliderArgs::default()).is_ok());
        assert_eq!(
            RangeSlider::try_new(RangeSliderArgs::default().min(5.0).max(5.0)).err(),
            Some(RangeSliderError::EmptyRange { min: 5.0, max: 5.0 })
        );
        assert_eq!(
            RangeSlider::try_new(RangeSliderArgs::default().step(-1.0)).err(),
            Some(RangeSliderError::NonPositiveStep(-1.0))
        );
        assert_eq!(
            RangeSlider::try_new(RangeSliderArgs::default().min_value(f64::NAN)).err(),
            Some(RangeSliderError::NonFinite("min_value"))
        );
    }

    #[test]
    fn invalid_args_fall_back() {
        let slider = RangeSlider::new(
            RangeSliderArgs::default()
                .min(f64::NAN)
                .step(0.0)
                .max_value(f64::INFINITY),
        );
        assert_eq!(slider.min(), 0.0);
        assert_eq!(slider.step(), 1.0);
        assert_eq!(slider.max_value(), 100.0);
    }

    #[test]
    fn interval_stays_ordered_across_gesture_sequences() {
        let mut slider = slider(RangeSliderArgs::default().step(3.0).min_value(30.0).max_value(60.0));
        let paths: [(Thumb, &[i32]); 6] = [
            (Thumb::Min, &[30, 95, 100]),
            (Thumb::Max, &[60, 0, -10]),
            (Thumb::Max, &[0, 47]),
            (Thumb::Min, &[0, 12, 88, 47]),
            (Thumb::Max, &[47, 13]),
            (Thumb::Min, &[13, 99]),
        ];
        for (thumb, path) in paths {
            drag(&mut slider, thumb, path);
            assert!(slider.value().is_ordered(), "{:?}", slider.value());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn value_types_serialize() {
        let json = serde_json::to_string(&RangeValue::new(1.5, 2.0)).expect("serialize");
        assert_eq!(json, r#"{"min":1.5,"max":2.0}"#);
        let thumb: Thumb = serde_json::from_str(r#""max""#).expect("deserialize");
        assert_eq!(thumb, Thumb::Max);
    }
}
