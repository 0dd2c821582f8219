//! Tagged view events and their field applicability rules.

use std::fmt;

use log::debug;
use maps_core::{Item, MapsError, Result};

use crate::kinds::{ActionType, EventKind, GestureType};

/// A point in view coordinates, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    /// Horizontal offset from the left edge.
    pub x: i32,
    /// Vertical offset from the top edge.
    pub y: i32,
}

impl ScreenPoint {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventField {
    GestureType,
    ActionType,
    Center,
    Delta,
    Position,
    Fingers,
    ZoomFactor,
    RotationAngle,
    Object,
}

impl EventField {
    const fn name(self) -> &'static str {
        match self {
            Self::GestureType => "gesture type",
            Self::ActionType => "action type",
            Self::Center => "center",
            Self::Delta => "delta",
            Self::Position => "position",
            Self::Fingers => "fingers",
            Self::ZoomFactor => "zoom factor",
            Self::RotationAngle => "rotation angle",
            Self::Object => "object",
        }
    }

    const fn applies_to(self, kind: EventKind) -> bool {
        use EventKind::{Action, Gesture, Object};
        match self {
            Self::GestureType | Self::Fingers => matches!(kind, Gesture),
            Self::ActionType | Self::Delta => matches!(kind, Action),
            Self::Center | Self::ZoomFactor | Self::RotationAngle => {
                matches!(kind, Gesture | Action)
            }
            Self::Position => matches!(kind, Gesture | Object),
            Self::Object => matches!(kind, Object),
        }
    }
}

/// An event raised by a map view.
///
/// The kind is fixed at construction. Every field accessor first checks
/// that the field belongs to that kind and fails with
/// [`MapsError::InvalidParameter`] otherwise; an applicable field that was
/// never populated reports [`MapsError::NotFound`].
///
/// The view object of an [`EventKind::Object`] event is borrowed, never
/// owned: the event cannot outlive it and cloning the event shares it.
///
/// # Examples
/// ```
/// use maps_view::{ActionType, EventKind, ScreenPoint, ViewEvent};
///
/// let mut event: ViewEvent<'_, ()> = ViewEvent::new(EventKind::Action);
/// event.set_action_type(ActionType::Zoom)?;
/// event.set_zoom_factor(1.5)?;
///
/// assert_eq!(event.action_type()?, ActionType::Zoom);
/// assert!(event.gesture_type().is_err());
/// assert!(event.delta().is_err());
/// # Ok::<(), maps_core::MapsError>(())
/// ```
pub struct ViewEvent<'v, O: ?Sized> {
    kind: EventKind,
    gesture_type: Option<GestureType>,
    action_type: Option<ActionType>,
    center: Option<ScreenPoint>,
    delta: Option<ScreenPoint>,
    position: Option<ScreenPoint>,
    fingers: Option<u32>,
    zoom_factor: Option<f64>,
    rotation_angle: Option<f64>,
    object: Option<&'v O>,
}

impl<'v, O: ?Sized> ViewEvent<'v, O> {
    /// Construct an event of `kind` with no fields populated.
    #[must_use]
    pub const fn new(kind: EventKind) -> Self {
        Self {
            kind,
            gesture_type: None,
            action_type: None,
            center: None,
            delta: None,
            position: None,
            fingers: None,
            zoom_factor: None,
            rotation_angle: None,
            object: None,
        }
    }

    /// Kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    fn check(&self, field: EventField) -> Result<()> {
        if field.applies_to(self.kind) {
            Ok(())
        } else {
            debug!(
                "{} is not carried by {} events",
                field.name(),
                self.kind.name()
            );
            Err(MapsError::InvalidParameter {
                reason: "field does not belong to this event kind",
            })
        }
    }

    fn read<T: Copy>(&self, field: EventField, value: Option<T>) -> Result<T> {
        self.check(field)?;
        value.ok_or(MapsError::NotFound { what: field.name() })
    }

    /// Recognised gesture. Gesture events only.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for other kinds and
    /// [`MapsError::NotFound`] when unset.
    pub fn gesture_type(&self) -> Result<GestureType> {
        self.read(EventField::GestureType, self.gesture_type)
    }

    /// Record the recognised gesture.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] unless this is a gesture event.
    pub fn set_gesture_type(&mut self, gesture_type: GestureType) -> Result<()> {
        self.check(EventField::GestureType)?;
        self.gesture_type = Some(gesture_type);
        Ok(())
    }

    /// Performed action. Action events only.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for other kinds and
    /// [`MapsError::NotFound`] when unset.
    pub fn action_type(&self) -> Result<ActionType> {
        self.read(EventField::ActionType, self.action_type)
    }

    /// Record the performed action.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] unless this is an action event.
    pub fn set_action_type(&mut self, action_type: ActionType) -> Result<()> {
        self.check(EventField::ActionType)?;
        self.action_type = Some(action_type);
        Ok(())
    }

    /// Centre of the gesture or action.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for object and ready events and
    /// [`MapsError::NotFound`] when unset.
    pub fn center(&self) -> Result<ScreenPoint> {
        self.read(EventField::Center, self.center)
    }

    /// Record the centre.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for object and ready events.
    pub fn set_center(&mut self, center: ScreenPoint) -> Result<()> {
        self.check(EventField::Center)?;
        self.center = Some(center);
        Ok(())
    }

    /// Scroll offset of an action.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for non-action events and
    /// [`MapsError::NotFound`] when unset.
    pub fn delta(&self) -> Result<ScreenPoint> {
        self.read(EventField::Delta, self.delta)
    }

    /// Record the scroll offset.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] unless this is an action event.
    pub fn set_delta(&mut self, delta: ScreenPoint) -> Result<()> {
        self.check(EventField::Delta)?;
        self.delta = Some(delta);
        Ok(())
    }

    /// Touch position of a gesture or object event.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for action and ready events and
    /// [`MapsError::NotFound`] when unset.
    pub fn position(&self) -> Result<ScreenPoint> {
        self.read(EventField::Position, self.position)
    }

    /// Record the touch position.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for action and ready events.
    pub fn set_position(&mut self, position: ScreenPoint) -> Result<()> {
        self.check(EventField::Position)?;
        self.position = Some(position);
        Ok(())
    }

    /// Number of fingers in a gesture.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for non-gesture events and
    /// [`MapsError::NotFound`] when unset.
    pub fn fingers(&self) -> Result<u32> {
        self.read(EventField::Fingers, self.fingers)
    }

    /// Record the finger count.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] unless this is a gesture event.
    pub fn set_fingers(&mut self, fingers: u32) -> Result<()> {
        self.check(EventField::Fingers)?;
        self.fingers = Some(fingers);
        Ok(())
    }

    /// Zoom factor of a gesture or action.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for object and ready events and
    /// [`MapsError::NotFound`] when unset.
    pub fn zoom_factor(&self) -> Result<f64> {
        self.read(EventField::ZoomFactor, self.zoom_factor)
    }

    /// Record the zoom factor.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for object and ready events, or when
    /// `zoom_factor` is not a positive finite number.
    pub fn set_zoom_factor(&mut self, zoom_factor: f64) -> Result<()> {
        self.check(EventField::ZoomFactor)?;
        if !(zoom_factor.is_finite() && zoom_factor > 0.0) {
            return Err(MapsError::InvalidParameter {
                reason: "zoom factor must be positive",
            });
        }
        self.zoom_factor = Some(zoom_factor);
        Ok(())
    }

    /// Rotation angle of a gesture or action, in degrees.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for object and ready events and
    /// [`MapsError::NotFound`] when unset.
    pub fn rotation_angle(&self) -> Result<f64> {
        self.read(EventField::RotationAngle, self.rotation_angle)
    }

    /// Record the rotation angle in degrees.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for object and ready events, or a
    /// non-finite angle.
    pub fn set_rotation_angle(&mut self, rotation_angle: f64) -> Result<()> {
        self.check(EventField::RotationAngle)?;
        if !rotation_angle.is_finite() {
            return Err(MapsError::InvalidParameter {
                reason: "rotation angle must be finite",
            });
        }
        self.rotation_angle = Some(rotation_angle);
        Ok(())
    }

    /// The touched view object, borrowed from the view.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] for non-object events and
    /// [`MapsError::NotFound`] when unset.
    pub fn object(&self) -> Result<&'v O> {
        self.read(EventField::Object, self.object)
    }

    /// Record the touched view object.
    ///
    /// # Errors
    /// [`MapsError::InvalidParameter`] unless this is an object event.
    pub fn set_object(&mut self, object: &'v O) -> Result<()> {
        self.check(EventField::Object)?;
        self.object = Some(object);
        Ok(())
    }
}

// Manual impls: copying the event copies the borrow, so `O` needs no bounds.
impl<O: ?Sized> Clone for ViewEvent<'_, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: ?Sized> Copy for ViewEvent<'_, O> {}

impl<O: ?Sized> Item for ViewEvent<'_, O> {
    fn try_clone(&self) -> Result<Self> {
        Ok(*self)
    }
}

impl<O: ?Sized> fmt::Debug for ViewEvent<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewEvent")
            .field("kind", &self.kind)
            .field("gesture_type", &self.gesture_type)
            .field("action_type", &self.action_type)
            .field("center", &self.center)
            .field("delta", &self.delta)
            .field("position", &self.position)
            .field("fingers", &self.fingers)
            .field("zoom_factor", &self.zoom_factor)
            .field("rotation_angle", &self.rotation_angle)
            .field("has_object", &self.object.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Marker {
        id: u32,
    }

    #[rstest]
    fn ready_carries_nothing() {
        let mut event: ViewEvent<'_, Marker> = ViewEvent::new(EventKind::Ready);
        assert!(matches!(
            event.set_center(ScreenPoint::new(1, 1)),
            Err(MapsError::InvalidParameter { .. })
        ));
        assert!(matches!(
            event.zoom_factor(),
            Err(MapsError::InvalidParameter { .. })
        ));
    }

    #[rstest]
    #[case(EventKind::Gesture, true, false, true)]
    #[case(EventKind::Action, false, true, false)]
    #[case(EventKind::Object, false, false, true)]
    #[case(EventKind::Ready, false, false, false)]
    fn applicability_follows_kind(
        #[case] kind: EventKind,
        #[case] fingers: bool,
        #[case] delta: bool,
        #[case] position: bool,
    ) {
        let event: ViewEvent<'_, Marker> = ViewEvent::new(kind);
        let applicable = |r: Result<_>| !matches!(r, Err(MapsError::InvalidParameter { .. }));
        assert_eq!(applicable(event.fingers().map(drop)), fingers);
        assert_eq!(applicable(event.delta().map(drop)), delta);
        assert_eq!(applicable(event.position().map(drop)), position);
    }

    #[rstest]
    fn unset_applicable_field_is_not_found() {
        let event: ViewEvent<'_, Marker> = ViewEvent::new(EventKind::Gesture);
        assert!(matches!(event.center(), Err(MapsError::NotFound { .. })));
    }

    #[rstest]
    fn object_is_borrowed_and_shared_by_clones() {
        let marker = Marker { id: 7 };
        let mut event = ViewEvent::new(EventKind::Object);
        event.set_object(&marker).expect("object event");
        let copy = event.try_clone().expect("clone");
        assert!(std::ptr::eq(
            copy.object().expect("set"),
            event.object().expect("set")
        ));
        assert_eq!(copy.object().expect("set").id, 7);
    }

    #[rstest]
    #[case(0.0)]
    #[case(f64::NAN)]
    fn zoom_factor_must_be_positive(#[case] factor: f64) {
        let mut event: ViewEvent<'_, Marker> = ViewEvent::new(EventKind::Action);
        assert!(event.set_zoom_factor(factor).is_err());
        assert!(matches!(event.zoom_factor(), Err(MapsError::NotFound { .. })));
    }

    #[rstest]
    fn unsized_objects_can_be_borrowed() {
        let label = String::from("poi-12");
        let mut event: ViewEvent<'_, str> = ViewEvent::new(EventKind::Object);
        event.set_object(label.as_str()).expect("object event");
        assert_eq!(event.object().expect("set"), "poi-12");
    }
}
