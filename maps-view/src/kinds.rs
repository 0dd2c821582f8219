//! Closed enumerations carried by view events.

use maps_core::closed_enum;

closed_enum! {
    /// Discriminant of a [`ViewEvent`](crate::ViewEvent).
    pub enum EventKind: "event kind" {
        /// A raw touch gesture was recognised.
        Gesture = 0,
        /// The view moved in response to a gesture.
        Action = 1,
        /// A view object was touched.
        Object = 2,
        /// The view finished loading.
        Ready = 3,
    }
}

closed_enum! {
    /// Touch gesture recognised on the view.
    pub enum GestureType: "gesture type" {
        /// No gesture.
        None = 0,
        /// One-finger drag.
        Scroll = 1,
        /// Pinch.
        Zoom = 2,
        /// Single tap.
        Tap = 3,
        /// Double tap.
        DoubleTap = 4,
        /// Tap with two fingers.
        TwoFingerTap = 5,
        /// Two-finger twist.
        Rotate = 6,
        /// Press and hold.
        LongPress = 7,
    }
}

closed_enum! {
    /// Camera action the view performed.
    pub enum ActionType: "action type" {
        /// No action.
        None = 0,
        /// Pan.
        Scroll = 1,
        /// Zoom in or out.
        Zoom = 2,
        /// Rotate the map.
        Rotate = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3, EventKind::Ready)]
    #[case(0, EventKind::Gesture)]
    fn event_kind_codes(#[case] code: i32, #[case] kind: EventKind) {
        assert_eq!(EventKind::try_from(code), Ok(kind));
        assert_eq!(kind.code(), code);
    }

    #[rstest]
    fn gesture_codes_are_closed() {
        assert_eq!(GestureType::ALL.len(), 8);
        assert!(GestureType::try_from(8).is_err());
        assert!(ActionType::try_from(-1).is_err());
    }
}
