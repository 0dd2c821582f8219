//! Closed enumerations used by routes and maneuvers.

use maps_core::closed_enum;

closed_enum! {
    /// Means of travel a route was computed for.
    pub enum TransportMode: "transport mode" {
        /// Private car.
        Car = 0,
        /// On foot.
        Pedestrian = 1,
        /// Bicycle.
        Bicycle = 2,
        /// Buses, trains and other public transit.
        PublicTransit = 3,
        /// Goods vehicle.
        Truck = 4,
    }
}

impl Default for TransportMode {
    fn default() -> Self {
        Self::Car
    }
}

closed_enum! {
    /// Unit in which distances are reported.
    pub enum DistanceUnit: "distance unit" {
        /// Metres.
        Meter = 0,
        /// Kilometres.
        Kilometer = 1,
        /// Feet.
        Foot = 2,
        /// Yards.
        Yard = 3,
    }
}

impl Default for DistanceUnit {
    fn default() -> Self {
        Self::Meter
    }
}

closed_enum! {
    /// Compass heading at a maneuver.
    pub enum DirectionId: "direction" {
        /// No heading given.
        None = 0,
        /// North.
        North = 1,
        /// North-west.
        NorthWest = 2,
        /// North-east.
        NorthEast = 3,
        /// South.
        South = 4,
        /// South-east.
        SouthEast = 5,
        /// South-west.
        SouthWest = 6,
        /// West.
        West = 7,
        /// East.
        East = 8,
    }
}

impl Default for DirectionId {
    fn default() -> Self {
        Self::None
    }
}

closed_enum! {
    /// Kind of turn performed at a maneuver.
    pub enum TurnType: "turn type" {
        /// No turn.
        None = 0,
        /// Continue straight.
        Straight = 1,
        /// Bear right.
        BearRight = 2,
        /// Slight right.
        LightRight = 3,
        /// Right.
        Right = 4,
        /// Sharp right.
        HardRight = 5,
        /// U-turn to the right.
        UturnRight = 6,
        /// U-turn to the left.
        UturnLeft = 7,
        /// Sharp left.
        HardLeft = 8,
        /// Left.
        Left = 9,
        /// Slight left.
        LightLeft = 10,
        /// Bear left.
        BearLeft = 11,
        /// Take the right fork.
        RightFork = 12,
        /// Take the left fork.
        LeftFork = 13,
        /// Take the straight fork.
        StraightFork = 14,
    }
}

impl Default for TurnType {
    fn default() -> Self {
        Self::None
    }
}
