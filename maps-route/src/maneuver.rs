//! Turn-by-turn instructions within a route segment.

use maps_core::bounded::copy_bounded;
use maps_core::lifecycle::{Entity, Field, FieldKind, deep_copy, if_present};
use maps_core::{Capability, Coordinates, Item, MapsError, Result};

use crate::kinds::{DirectionId, TurnType};

/// Longest road name kept, in bytes.
pub const ROAD_NAME_MAX_LEN: usize = 128;
/// Longest instruction text kept, in bytes.
pub const INSTRUCTION_TEXT_MAX_LEN: usize = 128;
/// Longest locale tag kept, in bytes.
pub const LOCALE_MAX_LEN: usize = 32;

/// A single navigation instruction.
///
/// Text fields are bounded; over-long input is truncated rather than
/// rejected.
///
/// # Examples
/// ```
/// use maps_core::{Capability, Coordinates, StaticGate};
/// use maps_route::{RouteManeuver, TurnType};
///
/// let cap = Capability::acquire(&StaticGate(true))?;
/// let mut maneuver = RouteManeuver::new(cap);
/// maneuver.set_turn_type(TurnType::Left);
/// maneuver.set_road_name("Unter den Linden")?;
/// maneuver.set_position(&Coordinates::new(cap, 52.517, 13.389)?);
///
/// assert_eq!(maneuver.turn_type(), TurnType::Left);
/// assert_eq!(maneuver.road_name()?, "Unter den Linden");
/// # Ok::<(), maps_core::MapsError>(())
/// ```
#[derive(Debug, PartialEq)]
pub struct RouteManeuver {
    direction_id: DirectionId,
    turn_type: TurnType,
    position: Option<Coordinates>,
    road_name: Option<String>,
    instruction_text: Option<String>,
    locale: Option<String>,
    time_to_next_instruction: i32,
    distance_to_next_instruction: f64,
}

fn text(field: &Option<String>, what: &'static str) -> Result<String> {
    field
        .as_ref()
        .ok_or(MapsError::NotFound { what })?
        .try_clone()
}

impl RouteManeuver {
    /// Construct a blank maneuver.
    #[must_use]
    pub const fn new(_cap: Capability) -> Self {
        Self {
            direction_id: DirectionId::None,
            turn_type: TurnType::None,
            position: None,
            road_name: None,
            instruction_text: None,
            locale: None,
            time_to_next_instruction: 0,
            distance_to_next_instruction: 0.0,
        }
    }

    /// Compass heading.
    #[must_use]
    pub const fn direction_id(&self) -> DirectionId {
        self.direction_id
    }

    /// Set the compass heading.
    pub const fn set_direction_id(&mut self, direction_id: DirectionId) {
        self.direction_id = direction_id;
    }

    /// Turn performed.
    #[must_use]
    pub const fn turn_type(&self) -> TurnType {
        self.turn_type
    }

    /// Set the turn performed.
    pub const fn set_turn_type(&mut self, turn_type: TurnType) {
        self.turn_type = turn_type;
    }

    /// Copy of the position.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no position has been set.
    pub fn position(&self) -> Result<Coordinates> {
        self.position
            .as_ref()
            .ok_or(MapsError::NotFound { what: "position" })?
            .try_clone()
    }

    /// Store a copy of `position`.
    pub const fn set_position(&mut self, position: &Coordinates) {
        self.position = Some(*position);
    }

    /// Copy of the road name.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no road name has been set.
    pub fn road_name(&self) -> Result<String> {
        text(&self.road_name, "road name")
    }

    /// Store `road_name`, truncated to [`ROAD_NAME_MAX_LEN`] bytes.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when the copy cannot be allocated.
    pub fn set_road_name(&mut self, road_name: &str) -> Result<()> {
        self.road_name = Some(copy_bounded("road name", road_name, ROAD_NAME_MAX_LEN)?);
        Ok(())
    }

    /// Copy of the instruction text.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no text has been set.
    pub fn instruction_text(&self) -> Result<String> {
        text(&self.instruction_text, "instruction text")
    }

    /// Store `instruction_text`, truncated to
    /// [`INSTRUCTION_TEXT_MAX_LEN`] bytes.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when the copy cannot be allocated.
    pub fn set_instruction_text(&mut self, instruction_text: &str) -> Result<()> {
        self.instruction_text = Some(copy_bounded(
            "instruction text",
            instruction_text,
            INSTRUCTION_TEXT_MAX_LEN,
        )?);
        Ok(())
    }

    /// Copy of the locale tag the text is written in.
    ///
    /// # Errors
    /// Returns [`MapsError::NotFound`] when no locale has been set.
    pub fn locale(&self) -> Result<String> {
        text(&self.locale, "locale")
    }

    /// Store `locale`, truncated to [`LOCALE_MAX_LEN`] bytes.
    ///
    /// # Errors
    /// Returns [`MapsError::OutOfMemory`] when the copy cannot be allocated.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        self.locale = Some(copy_bounded("locale", locale, LOCALE_MAX_LEN)?);
        Ok(())
    }

    /// Seconds until the next instruction.
    #[must_use]
    pub const fn time_to_next_instruction(&self) -> i32 {
        self.time_to_next_instruction
    }

    /// Set the seconds until the next instruction.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] for a negative value.
    pub const fn set_time_to_next_instruction(&mut self, seconds: i32) -> Result<()> {
        if seconds < 0 {
            return Err(MapsError::InvalidParameter {
                reason: "time to next instruction must not be negative",
            });
        }
        self.time_to_next_instruction = seconds;
        Ok(())
    }

    /// Distance until the next instruction.
    #[must_use]
    pub const fn distance_to_next_instruction(&self) -> f64 {
        self.distance_to_next_instruction
    }

    /// Set the distance until the next instruction.
    ///
    /// # Errors
    /// Returns [`MapsError::InvalidParameter`] for a negative or non-finite
    /// value.
    pub fn set_distance_to_next_instruction(&mut self, distance: f64) -> Result<()> {
        if !(distance.is_finite() && distance >= 0.0) {
            return Err(MapsError::InvalidParameter {
                reason: "distance to next instruction must be a non-negative number",
            });
        }
        self.distance_to_next_instruction = distance;
        Ok(())
    }
}

impl Entity for RouteManeuver {
    const NAME: &'static str = "route maneuver";
    const FIELDS: &'static [Field<Self>] = &[
        Field::new("direction_id", FieldKind::Primitive, |src, dst| {
            dst.set_direction_id(src.direction_id());
            Ok(())
        }),
        Field::new("turn_type", FieldKind::Primitive, |src, dst| {
            dst.set_turn_type(src.turn_type());
            Ok(())
        }),
        Field::new("position", FieldKind::OwnedHandle, |src, dst| {
            if let Some(position) = if_present(src.position())? {
                dst.set_position(&position);
            }
            Ok(())
        }),
        Field::new("road_name", FieldKind::Primitive, |src, dst| {
            if let Some(name) = if_present(src.road_name())? {
                dst.set_road_name(&name)?;
            }
            Ok(())
        }),
        Field::new("instruction_text", FieldKind::Primitive, |src, dst| {
            if let Some(instruction) = if_present(src.instruction_text())? {
                dst.set_instruction_text(&instruction)?;
            }
            Ok(())
        }),
        Field::new("locale", FieldKind::Primitive, |src, dst| {
            if let Some(locale) = if_present(src.locale())? {
                dst.set_locale(&locale)?;
            }
            Ok(())
        }),
        Field::new("time_to_next_instruction", FieldKind::Primitive, |src, dst| {
            dst.set_time_to_next_instruction(src.time_to_next_instruction())
        }),
        Field::new(
            "distance_to_next_instruction",
            FieldKind::Primitive,
            |src, dst| dst.set_distance_to_next_instruction(src.distance_to_next_instruction()),
        ),
    ];

    fn blank(cap: Capability) -> Self {
        Self::new(cap)
    }
}

impl Item for RouteManeuver {
    fn try_clone(&self) -> Result<Self> {
        deep_copy(self)
    }
}
