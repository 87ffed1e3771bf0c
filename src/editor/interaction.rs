// src/editor/interaction.rs

use crate::editor::commands::CommandType;
use crate::error::MapError;
use crate::map::{ConnectionMode, Direction, GridPos};
use crate::utils::geometry::{compass_direction, Point2D, TileGeometry};

/// A connection drawn on the canvas, waiting for the user to pick its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingConnection {
    pub origin: GridPos,
    pub destination: GridPos,
    pub direction: Direction,
    /// Anchor on the origin tile.
    pub start: Point2D,
    /// Anchor on the destination tile.
    pub end: Point2D,
}

/// Pointer state of the grid canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    Dragging { origin: GridPos, pointer: Point2D },
    AwaitingConnectionType(PendingConnection),
}

/// What a pointer release asks the editor to do next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Released on the tile it was pressed on.
    OpenEditor(GridPos),
    /// Released on a different tile.
    ProposeConnection(PendingConnection),
    /// Released outside the grid, or no press was in progress.
    Ignored,
}

impl Default for Interaction {
    fn default() -> Self {
        Interaction::Idle
    }
}

impl Interaction {
    /// Primary button went down. `cell` is the tile under the pointer.
    pub fn press(&mut self, cell: Option<GridPos>, pointer: Point2D) {
        if matches!(self, Interaction::AwaitingConnectionType(_)) {
            return;
        }
        *self = match cell {
            Some(origin) => Interaction::Dragging { origin, pointer },
            None => Interaction::Idle,
        };
    }

    /// Pointer moved with the button held.
    pub fn drag(&mut self, to: Point2D) {
        if let Interaction::Dragging { pointer, .. } = self {
            *pointer = to;
        }
    }

    /// Primary button released over `cell`.
    ///
    /// The line is anchored on the origin tile at the anchor nearest to the
    /// pointer, and on the destination tile at the anchor nearest to that
    /// first anchor. The direction is classified between the two anchors.
    pub fn release(
        &mut self,
        cell: Option<GridPos>,
        pointer: Point2D,
        geometry: &TileGeometry,
    ) -> ReleaseOutcome {
        let origin = match *self {
            Interaction::Dragging { origin, .. } => origin,
            _ => return ReleaseOutcome::Ignored,
        };

        let outcome = match cell {
            Some(destination) if destination == origin => ReleaseOutcome::OpenEditor(origin),
            Some(destination) => {
                let start = geometry.nearest_anchor(origin, pointer);
                let end = geometry.nearest_anchor(destination, start);
                ReleaseOutcome::ProposeConnection(PendingConnection {
                    origin,
                    destination,
                    direction: compass_direction(start, end),
                    start,
                    end,
                })
            }
            None => ReleaseOutcome::Ignored,
        };

        *self = match outcome {
            ReleaseOutcome::ProposeConnection(pending) => {
                Interaction::AwaitingConnectionType(pending)
            }
            _ => Interaction::Idle,
        };
        outcome
    }

    /// The rubber-band line to draw while dragging.
    pub fn preview_line(&self, geometry: &TileGeometry) -> Option<(Point2D, Point2D)> {
        match *self {
            Interaction::Dragging { origin, pointer } => {
                Some((geometry.nearest_anchor(origin, pointer), pointer))
            }
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingConnection> {
        match self {
            Interaction::AwaitingConnectionType(pending) => Some(pending),
            _ => None,
        }
    }

    /// Turns the pending connection into a command once a type is chosen.
    /// Without a type the state is kept and an error returned.
    pub fn confirm(&mut self, mode: Option<ConnectionMode>) -> Result<CommandType, MapError> {
        let pending = *self.pending().ok_or(MapError::NoPendingConnection)?;
        let mode = mode.ok_or(MapError::MissingConnectionType)?;
        *self = Interaction::Idle;
        Ok(CommandType::ConnectRooms {
            origin: pending.origin,
            destination: pending.destination,
            direction: pending.direction,
            mode,
        })
    }

    /// Drops whatever was in progress.
    pub fn cancel(&mut self) {
        *self = Interaction::Idle;
    }

    /// Ends a drag whose release position is unknown. A pending connection
    /// is left for its dialog.
    pub fn abandon_drag(&mut self) {
        if matches!(self, Interaction::Dragging { .. }) {
            *self = Interaction::Idle;
        }
    }
}

/// The pair of mutually exclusive check boxes in the connection dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionChoice {
    pub one_way: bool,
    pub two_way: bool,
}

impl ConnectionChoice {
    /// Call after the one-way box was toggled.
    pub fn one_way_toggled(&mut self) {
        if self.one_way {
            self.two_way = false;
        }
    }

    /// Call after the two-way box was toggled.
    pub fn two_way_toggled(&mut self) {
        if self.two_way {
            self.one_way = false;
        }
    }

    pub fn mode(&self) -> Option<ConnectionMode> {
        if self.one_way {
            Some(ConnectionMode::OneWay)
        } else if self.two_way {
            Some(ConnectionMode::TwoWay)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> TileGeometry {
        TileGeometry::new(50.0, 10.0)
    }

    fn cell(geo: &TileGeometry, p: Point2D) -> Option<GridPos> {
        geo.cell_at(p, 3, 3)
    }

    #[test]
    fn test_click_without_drag_opens_editor() {
        let geo = geometry();
        let mut state = Interaction::default();
        let p = Point2D::new(60.0, 70.0);
        state.press(cell(&geo, p), p);
        let outcome = state.release(cell(&geo, p), p, &geo);
        assert_eq!(outcome, ReleaseOutcome::OpenEditor(GridPos::new(1, 1)));
        assert_eq!(state, Interaction::Idle);
    }

    #[test]
    fn test_drag_to_neighbour_proposes_connection() {
        let geo = geometry();
        let mut state = Interaction::default();
        let press = Point2D::new(25.0, 25.0);
        state.press(cell(&geo, press), press);

        let release = Point2D::new(70.0, 25.0);
        state.drag(release);
        let outcome = state.release(cell(&geo, release), release, &geo);

        let pending = match outcome {
            ReleaseOutcome::ProposeConnection(pending) => pending,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(pending.origin, GridPos::new(0, 0));
        assert_eq!(pending.destination, GridPos::new(1, 0));
        // Right edge of (0,0), then left edge of (1,0).
        assert_eq!(pending.start, Point2D::new(40.0, 25.0));
        assert_eq!(pending.end, Point2D::new(60.0, 25.0));
        assert_eq!(pending.direction, Direction::E);
        assert_eq!(state.pending(), Some(&pending));
    }

    #[test]
    fn test_drag_downward_is_south() {
        let geo = geometry();
        let mut state = Interaction::default();
        let press = Point2D::new(75.0, 25.0);
        state.press(cell(&geo, press), press);
        let release = Point2D::new(75.0, 80.0);
        match state.release(cell(&geo, release), release, &geo) {
            ReleaseOutcome::ProposeConnection(p) => assert_eq!(p.direction, Direction::S),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_release_outside_grid_is_ignored() {
        let geo = geometry();
        let mut state = Interaction::default();
        let press = Point2D::new(25.0, 25.0);
        state.press(cell(&geo, press), press);
        let release = Point2D::new(400.0, 25.0);
        assert_eq!(
            state.release(cell(&geo, release), release, &geo),
            ReleaseOutcome::Ignored
        );
        assert_eq!(state, Interaction::Idle);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let geo = geometry();
        let mut state = Interaction::default();
        let p = Point2D::new(25.0, 25.0);
        assert_eq!(state.release(cell(&geo, p), p, &geo), ReleaseOutcome::Ignored);
    }

    #[test]
    fn test_preview_line_follows_pointer() {
        let geo = geometry();
        let mut state = Interaction::default();
        assert!(state.preview_line(&geo).is_none());

        let press = Point2D::new(25.0, 25.0);
        state.press(cell(&geo, press), press);
        state.drag(Point2D::new(25.0, 140.0));
        let (from, to) = state.preview_line(&geo).unwrap();
        assert_eq!(from, Point2D::new(25.0, 40.0));
        assert_eq!(to, Point2D::new(25.0, 140.0));
    }

    #[test]
    fn test_confirm_requires_a_mode() {
        let geo = geometry();
        let mut state = Interaction::default();
        let press = Point2D::new(25.0, 25.0);
        state.press(cell(&geo, press), press);
        let release = Point2D::new(75.0, 75.0);
        state.release(cell(&geo, release), release, &geo);

        assert!(matches!(
            state.confirm(None),
            Err(MapError::MissingConnectionType)
        ));
        assert!(state.pending().is_some());

        match state.confirm(Some(ConnectionMode::TwoWay)).unwrap() {
            CommandType::ConnectRooms {
                origin,
                destination,
                direction,
                mode,
            } => {
                assert_eq!(origin, GridPos::new(0, 0));
                assert_eq!(destination, GridPos::new(1, 1));
                assert_eq!(direction, Direction::SE);
                assert_eq!(mode, ConnectionMode::TwoWay);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(state, Interaction::Idle);
    }

    #[test]
    fn test_press_ignored_while_dialog_open() {
        let geo = geometry();
        let mut state = Interaction::default();
        let press = Point2D::new(25.0, 25.0);
        state.press(cell(&geo, press), press);
        let release = Point2D::new(75.0, 25.0);
        state.release(cell(&geo, release), release, &geo);

        let other = Point2D::new(125.0, 125.0);
        state.press(cell(&geo, other), other);
        assert!(state.pending().is_some());

        state.cancel();
        assert_eq!(state, Interaction::Idle);
    }

    #[test]
    fn test_abandon_drag_only_ends_drags() {
        let geo = geometry();
        let mut state = Interaction::default();
        let press = Point2D::new(25.0, 25.0);
        state.press(cell(&geo, press), press);
        state.abandon_drag();
        assert_eq!(state, Interaction::Idle);

        state.press(cell(&geo, press), press);
        let release = Point2D::new(75.0, 25.0);
        state.release(cell(&geo, release), release, &geo);
        state.abandon_drag();
        assert!(state.pending().is_some());
    }

    #[test]
    fn test_connection_choice_is_exclusive() {
        let mut choice = ConnectionChoice::default();
        assert_eq!(choice.mode(), None);

        choice.one_way = true;
        choice.one_way_toggled();
        assert_eq!(choice.mode(), Some(ConnectionMode::OneWay));

        choice.two_way = true;
        choice.two_way_toggled();
        assert!(!choice.one_way);
        assert_eq!(choice.mode(), Some(ConnectionMode::TwoWay));

        choice.two_way = false;
        choice.two_way_toggled();
        assert_eq!(choice.mode(), None);
    }
}
