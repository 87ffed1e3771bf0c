// src/document/document.rs

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::map::{Connection, ConnectionMode, Direction, GridPos, Room};

/// The room map being edited: a dense `width` x `height` grid of rooms,
/// stored column-major so that `rooms[x][y]` is the room at `(x, y)`.
///
/// The dimensions are fixed for the lifetime of a document. [`Document::reset`]
/// blanks every room but keeps the grid size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) rooms: Vec<Vec<Room>>,
}

impl Document {
    /// Creates a grid of blank rooms.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rooms: blank_rooms(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_rooms(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn check_bounds(&self, pos: GridPos) -> Result<(), MapError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(MapError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn room(&self, pos: GridPos) -> Option<&Room> {
        self.rooms.get(pos.x).and_then(|column| column.get(pos.y))
    }

    pub fn room_mut(&mut self, pos: GridPos) -> Option<&mut Room> {
        self.rooms.get_mut(pos.x).and_then(|column| column.get_mut(pos.y))
    }

    /// Iterates over every room with its coordinate, column by column.
    pub fn rooms(&self) -> impl Iterator<Item = (GridPos, &Room)> + '_ {
        self.rooms.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, room)| (GridPos::new(x, y), room))
        })
    }

    /// Replaces the room at `pos` wholesale.
    pub fn replace_room(&mut self, pos: GridPos, room: Room) -> Result<(), MapError> {
        self.check_bounds(pos)?;
        self.rooms[pos.x][pos.y] = room;
        Ok(())
    }

    /// Records a connection between two distinct rooms.
    ///
    /// A one-way connection adds an egress on `origin` and an ingress on
    /// `destination`. A two-way connection additionally adds an egress on
    /// `destination` and an ingress on `origin`. Every record carries
    /// `direction` as given; the reverse records are not inverted.
    /// Repeating a connection appends duplicate records.
    pub fn connect(
        &mut self,
        origin: GridPos,
        destination: GridPos,
        direction: Direction,
        mode: ConnectionMode,
    ) -> Result<(), MapError> {
        self.check_bounds(origin)?;
        self.check_bounds(destination)?;
        if origin == destination {
            return Err(MapError::SelfConnection(origin));
        }

        self.rooms[origin.x][origin.y]
            .egresses
            .push(Connection::new(direction, destination));
        self.rooms[destination.x][destination.y]
            .ingresses
            .push(Connection::new(direction, origin));

        if mode == ConnectionMode::TwoWay {
            self.rooms[destination.x][destination.y]
                .egresses
                .push(Connection::new(direction, origin));
            self.rooms[origin.x][origin.y]
                .ingresses
                .push(Connection::new(direction, destination));
        }

        info!(
            "{} connection {} -> {} ({})",
            mode.name(),
            origin,
            destination,
            direction
        );
        Ok(())
    }

    /// Blanks every room, keeping the dimensions.
    pub fn reset(&mut self) {
        self.rooms = blank_rooms(self.width, self.height);
    }

    /// Checks the structural invariants a loaded document must satisfy.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::Malformed(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.rooms.len() != self.width {
            return Err(MapError::Malformed(format!(
                "expected {} columns of rooms, found {}",
                self.width,
                self.rooms.len()
            )));
        }
        for (x, column) in self.rooms.iter().enumerate() {
            if column.len() != self.height {
                return Err(MapError::Malformed(format!(
                    "column {} holds {} rooms, expected {}",
                    x,
                    column.len(),
                    self.height
                )));
            }
        }
        for (pos, room) in self.rooms() {
            for conn in room.ingresses.iter().chain(room.egresses.iter()) {
                if !self.contains(conn.target) {
                    return Err(MapError::Malformed(format!(
                        "room {} links to {} outside the grid",
                        pos, conn.target
                    )));
                }
            }
        }
        Ok(())
    }
}

fn blank_rooms(width: usize, height: usize) -> Vec<Vec<Room>> {
    vec![vec![Room::default(); height]; width]
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: GridPos = GridPos { x: 0, y: 0 };
    const B: GridPos = GridPos { x: 1, y: 0 };

    #[test]
    fn test_new_document_is_dense_and_blank() {
        for w in 1..=50 {
            for h in 1..=50 {
                let doc = Document::new(w, h);
                assert_eq!(doc.rooms().count(), w * h, "{}x{}", w, h);
                assert_eq!(doc.num_rooms(), w * h);
                assert!(doc.rooms().all(|(_, room)| room.is_blank()));
                assert!(doc.validate().is_ok());
            }
        }
    }

    #[test]
    fn test_rooms_indexed_by_x_then_y() {
        let doc = Document::new(3, 2);
        assert_eq!(doc.rooms.len(), 3);
        assert!(doc.rooms.iter().all(|column| column.len() == 2));
        assert!(doc.room(GridPos::new(2, 1)).is_some());
        assert!(doc.room(GridPos::new(1, 2)).is_none());
    }

    #[test]
    fn test_one_way_connection() {
        let mut doc = Document::new(2, 1);
        doc.connect(A, B, Direction::E, ConnectionMode::OneWay).unwrap();

        let a = doc.room(A).unwrap();
        let b = doc.room(B).unwrap();
        assert_eq!(a.egresses, vec![Connection::new(Direction::E, B)]);
        assert_eq!(b.ingresses, vec![Connection::new(Direction::E, A)]);
        assert!(a.ingresses.is_empty());
        assert!(b.egresses.is_empty());
    }

    #[test]
    fn test_two_way_connection_keeps_direction_verbatim() {
        let mut doc = Document::new(2, 1);
        doc.connect(A, B, Direction::E, ConnectionMode::TwoWay).unwrap();

        let a = doc.room(A).unwrap();
        let b = doc.room(B).unwrap();
        assert_eq!(a.egresses, vec![Connection::new(Direction::E, B)]);
        assert_eq!(a.ingresses, vec![Connection::new(Direction::E, B)]);
        assert_eq!(b.egresses, vec![Connection::new(Direction::E, A)]);
        assert_eq!(b.ingresses, vec![Connection::new(Direction::E, A)]);
    }

    #[test]
    fn test_repeated_connection_appends_duplicates() {
        let mut doc = Document::new(2, 1);
        doc.connect(A, B, Direction::E, ConnectionMode::OneWay).unwrap();
        doc.connect(A, B, Direction::E, ConnectionMode::OneWay).unwrap();
        assert_eq!(doc.room(A).unwrap().egresses.len(), 2);
        assert_eq!(doc.room(B).unwrap().ingresses.len(), 2);
    }

    #[test]
    fn test_invalid_connections_leave_map_untouched() {
        let mut doc = Document::new(2, 1);
        let before = doc.clone();

        assert!(matches!(
            doc.connect(A, A, Direction::Undetermined, ConnectionMode::OneWay),
            Err(MapError::SelfConnection(_))
        ));
        assert!(matches!(
            doc.connect(A, GridPos::new(5, 0), Direction::E, ConnectionMode::TwoWay),
            Err(MapError::OutOfBounds { .. })
        ));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_replace_room() {
        let mut doc = Document::new(2, 2);
        let room = Room {
            name: "Hall".into(),
            inventory: vec!["sword".into()],
            has_weather: true,
            ..Room::default()
        };
        doc.replace_room(GridPos::new(1, 1), room.clone()).unwrap();
        assert_eq!(doc.room(GridPos::new(1, 1)), Some(&room));
        assert!(doc.replace_room(GridPos::new(2, 0), room).is_err());
    }

    #[test]
    fn test_reset_keeps_dimensions() {
        let mut doc = Document::new(4, 3);
        doc.connect(A, B, Direction::E, ConnectionMode::TwoWay).unwrap();
        doc.room_mut(GridPos::new(3, 2)).unwrap().name = "Vault".into();

        doc.reset();
        assert_eq!(doc, Document::new(4, 3));
        assert_eq!((doc.width(), doc.height()), (4, 3));
    }

    #[test]
    fn test_validate_rejects_ragged_grid() {
        let mut doc = Document::new(2, 2);
        doc.rooms[1].pop();
        assert!(matches!(doc.validate(), Err(MapError::Malformed(_))));
    }

    #[test]
    fn test_validate_rejects_dangling_target() {
        let mut doc = Document::new(2, 2);
        doc.room_mut(A)
            .unwrap()
            .egresses
            .push(Connection::new(Direction::E, GridPos::new(9, 9)));
        assert!(matches!(doc.validate(), Err(MapError::Malformed(_))));
    }
}
