use generational_arena::{Arena, Index};
use std::collections::HashSet;
use std::fmt;
use tracing::instrument;

use crate::direction::Direction;
use crate::errors::{MansionError, MansionResult};

/// A room of the mansion: one node of the binary tree.
#[derive(Debug, Clone)]
pub struct Room {
    name: String,
    parent: Option<Index>,
    left: Option<Index>,
    right: Option<Index>,
}

impl Room {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the room this one was entered from, None for the entrance
    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn left(&self) -> Option<Index> {
        self.left
    }

    pub fn right(&self) -> Option<Index> {
        self.right
    }

    pub fn child(&self, direction: Direction) -> Option<Index> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// A room without exits ends the exploration.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn slot_mut(&mut self, direction: Direction) -> &mut Option<Index> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-backed binary tree of rooms.
///
/// Rooms reference each other by generational `Index` handles. Every child slot holds a room
/// exclusively: `attach` refuses to fill a slot twice, to give a room a second parent, or to
/// close a cycle. The first inserted room is the entrance (root).
#[derive(Debug, Default)]
pub struct MansionArena {
    arena: Arena<Room>,
    root: Option<Index>,
}

impl MansionArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_room(&mut self, name: &str) -> Index {
        let idx = self.arena.insert(Room::new(name));
        if self.root.is_none() {
            self.root = Some(idx);
        }
        idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, direction: Direction, child: Index) -> MansionResult<()> {
        let child_room = self.get(child).ok_or(MansionError::UnknownRoom(child))?;
        if child_room.parent.is_some() || Some(child) == self.root {
            return Err(MansionError::AlreadyAttached(child_room.name.clone()));
        }
        let parent_room = self.get(parent).ok_or(MansionError::UnknownRoom(parent))?;
        if parent_room.child(direction).is_some() {
            return Err(MansionError::SlotOccupied {
                parent: parent_room.name.clone(),
                direction,
            });
        }
        if self.path_to(parent).contains(&child) {
            return Err(MansionError::Cycle(child_room.name.clone()));
        }

        if let Some(parent_room) = self.arena.get_mut(parent) {
            *parent_room.slot_mut(direction) = Some(child);
        }
        if let Some(child_room) = self.arena.get_mut(child) {
            child_room.parent = Some(parent);
        }
        Ok(())
    }

    pub fn get(&self, idx: Index) -> Option<&Room> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn child(&self, idx: Index, direction: Direction) -> Option<Index> {
        self.get(idx).and_then(|room| room.child(direction))
    }

    pub fn is_leaf(&self, idx: Index) -> bool {
        self.get(idx).is_some_and(Room::is_leaf)
    }

    pub fn name(&self, idx: Index) -> Option<&str> {
        self.get(idx).map(Room::name)
    }

    /// Looks a room up by its name (first match in pre-order).
    pub fn find(&self, name: &str) -> Option<Index> {
        self.iter()
            .find(|(_, room)| room.name == name)
            .map(|(idx, _)| idx)
    }

    /// Rooms from the entrance down to `idx`, both included.
    pub fn path_to(&self, idx: Index) -> Vec<Index> {
        let mut path = Vec::new();
        let mut current = Some(idx);
        while let Some(current_idx) = current {
            match self.get(current_idx) {
                Some(room) => {
                    path.push(current_idx);
                    current = room.parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }

    /// Names of rooms the pre-order walk from the entrance never reaches, in insertion order.
    pub fn unreachable_rooms(&self) -> Vec<String> {
        let reachable: HashSet<Index> = self.iter().map(|(idx, _)| idx).collect();
        self.arena
            .iter()
            .filter(|(idx, _)| !reachable.contains(idx))
            .map(|(_, room)| room.name.clone())
            .collect()
    }

    /// Pre-order traversal, left exit before right exit.
    pub fn iter(&self) -> RoomIterator<'_> {
        RoomIterator::new(self)
    }

    /// Number of rooms on the longest path from the entrance, 0 for an empty mansion.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        match self.root {
            Some(root) => self.calculate_depth(root),
            None => 0,
        }
    }

    fn calculate_depth(&self, idx: Index) -> usize {
        match self.get(idx) {
            Some(room) => {
                1 + Direction::ALL
                    .iter()
                    .filter_map(|&direction| room.child(direction))
                    .map(|child| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Names of all rooms without exits, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, room)| room.is_leaf())
            .map(|(_, room)| room.name.clone())
            .collect()
    }
}

pub struct RoomIterator<'a> {
    mansion: &'a MansionArena,
    stack: Vec<Index>,
}

impl<'a> RoomIterator<'a> {
    fn new(mansion: &'a MansionArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = mansion.root() {
            stack.push(root);
        }
        Self { mansion, stack }
    }
}

impl<'a> Iterator for RoomIterator<'a> {
    type Item = (Index, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(room) = self.mansion.get(current_idx) {
                // Right first so the left exit pops first
                if let Some(right) = room.right {
                    self.stack.push(right);
                }
                if let Some(left) = room.left {
                    self.stack.push(left);
                }
                return Some((current_idx, room));
            }
        }
        None
    }
}
