//! The [`Cell`] type: one maze position with its search state.

/// Classification of a maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Open floor.
    #[default]
    Path,
    /// Impassable.
    Wall,
    /// The goal cell.
    Exit,
    /// Open floor that lies on the reconstructed shortest path.
    Marked,
}

impl Terrain {
    /// Map a maze file glyph to its terrain. Only the three input glyphs
    /// are accepted; `'.'` is an output-only glyph.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Self::Path),
            '#' => Some(Self::Wall),
            'o' => Some(Self::Exit),
            _ => None,
        }
    }

    /// Character representation of the terrain.
    pub const fn glyph(self) -> char {
        match self {
            Self::Path => ' ',
            Self::Wall => '#',
            Self::Exit => 'o',
            Self::Marked => '.',
        }
    }

    /// Whether the search may step onto this terrain.
    #[inline]
    pub const fn passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// A maze cell: terrain plus the state written by the pathfinder.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub terrain: Terrain,
    /// Whether the traversal has ever assigned a distance here.
    pub visited: bool,
    /// Fewest steps from the start found so far.
    pub distance: u32,
    /// Whether the cell is currently believed to lead to the exit.
    pub on_path: bool,
}

impl Cell {
    /// A fresh, unvisited cell with the given terrain.
    #[inline]
    pub const fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            visited: false,
            distance: 0,
            on_path: false,
        }
    }

    /// Forget everything the search recorded, keeping the terrain.
    #[inline]
    pub fn clear_search(&mut self) {
        self.visited = false;
        self.distance = 0;
        self.on_path = false;
    }

    #[inline]
    pub const fn glyph(&self) -> char {
        self.terrain.glyph()
    }
}
