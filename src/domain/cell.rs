//! Cell states and the Wireworld transition rule
//!
//! Four states, numbered the way the host sees them through the wasm ABI:
//! 0 = empty, 1 = wire, 2 = electron head, 3 = electron tail.
//! `Empty` is never stored; a position without a cell is empty.

pub type StateId = u8;

pub const ST_EMPTY: StateId = 0;
pub const ST_WIRE: StateId = 1;
pub const ST_HEAD: StateId = 2;
pub const ST_TAIL: StateId = 3;

pub const STATE_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Wire,
    Head,
    Tail,
}

impl CellState {
    pub const ALL: [CellState; STATE_COUNT] = [
        CellState::Empty,
        CellState::Wire,
        CellState::Head,
        CellState::Tail,
    ];

    /// Unknown ids decode to `Empty`
    pub fn from_id(id: StateId) -> Self {
        match id {
            ST_WIRE => CellState::Wire,
            ST_HEAD => CellState::Head,
            ST_TAIL => CellState::Tail,
            _ => CellState::Empty,
        }
    }

    pub fn id(self) -> StateId {
        match self {
            CellState::Empty => ST_EMPTY,
            CellState::Wire => ST_WIRE,
            CellState::Head => ST_HEAD,
            CellState::Tail => ST_TAIL,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.id() as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Wire => "wire",
            CellState::Head => "head",
            CellState::Tail => "tail",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "empty" | "none" => Ok(CellState::Empty),
            "wire" => Ok(CellState::Wire),
            "head" => Ok(CellState::Head),
            "tail" => Ok(CellState::Tail),
            other => Err(format!("unknown cell state: {}", other)),
        }
    }

    #[inline]
    pub fn is_live(self) -> bool {
        self != CellState::Empty
    }

    /// Next generation of a live cell given how many of its Moore
    /// neighbors are heads in the current generation.
    ///
    /// Wire becomes a head with exactly one or two head neighbors.
    /// Head always decays to tail, tail always returns to wire.
    #[inline]
    pub fn next(self, head_neighbors: u8) -> Self {
        match self {
            CellState::Wire => {
                if head_neighbors == 1 || head_neighbors == 2 {
                    CellState::Head
                } else {
                    CellState::Wire
                }
            }
            CellState::Head => CellState::Tail,
            CellState::Tail => CellState::Wire,
            CellState::Empty => CellState::Empty,
        }
    }
}
