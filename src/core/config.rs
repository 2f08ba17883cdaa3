use super::ship::ShipDef;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 6;

/// The fleet both sides place every game, in placement order.
pub const FLEET: [ShipDef; NUM_SHIPS] = [
    ShipDef::new("Aircraft Carrier", 5),
    ShipDef::new("Cruiser", 4),
    ShipDef::new("Destroyer", 3),
    ShipDef::new("Destroyer", 3),
    ShipDef::new("Submarine", 2),
    ShipDef::new("Submarine", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2 + 2;

/// Presentation pacing before the opponent's reply is shown, in milliseconds.
/// Game logic never waits on it.
pub const OPPONENT_DELAY_MS: u64 = 500;

