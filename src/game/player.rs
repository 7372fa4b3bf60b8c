/// One of the two seats at the board. Cells record the seat that occupies
/// them; display attributes live on [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index into a two-element array (One = 0, Two = 1)
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Display attributes for a player. Neither field is interpreted by the
/// game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub color: String,
}

impl Player {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::One.other(), Seat::Two);
        assert_eq!(Seat::Two.other(), Seat::One);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::One.index(), 0);
        assert_eq!(Seat::Two.index(), 1);
    }

    #[test]
    fn test_player_attributes_are_opaque() {
        let player = Player::new("", "#not-a-color");
        assert_eq!(player.name, "");
        assert_eq!(player.color, "#not-a-color");
    }
}
