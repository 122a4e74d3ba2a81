/// One end of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // left, human controlled
    Computer, // right, AI controlled
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub computer: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub fn has_winner(&self, winning_score: u32) -> Option<Side> {
        if self.player >= winning_score {
            Some(Side::Player)
        } else if self.computer >= winning_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> Option<Side> {
        if self.player_scored {
            Some(Side::Player)
        } else if self.computer_scored {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Computer);
        score.increment(Side::Computer);
        assert_eq!(score.player, 1);
        assert_eq!(score.computer, 2);
        assert_eq!(score.get(Side::Computer), 2);
    }

    #[test]
    fn test_score_has_winner_player() {
        let mut score = Score::new();
        for _ in 0..11 {
            score.increment(Side::Player);
        }
        assert_eq!(
            score.has_winner(11),
            Some(Side::Player),
            "Player should win at 11"
        );
    }

    #[test]
    fn test_score_has_winner_computer() {
        let score = Score {
            player: 3,
            computer: 11,
        };
        assert_eq!(score.has_winner(11), Some(Side::Computer));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score {
            player: 10,
            computer: 10,
        };
        assert_eq!(score.has_winner(11), None, "No winner below threshold");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events {
            player_scored: true,
            computer_scored: true,
            ball_hit_paddle: true,
            ball_hit_wall: true,
        };

        events.clear();

        assert_eq!(events, Events::new());
        assert_eq!(events.scored(), None);
    }
}
