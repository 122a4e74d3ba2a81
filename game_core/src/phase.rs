//! Match phase state machine
//!
//! Playing ⇄ Paused on the pause toggle, Playing → GameOver once a side
//! reaches the winning score, GameOver or Paused → Playing on restart.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Paused,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseAction {
    TogglePause,
    ReachWinningScore,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: PhaseAction,
}

impl Phase {
    /// Get next phase for a given action (if valid)
    pub fn next(self, action: PhaseAction) -> Option<Phase> {
        match (self, action) {
            (Phase::Playing, PhaseAction::TogglePause) => Some(Phase::Paused),
            (Phase::Playing, PhaseAction::ReachWinningScore) => Some(Phase::GameOver),

            (Phase::Paused, PhaseAction::TogglePause) => Some(Phase::Playing),
            (Phase::Paused, PhaseAction::Restart) => Some(Phase::Playing),

            (Phase::GameOver, PhaseAction::Restart) => Some(Phase::Playing),

            // Invalid transition
            _ => None,
        }
    }

    /// Attempt a transition in place
    pub fn transition(&mut self, action: PhaseAction) -> Transition {
        let from = *self;
        match from.next(action) {
            Some(to) => {
                *self = to;
                Transition {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => Transition {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    /// Only this phase advances the simulation
    pub fn is_playing(self) -> bool {
        self == Phase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(Phase::default(), Phase::Playing);
    }

    #[test]
    fn test_pause_round_trip() {
        let mut phase = Phase::Playing;
        assert!(phase.transition(PhaseAction::TogglePause).success);
        assert_eq!(phase, Phase::Paused);
        assert!(phase.transition(PhaseAction::TogglePause).success);
        assert_eq!(phase, Phase::Playing);
    }

    #[test]
    fn test_invalid_transition() {
        let mut phase = Phase::Playing;
        let result = phase.transition(PhaseAction::Restart);
        assert!(!result.success);
        assert_eq!(result.to, Phase::Playing);
        assert_eq!(phase, Phase::Playing);
    }

    #[test]
    fn test_paused_ignores_win() {
        assert_eq!(Phase::Paused.next(PhaseAction::ReachWinningScore), None);
    }

    #[test]
    fn test_restart_from_paused() {
        let mut phase = Phase::Paused;
        let result = phase.transition(PhaseAction::Restart);
        assert!(result.success);
        assert_eq!(result.from, Phase::Paused);
        assert_eq!(result.action, PhaseAction::Restart);
        assert_eq!(phase, Phase::Playing);
    }

    #[test]
    fn test_game_over_flow() {
        let mut phase = Phase::Playing;
        phase.transition(PhaseAction::ReachWinningScore);
        assert_eq!(phase, Phase::GameOver);
        assert!(
            !phase.transition(PhaseAction::TogglePause).success,
            "Pause is ignored after game over"
        );
        phase.transition(PhaseAction::Restart);
        assert_eq!(phase, Phase::Playing);
    }
}
