//! Caller-side game driver.

use im::Vector;
use tracing::{debug, info, warn};

use crate::core::error::{EngineError, EngineResult};
use crate::core::{DieSource, GameConfig, GameRng, GameState, PlayerId, RollRecord};
use crate::rules::{RollReport, RulesEngine, SnakesAndLadders};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingRoll {
    player: PlayerId,
    die: u8,
}

/// One game in progress: engine, current state, dice, and roll history.
///
/// Rolls go through two steps so the presentation layer can show a rolling
/// die before the token moves:
///
/// ```
/// use snakes_ladders::core::{FixedDice, GameConfig, PlayerId};
/// use snakes_ladders::rules::Outcome;
/// use snakes_ladders::session::GameSession;
///
/// let mut session = GameSession::new(GameConfig::default(), FixedDice::new([6, 4])).unwrap();
///
/// let die = session.begin_roll(PlayerId::new(0)).unwrap();
/// assert_eq!(die, 6);
/// assert!(session.is_rolling());
///
/// let report = session.finish_roll().unwrap();
/// assert_eq!(report.outcome, Outcome::RolledSix);
/// assert_eq!(session.state().position(PlayerId::new(0)).get(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<D: DieSource = GameRng> {
    engine: SnakesAndLadders,
    state: GameState,
    dice: D,
    pending: Option<PendingRoll>,
    history: Vector<RollRecord>,
}

impl GameSession<GameRng> {
    /// Session with seeded dice.
    pub fn seeded(config: GameConfig, seed: u64) -> EngineResult<Self> {
        Self::new(config, GameRng::new(seed))
    }
}

impl<D: DieSource> GameSession<D> {
    pub fn new(config: GameConfig, dice: D) -> EngineResult<Self> {
        let engine = SnakesAndLadders::new(config)?;
        let state = engine.initial_state();
        Ok(Self {
            engine,
            state,
            dice,
            pending: None,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn engine(&self) -> &SnakesAndLadders {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Accepted rolls since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RollRecord> {
        &self.history
    }

    /// Whether a die has been drawn but not yet applied.
    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.pending.is_some()
    }

    /// The drawn-but-unapplied die, if any.
    #[must_use]
    pub fn pending_die(&self) -> Option<u8> {
        self.pending.map(|p| p.die)
    }

    /// Whether `player` could start a roll now.
    #[must_use]
    pub fn can_roll(&self, player: PlayerId) -> bool {
        !self.is_rolling() && self.engine.can_roll_as(&self.state, player)
    }

    /// Draw a die for `player` without moving anything yet.
    pub fn begin_roll(&mut self, player: PlayerId) -> EngineResult<u8> {
        if let Some(pending) = self.pending {
            debug!(player = %player, pending = %pending.player, "roll refused, one already in flight");
            return Err(EngineError::RollInFlight { player: pending.player });
        }
        self.engine.check_turn(&self.state, player)?;

        let die = self.dice.roll();
        self.pending = Some(PendingRoll { player, die });
        debug!(player = %player, die, "die drawn");
        Ok(die)
    }

    /// Apply the drawn die.
    ///
    /// The pending roll is consumed even when the engine rejects it, so a bad
    /// die from the source cannot wedge the session.
    pub fn finish_roll(&mut self) -> EngineResult<RollReport> {
        let pending = self.pending.take().ok_or(EngineError::NoRollPending)?;

        let (next, report) = match self.engine.apply_roll(&self.state, pending.player, pending.die) {
            Ok(applied) => applied,
            Err(err) => {
                warn!(player = %pending.player, die = pending.die, error = %err, "drawn die rejected");
                return Err(err);
            }
        };

        let sequence = self.state.roll_count();
        self.history.push_back(RollRecord::from_report(&report, sequence));
        self.state = next;
        Ok(report)
    }

    /// Drop a drawn die without applying it.
    pub fn cancel_roll(&mut self) -> Option<u8> {
        self.pending.take().map(|p| p.die)
    }

    /// Draw and apply in one step.
    pub fn roll(&mut self, player: PlayerId) -> EngineResult<RollReport> {
        self.begin_roll(player)?;
        self.finish_roll()
    }

    /// Roll for whoever is active.
    pub fn roll_active(&mut self) -> EngineResult<RollReport> {
        self.roll(self.state.active_player())
    }

    /// Back to the starting position. History and any pending roll are
    /// discarded; the dice keep their sequence.
    pub fn reset(&mut self) {
        self.state = self.engine.reset();
        self.pending = None;
        self.history = Vector::new();
    }

    /// Roll for the active player until someone wins or `max_rolls` rolls
    /// have been applied. Returns the winner, if any.
    pub fn play_to_completion(&mut self, max_rolls: usize) -> EngineResult<Option<PlayerId>> {
        for _ in 0..max_rolls {
            if !self.engine.can_roll(&self.state) {
                break;
            }
            self.roll_active()?;
        }
        if let Some(winner) = self.state.winner() {
            info!(winner = %winner, rolls = self.state.roll_count(), "autoplay finished");
        }
        Ok(self.state.winner())
    }

    /// Give the die source back, e.g. to reuse a seeded RNG.
    pub fn into_dice(self) -> D {
        self.dice
    }
}

/// Rebuild a game from recorded die values, each applied for whoever was
/// active at the time.
///
/// ```
/// use snakes_ladders::core::{GameConfig, PlayerId};
/// use snakes_ladders::session::replay;
///
/// // Green needs a six, Red needs a six, Green rolls a six then a four.
/// let state = replay(&GameConfig::default(), [3, 2, 6, 4]).unwrap();
/// assert_eq!(state.position(PlayerId::new(0)).get(), 11);
/// assert_eq!(state.active_player(), PlayerId::new(1));
/// ```
pub fn replay(config: &GameConfig, dice: impl IntoIterator<Item = u8>) -> EngineResult<GameState> {
    let engine = SnakesAndLadders::new(config.clone())?;
    let mut state = engine.initial_state();
    for die in dice {
        let player = state.active_player();
        let (next, _) = engine.apply_roll(&state, player, die)?;
        state = next;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedDice;
    use crate::rules::Outcome;

    const GREEN: PlayerId = PlayerId::new(0);
    const RED: PlayerId = PlayerId::new(1);

    fn scripted(values: &[u8]) -> GameSession<FixedDice> {
        GameSession::new(GameConfig::default(), FixedDice::new(values.iter().copied())).unwrap()
    }

    #[test]
    fn test_second_roll_refused_while_in_flight() {
        let mut session = scripted(&[6]);
        session.begin_roll(GREEN).unwrap();

        assert_eq!(session.begin_roll(GREEN), Err(EngineError::RollInFlight { player: GREEN }));
        assert!(!session.can_roll(GREEN));
    }

    #[test]
    fn test_finish_without_begin() {
        let mut session = scripted(&[6]);
        assert_eq!(session.finish_roll(), Err(EngineError::NoRollPending));
    }

    #[test]
    fn test_out_of_turn_begin_draws_nothing() {
        let mut session = scripted(&[6, 1]);
        assert!(matches!(session.begin_roll(RED), Err(EngineError::InvalidRoll { .. })));
        assert!(!session.is_rolling());

        // The scripted six was not consumed.
        assert_eq!(session.begin_roll(GREEN), Ok(6));
    }

    #[test]
    fn test_pending_die_and_returned_dice() {
        let mut session = scripted(&[4, 5]);
        assert_eq!(session.pending_die(), None);

        session.begin_roll(GREEN).unwrap();
        assert_eq!(session.pending_die(), Some(4));
        session.finish_roll().unwrap();
        assert_eq!(session.pending_die(), None);

        // The script carries on where the session left it.
        let mut dice = session.into_dice();
        assert_eq!(dice.roll(), 5);
    }

    #[test]
    fn test_cancel_roll() {
        let mut session = scripted(&[5]);
        session.begin_roll(GREEN).unwrap();

        assert_eq!(session.cancel_roll(), Some(5));
        assert!(!session.is_rolling());
        assert_eq!(session.state().roll_count(), 0);
    }

    #[test]
    fn test_bad_die_from_source_is_rejected_and_cleared() {
        let mut session = scripted(&[9, 6]);
        session.begin_roll(GREEN).unwrap();

        assert_eq!(session.finish_roll(), Err(EngineError::InvalidDieValue { value: 9 }));
        assert!(!session.is_rolling());
        assert!(session.history().is_empty());

        assert_eq!(session.roll(GREEN).unwrap().outcome, Outcome::RolledSix);
    }

    #[test]
    fn test_history_records_every_roll() {
        let mut session = scripted(&[2, 6, 3]);

        session.roll(GREEN).unwrap();
        session.roll(RED).unwrap();
        session.roll(RED).unwrap();

        let history: Vec<_> = session.history().iter().copied().collect();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].outcome, Outcome::SkippedStart);
        assert_eq!(history[1].outcome, Outcome::RolledSix);
        assert_eq!(history[2].to.get(), 10);
        assert_eq!(
            history.iter().map(|r| r.sequence).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = scripted(&[6, 4]);
        session.roll(GREEN).unwrap();
        session.begin_roll(GREEN).unwrap();

        session.reset();

        assert_eq!(session.state(), &GameState::new(2));
        assert!(!session.is_rolling());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_seeded_games_finish_and_replay() {
        let mut session = GameSession::seeded(GameConfig::default(), 42).unwrap();
        let winner = session.play_to_completion(10_000).unwrap();

        assert!(winner.is_some());
        assert!(session.state().check_invariants().is_ok());

        let dice: Vec<u8> = session.history().iter().map(|r| r.die).collect();
        let replayed = replay(session.engine().config(), dice).unwrap();
        assert_eq!(&replayed, session.state());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = GameSession::seeded(GameConfig::default(), 7).unwrap();
        let mut b = GameSession::seeded(GameConfig::default(), 7).unwrap();

        a.play_to_completion(10_000).unwrap();
        b.play_to_completion(10_000).unwrap();

        assert_eq!(a.state(), b.state());
        assert_eq!(a.history(), b.history());
    }
}
