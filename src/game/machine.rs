//! The match state machine.
//!
//! A `Match` owns the players, the shared deck and the turn pointer, and is
//! the only way to mutate them. Every operation validates before it mutates:
//! a rejected call leaves the match exactly as it was.
//!
//! ## Turn advance
//!
//! The turn passes in two ways with different side effects:
//!
//! - `end_turn` ends the current player's turn and starts the opponent's,
//!   which hard-resets the opponent's energy.
//! - a successful `play_card` hands the turn to the opponent directly, with
//!   no end/start pair, so the opponent keeps whatever energy they had.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use codeclash::cards::{CardCatalog, CardKind, CardTemplate};
//! use codeclash::core::EngineConfig;
//! use codeclash::effects::Effect;
//! use codeclash::game::{Match, PlayOutcome};
//!
//! let catalog = CardCatalog::new(vec![CardTemplate::new("Print Function", CardKind::Function)
//!     .with_energy_cost(1)
//!     .with_effect(Effect::damage(1))])
//! .unwrap();
//!
//! let mut game = Match::new(Arc::new(catalog), EngineConfig::default().with_seed(1));
//! game.start(&["A", "B"]).unwrap();
//!
//! let outcome = game.play_card("A", "Print Function").unwrap();
//! assert_eq!(outcome, PlayOutcome::Continue { next_player: "B".to_string() });
//! assert_eq!(game.player("A").unwrap().energy(), 9);
//! assert_eq!(game.player("B").unwrap().health(), 99);
//! ```

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashSet;

use super::snapshot::{MatchPhase, MatchSnapshot, PlayerSnapshot};
use crate::cards::CardCatalog;
use crate::core::{
    Action, ActionRecord, EngineConfig, GameLogger, GameRng, PlayerId, PlayerMap, PlayerState,
};
use crate::effects::{EffectResolver, Resolution, ResolverContext};
use crate::error::{EngineError, Result};
use crate::rules::{
    check_playable, GameGoal, GameResult, GoalCheck, GoalGenerator, InertGoalCheck, NeverWins,
    WinRule,
};
use crate::zones::Deck;

/// Result of a successful `play_card`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The turn passed to `next_player`.
    Continue { next_player: String },
    /// The actor won; the match is now frozen.
    Won { winner: String },
}

impl PlayOutcome {
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            PlayOutcome::Won { winner } => Some(GameResult::Winner(winner.clone())),
            PlayOutcome::Continue { .. } => None,
        }
    }
}

/// How the turn is being handed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAdvance {
    /// After a successful play: pointer moves, no turn hooks run.
    ViaPlay,
    /// Explicit end of turn: `end_turn` on the leaver, `start_turn` on the next player.
    ViaEndTurn,
}

fn rejected(logger: &GameLogger, err: EngineError) -> EngineError {
    logger.minimal("rules", format!("Rejected: {}", err));
    err
}

/// First seat other than `seat`.
fn opponent_of(players: &PlayerMap<PlayerState>, seat: PlayerId) -> Option<PlayerId> {
    players.player_ids().find(|&id| id != seat)
}

#[derive(Debug)]
pub struct Match {
    catalog: Arc<CardCatalog>,
    config: EngineConfig,
    rng: GameRng,
    phase: MatchPhase,
    players: Option<PlayerMap<PlayerState>>,
    deck: Deck,
    current: PlayerId,
    goal: Option<GameGoal>,
    win_rule: Box<dyn WinRule>,
    goal_check: Box<dyn GoalCheck>,
    history: Vector<ActionRecord>,
    turn: u32,
    logger: GameLogger,
}

impl Match {
    /// An unstarted match over `catalog`.
    ///
    /// Seeds from `config.seed`, or from OS entropy when unset.
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, config: EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Deck::new(Arc::clone(&catalog), rng.for_context("deck"));
        let logger = GameLogger::new(config.verbosity, config.output_mode);

        Self {
            catalog,
            config,
            rng,
            phase: MatchPhase::Uninitialized,
            players: None,
            deck,
            current: PlayerId::new(0),
            goal: None,
            win_rule: Box::new(NeverWins),
            goal_check: Box::new(InertGoalCheck),
            history: Vector::new(),
            turn: 0,
            logger,
        }
    }

    /// Replace the win rule.
    #[must_use]
    pub fn with_win_rule(mut self, rule: impl WinRule + 'static) -> Self {
        self.win_rule = Box::new(rule);
        self
    }

    /// Replace the goal check.
    #[must_use]
    pub fn with_goal_check(mut self, check: impl GoalCheck + 'static) -> Self {
        self.goal_check = Box::new(check);
        self
    }

    // === Operations ===

    /// Deal a fresh match for `names`, in join order.
    ///
    /// Each player's full hand is dealt before the next player's, then the
    /// deck is shuffled once. Calling `start` again discards the old match.
    pub fn start<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let names = self.validate_names(names)?;

        let mut deck = Deck::new(Arc::clone(&self.catalog), self.rng.for_context("deck"));
        let mut states = Vec::with_capacity(names.len());
        for name in &names {
            let mut state = PlayerState::new(name.clone(), &self.config);
            for _ in 0..self.config.hand_size {
                deck.deal_to(&mut state, &self.logger);
            }
            states.push(state);
        }
        deck.shuffle();

        let goal = GoalGenerator::random(&mut self.rng.for_context("goal"));
        self.logger.normal(
            "match",
            format!(
                "Match initialized with players: {}. Goal: {}",
                names.join(", "),
                goal.description
            ),
        );

        self.deck = deck;
        self.players = Some(PlayerMap::from_vec(states));
        self.current = PlayerId::new(0);
        self.goal = Some(goal);
        self.phase = MatchPhase::Active;
        self.turn = 1;
        self.history = Vector::new();
        self.record(Action::Start { players: names });
        Ok(())
    }

    /// Reset every player's energy, top hands up to the hand size and give
    /// the turn back to the first player.
    ///
    /// Played and discard piles, health and oversized hands are untouched.
    pub fn start_new_round(&mut self) -> Result<()> {
        self.ensure_active()?;
        let hand_size = self.config.hand_size;
        let players = self.players.as_mut().ok_or(EngineError::NotStarted)?;

        for (_, player) in players.iter_mut() {
            player.start_turn();
            while player.hand().len() < hand_size {
                self.deck.deal_to(player, &self.logger);
            }
        }

        self.current = PlayerId::new(0);
        self.turn += 1;
        self.logger.normal("match", "Started new round");
        self.record(Action::NewRound);
        Ok(())
    }

    /// End `player_name`'s turn and start the opponent's.
    pub fn end_turn(&mut self, player_name: &str) -> Result<()> {
        self.ensure_active()?;
        let seat = self.ensure_turn(player_name)?;
        let players = self.players.as_ref().ok_or(EngineError::NotStarted)?;
        let next = opponent_of(players, seat).ok_or_else(|| {
            rejected(&self.logger, EngineError::NoOpponent(player_name.to_string()))
        })?;

        self.advance_turn(seat, next, TurnAdvance::ViaEndTurn);
        self.logger.normal(
            "match",
            format!("{} ended turn, {} to play", player_name, self.seat_name(next)),
        );
        self.record(Action::EndTurn {
            player: player_name.to_string(),
        });
        Ok(())
    }

    /// Play `card_name` from `player_name`'s hand against the opponent.
    ///
    /// Checks run in order: turn ownership, player, card in hand, legality,
    /// opponent. Only then is the cost paid, the effects applied and the card
    /// moved to the played pile. A win freezes the match with the turn left at
    /// the winner; otherwise the turn passes to the opponent.
    pub fn play_card(&mut self, player_name: &str, card_name: &str) -> Result<PlayOutcome> {
        self.ensure_active()?;
        self.ensure_turn(player_name)?;

        let catalog = Arc::clone(&self.catalog);
        let logger = &self.logger;
        let players = self.players.as_mut().ok_or(EngineError::NotStarted)?;

        let seat = players
            .position(|p| p.name() == player_name)
            .ok_or_else(|| rejected(logger, EngineError::PlayerNotFound(player_name.to_string())))?;

        let handle = players[seat]
            .find_in_hand(&catalog, card_name)
            .ok_or_else(|| {
                rejected(
                    logger,
                    EngineError::CardNotInHand {
                        player: player_name.to_string(),
                        card: card_name.to_string(),
                    },
                )
            })?;
        let card = &catalog[handle];

        check_playable(&players[seat], card, &catalog).map_err(|reason| {
            rejected(
                logger,
                EngineError::IllegalPlay {
                    player: player_name.to_string(),
                    card: card_name.to_string(),
                    reason,
                },
            )
        })?;

        let opponent = opponent_of(players, seat).ok_or_else(|| {
            rejected(logger, EngineError::NoOpponent(player_name.to_string()))
        })?;

        let (actor, target) = players.pair_mut(seat, opponent);
        let mut context = ResolverContext::new(&mut self.deck, logger);
        let resolution: Resolution =
            EffectResolver::apply_card_effect(actor, target, card, &mut context);
        actor.move_to_played(&catalog, card);
        let won = self.win_rule.has_won(actor, target);
        let opponent_name = target.name().to_string();

        logger.normal(
            "match",
            format!(
                "{} played {} (spent {} energy, drew {})",
                player_name,
                card.name,
                resolution.energy_spent,
                resolution.drawn.len()
            ),
        );

        self.record(Action::PlayCard {
            player: player_name.to_string(),
            card: card.name.clone(),
        });

        if won {
            self.logger
                .minimal("match", format!("{} has won the match", player_name));
            self.phase = MatchPhase::Won {
                winner: player_name.to_string(),
            };
            return Ok(PlayOutcome::Won {
                winner: player_name.to_string(),
            });
        }

        self.advance_turn(seat, opponent, TurnAdvance::ViaPlay);
        Ok(PlayOutcome::Continue {
            next_player: opponent_name,
        })
    }

    /// Re-run `action` as if called directly. Used to replay a history
    /// against a match with the same seed.
    pub fn apply(&mut self, action: &Action) -> Result<Option<PlayOutcome>> {
        match action {
            Action::Start { players } => self.start(players.as_slice()).map(|()| None),
            Action::PlayCard { player, card } => self.play_card(player, card).map(Some),
            Action::EndTurn { player } => self.end_turn(player).map(|()| None),
            Action::NewRound => self.start_new_round().map(|()| None),
        }
    }

    // === Queries ===

    /// Snapshot of the named player.
    pub fn find_player(&self, name: &str) -> Result<PlayerSnapshot> {
        self.player(name)
            .map(|p| PlayerSnapshot::capture(p, &self.catalog))
    }

    /// The named player's live state.
    pub fn player(&self, name: &str) -> Result<&PlayerState> {
        let players = self.players.as_ref().ok_or(EngineError::NotStarted)?;
        players
            .values()
            .find(|p| p.name() == name)
            .ok_or_else(|| EngineError::PlayerNotFound(name.to_string()))
    }

    /// Players in join order; empty before `start`.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().flat_map(|map| map.values())
    }

    /// Whose turn it is; `None` before `start`.
    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.players
            .as_ref()
            .map(|players| players[self.current].name())
    }

    /// Whether the named player has achieved the match goal.
    pub fn goal_achieved(&self, name: &str) -> Result<bool> {
        let player = self.player(name)?;
        Ok(self
            .goal
            .as_ref()
            .map_or(false, |goal| self.goal_check.is_achieved(goal, player)))
    }

    #[must_use]
    pub fn status(&self) -> MatchSnapshot {
        MatchSnapshot {
            phase: self.phase.clone(),
            players: self
                .players()
                .map(|p| PlayerSnapshot::capture(p, &self.catalog))
                .collect(),
            current_player: self.current_player_name().map(str::to_string),
            goal: self.goal.clone(),
            deck_remaining: self.deck.remaining_count(),
            winner: self.phase.winner().map(str::to_string),
            turn: self.turn,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &MatchPhase {
        &self.phase
    }

    #[must_use]
    pub fn goal(&self) -> Option<&GameGoal> {
        self.goal.as_ref()
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining_count()
    }

    /// Every successful operation since the last `start`.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn logger(&self) -> &GameLogger {
        &self.logger
    }

    // === Internals ===

    fn validate_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>> {
        if names.is_empty() {
            return Err(rejected(
                &self.logger,
                EngineError::InvalidInput("player list is empty".to_string()),
            ));
        }
        if names.len() > usize::from(u8::MAX) {
            return Err(rejected(
                &self.logger,
                EngineError::InvalidInput(format!("too many players: {}", names.len())),
            ));
        }

        let mut seen = FxHashSet::default();
        for name in names {
            let name = name.as_ref();
            if name.trim().is_empty() {
                return Err(rejected(
                    &self.logger,
                    EngineError::InvalidInput("player name is blank".to_string()),
                ));
            }
            if !seen.insert(name) {
                return Err(rejected(
                    &self.logger,
                    EngineError::InvalidInput(format!("duplicate player name: {}", name)),
                ));
            }
        }

        Ok(names.iter().map(|n| n.as_ref().to_string()).collect())
    }

    fn ensure_active(&self) -> Result<()> {
        match &self.phase {
            MatchPhase::Active => Ok(()),
            MatchPhase::Uninitialized => Err(rejected(&self.logger, EngineError::NotStarted)),
            MatchPhase::Won { winner } => Err(rejected(
                &self.logger,
                EngineError::MatchOver {
                    winner: winner.clone(),
                },
            )),
        }
    }

    /// The seat of `player_name` if it holds the turn.
    fn ensure_turn(&self, player_name: &str) -> Result<PlayerId> {
        let current = self.current_player_name().ok_or(EngineError::NotStarted)?;
        if current != player_name {
            return Err(rejected(
                &self.logger,
                EngineError::WrongTurn {
                    player: player_name.to_string(),
                    current: current.to_string(),
                },
            ));
        }
        Ok(self.current)
    }

    fn advance_turn(&mut self, from: PlayerId, to: PlayerId, via: TurnAdvance) {
        if let Some(players) = self.players.as_mut() {
            if via == TurnAdvance::ViaEndTurn {
                players[from].end_turn();
                players[to].start_turn();
            }
        }
        self.current = to;
        self.turn += 1;
    }

    fn seat_name(&self, seat: PlayerId) -> &str {
        self.players
            .as_ref()
            .map_or("", |players| players[seat].name())
    }

    fn record(&mut self, action: Action) {
        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history
            .push_back(ActionRecord::new(action, self.turn, sequence));
    }
}
