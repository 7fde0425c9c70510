//! Single-actor turn controller.

use std::collections::VecDeque;

use tracing::debug;

use super::error::TurnError;
use crate::combat::{Attack, AttackReport};
use crate::config::CombatConfig;
use crate::env::GridOracle;
use crate::movement::Pathfinder;
use crate::state::{Battlefield, EntityId, Position};

/// What the next click on the board means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    #[default]
    None,
    Move,
    /// Index into the actor's attack list.
    Attack(usize),
}

/// Result of a successful click.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    /// A walk was planned; consume it with [`PlayerTurn::step`].
    MovePlanned { path: Vec<Position> },
    Attacked(AttackReport),
}

/// Book-keeping for one actor's turn: one move and one attack, in any order.
#[derive(Clone, Debug)]
pub struct PlayerTurn {
    actor: EntityId,
    config: CombatConfig,
    selected: PlayerAction,
    moved: bool,
    attacked: bool,
    ended: bool,
    pending: VecDeque<Position>,
}

impl PlayerTurn {
    pub fn new(actor: EntityId, config: CombatConfig) -> Self {
        Self {
            actor,
            config,
            selected: PlayerAction::None,
            moved: false,
            attacked: false,
            ended: false,
            pending: VecDeque::new(),
        }
    }

    pub fn actor(&self) -> EntityId {
        self.actor
    }

    pub fn selected(&self) -> PlayerAction {
        self.selected
    }

    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn has_attacked(&self) -> bool {
        self.attacked
    }

    /// Cells still to walk, next one first.
    pub fn pending_path(&self) -> impl Iterator<Item = Position> + '_ {
        self.pending.iter().copied()
    }

    pub fn select(&mut self, action: PlayerAction) {
        debug!(actor = %self.actor, ?action, "action selected");
        self.selected = action;
    }

    /// Applies the selected action at `target`.
    ///
    /// The selection is cleared on success and kept on failure so the caller
    /// can retry with another cell.
    pub fn click<G: GridOracle>(
        &mut self,
        target: Position,
        battlefield: &mut Battlefield<G>,
        attacks: &[Attack],
    ) -> Result<TurnOutcome, TurnError> {
        if self.is_finished() {
            return Err(TurnError::TurnOver(self.actor));
        }

        let outcome = match self.selected {
            PlayerAction::None => return Err(TurnError::NoActionSelected),
            PlayerAction::Move => self.plan_move(target, battlefield)?,
            PlayerAction::Attack(slot) => self.attack(slot, target, battlefield, attacks)?,
        };
        self.selected = PlayerAction::None;
        Ok(outcome)
    }

    fn plan_move<G: GridOracle>(
        &mut self,
        target: Position,
        battlefield: &Battlefield<G>,
    ) -> Result<TurnOutcome, TurnError> {
        if self.moved {
            return Err(TurnError::AlreadyMoved);
        }
        let start = battlefield
            .unit(self.actor)
            .ok_or(TurnError::ActorMissing(self.actor))?
            .position;

        let path = Pathfinder::new(battlefield, &self.config)
            .for_unit(self.actor)
            .find_path(start, target);
        if path.len() < 2 {
            debug!(actor = %self.actor, target = %target, "move rejected: no path");
            return Err(TurnError::NoPath { target });
        }

        let steps = (path.len() - 1) as u32;
        if steps > self.config.move_budget {
            debug!(actor = %self.actor, target = %target, steps, "move rejected: over budget");
            return Err(TurnError::OutOfMoveBudget {
                target,
                steps,
                budget: self.config.move_budget,
            });
        }

        debug!(actor = %self.actor, from = %start, to = %target, steps, "move planned");
        self.moved = true;
        self.pending = path.iter().skip(1).copied().collect();
        Ok(TurnOutcome::MovePlanned { path })
    }

    fn attack<G: GridOracle>(
        &mut self,
        slot: usize,
        target: Position,
        battlefield: &mut Battlefield<G>,
        attacks: &[Attack],
    ) -> Result<TurnOutcome, TurnError> {
        if self.attacked {
            return Err(TurnError::AlreadyAttacked);
        }
        let attack = attacks.get(slot).ok_or(TurnError::UnknownAttack { slot })?;
        if !attack.is_valid(target, battlefield) {
            debug!(actor = %self.actor, attack = attack.name(), target = %target, "attack rejected");
            return Err(TurnError::InvalidTarget {
                attack: attack.name().to_owned(),
                target,
            });
        }

        let report = attack.execute(target, battlefield);
        self.attacked = true;
        Ok(TurnOutcome::Attacked(report))
    }

    /// Walks one cell of the planned path.
    ///
    /// Returns the actor's new position, or `None` once the path is used up.
    /// A step into a cell that became blocked drops the rest of the path.
    pub fn step<G: GridOracle>(
        &mut self,
        battlefield: &mut Battlefield<G>,
    ) -> Result<Option<Position>, TurnError> {
        let Some(next) = self.pending.pop_front() else {
            return Ok(None);
        };
        if let Err(err) = battlefield.move_unit(self.actor, next) {
            self.pending.clear();
            return Err(err.into());
        }
        Ok(Some(next))
    }

    /// Ends the turn early.
    pub fn end(&mut self) {
        debug!(actor = %self.actor, "turn ended");
        self.ended = true;
        self.selected = PlayerAction::None;
    }

    pub fn is_finished(&self) -> bool {
        self.ended || (self.moved && self.attacked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{AttackDefinition, AttackEffect, AttackType};
    use crate::env::TileGrid;
    use crate::error::{ErrorSeverity, GameError};
    use crate::state::{BattlefieldError, Unit};
    use crate::stats::StatBlock;

    const HERO: EntityId = EntityId(1);
    const DUMMY: EntityId = EntityId(2);

    fn setup() -> (Battlefield, Vec<Attack>) {
        let mut field = Battlefield::new(TileGrid::new(8, 8));
        field
            .spawn(Unit::new(HERO, Position::new(0, 0), 20, StatBlock::default()))
            .unwrap();
        field
            .spawn(Unit::new(DUMMY, Position::new(3, 0), 20, StatBlock::default()))
            .unwrap();
        let slash = AttackDefinition::new("slash", AttackType::Melee, AttackEffect::damage(4));
        (field, vec![Attack::new(slash, HERO).unwrap()])
    }

    fn walk(turn: &mut PlayerTurn, field: &mut Battlefield) -> Option<Position> {
        let mut last = None;
        while let Some(position) = turn.step(field).unwrap() {
            last = Some(position);
        }
        last
    }

    #[test]
    fn click_without_selection_fails() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());
        let err = turn.click(Position::new(1, 0), &mut field, &attacks).unwrap_err();
        assert_eq!(err, TurnError::NoActionSelected);
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
    }

    #[test]
    fn move_then_attack_finishes_turn() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());

        turn.select(PlayerAction::Move);
        let outcome = turn.click(Position::new(2, 0), &mut field, &attacks).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::MovePlanned {
                path: vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
            }
        );
        assert_eq!(turn.selected(), PlayerAction::None);
        assert_eq!(walk(&mut turn, &mut field), Some(Position::new(2, 0)));
        assert_eq!(field.unit(HERO).unwrap().position, Position::new(2, 0));

        turn.select(PlayerAction::Attack(0));
        let outcome = turn.click(Position::new(3, 0), &mut field, &attacks).unwrap();
        let TurnOutcome::Attacked(report) = outcome else {
            panic!("expected an attack outcome");
        };
        assert_eq!(report.total_damage(), 4);
        assert!(turn.is_finished());
    }

    #[test]
    fn second_move_is_rejected() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());

        turn.select(PlayerAction::Move);
        turn.click(Position::new(0, 1), &mut field, &attacks).unwrap();
        walk(&mut turn, &mut field);

        turn.select(PlayerAction::Move);
        let err = turn.click(Position::new(0, 2), &mut field, &attacks).unwrap_err();
        assert_eq!(err, TurnError::AlreadyMoved);
        assert_eq!(turn.selected(), PlayerAction::Move);
    }

    #[test]
    fn second_attack_is_rejected() {
        let (mut field, attacks) = setup();
        field.move_unit(HERO, Position::new(2, 0)).unwrap();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());

        turn.select(PlayerAction::Attack(0));
        turn.click(Position::new(3, 0), &mut field, &attacks).unwrap();
        turn.select(PlayerAction::Attack(0));
        let err = turn.click(Position::new(3, 0), &mut field, &attacks).unwrap_err();
        assert_eq!(err, TurnError::AlreadyAttacked);
        assert_eq!(field.unit(DUMMY).unwrap().hp.current, 16);
    }

    #[test]
    fn invalid_attack_target_keeps_attack_available() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());

        turn.select(PlayerAction::Attack(0));
        let err = turn.click(Position::new(3, 0), &mut field, &attacks).unwrap_err();
        assert!(matches!(err, TurnError::InvalidTarget { .. }));
        assert!(!turn.has_attacked());

        turn.select(PlayerAction::Attack(4));
        let err = turn.click(Position::new(1, 0), &mut field, &attacks).unwrap_err();
        assert_eq!(err, TurnError::UnknownAttack { slot: 4 });
    }

    #[test]
    fn move_budget_is_enforced() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default().with_move_budget(2));

        turn.select(PlayerAction::Move);
        let err = turn.click(Position::new(0, 3), &mut field, &attacks).unwrap_err();
        assert_eq!(
            err,
            TurnError::OutOfMoveBudget {
                target: Position::new(0, 3),
                steps: 3,
                budget: 2
            }
        );
        assert!(!turn.has_moved());
    }

    #[test]
    fn moving_onto_a_unit_has_no_path() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());

        turn.select(PlayerAction::Move);
        let err = turn.click(Position::new(3, 0), &mut field, &attacks).unwrap_err();
        assert_eq!(err, TurnError::NoPath { target: Position::new(3, 0) });
    }

    #[test]
    fn blocked_step_drops_remaining_path() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());

        turn.select(PlayerAction::Move);
        turn.click(Position::new(0, 3), &mut field, &attacks).unwrap();
        assert_eq!(turn.step(&mut field).unwrap(), Some(Position::new(0, 1)));
        field.move_unit(DUMMY, Position::new(0, 2)).unwrap();

        let err = turn.step(&mut field).unwrap_err();
        assert!(matches!(
            err,
            TurnError::Battlefield(BattlefieldError::Occupied { .. })
        ));
        assert_eq!(turn.pending_path().count(), 0);
        assert_eq!(turn.step(&mut field).unwrap(), None);
    }

    #[test]
    fn ended_turn_rejects_clicks() {
        let (mut field, attacks) = setup();
        let mut turn = PlayerTurn::new(HERO, CombatConfig::default());
        turn.end();
        assert!(turn.is_finished());

        turn.select(PlayerAction::Move);
        let err = turn.click(Position::new(1, 0), &mut field, &attacks).unwrap_err();
        assert_eq!(err, TurnError::TurnOver(HERO));
    }
}
