//! Greedy automated play over a loaded scenario.

use anyhow::Result;
use tactics_content::{AttackCatalog, Scenario};
use tactics_core::{
    Attack, AttackEffect, AttackType, Battlefield, CombatConfig, EntityId, Pathfinder,
    PlayerAction, PlayerTurn, Position, TurnOutcome,
};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory { team: u8, rounds: u32 },
    Stalemate { rounds: u32 },
}

struct Combatant {
    id: EntityId,
    team: u8,
    attacks: Vec<Attack>,
}

pub struct Skirmish {
    battlefield: Battlefield,
    combatants: Vec<Combatant>,
    config: CombatConfig,
}

impl Skirmish {
    pub fn new(scenario: Scenario, catalog: &AttackCatalog, config: CombatConfig) -> Result<Self> {
        let combatants = scenario
            .roster
            .iter()
            .map(|entry| {
                let attacks =
                    catalog.loadout(entry.attacks.as_slice(), entry.id, &scenario.battlefield)?;
                Ok(Combatant {
                    id: entry.id,
                    team: entry.team,
                    attacks,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            battlefield: scenario.battlefield,
            combatants,
            config,
        })
    }

    pub fn battlefield(&self) -> &Battlefield {
        &self.battlefield
    }

    /// Plays whole rounds in roster order until one team remains.
    pub fn run(&mut self, max_rounds: u32) -> Outcome {
        for round in 1..=max_rounds {
            for index in 0..self.combatants.len() {
                self.take_turn(index);
                if let Some(team) = self.winner() {
                    return Outcome::Victory {
                        team,
                        rounds: round,
                    };
                }
            }
            info!(round, "round complete");
        }
        Outcome::Stalemate { rounds: max_rounds }
    }

    /// The only team with standing units, if there is exactly one.
    fn winner(&self) -> Option<u8> {
        let mut standing = self
            .combatants
            .iter()
            .filter(|c| self.is_standing(c.id))
            .map(|c| c.team);
        let first = standing.next()?;
        standing.all(|team| team == first).then_some(first)
    }

    fn is_standing(&self, id: EntityId) -> bool {
        self.battlefield
            .unit(id)
            .is_some_and(|unit| !unit.is_defeated())
    }

    fn enemy_positions(&self, team: u8) -> Vec<Position> {
        self.combatants
            .iter()
            .filter(|c| c.team != team)
            .filter_map(|c| self.battlefield.unit(c.id))
            .filter(|unit| !unit.is_defeated())
            .map(|unit| unit.position)
            .collect()
    }

    fn take_turn(&mut self, index: usize) {
        let id = self.combatants[index].id;
        if !self.is_standing(id) {
            return;
        }

        let mut turn = PlayerTurn::new(id, self.config.clone());
        if !self.try_attack(index, &mut turn) {
            self.advance(index, &mut turn);
            self.try_attack(index, &mut turn);
        }
        turn.end();
    }

    /// Uses the first attack, in slot order, that has something worth hitting.
    fn try_attack(&mut self, index: usize, turn: &mut PlayerTurn) -> bool {
        let enemies = self.enemy_positions(self.combatants[index].team);
        let combatant = &self.combatants[index];
        let Some(unit) = self.battlefield.unit(combatant.id) else {
            return false;
        };
        let wounded = unit.hp.current < unit.hp.maximum;
        let own_cell = unit.position;

        let choice = combatant
            .attacks
            .iter()
            .enumerate()
            .find_map(|(slot, attack)| {
                if attack.kind() == AttackType::SelfOnly {
                    let heals = matches!(attack.effect(), AttackEffect::Heal(_));
                    return (heals && wounded).then_some((slot, own_cell));
                }
                enemies
                    .iter()
                    .copied()
                    .find(|&target| attack.is_valid(target, &self.battlefield))
                    .map(|target| (slot, target))
            });
        let Some((slot, target)) = choice else {
            return false;
        };

        turn.select(PlayerAction::Attack(slot));
        match turn.click(target, &mut self.battlefield, &combatant.attacks) {
            Ok(TurnOutcome::Attacked(report)) => {
                info!(
                    actor = %combatant.id,
                    attack = combatant.attacks[slot].name(),
                    target = %target,
                    damage = report.total_damage(),
                    hits = report.applied().count(),
                    "attack"
                );
                true
            }
            Ok(_) => false,
            Err(err) => {
                warn!(actor = %combatant.id, %err, "attack failed");
                false
            }
        }
    }

    /// Walks towards the nearest enemy as far as the move budget allows.
    fn advance(&mut self, index: usize, turn: &mut PlayerTurn) {
        let id = self.combatants[index].id;
        let enemies = self.enemy_positions(self.combatants[index].team);
        let Some(start) = self.battlefield.unit(id).map(|unit| unit.position) else {
            return;
        };
        let gap = |cell: Position| enemies.iter().map(|e| cell.manhattan(*e)).min();

        let destination = Pathfinder::new(&self.battlefield, &self.config)
            .for_unit(id)
            .reachable(start, self.config.move_budget)
            .into_iter()
            .min_by_key(|&cell| gap(cell));
        let Some(destination) = destination else {
            debug!(actor = %id, "nowhere to move");
            return;
        };
        if gap(destination) >= gap(start) {
            debug!(actor = %id, "already as close as possible");
            return;
        }

        turn.select(PlayerAction::Move);
        if let Err(err) = turn.click(destination, &mut self.battlefield, &[]) {
            warn!(actor = %id, %err, "move failed");
            return;
        }
        loop {
            match turn.step(&mut self.battlefield) {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(err) => {
                    warn!(actor = %id, %err, "move interrupted");
                    break;
                }
            }
        }
        info!(actor = %id, from = %start, to = %destination, "move");
    }
}
