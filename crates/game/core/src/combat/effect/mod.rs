//! Attack effects: what happens to the unit standing in an affected cell.
//!
//! # Architecture
//!
//! Same enum + struct hybrid as the rest of the crate:
//! - each effect is its own struct with an `apply` method
//! - [`AttackEffect`] wraps them for serialization and dispatch
//!
//! Damage and heal scale with the attack's modifiers. Burn and stat buff
//! create a status owned by the target. Push displaces the target away from
//! the attacker through the battlefield, which keeps occupancy consistent.

mod damage;
mod heal;
mod kinds;
mod push;
mod status;

pub use damage::DamageEffect;
pub use heal::HealEffect;
pub use kinds::AttackEffect;
pub use push::PushEffect;
pub use status::{BurnEffect, StatBuffEffect};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::context::EffectContext;
    use crate::combat::modifier::EffectModifier;
    use crate::combat::result::AppliedEffect;
    use crate::env::TileGrid;
    use crate::state::{Battlefield, EntityId, Position, StatusDuration, StatusKind, Unit};
    use crate::stats::{Stat, StatBlock};

    fn field_with_target() -> (Battlefield, Unit) {
        let mut field = Battlefield::new(TileGrid::new(8, 8));
        let source = Unit::new(
            EntityId(1),
            Position::new(2, 2),
            30,
            StatBlock::ZERO.with(Stat::Strength, 4.0),
        );
        field.spawn(source.clone()).unwrap();
        field
            .spawn(Unit::new(EntityId(2), Position::new(3, 2), 30, StatBlock::default()))
            .unwrap();
        (field, source)
    }

    #[test]
    fn damage_uses_modifiers() {
        let (mut field, source) = field_with_target();
        let modifiers = [EffectModifier::new(Stat::Strength, 1.0)];
        let mut ctx = EffectContext::new(&mut field, &source, &modifiers, Position::new(3, 2));

        let applied = AttackEffect::damage(6).apply(&mut ctx);
        assert_eq!(
            applied,
            Some(AppliedEffect::Damage {
                target: EntityId(2),
                planned: 10,
                actual: 10
            })
        );
        assert_eq!(field.unit(EntityId(2)).unwrap().hp.current, 20);
    }

    #[test]
    fn heal_is_capped_by_maximum() {
        let (mut field, source) = field_with_target();
        field.unit_mut(EntityId(2)).unwrap().take_damage(5);
        let mut ctx = EffectContext::new(&mut field, &source, &[], Position::new(3, 2));

        let applied = AttackEffect::heal(12).apply(&mut ctx);
        assert_eq!(
            applied,
            Some(AppliedEffect::Heal {
                target: EntityId(2),
                planned: 12,
                actual: 5
            })
        );
    }

    #[test]
    fn burn_ignores_modifiers_and_attaches_status() {
        let (mut field, source) = field_with_target();
        let modifiers = [EffectModifier::new(Stat::Strength, 10.0)];
        let mut ctx = EffectContext::new(&mut field, &source, &modifiers, Position::new(3, 2));

        AttackEffect::burn(3, 4, false).apply(&mut ctx);
        let target = field.unit(EntityId(2)).unwrap();
        let status = target.status_effects.iter().next().copied().unwrap();
        assert_eq!(status.kind, StatusKind::Burn { damage: 3 });
        assert_eq!(status.duration, StatusDuration::Ticks(4));
    }

    #[test]
    fn infinite_stat_buff_changes_stat_lookup() {
        let (mut field, source) = field_with_target();
        let mut ctx = EffectContext::new(&mut field, &source, &[], Position::new(3, 2));

        AttackEffect::stat_buff(Stat::Speed, 100.0, 0, true).apply(&mut ctx);
        let target = field.unit(EntityId(2)).unwrap();
        assert_eq!(target.stat(Stat::Speed), 2.0);
        assert_eq!(
            target.status_effects.iter().next().map(|s| s.duration),
            Some(StatusDuration::Infinite)
        );
    }

    #[test]
    fn push_moves_target_away_from_source() {
        let (mut field, source) = field_with_target();
        let mut ctx = EffectContext::new(&mut field, &source, &[], Position::new(3, 2));

        let applied = PushEffect::by(2).apply(&mut ctx);
        assert_eq!(
            applied,
            Some(AppliedEffect::Push {
                target: EntityId(2),
                from: Position::new(3, 2),
                to: Position::new(5, 2)
            })
        );
    }

    #[test]
    fn push_vector_on_other_axis_still_moves_target() {
        let mut field = Battlefield::new(TileGrid::new(8, 8));
        let source = Unit::new(EntityId(1), Position::new(4, 4), 30, StatBlock::default());
        field.spawn(source.clone()).unwrap();
        field
            .spawn(Unit::new(EntityId(2), Position::new(4, 3), 30, StatBlock::default()))
            .unwrap();
        let mut ctx = EffectContext::new(&mut field, &source, &[], Position::new(4, 3));

        let applied = AttackEffect::push(Position::new(2, 0)).apply(&mut ctx);
        assert_eq!(
            applied,
            Some(AppliedEffect::Push {
                target: EntityId(2),
                from: Position::new(4, 3),
                to: Position::new(4, 1)
            })
        );
    }

    #[test]
    fn empty_cell_is_a_no_op_for_every_effect() {
        let effects = [
            AttackEffect::damage(5),
            AttackEffect::heal(5),
            AttackEffect::burn(1, 1, false),
            AttackEffect::stat_buff(Stat::Strength, 10.0, 1, false),
            AttackEffect::push(Position::new(1, 1)),
        ];
        for effect in effects {
            let (mut field, source) = field_with_target();
            let before: Vec<Unit> = field.units().cloned().collect();
            let mut ctx = EffectContext::new(&mut field, &source, &[], Position::new(6, 6));

            assert_eq!(effect.apply(&mut ctx), None, "{}", effect.label());
            let after: Vec<Unit> = field.units().cloned().collect();
            assert_eq!(before, after);
        }
    }
}
