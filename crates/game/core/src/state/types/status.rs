//! Status effects attached to units.
//!
//! Statuses are created fresh by attack effects and handed to the target,
//! which owns them from then on. How they tick is driven by the turn loop,
//! not by attack resolution; this module only stores them and answers the
//! queries attack resolution needs (stat buffs feed into stat lookups).

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::stats::Stat;

/// How long a status lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusDuration {
    /// Expires after this many ticks.
    Ticks(u32),
    /// Never expires on its own.
    Infinite,
}

impl StatusDuration {
    /// Builds a duration from the `(ticks, infinite)` pair used by definitions.
    pub fn from_parts(ticks: u32, infinite: bool) -> Self {
        if infinite {
            Self::Infinite
        } else {
            Self::Ticks(ticks)
        }
    }

    fn longest(self, other: Self) -> Self {
        match (self, other) {
            (Self::Infinite, _) | (_, Self::Infinite) => Self::Infinite,
            (Self::Ticks(a), Self::Ticks(b)) => Self::Ticks(a.max(b)),
        }
    }
}

/// What a status does while active.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// Damage dealt every tick.
    Burn { damage: u32 },
    /// Percentage change applied to one stat.
    StatBuff { stat: Stat, percent: f32 },
}

/// A single status with its remaining duration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub duration: StatusDuration,
}

impl StatusEffect {
    pub fn burn(damage: u32, duration: StatusDuration) -> Self {
        Self {
            kind: StatusKind::Burn { damage },
            duration,
        }
    }

    pub fn stat_buff(stat: Stat, percent: f32, duration: StatusDuration) -> Self {
        Self {
            kind: StatusKind::StatBuff { stat, percent },
            duration,
        }
    }
}

/// Bounded set of statuses owned by one unit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    effects: ArrayVec<StatusEffect, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusEffects {
    /// Creates an empty status set.
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    /// Adds a status.
    ///
    /// A status identical in kind to one already present refreshes that
    /// entry to the longer duration instead of stacking. Returns false when
    /// the set is full and the status was dropped.
    pub fn add(&mut self, status: StatusEffect) -> bool {
        if let Some(existing) = self.effects.iter_mut().find(|e| e.kind == status.kind) {
            existing.duration = existing.duration.longest(status.duration);
            return true;
        }

        self.effects.try_push(status).is_ok()
    }

    /// Total buff percentage currently applied to `stat`.
    pub fn stat_percent(&self, stat: Stat) -> f32 {
        self.effects
            .iter()
            .filter_map(|e| match e.kind {
                StatusKind::StatBuff { stat: s, percent } if s == stat => Some(percent),
                _ => None,
            })
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
