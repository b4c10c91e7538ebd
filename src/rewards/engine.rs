//! The progress and rewards engine
//!
//! A reducer over [`ProgressState`]: it mutates only the state value it is
//! given and returns the side effects the caller should run, in order.
//! Nothing in here reads the clock, draws, or touches the disk.

use tracing::debug;

use super::checker::{self, Moment};
use super::xp::{self, XpRewards};
use crate::domain::{Effect, Event, ProgressState};

/// Apply one event to the state, returning the effects to run afterwards.
///
/// Every event ends with `Persist` then `Render`, so callers can treat the
/// returned list as the complete recipe for one interaction.
pub fn apply(state: &mut ProgressState, event: Event, moment: &Moment) -> Vec<Effect> {
    match event {
        Event::Deposit { amount } => deposit(state, amount, moment),
        Event::SetGoal { goal } => set_goal(state, goal),
    }
}

/// Add money, grant deposit XP, then run the unlock cascade.
///
/// The cascade re-scans after every unlock because the 25 bonus XP can
/// raise the level and make another condition true. It terminates: each
/// achievement unlocks at most once and the catalog is finite.
fn deposit(state: &mut ProgressState, amount: f64, moment: &Moment) -> Vec<Effect> {
    let mut effects = Vec::new();

    state.saved += amount;
    debug!("Deposited {}, total saved {}", amount, state.saved);

    grant_xp(state, XpRewards::DEPOSIT, &mut effects);

    while let Some(id) = checker::next_unlockable(state, moment) {
        state.unlock(id);
        debug!("Achievement unlocked: {}", id.as_str());
        effects.push(Effect::UnlockAnimation(id));
        grant_xp(state, XpRewards::ACHIEVEMENT_UNLOCKED, &mut effects);
    }

    effects.push(Effect::Persist);
    effects.push(Effect::Render);
    effects
}

/// Replace the goal. Unlocks already earned stay earned, and no conditions
/// are re-evaluated until the next deposit.
fn set_goal(state: &mut ProgressState, goal: f64) -> Vec<Effect> {
    state.goal = goal;
    debug!("Goal set to {}", goal);
    vec![Effect::Persist, Effect::Render]
}

/// Grant XP and emit one level-up effect per level crossed
fn grant_xp(state: &mut ProgressState, points: u32, effects: &mut Vec<Effect>) {
    let before = state.level;
    xp::grant(state, points);
    for level in (before + 1)..=state.level {
        debug!("Level up: {}", level);
        effects.push(Effect::LevelUpAnimation { level });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::AchievementId;

    const AFTERNOON: Moment = Moment { hour: 15 };
    const MORNING: Moment = Moment { hour: 9 };

    fn unlocks(effects: &[Effect]) -> Vec<AchievementId> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::UnlockAnimation(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_deposit_increases_saved_by_amount() {
        let mut state = ProgressState::default();
        apply(&mut state, Event::Deposit { amount: 12.5 }, &AFTERNOON);
        assert_eq!(state.saved, 12.5);
        apply(&mut state, Event::Deposit { amount: 0.5 }, &AFTERNOON);
        assert_eq!(state.saved, 13.0);
    }

    #[test]
    fn test_deposit_600_unlocks_three_achievements() {
        let mut state = ProgressState::default();
        let effects = apply(&mut state, Event::Deposit { amount: 600.0 }, &AFTERNOON);

        assert_eq!(state.saved, 600.0);
        assert_eq!(
            unlocks(&effects),
            vec![
                AchievementId::FirstSave,
                AchievementId::Halfway,
                AchievementId::Saver,
            ]
        );
        assert!(!state.is_unlocked(AchievementId::GoalReached));
        // 10 deposit XP + 3 * 25 bonus XP, no rollover
        assert_eq!(state.level, 1);
        assert_eq!(state.xp, 85);
    }

    #[test]
    fn test_deposit_1000_unlocks_in_catalog_order() {
        let mut state = ProgressState::default();
        let effects = apply(&mut state, Event::Deposit { amount: 1000.0 }, &AFTERNOON);

        assert_eq!(
            unlocks(&effects),
            vec![
                AchievementId::FirstSave,
                AchievementId::Halfway,
                AchievementId::GoalReached,
                AchievementId::Saver,
            ]
        );
        // 10 + 4 * 25 = 110 XP rolls into level 2
        assert_eq!(state.level, 2);
        assert_eq!(state.xp, 10);
        assert_eq!(
            &effects[effects.len() - 2..],
            &[Effect::Persist, Effect::Render]
        );
        assert!(effects.contains(&Effect::LevelUpAnimation { level: 2 }));
    }

    #[test]
    fn test_morning_deposit_also_unlocks_early_bird() {
        let mut state = ProgressState::default();
        let effects = apply(&mut state, Event::Deposit { amount: 1000.0 }, &MORNING);

        assert_eq!(unlocks(&effects).len(), 5);
        assert!(state.is_unlocked(AchievementId::EarlyBird));
        assert_eq!(state.level, 2);
        assert_eq!(state.xp, 35);
    }

    #[test]
    fn test_morning_bonus_tips_the_level() {
        let mut state = ProgressState::default();
        let effects = apply(&mut state, Event::Deposit { amount: 600.0 }, &MORNING);

        // 10 + 4 * 25 = 110 XP, one more unlock than the afternoon run
        assert_eq!(unlocks(&effects).len(), 4);
        assert!(state.is_unlocked(AchievementId::EarlyBird));
        assert!(!state.is_unlocked(AchievementId::GoalReached));
        assert_eq!(state.level, 2);
        assert_eq!(state.xp, 10);
    }

    #[test]
    fn test_afternoon_deposit_never_unlocks_early_bird() {
        let mut state = ProgressState::default();
        apply(&mut state, Event::Deposit { amount: 5.0 }, &AFTERNOON);
        assert!(!state.is_unlocked(AchievementId::EarlyBird));
    }

    #[test]
    fn test_level_up_cascades_into_level_5_unlock() {
        let mut state = ProgressState {
            goal: 1000.0,
            saved: 900.0,
            level: 4,
            xp: 90,
            unlocked: vec![
                AchievementId::FirstSave,
                AchievementId::Halfway,
                AchievementId::Saver,
            ],
        };
        let effects = apply(&mut state, Event::Deposit { amount: 50.0 }, &AFTERNOON);

        // deposit XP tips level 4 into 5, which unlocks Level5 mid-scan
        assert_eq!(state.level, 5);
        assert_eq!(state.xp, 25);
        assert_eq!(unlocks(&effects), vec![AchievementId::Level5]);
        assert!(effects.contains(&Effect::LevelUpAnimation { level: 5 }));
    }

    #[test]
    fn test_unlocks_never_repeat() {
        let mut state = ProgressState::default();
        apply(&mut state, Event::Deposit { amount: 600.0 }, &AFTERNOON);
        let effects = apply(&mut state, Event::Deposit { amount: 600.0 }, &AFTERNOON);

        // second deposit crosses goal-reached only
        assert_eq!(unlocks(&effects), vec![AchievementId::GoalReached]);
        assert_eq!(state.unlocked.len(), 4);
    }

    #[test]
    fn test_set_goal_touches_nothing_else() {
        let mut state = ProgressState::default();
        apply(&mut state, Event::Deposit { amount: 600.0 }, &AFTERNOON);
        let before = state.clone();

        let effects = apply(&mut state, Event::SetGoal { goal: 250.0 }, &AFTERNOON);

        assert_eq!(state.goal, 250.0);
        assert_eq!(state.saved, before.saved);
        assert_eq!(state.level, before.level);
        assert_eq!(state.xp, before.xp);
        assert_eq!(state.unlocked, before.unlocked);
        // lowering the goal does not retroactively unlock goal-reached
        assert!(!state.is_unlocked(AchievementId::GoalReached));
        assert_eq!(effects, vec![Effect::Persist, Effect::Render]);
    }

    #[test]
    fn test_xp_normalized_after_every_operation() {
        let mut state = ProgressState::default();
        for amount in [1.0, 499.0, 500.0, 9000.0, 0.01] {
            apply(&mut state, Event::Deposit { amount }, &MORNING);
            assert!(state.xp < 100, "xp {} out of range", state.xp);
        }
    }
}
