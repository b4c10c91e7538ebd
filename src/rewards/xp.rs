//! XP and level system
//!
//! Levels are open-ended: every 100 XP rolls over into one level increment,
//! so `xp` always stays in 0..100.

use crate::domain::ProgressState;

/// XP needed to advance one level
pub const XP_PER_LEVEL: u32 = 100;

/// XP rewards for various actions
pub struct XpRewards;

impl XpRewards {
    /// XP for making a deposit
    pub const DEPOSIT: u32 = 10;

    /// Bonus XP for unlocking an achievement
    pub const ACHIEVEMENT_UNLOCKED: u32 = 25;
}

/// Grant XP, rolling overflow into level increments.
///
/// Returns the number of levels gained so the caller can announce each
/// level-up. A single large grant can cross more than one level.
pub fn grant(state: &mut ProgressState, points: u32) -> u32 {
    state.xp += points;
    let mut levels_gained = 0;
    while state.xp >= XP_PER_LEVEL {
        state.level += 1;
        state.xp -= XP_PER_LEVEL;
        levels_gained += 1;
    }
    levels_gained
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_without_rollover() {
        let mut state = ProgressState::default();
        assert_eq!(grant(&mut state, 10), 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.xp, 10);
    }

    #[test]
    fn test_grant_rolls_over_at_100() {
        let mut state = ProgressState::default();
        state.xp = 90;
        assert_eq!(grant(&mut state, 10), 1);
        assert_eq!(state.level, 2);
        assert_eq!(state.xp, 0);
    }

    #[test]
    fn test_grant_crosses_multiple_levels() {
        let mut state = ProgressState::default();
        state.xp = 80;
        assert_eq!(grant(&mut state, 250), 3);
        assert_eq!(state.level, 4);
        assert_eq!(state.xp, 30);
    }

    #[test]
    fn test_grant_crosses_two_levels() {
        let mut state = ProgressState::default();
        state.xp = 80;
        assert_eq!(grant(&mut state, 150), 2);
        assert_eq!(state.level, 3);
        assert_eq!(state.xp, 30);
    }

    #[test]
    fn test_xp_stays_normalized() {
        let mut state = ProgressState::default();
        for points in [10, 25, 99, 1, 250] {
            grant(&mut state, points);
            assert!(state.xp < XP_PER_LEVEL);
        }
    }
}
