//! Terminal output for the status view and celebrations
//!
//! Everything here only reads state. Mutation is done by the rewards
//! engine before any of these run.

use crate::config::Settings;
use crate::domain::ProgressState;
use crate::rewards::{ACHIEVEMENTS, Achievement, AchievementId, XP_PER_LEVEL, XpRewards};

/// Format a dollar amount, dropping cents when whole
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${}", amount as i64)
    } else {
        format!("${:.2}", amount)
    }
}

/// Render a progress bar for a fraction in [0, 1]
fn bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Print the status view: goal progress, level, and achievement count
pub fn render_status(state: &ProgressState, settings: &Settings) {
    let width = settings.bar_width;

    println!();
    println!(
        "Saved {} of {} ({:.0}%)",
        format_amount(state.saved),
        format_amount(state.goal),
        state.goal_fraction() * 100.0
    );
    println!("  {}", bar(state.goal_fraction(), width));
    println!();
    println!("Level {} ({}/{} XP)", state.level, state.xp, XP_PER_LEVEL);
    println!(
        "  {}",
        bar(f64::from(state.xp) / f64::from(XP_PER_LEVEL), width)
    );
    println!();
    println!(
        "Achievements: {}/{} unlocked",
        state.unlocked.len(),
        Achievement::total_count()
    );
}

/// Print the full achievement gallery with locked entries included
pub fn render_achievements(state: &ProgressState) {
    println!(
        "Achievements ({}/{} unlocked):\n",
        state.unlocked.len(),
        Achievement::total_count()
    );

    for achievement in ACHIEVEMENTS {
        let marker = if state.is_unlocked(achievement.id) {
            "[x]"
        } else {
            "[ ]"
        };
        println!(
            "  {} {} {} - {}",
            marker, achievement.icon, achievement.name, achievement.description
        );
    }
}

/// Print the unlock celebration for one achievement
pub fn render_unlock(id: AchievementId) {
    let achievement = Achievement::get(id);
    println!(
        "🎉 Achievement unlocked: {} {} (+{} XP)",
        achievement.name,
        achievement.icon,
        XpRewards::ACHIEVEMENT_UNLOCKED
    );
}

/// Print the level-up celebration
pub fn render_level_up(level: u32) {
    println!("✨ Level up! You are now level {}", level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_drops_whole_cents() {
        assert_eq!(format_amount(600.0), "$600");
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(0.01), "$0.01");
    }

    #[test]
    fn test_bar_fills_proportionally() {
        assert_eq!(bar(0.0, 4), "░░░░");
        assert_eq!(bar(0.5, 4), "██░░");
        assert_eq!(bar(1.0, 4), "████");
    }

    #[test]
    fn test_bar_never_overflows_width() {
        assert_eq!(bar(2.5, 4), "████");
        assert_eq!(bar(0.999, 4).chars().count(), 4);
    }
}
