//! Cap and IP-cost formulas.
//!
//! All arithmetic widens to `i64`/`u64` and clamps back, so extreme inputs
//! (level 1, zero abilities, absurd IP allocations) never overflow or go
//! negative.

use crate::config::RulesConfig;

use super::catalog::Weights;

fn to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Weighted ability sum in tenths: `Σ weight_tenths × ability_total`.
/// Negative ability totals count as zero.
pub fn weighted_sum_tenths(weights: &Weights, abilities: &[i32; 6]) -> i64 {
    weights
        .iter()
        .zip(abilities.iter())
        .map(|(w, a)| i64::from(*w) * i64::from((*a).max(0)))
        .sum()
}

/// `floor(Σ weight × ability / divisor)` with weights in tenths.
///
/// A non-positive divisor falls back to
/// [`RulesConfig::DEFAULT_TRICKLE_DIVISOR`].
pub fn trickle_down(rules: &RulesConfig, weights: &Weights, abilities: &[i32; 6]) -> i32 {
    let divisor = match rules.trickle_divisor {
        d if d > 0 => d,
        _ => RulesConfig::DEFAULT_TRICKLE_DIVISOR,
    };
    let divisor = i64::from(divisor) * 10;
    to_i32(weighted_sum_tenths(weights, abilities).div_euclid(divisor))
}

/// Skill points per level allowed by a cost factor (tenths).
pub fn skill_points_per_level(rules: &RulesConfig, cost_factor: u16) -> i32 {
    rules
        .skill_rate_tiers
        .iter()
        .find(|(bound, _)| cost_factor <= *bound)
        .map_or(rules.skill_rate_floor, |(_, rate)| *rate)
        .max(0)
}

/// Training points a skill may hold at `level`.
pub fn level_limit(rules: &RulesConfig, level: u16, cost_factor: u16) -> i64 {
    i64::from(level) * i64::from(skill_points_per_level(rules, cost_factor))
}

/// Training points a skill may hold given its governing abilities.
pub fn ability_limit(rules: &RulesConfig, weights: &Weights, abilities: &[i32; 6]) -> i64 {
    weighted_sum_tenths(weights, abilities) * i64::from(rules.ability_cap_multiplier.max(0)) / 10
}

/// Training points actually allowed: the binding (lower) of the level and
/// ability limits, never negative.
pub fn training_limit(
    rules: &RulesConfig,
    level: u16,
    cost_factor: u16,
    weights: &Weights,
    abilities: &[i32; 6],
) -> i64 {
    level_limit(rules, level, cost_factor)
        .min(ability_limit(rules, weights, abilities))
        .max(0)
}

/// Cap of a trainable skill: trained ceiling plus every bonus, floored at 0.
pub fn skill_cap(base: i32, trickle: i32, training_limit: i64, bonus_sum: i64) -> i32 {
    to_i32((i64::from(base) + i64::from(trickle) + training_limit + bonus_sum).max(0))
}

/// Cap of an ability: the lower of the level-trained value and the breed
/// ceiling, plus every bonus, floored at 0.
pub fn ability_cap(
    rules: &RulesConfig,
    base: i32,
    level: u16,
    breed_ceiling: i32,
    bonus_sum: i64,
) -> i32 {
    let trained = i64::from(base)
        + i64::from(level) * i64::from(rules.ability_points_per_level.max(0));
    let ceiling = trained.min(i64::from(breed_ceiling).max(i64::from(base)));
    to_i32((ceiling + bonus_sum).max(0))
}

/// `clamp(raw, 0, cap)`.
pub fn capped_total(raw: i64, cap: i32) -> i32 {
    to_i32(raw.clamp(0, i64::from(cap.max(0))))
}

/// IP paid for `points` trained points at `cost_factor` (tenths).
///
/// The k-th point costs `cost_factor × (offset + k) / 10`, so the total is
/// `floor(cost_factor × (n × offset + n(n+1)/2) / 10)`: monotonic and
/// quadratic in `n`.
pub fn ip_cost(rules: &RulesConfig, points: u32, cost_factor: u16) -> u64 {
    let n = u128::from(points);
    let series = n * u128::from(rules.ip_cost_offset) + n * (n + 1) / 2;
    let cost = series * u128::from(cost_factor) / 10;
    u64::try_from(cost).unwrap_or(u64::MAX)
}

/// IP available at `level`: starting pool plus a linearly growing gain per level.
pub fn available_ip(rules: &RulesConfig, level: u16) -> u64 {
    let gained_levels = u64::from(level.max(1) - 1);
    let step_sum = gained_levels * (gained_levels + 1) / 2 - gained_levels;
    rules
        .starting_ip
        .saturating_add(gained_levels.saturating_mul(rules.ip_per_level))
        .saturating_add(step_sum.saturating_mul(rules.ip_per_level_step))
}
