/// Rules constants and tunable parameters for derivation and IP accounting.
///
/// Defaults reproduce the live game formulas. Catalogue maintainers can
/// override any field from a TOML file (see `planner-content`); missing keys
/// fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RulesConfig {
    /// Divisor applied to the weighted ability sum for trickle-down.
    pub trickle_divisor: i32,
    /// Starting value of every trainable skill.
    pub skill_base: i32,
    /// Ability-limited training points per weighted ability point.
    pub ability_cap_multiplier: i32,
    /// Ability training points unlocked per level.
    pub ability_points_per_level: i32,
    /// Cost-factor tiers (tenths, inclusive upper bound) and the skill points
    /// per level they allow. The last tier applies to anything above.
    pub skill_rate_tiers: Vec<(u16, i32)>,
    /// Skill points per level above the last tier.
    pub skill_rate_floor: i32,
    /// Offset added to each point index when pricing IP.
    pub ip_cost_offset: u64,
    /// IP available at level 1.
    pub starting_ip: u64,
    /// IP gained on reaching level 2.
    pub ip_per_level: u64,
    /// Extra IP gained per level on top of `ip_per_level`, growing linearly.
    pub ip_per_level_step: u64,
}

impl RulesConfig {
    // ===== level bounds =====
    pub const MIN_LEVEL: u16 = 1;
    pub const MAX_LEVEL: u16 = 220;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TRICKLE_DIVISOR: i32 = 4;
    pub const DEFAULT_SKILL_BASE: i32 = 5;
    pub const DEFAULT_ABILITY_CAP_MULTIPLIER: i32 = 2;
    pub const DEFAULT_ABILITY_POINTS_PER_LEVEL: i32 = 3;
    pub const DEFAULT_SKILL_RATE_FLOOR: i32 = 2;
    pub const DEFAULT_IP_COST_OFFSET: u64 = 5;
    pub const DEFAULT_STARTING_IP: u64 = 1_500;
    pub const DEFAULT_IP_PER_LEVEL: u64 = 1_000;
    pub const DEFAULT_IP_PER_LEVEL_STEP: u64 = 100;

    pub fn new() -> Self {
        Self {
            trickle_divisor: Self::DEFAULT_TRICKLE_DIVISOR,
            skill_base: Self::DEFAULT_SKILL_BASE,
            ability_cap_multiplier: Self::DEFAULT_ABILITY_CAP_MULTIPLIER,
            ability_points_per_level: Self::DEFAULT_ABILITY_POINTS_PER_LEVEL,
            skill_rate_tiers: vec![(15, 5), (25, 4), (35, 3)],
            skill_rate_floor: Self::DEFAULT_SKILL_RATE_FLOOR,
            ip_cost_offset: Self::DEFAULT_IP_COST_OFFSET,
            starting_ip: Self::DEFAULT_STARTING_IP,
            ip_per_level: Self::DEFAULT_IP_PER_LEVEL,
            ip_per_level_step: Self::DEFAULT_IP_PER_LEVEL_STEP,
        }
    }

    /// Clamps a requested level into the valid range.
    pub fn clamp_level(level: u16) -> u16 {
        level.clamp(Self::MIN_LEVEL, Self::MAX_LEVEL)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
