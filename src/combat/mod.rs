pub mod attack;
pub mod critical;
pub mod damage;

pub use attack::{resolve_attack, AttackModifiers, AttackOutcome, ATTACK_TARGET, CRITICAL_EFFECT};
pub use critical::{
    adjust_critical, apply_critical, roll_critical, severity_for_effect, CritApplication, CritRoll,
    OVERFLOW_DICE,
};
pub use damage::{resolve_damage, DamageInput, DamageOutcome};
