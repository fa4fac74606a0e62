//! Broadsword: a combat resolution assistant for turn-based starship
//! engagements. Dice, attack/damage/critical resolvers, ship roster with
//! persistence, the turn sequencer, and the rules reference tables, exposed
//! over a small local HTTP API.

pub mod cli;
pub mod combat;
pub mod dice;
pub mod input;
pub mod rules;
pub mod server;
pub mod ships;
pub mod store;
pub mod turn;
