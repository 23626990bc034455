//! Knowledge Hub card filtering: category inference, per-card metadata,
//! visibility evaluation and the input state machine.

pub mod card;
pub mod category;
pub mod filter;
pub mod machine;
pub mod pagination;
pub mod settings;
