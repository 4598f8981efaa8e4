pub mod context;
pub mod npc;
pub mod text;
