//! The five document templates. Each module exposes `NAME`,
//! `generate(&Resume, &Credits) -> String` and its section renderer(s).

pub mod academic;
pub mod classic;
pub mod compact;
pub mod developer;
pub mod two_column;
