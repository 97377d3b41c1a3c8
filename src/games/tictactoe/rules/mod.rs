//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Rules know nothing
//! about history or turn order.

pub mod win;

pub use win::{WIN_LINES, check_winner, winning_line};
