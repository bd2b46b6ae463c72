//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are mostly stateless building blocks; pages own data loading and
//! hand records down as props.

pub mod auth_header;
pub mod daily_actions_header;
pub mod feature_card;
pub mod footer;
pub mod kanban_board;
pub mod kanban_view;
pub mod spinner;
pub mod theme_toggle;
