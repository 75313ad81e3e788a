pub mod initialize_dao;
pub mod join;
pub mod update_authority;
pub mod create_poll;
pub mod create_meeting_poll;
pub mod vote;
pub mod supervise_meeting;
pub mod distribute_meeting_tokens;
pub mod views;

pub use initialize_dao::*;
pub use join::*;
pub use update_authority::*;
pub use create_poll::*;
pub use create_meeting_poll::*;
pub use vote::*;
pub use supervise_meeting::*;
pub use distribute_meeting_tokens::*;
pub use views::*;
