pub mod dao;
pub mod meeting;
pub mod member;
pub mod participants;
pub mod poll;

pub use dao::*;
pub use meeting::*;
pub use member::*;
pub use participants::*;
pub use poll::*;
