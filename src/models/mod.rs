pub mod leaderboard;
pub mod reservation;
pub mod round;
pub mod schedule;
pub mod season;
pub mod tee_time;
pub mod user;

pub use user::User;
