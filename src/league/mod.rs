pub mod admission;
pub mod availability;
pub mod leaderboard;
pub mod season;
pub mod tee_times;
pub mod template;
pub mod window;
