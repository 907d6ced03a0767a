mod helpers;

mod admin_test;
mod leaderboard_test;
mod trivia_test;
mod user_test;
