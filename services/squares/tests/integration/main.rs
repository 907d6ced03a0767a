
mod game_test;
mod score_test;
