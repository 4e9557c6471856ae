mod game;
mod invitation;
mod leaderboard;
mod user;
