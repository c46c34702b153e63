mod board;
mod user;
