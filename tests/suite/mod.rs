mod board;
mod cli;
mod puzzle;
