mod config;
mod cursor;
mod view;
