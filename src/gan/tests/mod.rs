mod config;
mod model;
