mod common;
mod environment;
mod personality;
mod service;
