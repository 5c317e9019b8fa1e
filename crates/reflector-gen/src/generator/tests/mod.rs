mod config;
mod properties;
mod support;
