//! Integration tests driving the gateway router end to end.

mod discovery;
mod get_head;
mod helpers;
mod propfind;
mod tokens;
