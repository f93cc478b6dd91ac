mod support;

mod history_persistence;
mod session_script;
mod stale_responses;
