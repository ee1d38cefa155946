// src/update.rs
//
// Central reducer. Each domain owns its transitions in `reducers::*`; this
// function just tries them in order and collects the side-effect commands.

use crate::debug_log;
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if crate::reducers::session::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::wizard::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::review::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::chat::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::deploy::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::dashboard::update(state, &msg, &mut commands) {
        return commands;
    }

    debug_log!("Unhandled message: {:?}", msg);
    commands
}
