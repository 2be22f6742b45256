mod follow_chain;
mod state_transitions;
