// hole_filler_replay — offline replays of recorded hole filler scenarios.
//
// Loads a JSON scenario (config + tick snapshots), runs the selection
// engine from `hole_filler_sim` over every tick, and reports what the
// placement executor would have been asked to fill. Used to inspect
// selection decisions without a running game.
//
// See `scenario.rs` for the file format and the replay loop, `main.rs` for
// the command-line front end.

pub mod scenario;
