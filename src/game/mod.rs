pub mod camera;
pub mod constants;
pub mod game_loop;
pub mod input;
pub mod state;
pub mod systems;
pub mod tier;
