pub mod agent;
pub mod config;
pub mod facts;

pub mod tools {
    pub mod email;
    pub mod html;
    pub mod world_bank;
}
