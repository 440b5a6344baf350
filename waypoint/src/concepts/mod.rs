pub mod node;
pub mod packet;
pub mod queue;
pub mod route;
pub mod switch;
