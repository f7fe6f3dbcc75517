pub mod alert;
pub mod listen;
pub mod pin;
